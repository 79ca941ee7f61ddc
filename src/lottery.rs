use serde::{Deserialize, Serialize};

use crate::declare_storage;
use crate::store::StoreKey;

/// One drawn combination.
pub type Draw = [i64; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotteryKey {
    #[serde(rename = "winning")]
    WinningNumbers,
    #[serde(rename = "losing")]
    LosingNumbers,
}

impl StoreKey for LotteryKey {
    const ALL: &'static [Self] = &[LotteryKey::WinningNumbers, LotteryKey::LosingNumbers];

    fn as_str(&self) -> &'static str {
        match self {
            LotteryKey::WinningNumbers => "winning",
            LotteryKey::LosingNumbers => "losing",
        }
    }
}

declare_storage! {
    /// Process-wide record of lottery draws.
    pub struct WinningLotteryNumbersStorage: LotteryKey => Draw;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KeyValueStore;

    #[test]
    fn keys_serialize_as_raw_names() {
        for key in LotteryKey::ALL {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            assert_eq!(serde_json::from_str::<LotteryKey>(&json).unwrap(), *key);
        }
    }

    #[test]
    fn draws_hold_signed_numbers() {
        let store: KeyValueStore<LotteryKey, Draw> = KeyValueStore::new();
        store.set(LotteryKey::LosingNumbers, vec![[-1, 0, i64::MAX]]);
        assert_eq!(
            store.get(&LotteryKey::LosingNumbers),
            Some(vec![[-1, 0, i64::MAX]])
        );
    }

    #[test]
    fn json_groups_draws_by_raw_key() {
        let store: KeyValueStore<LotteryKey, Draw> = KeyValueStore::new();
        store.set(LotteryKey::LosingNumbers, vec![[6, 4, 3]]);
        store.set(LotteryKey::WinningNumbers, vec![[1, 7, 4], [1, 5, 7]]);

        let json = store.to_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "winning": [[1, 7, 4], [1, 5, 7]],
                "losing": [[6, 4, 3]],
            })
        );
    }
}
