use crate::error::StoreResult;
use crate::store::{KeyValueStore, StoreKey};

/// A type with exactly one process-wide instance.
///
/// The instance is created on the first call to [`Singleton::shared`] and lives
/// until the process exits.
pub trait Singleton: Sized + Send + Sync + 'static {
    fn shared() -> &'static Self;
}

/// A singleton that owns a [`KeyValueStore`] for one key set and item type.
pub trait DataStorage: Singleton {
    type Key: StoreKey;
    type Item: Clone + Send;

    fn storage(&self) -> &KeyValueStore<Self::Key, Self::Item>;

    fn get(&self, key: Self::Key) -> Option<Vec<Self::Item>> {
        self.storage().get(&key)
    }

    fn set(&self, key: Self::Key, value: Vec<Self::Item>) {
        self.storage().set(key, value)
    }

    fn remove_element(&self, key: Self::Key, index: usize) -> StoreResult<Self::Item> {
        self.storage().remove_element(&key, index)
    }
}

/// Declares a [`DataStorage`] singleton for a key set and item type.
///
/// ```
/// use typed_store::{declare_storage, DataStorage, Singleton, LotteryKey};
///
/// declare_storage! {
///     pub struct Scratch: LotteryKey => u8;
/// }
///
/// Scratch::shared().set(LotteryKey::LosingNumbers, vec![4]);
/// assert_eq!(Scratch::shared().get(LotteryKey::LosingNumbers), Some(vec![4]));
/// ```
#[macro_export]
macro_rules! declare_storage {
    ($(#[$meta:meta])* $vis:vis struct $name:ident : $key:ty => $item:ty;) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        $vis struct $name {
            storage: $crate::KeyValueStore<$key, $item>,
        }

        impl $crate::Singleton for $name {
            fn shared() -> &'static Self {
                static SHARED: $crate::__private::OnceCell<$name> =
                    $crate::__private::OnceCell::new();
                SHARED.get_or_init(|| {
                    $crate::__private::tracing::debug!(storage = stringify!($name), "initializing");
                    <$name as ::std::default::Default>::default()
                })
            }
        }

        impl $crate::DataStorage for $name {
            type Key = $key;
            type Item = $item;

            fn storage(&self) -> &$crate::KeyValueStore<$key, $item> {
                &self.storage
            }
        }
    };
}
