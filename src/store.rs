use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{StoreError, StoreResult};

/// A closed set of keys addressing sequences in a [`KeyValueStore`].
///
/// Implemented by field-less enums; every variant must appear in `ALL`.
pub trait StoreKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// The raw name of the key.
    fn as_str(&self) -> &'static str;
}

/// Maps each key of `K` to a sequence of `T`.
///
/// All access goes through an exclusive lock that is held for the duration of a
/// single call. Reads hand out clones so no guard escapes.
pub struct KeyValueStore<K, T> {
    data: Mutex<HashMap<K, Vec<T>>>,
}

impl<K: StoreKey, T: Clone> KeyValueStore<K, T> {
    pub fn new() -> KeyValueStore<K, T> {
        KeyValueStore {
            data: Mutex::new(HashMap::new()),
        }
    }

    // A panic while holding the guard cannot leave the map half-written: every
    // operation below is a single map or vector mutation, and `update` only
    // commits a copy once the caller's closure has returned.
    fn lock(&self) -> MutexGuard<'_, HashMap<K, Vec<T>>> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the sequence stored at `key`, or `None` if it was never set.
    pub fn get(&self, key: &K) -> Option<Vec<T>> {
        trace!(key = key.as_str(), "get");
        self.lock().get(key).cloned()
    }

    /// Replaces the whole sequence stored at `key`.
    pub fn set(&self, key: K, value: Vec<T>) {
        debug!(key = key.as_str(), len = value.len(), "set");
        self.lock().insert(key, value);
    }

    /// Removes and returns the element at `index` of the sequence at `key`.
    ///
    /// The remaining elements keep their relative order. On error the stored
    /// sequence is left untouched.
    pub fn remove_element(&self, key: &K, index: usize) -> StoreResult<T> {
        let mut data = self.lock();
        let Some(items) = data.get_mut(key) else {
            warn!(key = key.as_str(), index, "remove_element on unset key");
            return Err(StoreError::KeyNotFound { key: key.as_str() });
        };
        if index >= items.len() {
            warn!(key = key.as_str(), index, len = items.len(), "remove_element out of range");
            return Err(StoreError::IndexOutOfRange {
                key: key.as_str(),
                index,
                len: items.len(),
            });
        }
        debug!(key = key.as_str(), index, "remove_element");
        Ok(items.remove(index))
    }

    /// Unsets `key`, returning the sequence that was stored there.
    pub fn remove(&self, key: &K) -> Option<Vec<T>> {
        debug!(key = key.as_str(), "remove");
        self.lock().remove(key)
    }

    /// Runs `f` on a copy of the sequence at `key` and stores the copy once `f`
    /// returns. If `f` panics the stored sequence is unchanged.
    ///
    /// The lock is held while `f` runs, so `f` must not call back into this
    /// store: the lock is not reentrant.
    pub fn update<R>(&self, key: &K, f: impl FnOnce(&mut Vec<T>) -> R) -> StoreResult<R> {
        let mut data = self.lock();
        let Some(items) = data.get_mut(key) else {
            return Err(StoreError::KeyNotFound { key: key.as_str() });
        };
        let mut next = items.clone();
        let out = f(&mut next);
        debug!(key = key.as_str(), len = next.len(), "update");
        *items = next;
        Ok(out)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.lock().contains_key(key)
    }

    /// Number of keys that currently hold a sequence.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the whole mapping.
    pub fn snapshot(&self) -> HashMap<K, Vec<T>> {
        self.lock().clone()
    }

    /// Replaces the whole mapping at once.
    pub fn replace_data(&self, data: HashMap<K, Vec<T>>) {
        debug!(keys = data.len(), "replace_data");
        *self.lock() = data;
    }

    /// Renders the populated keys as a JSON object keyed by raw key name.
    pub fn to_json(&self) -> StoreResult<serde_json::Value>
    where
        T: Serialize,
    {
        let data = self.lock();
        let mut out = serde_json::Map::new();
        for key in K::ALL {
            if let Some(items) = data.get(key) {
                out.insert(key.as_str().to_string(), serde_json::to_value(items)?);
            }
        }
        Ok(serde_json::Value::Object(out))
    }
}

impl<K: StoreKey, T: Clone> Default for KeyValueStore<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StoreKey, T: Clone> Debug for KeyValueStore<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&'static str> = K::ALL
            .iter()
            .filter(|k| self.contains_key(k))
            .map(|k| k.as_str())
            .collect();
        f.debug_struct("KeyValueStore").field("keys", &keys).finish()
    }
}
