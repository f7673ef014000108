//! Cache Store Module
//!
//! Unconditional map-backed cache: entries live until deleted or cleared.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::error::{CacheError, Result};

// == Cache ==
/// Thread-safe key/value store without expiry.
///
/// A single mutex guards the whole map; every operation, reads included,
/// holds it for the duration of its map access.
#[derive(Debug)]
pub struct Cache<V> {
    /// Key-value storage
    entries: Mutex<HashMap<String, V>>,
}

impl<V: Clone> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an empty cache with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    // == Set ==
    /// Stores a value, overwriting any prior value for the key.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        debug!(key = %key, "cache set");
        self.entries.lock().insert(key, value);
    }

    // == Get ==
    /// Returns a clone of the stored value, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<V> {
        trace!(key, "cache get");
        self.entries.lock().get(key).cloned()
    }

    // == Delete ==
    /// Removes a key.
    ///
    /// Returns `CacheError::KeyNotFound` and leaves the store untouched if
    /// the key is absent.
    pub fn delete(&self, key: &str) -> Result<()> {
        if self.entries.lock().remove(key).is_some() {
            debug!(key, "cache delete");
            Ok(())
        } else {
            Err(CacheError::KeyNotFound(key.to_string()))
        }
    }

    // == Clear ==
    /// Discards the backing map, leaving the cache empty.
    pub fn clear(&self) {
        let discarded = std::mem::take(&mut *self.entries.lock());
        debug!(discarded = discarded.len(), "cache cleared");
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<V: Clone> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store: Cache<String> = Cache::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let store = Cache::with_capacity(8);

        store.set("key1", "value1".to_string());

        assert_eq!(store.get("key1").as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store: Cache<u32> = Cache::new();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let store = Cache::new();

        store.set("key1", 1);
        store.set("key1", 2);

        assert_eq!(store.get("key1"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_delete() {
        let store = Cache::new();

        store.set("key1", 1);
        store.delete("key1").unwrap();

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let store = Cache::new();
        store.set("other", 7);

        let result = store.delete("nonexistent");
        assert_eq!(result, Err(CacheError::KeyNotFound("nonexistent".to_string())));
        assert_eq!(store.get("other"), Some(7));
    }

    #[test]
    fn test_store_clear_then_reuse() {
        let store = Cache::new();
        store.set("a", 1);
        store.set("b", 2);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.get("a"), None);
        assert!(matches!(store.delete("b"), Err(CacheError::KeyNotFound(_))));

        store.set("a", 3);
        assert_eq!(store.get("a"), Some(3));
    }
}
