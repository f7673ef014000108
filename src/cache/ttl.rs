//! TTL Cache Module
//!
//! Thread-safe cache where every entry carries its own expiry deadline.
//! Expiry is checked lazily on read; expired entries stay stored until they
//! are overwritten, deleted or cleared.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::cache::ExpiringEntry;
use crate::config::Config;
use crate::error::{CacheError, Result};

/// Default TTL used by [`TtlCache::new`]: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

// == TTL Cache ==
/// Thread-safe mapping from string keys to values with independent deadlines.
///
/// One coarse mutex guards the map. Every operation that touches the map,
/// `get` included, holds it for the whole lookup or mutation, so operations
/// are strictly serialized against each other.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-entry storage
    entries: Mutex<HashMap<String, ExpiringEntry<V>>>,
    /// TTL applied by `set_default`
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache using [`DEFAULT_TTL`] for `set_default`.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL)
    }

    /// Creates an empty cache with the given default TTL.
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Creates an empty cache from configuration.
    ///
    /// Uses the configured default TTL and pre-allocates the backing map.
    pub fn from_config(config: &Config) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity(config.initial_capacity)),
            default_ttl: config.default_ttl(),
        }
    }

    /// Returns the TTL applied by `set_default`.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Any prior entry for the key is replaced wholesale. A zero TTL stores
    /// an entry that is already expired.
    pub fn set(&self, key: impl Into<String>, ttl: Duration, value: V) {
        let key = key.into();
        let entry = ExpiringEntry::new(value, ttl);
        debug!(key = %key, ttl_ms = ttl.as_millis() as u64, "ttl cache set");
        self.entries.lock().insert(key, entry);
    }

    /// Stores `value` under `key` with the cache's default TTL.
    pub fn set_default(&self, key: impl Into<String>, value: V) {
        self.set(key, self.default_ttl, value);
    }

    // == Get ==
    /// Looks up a key.
    ///
    /// # Returns
    /// - `Ok(None)` if the key was never set (or was deleted/cleared)
    /// - `Ok(Some(value))` if the entry is still valid
    /// - `Err(CacheError::Expired)` if the entry's deadline has passed
    pub fn get(&self, key: &str) -> Result<Option<V>> {
        let entries = self.entries.lock();
        match entries.get(key) {
            None => {
                trace!(key, "ttl cache miss");
                Ok(None)
            }
            Some(entry) if Self::has_expired(entry) => {
                trace!(key, "ttl cache expired");
                Err(CacheError::Expired(key.to_string()))
            }
            Some(entry) => {
                trace!(key, "ttl cache hit");
                Ok(Some(entry.value().clone()))
            }
        }
    }

    // == Delete ==
    /// Removes a key, expired or not.
    ///
    /// The existence check and removal happen under a single lock
    /// acquisition. Returns `CacheError::KeyNotFound` without mutating
    /// anything if the key is absent.
    pub fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            debug!(key, "ttl cache delete");
            Ok(())
        } else {
            Err(CacheError::KeyNotFound(key.to_string()))
        }
    }

    // == Clear ==
    /// Discards the whole backing map; the cache is empty afterwards.
    pub fn clear(&self) {
        let discarded = std::mem::take(&mut *self.entries.lock());
        debug!(discarded = discarded.len(), "ttl cache cleared");
    }

    // == Has Expired ==
    /// Returns true once the current time has reached the entry's deadline.
    ///
    /// Pure predicate: does not touch the cache or its lock.
    pub fn has_expired(entry: &ExpiringEntry<V>) -> bool {
        entry.has_expired()
    }

    // == Time To Live ==
    /// Returns the remaining lifetime of a stored entry.
    ///
    /// `Some(Duration::ZERO)` for an expired entry, `None` if the key is absent.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.entries.lock().get(key).map(ExpiringEntry::ttl_remaining)
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
