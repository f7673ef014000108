//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an expiry deadline.

use std::time::{Duration, Instant};

// == Expiring Entry ==
/// A stored value together with its absolute expiry deadline.
///
/// Entries are never mutated in place; a new `set` on the same key replaces
/// the whole entry.
#[derive(Debug, Clone)]
pub struct ExpiringEntry<V> {
    value: V,
    expiry: Instant,
}

impl<V> ExpiringEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self::with_expiry(value, deadline_after(ttl))
    }

    /// Creates an entry with an explicit deadline.
    pub fn with_expiry(value: V, expiry: Instant) -> Self {
        Self { value, expiry }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the absolute deadline.
    pub fn expiry(&self) -> Instant {
        self.expiry
    }

    // == Has Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its deadline, so a zero TTL is expired
    /// immediately.
    pub fn has_expired(&self) -> bool {
        self.has_expired_at(Instant::now())
    }

    /// Checks expiry against a caller-supplied instant.
    pub fn has_expired_at(&self, now: Instant) -> bool {
        now >= self.expiry
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or `Duration::ZERO` once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expiry.saturating_duration_since(Instant::now())
    }

    /// Consumes the entry, returning the value.
    pub fn into_value(self) -> V {
        self.value
    }
}

// == Utility Functions ==
/// Computes `now + ttl`, saturating far in the future if the sum overflows.
fn deadline_after(ttl: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(ttl)
        .unwrap_or_else(|| now + Duration::from_secs(60 * 60 * 24 * 365 * 100))
}
