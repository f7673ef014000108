//! Cache Module
//!
//! Provides thread-safe in-memory caching, with and without TTL expiration.

mod entry;
mod store;
mod ttl;


// Re-export public types
pub use entry::ExpiringEntry;
pub use store::Cache;
pub use ttl::{TtlCache, DEFAULT_TTL};
