//! TTL Cache - A thread-safe in-memory key/value cache
//!
//! Provides a plain map-backed cache and a TTL variant whose entries expire
//! lazily on read, both guarded by a single coarse lock.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, ExpiringEntry, TtlCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::{run_workload, WorkloadReport};
