//! Configuration Module
//!
//! Handles loading cache and workload settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Cache and workload configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default TTL in milliseconds for entries stored without explicit TTL
    pub default_ttl_ms: u64,
    /// Number of entries the backing map pre-allocates
    pub initial_capacity: usize,
    /// Number of threads the workload driver spawns
    pub workers: usize,
    /// Operations each workload thread performs
    pub operations_per_worker: usize,
    /// Number of distinct keys the workload touches
    pub key_space: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `INITIAL_CAPACITY` - Pre-allocated map capacity (default: 64)
    /// - `WORKERS` - Workload threads (default: 4)
    /// - `OPERATIONS_PER_WORKER` - Operations per thread (default: 1000)
    /// - `KEY_SPACE` - Distinct workload keys (default: 32)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl_ms: env_or("DEFAULT_TTL_MS", defaults.default_ttl_ms),
            initial_capacity: env_or("INITIAL_CAPACITY", defaults.initial_capacity),
            workers: env_or("WORKERS", defaults.workers),
            operations_per_worker: env_or(
                "OPERATIONS_PER_WORKER",
                defaults.operations_per_worker,
            ),
            key_space: env_or("KEY_SPACE", defaults.key_space),
        }
    }

    /// Returns the default TTL as a Duration.
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: 300_000,
            initial_capacity: 64,
            workers: 4,
            operations_per_worker: 1000,
            key_space: 32,
        }
    }
}

/// Parses an environment variable, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
