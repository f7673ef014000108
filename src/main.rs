//! TTL Cache - concurrent smoke run
//!
//! Loads configuration from the environment, drives a shared `TtlCache`
//! from several threads and logs what happened.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_cache::{run_workload, Config, TtlCache};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the TTL cache with configured parameters
/// 4. Run the concurrent workload
/// 5. Log the outcome summary
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}ms, initial_capacity={}, workers={}, operations_per_worker={}, key_space={}",
        config.default_ttl_ms,
        config.initial_capacity,
        config.workers,
        config.operations_per_worker,
        config.key_space
    );

    let cache = Arc::new(TtlCache::from_config(&config));
    let started = Instant::now();
    let report = run_workload(Arc::clone(&cache), &config)?;

    info!(
        "sets={} hits={} misses={} expired={} deletes={} failed_deletes={} clears={}",
        report.sets,
        report.hits,
        report.misses,
        report.expired,
        report.deletes,
        report.failed_deletes,
        report.clears
    );
    info!(
        "{} operations in {:?}, {} entries left in cache",
        report.total(),
        started.elapsed(),
        cache.len()
    );

    Ok(())
}
