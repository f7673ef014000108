//! Concurrent Workload Task
//!
//! Drives a shared TTL cache from several threads at once with a
//! deterministic mix of set/get/delete/clear on overlapping keys.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::CacheError;

/// TTL given to long-lived workload entries.
const LIVE_TTL: Duration = Duration::from_secs(60);

/// Operation cycle length; positions map to operations in `Op::pick`.
const OP_CYCLE: usize = 20;

// == Workload Report ==
/// Outcome counts collected by the workload threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadReport {
    /// Values stored
    pub sets: u64,
    /// Reads that returned a value
    pub hits: u64,
    /// Reads of keys that were not stored
    pub misses: u64,
    /// Reads of keys whose deadline had passed
    pub expired: u64,
    /// Successful deletes
    pub deletes: u64,
    /// Deletes of keys that were not stored
    pub failed_deletes: u64,
    /// Whole-cache clears
    pub clears: u64,
}

impl WorkloadReport {
    /// Total number of operations recorded.
    pub fn total(&self) -> u64 {
        self.sets
            + self.hits
            + self.misses
            + self.expired
            + self.deletes
            + self.failed_deletes
            + self.clears
    }

    /// Adds another report's counts into this one.
    pub fn merge(&mut self, other: &WorkloadReport) {
        self.sets += other.sets;
        self.hits += other.hits;
        self.misses += other.misses;
        self.expired += other.expired;
        self.deletes += other.deletes;
        self.failed_deletes += other.failed_deletes;
        self.clears += other.clears;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Set { expired: bool },
    Get,
    Delete,
    Clear,
}

impl Op {
    fn pick(worker: usize, step: usize) -> Self {
        match (worker * 7 + step) % OP_CYCLE {
            0..=9 => Op::Set {
                expired: step % 5 == 0,
            },
            10..=16 => Op::Get,
            17..=18 => Op::Delete,
            _ => Op::Clear,
        }
    }
}

/// Runs the configured workload against `cache` and returns the merged report.
///
/// Spawns `config.workers` threads, each performing
/// `config.operations_per_worker` operations over `config.key_space` keys.
/// Set values encode `worker * operations_per_worker + step`.
///
/// # Errors
/// Fails if a thread cannot be spawned or a worker panics.
pub fn run_workload(cache: Arc<TtlCache<u64>>, config: &Config) -> anyhow::Result<WorkloadReport> {
    let key_space = config.key_space.max(1);
    let operations = config.operations_per_worker;

    info!(
        "Starting workload: workers={}, operations_per_worker={}, key_space={}",
        config.workers, operations, key_space
    );

    let handles = (0..config.workers)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::Builder::new()
                .name(format!("workload-{}", worker))
                .spawn(move || run_worker(&cache, worker, operations, key_space))
                .with_context(|| format!("Failed to spawn workload thread {}", worker))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut report = WorkloadReport::default();
    for (worker, handle) in handles.into_iter().enumerate() {
        let partial = handle
            .join()
            .map_err(|_| anyhow!("Workload thread {} panicked", worker))?;
        debug!(worker, ?partial, "workload thread finished");
        report.merge(&partial);
    }

    info!("Workload finished: {} operations", report.total());
    Ok(report)
}

fn run_worker(
    cache: &TtlCache<u64>,
    worker: usize,
    operations: usize,
    key_space: usize,
) -> WorkloadReport {
    let mut report = WorkloadReport::default();

    for step in 0..operations {
        let key = format!("key{}", (worker * 31 + step * 7) % key_space);

        match Op::pick(worker, step) {
            Op::Set { expired } => {
                let ttl = if expired { Duration::ZERO } else { LIVE_TTL };
                cache.set(key, ttl, (worker * operations + step) as u64);
                report.sets += 1;
            }
            Op::Get => match cache.get(&key) {
                Ok(Some(_)) => report.hits += 1,
                Ok(None) => report.misses += 1,
                Err(CacheError::Expired(_)) => report.expired += 1,
                Err(CacheError::KeyNotFound(_)) => report.misses += 1,
            },
            Op::Delete => match cache.delete(&key) {
                Ok(()) => report.deletes += 1,
                Err(_) => report.failed_deletes += 1,
            },
            Op::Clear => {
                cache.clear();
                report.clears += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(workers: usize, operations: usize, key_space: usize) -> Config {
        Config {
            workers,
            operations_per_worker: operations,
            key_space,
            ..Config::default()
        }
    }

    #[test]
    fn test_workload_counts_every_operation() {
        let cache = Arc::new(TtlCache::new());
        let config = test_config(4, 500, 16);

        let report = run_workload(cache, &config).unwrap();

        assert_eq!(report.total(), 4 * 500);
        assert!(report.sets > 0);
        assert!(report.clears > 0);
    }

    #[test]
    fn test_single_worker_is_deterministic() {
        let config = test_config(1, 200, 8);

        let first = run_workload(Arc::new(TtlCache::new()), &config).unwrap();
        let second = run_workload(Arc::new(TtlCache::new()), &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_workers() {
        let cache = Arc::new(TtlCache::new());
        let report = run_workload(cache.clone(), &test_config(0, 100, 8)).unwrap();

        assert_eq!(report, WorkloadReport::default());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_key_space_is_clamped() {
        let cache = Arc::new(TtlCache::new());
        let report = run_workload(cache, &test_config(2, 50, 0)).unwrap();

        assert_eq!(report.total(), 100);
    }

    #[test]
    fn test_op_mix() {
        assert_eq!(Op::pick(0, 0), Op::Set { expired: true });
        assert_eq!(Op::pick(0, 1), Op::Set { expired: false });
        assert_eq!(Op::pick(0, 10), Op::Get);
        assert_eq!(Op::pick(0, 17), Op::Delete);
        assert_eq!(Op::pick(0, 19), Op::Clear);
    }

    #[test]
    fn test_report_merge() {
        let mut a = WorkloadReport {
            sets: 1,
            hits: 2,
            ..WorkloadReport::default()
        };
        let b = WorkloadReport {
            sets: 3,
            clears: 1,
            ..WorkloadReport::default()
        };

        a.merge(&b);

        assert_eq!(a.sets, 4);
        assert_eq!(a.hits, 2);
        assert_eq!(a.clears, 1);
        assert_eq!(a.total(), 7);
    }
}
