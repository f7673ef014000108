//! Tasks Module
//!
//! Multi-threaded jobs that run against a shared cache.
//!
//! # Tasks
//! - Workload: hammers a `TtlCache` from several threads and reports outcomes

mod workload;

pub use workload::{run_workload, WorkloadReport};
