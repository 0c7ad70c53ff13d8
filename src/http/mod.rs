//! HTTP request execution and the fixed worker pool.
mod sender;
pub(crate) mod workload;


pub use sender::{BenchmarkOutcome, PoolOutcome, run_benchmark, run_worker_pool};
pub use workload::{HttpExecutor, RequestExecutor};
