//! Per-request results and end-of-run aggregation.
mod percentiles;
mod summary;
mod types;


pub use summary::aggregate_results;
pub use types::{BenchmarkResult, Percentiles, RequestResult};
