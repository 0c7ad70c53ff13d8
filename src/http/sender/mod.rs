mod config;
mod worker;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::{
    domain::BenchmarkConfig,
    error::AppResult,
    metrics::{BenchmarkResult, aggregate_results},
    sinks::FailureDumper,
};

use super::workload::HttpExecutor;
use config::build_client;

pub use worker::{PoolOutcome, run_worker_pool};

/// Aggregated result of a run plus the failure-dump bookkeeping.
#[derive(Debug)]
pub struct BenchmarkOutcome {
    pub result: BenchmarkResult,
    pub unique_failures: usize,
    pub dump_dir: Option<PathBuf>,
}

/// Runs the configured benchmark to completion.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or a worker task
/// panics. Individual request failures are part of the result instead.
pub async fn run_benchmark(config: BenchmarkConfig) -> AppResult<BenchmarkOutcome> {
    let config = Arc::new(config);
    let client = build_client(&config)?;
    let failures = Arc::new(FailureDumper::new(config.dump_failures_dir.as_deref()).await);
    let executor = Arc::new(HttpExecutor::new(
        client,
        Arc::clone(&config),
        Arc::clone(&failures),
    ));

    info!(
        "Starting {} {} requests to {} with {} workers",
        config.total_requests,
        config.method,
        config.url,
        config.parallel_count.get()
    );
    let pool = run_worker_pool(executor, config.total_requests, config.parallel_count).await?;
    let result = aggregate_results(&pool.results, pool.duration);
    info!(
        "Finished {} requests in {:?} ({} failed)",
        result.total_requests, result.total_duration, result.failed_requests
    );

    Ok(BenchmarkOutcome {
        result,
        unique_failures: failures.unique_failures().await,
        dump_dir: failures.dump_dir().map(std::path::Path::to_path_buf),
    })
}
