use std::path::Path;

use tracing::info;

use crate::{domain::BenchmarkConfig, error::AppResult, http};

use super::{export, summary};

/// Runs one benchmark and prints its configuration and results.
///
/// # Errors
///
/// Returns an error when the run cannot start, a worker panics, or the
/// JSON export cannot be written.
pub(crate) async fn run_local(config: BenchmarkConfig, export_path: Option<&Path>) -> AppResult<()> {
    summary::print_config(&config);

    let outcome = http::run_benchmark(config).await?;
    if let Some(dump_dir) = outcome.dump_dir.as_deref() {
        summary::print_failure_dump_summary(outcome.unique_failures, dump_dir);
    }
    summary::print_results(&outcome.result);

    if let Some(path) = export_path {
        export::export_json(path, &outcome.result).await?;
        info!("Exported results to {}", path.display());
    }

    Ok(())
}
