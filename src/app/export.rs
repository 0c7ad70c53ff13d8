use std::path::Path;
use std::time::Duration;

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::BenchmarkResult;

#[expect(
    clippy::float_arithmetic,
    reason = "exported latencies are fractional milliseconds"
)]
pub(crate) fn result_json(result: &BenchmarkResult) -> serde_json::Value {
    let latency_ms = |duration: Duration| duration.as_secs_f64() * 1_000.0;
    let percentiles_json = result.percentiles.map(|percentiles| {
        serde_json::json!({
            "p50_ms": latency_ms(percentiles.p50),
            "p95_ms": latency_ms(percentiles.p95),
            "p99_ms": latency_ms(percentiles.p99)
        })
    });
    let (min_ms, max_ms) = if result.has_latency_samples() {
        (
            Some(latency_ms(result.min_response_time)),
            Some(latency_ms(result.max_response_time)),
        )
    } else {
        (None, None)
    };
    let requests_per_sec = Some(result.requests_per_sec).filter(|rps| rps.is_finite());

    serde_json::json!({
        "total_requests": result.total_requests,
        "successful_requests": result.successful_requests,
        "failed_requests": result.failed_requests,
        "success_rate": result.success_rate(),
        "total_duration_ms": latency_ms(result.total_duration),
        "requests_per_sec": requests_per_sec,
        "avg_response_time_ms": latency_ms(result.avg_response_time),
        "min_response_time_ms": min_ms,
        "max_response_time_ms": max_ms,
        "percentiles": percentiles_json,
        "response_times_ms": result
            .response_times
            .iter()
            .map(|duration| latency_ms(*duration))
            .collect::<Vec<f64>>()
    })
}

/// Writes the run summary as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialization or the file write fails.
pub(crate) async fn export_json(path: &Path, result: &BenchmarkResult) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(&result_json(result))
        .map_err(|err| AppError::sink(SinkError::SerializeExport { source: err }))?;
    tokio::fs::write(path, json).await.map_err(|err| {
        AppError::sink(SinkError::WriteExport {
            path: path.to_path_buf(),
            source: err,
        })
    })
}
