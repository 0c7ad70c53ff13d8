use std::time::Duration;

use super::percentiles::compute_percentiles;
use super::types::{BenchmarkResult, RequestResult};

/// Folds the complete result set of a run into its summary statistics.
#[must_use]
pub fn aggregate_results(results: &[RequestResult], total_duration: Duration) -> BenchmarkResult {
    let mut successful_requests: usize = 0;
    let mut failed_requests: usize = 0;
    let mut total_response_time = Duration::ZERO;
    let mut min_response_time = Duration::MAX;
    let mut max_response_time = Duration::ZERO;
    let mut response_times = Vec::with_capacity(results.len());

    for result in results {
        if result.success {
            successful_requests = successful_requests.saturating_add(1);
        } else {
            failed_requests = failed_requests.saturating_add(1);
        }

        response_times.push(result.response_time);
        total_response_time = total_response_time.saturating_add(result.response_time);
        min_response_time = min_response_time.min(result.response_time);
        max_response_time = max_response_time.max(result.response_time);
    }

    let avg_response_time = average_duration(total_response_time, results.len());

    BenchmarkResult {
        total_requests: results.len(),
        successful_requests,
        failed_requests,
        total_duration,
        avg_response_time,
        min_response_time,
        max_response_time,
        requests_per_sec: requests_per_sec(results.len(), total_duration),
        percentiles: compute_percentiles(&response_times),
        response_times,
    }
}

/// Mean of `count` samples summing to `total`; zero when there are none.
pub(crate) fn average_duration(total: Duration, count: usize) -> Duration {
    u128::try_from(count)
        .ok()
        .and_then(|count| total.as_nanos().checked_div(count))
        .and_then(|nanos| u64::try_from(nanos).ok())
        .map_or(Duration::ZERO, Duration::from_nanos)
}

#[expect(
    clippy::float_arithmetic,
    reason = "throughput is reported as a float"
)]
pub(crate) fn requests_per_sec(count: usize, duration: Duration) -> f64 {
    if duration.is_zero() {
        return if count == 0 { 0.0 } else { f64::INFINITY };
    }
    count as f64 / duration.as_secs_f64()
}
