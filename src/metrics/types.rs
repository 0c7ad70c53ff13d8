use std::time::Duration;

use crate::error::HttpError;

/// Outcome of a single work item.
#[derive(Debug)]
pub struct RequestResult {
    pub success: bool,
    pub response_time: Duration,
    /// `0` when no response was received.
    pub status_code: u16,
    pub error: Option<HttpError>,
    /// Captured for failed responses only.
    pub response_body: Option<String>,
}

impl RequestResult {
    #[must_use]
    pub const fn succeeded(response_time: Duration, status_code: u16) -> Self {
        Self {
            success: true,
            response_time,
            status_code,
            error: None,
            response_body: None,
        }
    }

    #[must_use]
    pub const fn rejected(response_time: Duration, status_code: u16, body: String) -> Self {
        Self {
            success: false,
            response_time,
            status_code,
            error: None,
            response_body: Some(body),
        }
    }

    #[must_use]
    pub const fn errored(response_time: Duration, error: HttpError) -> Self {
        Self {
            success: false,
            response_time,
            status_code: 0,
            error: Some(error),
            response_body: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentiles {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

/// Aggregate statistics for a completed run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub total_duration: Duration,
    pub avg_response_time: Duration,
    /// `Duration::MAX` when there were no samples.
    pub min_response_time: Duration,
    pub max_response_time: Duration,
    pub requests_per_sec: f64,
    pub percentiles: Option<Percentiles>,
    pub response_times: Vec<Duration>,
}

impl BenchmarkResult {
    /// False for an empty run, where min is still above max.
    #[must_use]
    pub fn has_latency_samples(&self) -> bool {
        self.min_response_time <= self.max_response_time
    }

    /// Success percentage, or `None` when nothing ran.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "percentage is display-only"
    )]
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_requests == 0 {
            return None;
        }
        Some(self.successful_requests as f64 / self.total_requests as f64 * 100.0)
    }
}
