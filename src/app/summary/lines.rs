use std::path::Path;
use std::time::Duration;

use crate::domain::BenchmarkConfig;
use crate::metrics::BenchmarkResult;

pub(crate) const SECTION_RULE: &str = "----------------------------------------";
const RESULTS_HEADER: &str = "========== BENCHMARK RESULTS ==========";
const RESULTS_FOOTER: &str = "========================================";

pub(crate) fn config_lines(config: &BenchmarkConfig) -> Vec<String> {
    let mut lines = vec![
        "Starting HTTP benchmark...".to_owned(),
        format!("URL: {}", config.url),
        format!("Method: {}", config.method),
        format!("Total requests: {}", config.total_requests),
        format!("Parallel requests: {}", config.parallel_count.get()),
        format!("Timeout: {}", format_duration(config.timeout)),
    ];

    if config.auth_token.is_some() {
        lines.push("Auth token: [PROVIDED]".to_owned());
    }

    if !config.headers.is_empty() {
        lines.push(format!("Custom headers: {}", config.headers.len()));
        for (key, value) in &config.headers {
            lines.push(format!("  {}: {}", key, value));
        }
    }

    if !config.parameters.is_empty() {
        lines.push(format!("Query parameters: {}", config.parameters.len()));
        for (key, value) in &config.parameters {
            lines.push(format!("  {}={}", key, value));
        }
    }

    if config.body.is_some() || config.body_file.is_some() {
        lines.push("POST data: [PROVIDED]".to_owned());
        if let Some(path) = config.body_file.as_deref() {
            lines.push(format!("POST data file: {}", path));
        }
        lines.push(format!("Content-Type: {}", config.content_type));
    }

    if let Some(dir) = config.dump_failures_dir.as_deref() {
        lines.push(format!("Failure dump directory: {}", dir.display()));
    }

    lines
}

pub(crate) fn result_lines(result: &BenchmarkResult) -> Vec<String> {
    let success_rate = result
        .success_rate()
        .map_or_else(|| "n/a".to_owned(), |rate| format!("{:.2}%", rate));
    let requests_per_sec = if result.requests_per_sec.is_finite() {
        format!("{:.2}", result.requests_per_sec)
    } else {
        "n/a".to_owned()
    };

    let mut lines = vec![
        RESULTS_HEADER.to_owned(),
        format!("Total requests:      {}", result.total_requests),
        format!("Successful requests: {}", result.successful_requests),
        format!("Failed requests:     {}", result.failed_requests),
        format!("Success rate:        {}", success_rate),
        SECTION_RULE.to_owned(),
        format!("Total time:          {}", format_duration(result.total_duration)),
        format!("Requests per second: {}", requests_per_sec),
        SECTION_RULE.to_owned(),
        "Response times:".to_owned(),
        format!(
            "  Average:           {}",
            format_duration(result.avg_response_time)
        ),
    ];

    if result.has_latency_samples() {
        lines.push(format!(
            "  Minimum:           {}",
            format_duration(result.min_response_time)
        ));
        lines.push(format!(
            "  Maximum:           {}",
            format_duration(result.max_response_time)
        ));
    }
    match result.percentiles {
        Some(percentiles) => {
            lines.push(format!("  50th percentile:   {}", format_duration(percentiles.p50)));
            lines.push(format!("  95th percentile:   {}", format_duration(percentiles.p95)));
            lines.push(format!("  99th percentile:   {}", format_duration(percentiles.p99)));
        }
        None => lines.push("  (no samples)".to_owned()),
    }

    lines.push(RESULTS_FOOTER.to_owned());
    lines
}

pub(crate) fn failure_dump_line(unique_failures: usize, dump_dir: &Path) -> String {
    format!(
        "Failure dump summary: {} unique failure types saved to {}",
        unique_failures,
        dump_dir.display()
    )
}

/// `1.5s`, `250ms`, `12.345µs` style output.
pub(crate) fn format_duration(duration: Duration) -> String {
    format!("{:?}", duration)
}
