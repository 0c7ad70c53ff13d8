use std::time::Duration;

use super::types::Percentiles;

const PERCENTILE_P50: usize = 50;
const PERCENTILE_P95: usize = 95;
const PERCENTILE_P99: usize = 99;
const PERCENT_DIVISOR: usize = 100;

/// Nearest-rank percentiles, indexing the sorted samples at
/// `floor(count * p / 100)` without interpolation.
pub(crate) fn compute_percentiles(samples: &[Duration]) -> Option<Percentiles> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    Some(Percentiles {
        p50: nearest_rank(&sorted, PERCENTILE_P50)?,
        p95: nearest_rank(&sorted, PERCENTILE_P95)?,
        p99: nearest_rank(&sorted, PERCENTILE_P99)?,
    })
}

pub(crate) fn nearest_rank(sorted: &[Duration], percentile: usize) -> Option<Duration> {
    let index = sorted
        .len()
        .saturating_mul(percentile)
        .checked_div(PERCENT_DIVISOR)?;
    sorted.get(index).copied()
}
