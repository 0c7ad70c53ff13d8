use std::collections::BTreeMap;
use std::time::Duration;

use super::types::PositiveUsize;
use crate::error::ValidationError;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

/// Parses `key1<sep>value1,key2<sep>value2` into a map.
///
/// Pairs without the separator or with an empty key are skipped; later
/// duplicates win.
pub(crate) fn parse_key_value_pairs(input: &str, separator: char) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();
    for pair in input.split(',') {
        let Some((key, value)) = pair.trim().split_once(separator) else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        pairs.insert(key.to_owned(), value.trim().to_owned());
    }
    pairs
}

const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60_000_000_000;
const NANOS_PER_HOUR: u128 = 3_600_000_000_000;
const MAX_FRACTION_DIGITS: usize = 18;

/// Parses a duration such as `500ms`, `1.5s`, `2m`, `1h`, or `1m30s`.
///
/// Each segment is a decimal number followed by one of `ns`, `us`, `µs`,
/// `ms`, `s`, `m`, or `h`. A bare number is read as seconds.
pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut total_nanos: u128 = 0;
    let mut rest = value;
    while !rest.is_empty() {
        let (whole, after_whole) = split_leading(rest, |ch| ch.is_ascii_digit());
        let (fraction, after_number) = after_whole
            .strip_prefix('.')
            .map_or(("", after_whole), |tail| {
                split_leading(tail, |ch| ch.is_ascii_digit())
            });
        if whole.is_empty() && fraction.is_empty() {
            return Err(ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            });
        }
        let (unit, remaining) =
            split_leading(after_number, |ch| !ch.is_ascii_digit() && ch != '.');
        let unit_nanos = if unit.is_empty() && remaining.is_empty() && rest == value {
            NANOS_PER_SECOND
        } else {
            unit_in_nanos(unit)?
        };

        let segment = segment_nanos(value, whole, fraction, unit_nanos)?;
        total_nanos = total_nanos
            .checked_add(segment)
            .ok_or(ValidationError::DurationOverflow)?;
        rest = remaining;
    }

    ensure_non_zero(nanos_to_duration(total_nanos)?)
}

fn split_leading(input: &str, keep: impl Fn(char) -> bool) -> (&str, &str) {
    let end = input.find(|ch: char| !keep(ch)).unwrap_or(input.len());
    input.split_at(end)
}

fn unit_in_nanos(unit: &str) -> Result<u128, ValidationError> {
    match unit {
        "ns" => Ok(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Ok(1_000),
        "ms" => Ok(1_000_000),
        "s" => Ok(NANOS_PER_SECOND),
        "m" => Ok(NANOS_PER_MINUTE),
        "h" => Ok(NANOS_PER_HOUR),
        _ => Err(ValidationError::InvalidDurationUnit {
            unit: unit.to_owned(),
        }),
    }
}

/// Digits past the eighteenth fractional place are below nanosecond
/// precision for every unit and are ignored.
fn segment_nanos(
    value: &str,
    whole: &str,
    fraction: &str,
    unit_nanos: u128,
) -> Result<u128, ValidationError> {
    let whole_nanos = if whole.is_empty() {
        0
    } else {
        let number: u64 = whole
            .parse()
            .map_err(|err| ValidationError::InvalidDurationNumber {
                value: value.to_owned(),
                source: err,
            })?;
        u128::from(number)
            .checked_mul(unit_nanos)
            .ok_or(ValidationError::DurationOverflow)?
    };

    let fraction = fraction.get(..MAX_FRACTION_DIGITS).unwrap_or(fraction);
    if fraction.is_empty() {
        return Ok(whole_nanos);
    }
    let digits: u64 = fraction
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;
    let scale = u32::try_from(fraction.len())
        .ok()
        .and_then(|len| 10u128.checked_pow(len))
        .ok_or(ValidationError::DurationOverflow)?;
    let fraction_nanos = u128::from(digits)
        .checked_mul(unit_nanos)
        .and_then(|scaled| scaled.checked_div(scale))
        .ok_or(ValidationError::DurationOverflow)?;

    whole_nanos
        .checked_add(fraction_nanos)
        .ok_or(ValidationError::DurationOverflow)
}

fn nanos_to_duration(nanos: u128) -> Result<Duration, ValidationError> {
    let secs = nanos
        .checked_div(NANOS_PER_SECOND)
        .and_then(|secs| u64::try_from(secs).ok())
        .ok_or(ValidationError::DurationOverflow)?;
    let subsec = nanos
        .checked_rem(NANOS_PER_SECOND)
        .and_then(|subsec| u32::try_from(subsec).ok())
        .ok_or(ValidationError::DurationOverflow)?;
    Ok(Duration::new(secs, subsec))
}

fn ensure_non_zero(duration: Duration) -> Result<Duration, ValidationError> {
    if duration.is_zero() {
        return Err(ValidationError::DurationZero);
    }
    Ok(duration)
}
