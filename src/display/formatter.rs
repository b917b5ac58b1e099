use crate::zfs::error::{ZfsError, ZfsResult};

/// Shown in place of a percentage whose denominator is zero
pub const PERCENT_PLACEHOLDER: &str = "n/a";

const BYTE_UNITS: [&str; 7] = ["Bytes", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
const HIT_UNITS: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

/// Human-readable byte formatting with IEC units (KiB..EiB).
///
/// The largest unit whose threshold the value clears wins, so exactly 2^20
/// renders as "1.0 MiB". Works for the full u64 range (16.0 EiB).
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} {}", bytes, BYTE_UNITS[0]);
    }

    let (value, unit) = scale(bytes, 1024.0, &BYTE_UNITS);
    format!("{:.1} {}", value, unit)
}

/// Human-readable hit counts with SI suffixes (k..E), no space before the suffix.
/// Values below 1000 stay bare integers.
pub fn format_hits(hits: u64) -> String {
    if hits < 1000 {
        return hits.to_string();
    }

    let (value, unit) = scale(hits, 1000.0, &HIT_UNITS);
    format!("{:.1}{}", value, unit)
}

/// Percentage of two raw kstat values, e.g. "25.0 %".
///
/// A zero or negative denominator yields [`PERCENT_PLACEHOLDER`] without
/// looking at the numerator; otherwise both operands must parse as numbers.
pub fn format_percent(numerator: &str, denominator: &str) -> ZfsResult<String> {
    let den = parse_operand(denominator)?;
    if den <= 0.0 {
        return Ok(PERCENT_PLACEHOLDER.to_string());
    }
    let num = parse_operand(numerator)?;
    Ok(percent_of(num, den))
}

/// Same as [`format_percent`] for values that are already numeric
pub fn format_percent_u64(numerator: u64, denominator: u64) -> String {
    percent_of(numerator as f64, denominator as f64)
}

fn percent_of(numerator: f64, denominator: f64) -> String {
    if denominator <= 0.0 {
        return PERCENT_PLACEHOLDER.to_string();
    }
    format!("{:.1} %", 100.0 * numerator / denominator)
}

fn parse_operand(raw: &str) -> ZfsResult<f64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value as f64);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ZfsError::parse_error(
            "percentage operand",
            raw,
            "not a number",
        )),
    }
}

/// Searches from the largest unit downward; callers handle the unitless range.
fn scale(raw: u64, step: f64, units: &[&'static str]) -> (f64, &'static str) {
    let value = raw as f64;

    for exponent in (1..units.len()).rev() {
        let limit = step.powi(exponent as i32);
        if value >= limit {
            return (value / limit, units[exponent]);
        }
    }

    (value, units[0])
}
