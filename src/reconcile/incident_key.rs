//! Stable identity keys for detected anomalies.
//!
//! A caller-held map from these keys to motive ids records which anomalies a
//! human has already justified. Keys must therefore be byte-identical
//! wherever incidents are both created and looked up, and must survive
//! recomputation: two anomalies that normalize to the same boundary values
//! map to the same key regardless of a trailing `" (+1)"` next-day suffix or
//! sub-minute precision.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{UnjustifiedGap, WorkdayDeviation};

/// Builds the stable key for an unjustified gap from raw boundary strings.
///
/// Boundary strings are normalized before keying: an optional `" (+1)"`
/// next-day suffix is stripped, and the time is truncated to minute-of-day
/// with zero-padded components.
///
/// # Example
///
/// ```
/// use attendance_engine::reconcile::gap_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(
///     gap_key("emp_001", date, "07:15 (+1)", "08:00"),
///     gap_key("emp_001", date, "07:15", "08:00"),
/// );
/// ```
pub fn gap_key(employee_id: &str, date: NaiveDate, start: &str, end: &str) -> String {
    format!(
        "{}|{}|{}|{}",
        employee_id,
        date.format("%Y-%m-%d"),
        normalize_boundary(start),
        normalize_boundary(end)
    )
}

/// Builds the stable key for a detected gap.
pub fn gap_key_for(employee_id: &str, gap: &UnjustifiedGap) -> String {
    gap_key(
        employee_id,
        gap.date,
        &format_boundary(gap.start),
        &format_boundary(gap.end),
    )
}

/// Builds the stable key for a workday deviation.
///
/// Deviations are keyed per employee and day only: at most one deviation is
/// recorded per day, so the boundaries are not part of the identity.
pub fn deviation_key(employee_id: &str, date: NaiveDate) -> String {
    format!("{}|{}", employee_id, date.format("%Y-%m-%d"))
}

/// Builds the stable key for a detected deviation.
pub fn deviation_key_for(employee_id: &str, deviation: &WorkdayDeviation) -> String {
    deviation_key(employee_id, deviation.date)
}

fn format_boundary(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Strips a `" (+1)"` / `"(+1)"` suffix and truncates to `HH:MM`.
fn normalize_boundary(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_suffix = trimmed
        .strip_suffix("(+1)")
        .map(str::trim_end)
        .unwrap_or(trimmed);

    let mut parts = without_suffix.split(':');
    match (parts.next(), parts.next()) {
        (Some(hour), Some(minute)) => {
            let minute: String = minute.chars().take(2).collect();
            format!("{:0>2}:{:0>2}", hour.trim(), minute)
        }
        _ => without_suffix.to_string(),
    }
}
