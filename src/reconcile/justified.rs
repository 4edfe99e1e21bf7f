//! Justification reconciliation.
//!
//! Combines the externally computed "base justified hours" figure with the
//! hours inferred from the registered justified intervals. The merge is an
//! asymmetric max: the engine never silently discards a larger inferred
//! figure, and either side may under-report without double-counting when
//! both describe the same interval.

use rust_decimal::Decimal;

use crate::models::{JustifiedInterval, SpecialTaskSummary};

/// Sums the hours inferred from the intervals, excluding assigned-task ones.
///
/// Each interval is converted to minutes with the midnight-rollover rule
/// (`end_is_next_day`, or an end before the start, adds 24 hours to the
/// end). The sum is rounded to 2 decimals.
pub fn inferred_hours(intervals: &[JustifiedInterval]) -> Decimal {
    let minutes: i64 = intervals
        .iter()
        .filter(|i| !i.is_special_task())
        .map(JustifiedInterval::duration_minutes)
        .sum();
    minutes_to_hours(minutes).round_dp(2)
}

/// Merges the base justified-hours figure with the inferred interval sum.
///
/// Precedence:
/// - a non-finite or non-positive `base` yields the inferred figure;
/// - a non-positive inferred figure yields `base`;
/// - otherwise the larger of the two wins.
///
/// The result is always rounded to 2 decimals and never negative.
///
/// # Example
///
/// ```
/// use attendance_engine::reconcile::compute_justified_hours;
/// use rust_decimal::Decimal;
///
/// // No intervals: the base figure stands.
/// assert_eq!(compute_justified_hours(3.5, &[]), Decimal::new(350, 2));
/// // Garbage base: nothing to fall back to.
/// assert_eq!(compute_justified_hours(f64::NAN, &[]), Decimal::ZERO);
/// ```
pub fn compute_justified_hours(base: f64, intervals: &[JustifiedInterval]) -> Decimal {
    let inferred = inferred_hours(intervals);

    let base = if base.is_finite() {
        Decimal::try_from(base).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let result = if base <= Decimal::ZERO {
        inferred
    } else if inferred <= Decimal::ZERO {
        base
    } else {
        base.max(inferred)
    };

    result.round_dp(2).max(Decimal::ZERO)
}

/// Summarizes the assigned-task intervals excluded from justified hours.
pub fn special_task_summary(intervals: &[JustifiedInterval]) -> SpecialTaskSummary {
    let special: Vec<&JustifiedInterval> =
        intervals.iter().filter(|i| i.is_special_task()).collect();
    let minutes: i64 = special
        .iter()
        .map(|i| i.duration_minutes())
        .sum();
    SpecialTaskSummary {
        count: special.len() as u32,
        hours: minutes_to_hours(minutes).round_dp(2),
    }
}

/// Converts whole minutes to decimal hours without intermediate rounding.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
