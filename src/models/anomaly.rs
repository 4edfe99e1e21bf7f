//! Anomaly models produced by the detector.
//!
//! Gaps and deviations are independent, non-deduplicated streams: a day can
//! carry both, and neither suppresses the other.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A detected hole in the worked day not covered by any justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnjustifiedGap {
    /// Day the gap was detected on.
    pub date: NaiveDate,
    /// Start of the uncovered span.
    pub start: NaiveTime,
    /// End of the uncovered span.
    pub end: NaiveTime,
}

impl UnjustifiedGap {
    /// Returns the length of the gap in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// A recorded difference between actual and assigned shift boundaries.
///
/// Deviations are audit/coaching signals, not pay adjustments: they are
/// recorded even when the day's hours still reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayDeviation {
    /// Day the deviation was detected on.
    pub date: NaiveDate,
    /// Canonical shift start.
    pub expected_start: NaiveTime,
    /// Canonical shift end.
    pub expected_end: NaiveTime,
    /// First worked boundary actually observed.
    pub actual_start: NaiveTime,
    /// Last worked boundary actually observed.
    pub actual_end: NaiveTime,
}

/// A day on which a punch carried a shift label differing from the
/// employee's assigned shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftChange {
    /// Day the differing label was observed.
    pub date: NaiveDate,
    /// The label reported by the clock terminal.
    pub shift_label: String,
}
