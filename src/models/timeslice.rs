//! Time slice model.
//!
//! A time slice is one continuous worked interval within a day, derived from
//! a paired entry/exit punch or synthesized during reconciliation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One continuous worked interval within a day.
///
/// Invariant: within a day, slices are ordered and non-overlapping, and
/// `start <= end` unless `end_is_next_day` marks a midnight crossing.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeSlice;
/// use chrono::NaiveTime;
///
/// let slice = TimeSlice {
///     start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     end_is_next_day: false,
///     is_synthetic: false,
///     missing_exit: false,
/// };
/// assert_eq!(slice.duration_minutes(), 480);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Start of the worked interval.
    pub start: NaiveTime,
    /// End of the worked interval.
    pub end: NaiveTime,
    /// True when the interval crosses midnight and ends on the next day.
    pub end_is_next_day: bool,
    /// True when the slice was inferred during reconciliation rather than
    /// backed by a raw punch pair. Synthetic slices never count toward raw
    /// presence hours.
    pub is_synthetic: bool,
    /// True when the slice comes from an entry with no matching exit. Open
    /// slices have zero duration and surface as missing clock-outs.
    pub missing_exit: bool,
}

impl TimeSlice {
    /// Creates a closed, real slice from paired punches.
    pub fn closed(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            end_is_next_day: end < start,
            is_synthetic: false,
            missing_exit: false,
        }
    }

    /// Creates an open slice for an entry with no matching exit.
    pub fn open(start: NaiveTime) -> Self {
        Self {
            start,
            end: start,
            end_is_next_day: false,
            is_synthetic: false,
            missing_exit: true,
        }
    }

    /// Returns the duration of the slice in minutes.
    ///
    /// Open slices contribute zero. An end before the start is treated as a
    /// midnight rollover, matching the interval-inconsistency policy used
    /// for justified intervals.
    pub fn duration_minutes(&self) -> i64 {
        if self.missing_exit {
            return 0;
        }
        let minutes = (self.end - self.start).num_minutes();
        if self.end_is_next_day || minutes < 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }
}
