//! Justified interval model.
//!
//! Justified intervals are externally registered reasons (medical leave,
//! approved permissions, synthetic corrections) covering otherwise-anomalous
//! spans of a day. The engine reads them; it never creates or mutates the
//! external justification store.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Motive id reserved for assigned-task intervals.
///
/// Intervals with this motive are tracked as special-task hours, never as
/// generic justification.
pub const SPECIAL_TASK_MOTIVE_ID: i32 = 14;

/// Description token that also marks an interval as assigned-task work.
pub const SPECIAL_TASK_TOKEN: &str = "assigned task";

/// An externally registered justification overlapping a day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::JustifiedInterval;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let interval = JustifiedInterval {
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
///     end_is_next_day: false,
///     motive_id: 3,
///     motive_desc: "medical leave".to_string(),
///     is_synthetic: false,
/// };
/// assert_eq!(interval.duration_minutes(), 240);
/// assert!(!interval.is_special_task());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JustifiedInterval {
    /// Day the justification applies to.
    pub date: NaiveDate,
    /// Start of the justified span.
    pub start: NaiveTime,
    /// End of the justified span.
    pub end: NaiveTime,
    /// True when the span crosses midnight and ends on the next day.
    #[serde(default)]
    pub end_is_next_day: bool,
    /// Identifier of the registered motive.
    pub motive_id: i32,
    /// Human-readable motive description.
    pub motive_desc: String,
    /// True when the interval was inferred by the system rather than
    /// registered manually.
    #[serde(default)]
    pub is_synthetic: bool,
}

impl JustifiedInterval {
    /// Returns the covered span in minutes.
    ///
    /// An `end` before the `start`, or an explicit `end_is_next_day` flag,
    /// is treated as a midnight rollover (24 hours are added to the end).
    /// Inconsistent intervals therefore resolve to a best-effort duration
    /// instead of an error.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        if self.end_is_next_day || minutes < 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }

    /// Returns the covered span in hours as a [`Decimal`].
    pub fn duration_hours(&self) -> Decimal {
        Decimal::new(self.duration_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Returns true when the interval records assigned-task work.
    ///
    /// Assigned-task intervals are excluded from generic justified hours and
    /// summed separately.
    pub fn is_special_task(&self) -> bool {
        self.motive_id == SPECIAL_TASK_MOTIVE_ID
            || self.motive_desc.to_lowercase().contains(SPECIAL_TASK_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_interval(start: (u32, u32), end: (u32, u32), motive_id: i32) -> JustifiedInterval {
        JustifiedInterval {
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            end_is_next_day: false,
            motive_id,
            motive_desc: "medical leave".to_string(),
            is_synthetic: false,
        }
    }

    #[test]
    fn test_duration_same_day() {
        let interval = make_interval((9, 0), (13, 0), 3);
        assert_eq!(interval.duration_minutes(), 240);
        assert_eq!(interval.duration_hours(), Decimal::new(4, 0));
    }

    #[test]
    fn test_duration_end_before_start_rolls_over() {
        let interval = make_interval((22, 0), (6, 0), 3);
        assert_eq!(interval.duration_minutes(), 480);
    }

    #[test]
    fn test_duration_explicit_next_day_flag() {
        let mut interval = make_interval((22, 0), (23, 0), 3);
        interval.end_is_next_day = true;
        // 22:00 today to 23:00 tomorrow
        assert_eq!(interval.duration_minutes(), 25 * 60);
    }

    #[test]
    fn test_special_task_by_motive_id() {
        let interval = make_interval((9, 0), (13, 0), SPECIAL_TASK_MOTIVE_ID);
        assert!(interval.is_special_task());
    }

    #[test]
    fn test_special_task_by_description_token() {
        let mut interval = make_interval((9, 0), (13, 0), 3);
        interval.motive_desc = "Assigned Task: inventory".to_string();
        assert!(interval.is_special_task());
    }

    #[test]
    fn test_regular_motive_is_not_special_task() {
        let interval = make_interval((9, 0), (13, 0), 3);
        assert!(!interval.is_special_task());
    }

    #[test]
    fn test_deserialization_defaults_flags() {
        let json = r#"{
            "date": "2026-01-12",
            "start": "09:00:00",
            "end": "13:00:00",
            "motive_id": 3,
            "motive_desc": "medical leave"
        }"#;
        let interval: JustifiedInterval = serde_json::from_str(json).unwrap();
        assert!(!interval.end_is_next_day);
        assert!(!interval.is_synthetic);
    }
}
