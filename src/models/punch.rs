//! Raw punch event model and related types.
//!
//! This module defines the immutable punch-clock event shape consumed by the
//! reconciliation engine. One event corresponds to one physical clock-in or
//! clock-out at the time-clock terminal.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Whether a punch event is a clock-in or a clock-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    /// Clock-in: the employee starts a worked interval.
    Entry,
    /// Clock-out: the employee ends a worked interval.
    Exit,
}

impl std::fmt::Display for PunchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchKind::Entry => write!(f, "entry"),
            PunchKind::Exit => write!(f, "exit"),
        }
    }
}

/// The calendar classification of the day a punch falls on.
///
/// Sourced from the external time-clock system alongside the punch itself;
/// holiday days select the holiday snapping rules in the punch-time
/// normalizer and feed the holiday-hours aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// An ordinary expected working day.
    Regular,
    /// A company holiday.
    Holiday,
    /// A day inside the employee's registered vacation.
    Vacation,
}

/// A single clock-in/out record from the external time-clock system.
///
/// Immutable input: the engine never mutates punch events, it only derives
/// new structures from them.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DayType, PunchKind, RawPunchEvent};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let event = RawPunchEvent {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     time: NaiveTime::from_hms_opt(7, 2, 0).unwrap(),
///     kind: PunchKind::Entry,
///     motive_code: 0,
///     day_type: DayType::Regular,
///     shift_label: Some("morning".to_string()),
/// };
/// assert!(event.is_entry());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPunchEvent {
    /// Identifier of the employee the punch belongs to.
    pub employee_id: String,
    /// Calendar day of the punch.
    pub date: NaiveDate,
    /// Time of day the punch was recorded.
    pub time: NaiveTime,
    /// Whether this is a clock-in or a clock-out.
    pub kind: PunchKind,
    /// Motive code attached by the time-clock system (0 = none).
    pub motive_code: i32,
    /// Calendar classification of the day.
    pub day_type: DayType,
    /// Shift label reported by the clock terminal, if any.
    #[serde(default)]
    pub shift_label: Option<String>,
}

impl RawPunchEvent {
    /// Returns true when the event is a clock-in.
    pub fn is_entry(&self) -> bool {
        self.kind == PunchKind::Entry
    }
}
