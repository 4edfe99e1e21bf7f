//! Shift and schedule metadata for anomaly detection and snapping.
//!
//! This module defines the canonical shift kinds, the clock window a shift
//! occupies, and the per-employee profile the engine receives from the
//! external roster.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// The canonical shifts recognized by the attendance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// Morning shift (canonically 07:00 to 15:00).
    Morning,
    /// Afternoon shift (canonically 15:00 to 23:00).
    Afternoon,
}

impl ShiftKind {
    /// Parses a free-form shift label from the clock terminal.
    ///
    /// Returns `None` for labels that do not map to a canonical shift;
    /// callers fall through to the next resolver in the chain.
    pub fn from_label(label: &str) -> Option<ShiftKind> {
        let normalized = label.trim();
        if normalized.eq_ignore_ascii_case("morning") {
            Some(ShiftKind::Morning)
        } else if normalized.eq_ignore_ascii_case("afternoon") {
            Some(ShiftKind::Afternoon)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftKind::Morning => write!(f, "morning"),
            ShiftKind::Afternoon => write!(f, "afternoon"),
        }
    }
}

/// The clock boundaries of a shift within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Canonical start of the shift.
    pub start: NaiveTime,
    /// Canonical end of the shift.
    pub end: NaiveTime,
}

impl ShiftWindow {
    /// Returns the expected shift length in minutes.
    ///
    /// An end before the start is treated as a midnight rollover.
    pub fn expected_minutes(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        if minutes < 0 { minutes + 24 * 60 } else { minutes }
    }
}

/// Per-employee roster metadata consumed by the engine.
///
/// Owned by the external roster system; the engine only reads it. A missing
/// `assigned_shift` degrades detection gracefully: schedule-relative gaps,
/// absences, and deviations are skipped rather than guessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Display name, used for deterministic output ordering.
    pub name: String,
    /// The shift the employee is rostered on, if any.
    pub assigned_shift: Option<ShiftKind>,
    /// Weekdays the employee is expected to work.
    #[serde(default = "default_working_weekdays")]
    pub working_weekdays: Vec<Weekday>,
}

fn default_working_weekdays() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

impl EmployeeProfile {
    /// Creates a profile with the default Monday-to-Friday working week.
    pub fn new(employee_id: &str, name: &str, assigned_shift: Option<ShiftKind>) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            name: name.to_string(),
            assigned_shift,
            working_weekdays: default_working_weekdays(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_recognizes_canonical_shifts() {
        assert_eq!(ShiftKind::from_label("morning"), Some(ShiftKind::Morning));
        assert_eq!(ShiftKind::from_label("MORNING"), Some(ShiftKind::Morning));
        assert_eq!(
            ShiftKind::from_label(" afternoon "),
            Some(ShiftKind::Afternoon)
        );
        assert_eq!(ShiftKind::from_label("night"), None);
        assert_eq!(ShiftKind::from_label(""), None);
    }

    #[test]
    fn test_expected_minutes_same_day() {
        let window = ShiftWindow {
            start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        };
        assert_eq!(window.expected_minutes(), 480);
    }

    #[test]
    fn test_expected_minutes_with_rollover() {
        let window = ShiftWindow {
            start: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        };
        assert_eq!(window.expected_minutes(), 480);
    }

    #[test]
    fn test_profile_defaults_to_weekday_working_week() {
        let profile = EmployeeProfile::new("emp_001", "Ada Park", Some(ShiftKind::Morning));
        assert_eq!(profile.working_weekdays.len(), 5);
        assert!(profile.working_weekdays.contains(&Weekday::Mon));
        assert!(!profile.working_weekdays.contains(&Weekday::Sat));
    }

    #[test]
    fn test_profile_deserialization_defaults_weekdays() {
        let json = r#"{
            "employee_id": "emp_001",
            "name": "Ada Park",
            "assigned_shift": "morning"
        }"#;
        let profile: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.assigned_shift, Some(ShiftKind::Morning));
        assert_eq!(profile.working_weekdays.len(), 5);
    }

    #[test]
    fn test_shift_kind_display() {
        assert_eq!(format!("{}", ShiftKind::Morning), "morning");
        assert_eq!(format!("{}", ShiftKind::Afternoon), "afternoon");
    }
}
