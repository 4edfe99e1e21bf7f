//! Punch-time adjustment candidate model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::PunchKind;

/// A proposed correction snapping a punch to a canonical shift boundary.
///
/// Candidates are ephemeral: they exist until the caller accepts or discards
/// them, and are never auto-applied. Applying a candidate only rewrites the
/// time-of-day field of the matching original event.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AdjustmentCandidate, PunchKind};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let candidate = AdjustmentCandidate {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     original_time: NaiveTime::from_hms_opt(6, 20, 0).unwrap(),
///     target_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     kind: PunchKind::Entry,
/// };
/// assert_eq!(candidate.kind, PunchKind::Entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentCandidate {
    /// Employee the punch belongs to.
    pub employee_id: String,
    /// Day of the punch.
    pub date: NaiveDate,
    /// The recorded punch time.
    pub original_time: NaiveTime,
    /// The canonical boundary time to snap to.
    pub target_time: NaiveTime,
    /// Whether the punch is an entry or an exit.
    pub kind: PunchKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_serialization_round_trip() {
        let candidate = AdjustmentCandidate {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            original_time: NaiveTime::from_hms_opt(6, 20, 0).unwrap(),
            target_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            kind: PunchKind::Entry,
        };
        let json = serde_json::to_string(&candidate).unwrap();
        let deserialized: AdjustmentCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(candidate, deserialized);
    }
}
