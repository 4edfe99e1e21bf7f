//! Punch-time normalization (bulk adjustment).
//!
//! Identifies punches inside tolerance windows around canonical shift
//! boundaries and proposes snapped corrections. Two rule families apply per
//! event, first match wins: fixed anchors on holiday days, and one-sided
//! shift-boundary windows on regular days.
//!
//! The window boundaries below are literal attendance policy. They are
//! deliberately asymmetric (entry tolerance precedes the anchor, exit
//! tolerance follows it): only early arrivals and late departures are
//! corrected, never legitimately late arrivals or early departures, which
//! remain deviations.
//!
//! Candidates are never auto-applied. The caller selects a subset and
//! [`apply_adjustments`] rewrites only the time-of-day field of the selected
//! originals, returning a new event collection.

use std::collections::{HashMap, HashSet};

use chrono::NaiveTime;

use crate::models::{AdjustmentCandidate, DayType, PunchKind, RawPunchEvent, ShiftKind};

use super::shift_resolution::resolve_shift;

/// Proposes snapping corrections for a period's raw events.
///
/// `assignments` maps employee ids to their rostered shift and takes
/// priority over labels and inference. Employees in `excluded` have fully
/// flexible schedules and are exempt from snapping. At most one candidate is
/// emitted per event.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DayType, PunchKind, RawPunchEvent, ShiftKind};
/// use attendance_engine::reconcile::propose_adjustments;
/// use chrono::{NaiveDate, NaiveTime};
/// use std::collections::{HashMap, HashSet};
///
/// let event = RawPunchEvent {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     time: NaiveTime::from_hms_opt(6, 20, 0).unwrap(),
///     kind: PunchKind::Entry,
///     motive_code: 0,
///     day_type: DayType::Regular,
///     shift_label: Some("morning".to_string()),
/// };
///
/// let candidates = propose_adjustments(&[event], &HashMap::new(), &HashSet::new());
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].target_time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
/// ```
pub fn propose_adjustments(
    events: &[RawPunchEvent],
    assignments: &HashMap<String, ShiftKind>,
    excluded: &HashSet<String>,
) -> Vec<AdjustmentCandidate> {
    let mut candidates = Vec::new();

    for event in events {
        if excluded.contains(&event.employee_id) {
            continue;
        }
        let target = if event.day_type == DayType::Holiday {
            holiday_target(event)
        } else {
            regular_target(event, assignments)
        };
        if let Some(target_time) = target {
            candidates.push(AdjustmentCandidate {
                employee_id: event.employee_id.clone(),
                date: event.date,
                original_time: event.time,
                target_time,
                kind: event.kind,
            });
        }
    }

    candidates
}

/// Applies the selected candidates to the events.
///
/// Only the time-of-day field of a matched original changes; every other
/// field is carried over untouched. The input collection is left unmodified
/// so callers can preview and undo.
pub fn apply_adjustments(
    events: &[RawPunchEvent],
    selected: &[AdjustmentCandidate],
) -> Vec<RawPunchEvent> {
    events
        .iter()
        .map(|event| {
            let matched = selected.iter().find(|c| {
                c.employee_id == event.employee_id
                    && c.date == event.date
                    && c.kind == event.kind
                    && c.original_time == event.time
            });
            match matched {
                Some(candidate) => {
                    let mut adjusted = event.clone();
                    adjusted.time = candidate.target_time;
                    adjusted
                }
                None => event.clone(),
            }
        })
        .collect()
}

/// Holiday-day rule: three fixed anchors, evaluated in order, first match
/// wins. The 13:00 window starts at 12:31 so it never overlaps the 12:00
/// window.
fn holiday_target(event: &RawPunchEvent) -> Option<NaiveTime> {
    let anchors = [
        (PunchKind::Entry, clock(7, 0), clock(6, 30), clock(7, 30)),
        (PunchKind::Exit, clock(12, 0), clock(11, 30), clock(12, 30)),
        (PunchKind::Exit, clock(13, 0), clock(12, 31), clock(13, 30)),
    ];

    for (kind, anchor, window_start, window_end) in anchors {
        if event.kind == kind
            && event.time >= window_start
            && event.time <= window_end
            && event.time != anchor
        {
            return Some(anchor);
        }
    }
    None
}

/// Regular-day rule: one-sided tolerance windows around the resolved
/// shift's canonical boundaries (before the anchor for entries, after it
/// for exits).
fn regular_target(
    event: &RawPunchEvent,
    assignments: &HashMap<String, ShiftKind>,
) -> Option<NaiveTime> {
    let shift = resolve_shift(assignments, event)?;
    let time = event.time;

    match (shift, event.kind) {
        (ShiftKind::Morning, PunchKind::Entry) => {
            in_window(time, clock(6, 15), clock(7, 0), false).then(|| clock(7, 0))
        }
        (ShiftKind::Morning, PunchKind::Exit) => {
            in_window(time, clock(15, 0), clock(15, 15), true).then(|| clock(15, 0))
        }
        (ShiftKind::Afternoon, PunchKind::Entry) => {
            in_window(time, clock(14, 15), clock(15, 0), false).then(|| clock(15, 0))
        }
        (ShiftKind::Afternoon, PunchKind::Exit) => {
            in_window(time, clock(23, 0), clock(23, 15), true).then(|| clock(23, 0))
        }
    }
}

/// One-sided window membership: entries use `[start, end)`, exits use
/// `(start, end]`.
fn in_window(time: NaiveTime, start: NaiveTime, end: NaiveTime, exit_side: bool) -> bool {
    if exit_side {
        time > start && time <= end
    } else {
        time >= start && time < end
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid clock time")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(h: u32, m: u32, kind: PunchKind, day_type: DayType) -> RawPunchEvent {
        RawPunchEvent {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            kind,
            motive_code: 0,
            day_type,
            shift_label: None,
        }
    }

    fn propose(events: &[RawPunchEvent]) -> Vec<AdjustmentCandidate> {
        propose_adjustments(events, &HashMap::new(), &HashSet::new())
    }

    #[test]
    fn test_holiday_entry_snaps_to_seven() {
        let events = vec![event(6, 40, PunchKind::Entry, DayType::Holiday)];
        let candidates = propose(&events);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target_time, clock(7, 0));
    }

    #[test]
    fn test_holiday_exit_boundary_1230_snaps_to_noon() {
        // Exactly 12:30 belongs to the 12:00 window, not the 13:00 one.
        let events = vec![event(12, 30, PunchKind::Exit, DayType::Holiday)];
        let candidates = propose(&events);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target_time, clock(12, 0));
    }

    #[test]
    fn test_holiday_exit_1231_snaps_to_thirteen() {
        let events = vec![event(12, 31, PunchKind::Exit, DayType::Holiday)];
        let candidates = propose(&events);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target_time, clock(13, 0));
    }

    #[test]
    fn test_holiday_windows_are_disjoint() {
        // No exit time may map to two different anchors.
        for minute in 0..(24 * 60) {
            let e = event(
                (minute / 60) as u32,
                (minute % 60) as u32,
                PunchKind::Exit,
                DayType::Holiday,
            );
            let targets: Vec<NaiveTime> = propose(std::slice::from_ref(&e))
                .into_iter()
                .map(|c| c.target_time)
                .collect();
            assert!(targets.len() <= 1, "time {} matched {:?}", e.time, targets);
        }
    }

    #[test]
    fn test_holiday_punch_on_anchor_is_left_alone() {
        let events = vec![
            event(7, 0, PunchKind::Entry, DayType::Holiday),
            event(12, 0, PunchKind::Exit, DayType::Holiday),
        ];
        assert!(propose(&events).is_empty());
    }

    #[test]
    fn test_regular_morning_entry_window_is_one_sided() {
        // Early arrival inside [06:15, 07:00) snaps forward to 07:00.
        let inside = vec![event(6, 20, PunchKind::Entry, DayType::Regular)];
        let candidates = propose(&inside);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target_time, clock(7, 0));

        // 07:00 itself and anything later never snaps.
        assert!(propose(&[event(7, 0, PunchKind::Entry, DayType::Regular)]).is_empty());
        assert!(propose(&[event(7, 10, PunchKind::Entry, DayType::Regular)]).is_empty());
        // Too early.
        assert!(propose(&[event(6, 14, PunchKind::Entry, DayType::Regular)]).is_empty());
    }

    #[test]
    fn test_regular_morning_exit_window_is_one_sided() {
        // Late departure inside (15:00, 15:15] snaps back to 15:00.
        let candidates = propose(&[event(15, 10, PunchKind::Exit, DayType::Regular)]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target_time, clock(15, 0));

        // Early departures are deviations, not adjustments.
        assert!(propose(&[event(14, 50, PunchKind::Exit, DayType::Regular)]).is_empty());
        assert!(propose(&[event(15, 0, PunchKind::Exit, DayType::Regular)]).is_empty());
        assert!(propose(&[event(15, 16, PunchKind::Exit, DayType::Regular)]).is_empty());
    }

    #[test]
    fn test_regular_afternoon_windows() {
        let mut entry = event(14, 30, PunchKind::Entry, DayType::Regular);
        entry.shift_label = Some("afternoon".to_string());
        let candidates = propose(std::slice::from_ref(&entry));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target_time, clock(15, 0));

        let exit = event(23, 5, PunchKind::Exit, DayType::Regular);
        let candidates = propose(std::slice::from_ref(&exit));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].target_time, clock(23, 0));
    }

    #[test]
    fn test_assignment_map_overrides_inference() {
        let mut assignments = HashMap::new();
        assignments.insert("emp_001".to_string(), ShiftKind::Afternoon);
        // 06:20 would infer morning, but the assignment says afternoon, and
        // 06:20 is outside every afternoon window.
        let events = vec![event(6, 20, PunchKind::Entry, DayType::Regular)];
        assert!(propose_adjustments(&events, &assignments, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_excluded_employee_is_exempt() {
        let mut excluded = HashSet::new();
        excluded.insert("emp_001".to_string());
        let events = vec![event(6, 20, PunchKind::Entry, DayType::Regular)];
        assert!(propose_adjustments(&events, &HashMap::new(), &excluded).is_empty());
    }

    #[test]
    fn test_unresolvable_shift_yields_no_candidate() {
        // 03:00 entry: no assignment, no label, no inference window.
        let events = vec![event(3, 0, PunchKind::Entry, DayType::Regular)];
        assert!(propose(&events).is_empty());
    }

    #[test]
    fn test_apply_rewrites_only_selected_times() {
        let events = vec![
            event(6, 20, PunchKind::Entry, DayType::Regular),
            event(15, 10, PunchKind::Exit, DayType::Regular),
        ];
        let candidates = propose(&events);
        assert_eq!(candidates.len(), 2);

        // Apply only the entry correction.
        let applied = apply_adjustments(&events, &candidates[..1]);
        assert_eq!(applied[0].time, clock(7, 0));
        assert_eq!(applied[1].time, clock(15, 10));
        // Everything else is untouched.
        assert_eq!(applied[0].employee_id, events[0].employee_id);
        assert_eq!(applied[0].day_type, events[0].day_type);
        // Originals are unmodified.
        assert_eq!(events[0].time, clock(6, 20));
    }

    #[test]
    fn test_apply_with_no_selection_is_identity() {
        let events = vec![event(6, 20, PunchKind::Entry, DayType::Regular)];
        let applied = apply_adjustments(&events, &[]);
        assert_eq!(applied, events);
    }
}
