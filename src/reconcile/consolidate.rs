//! Interval consolidation: raw punches to worked time slices.
//!
//! Pairs each entry punch with the next chronological exit on the same day.
//! The pairing is deterministic: events are stably sorted by time, so ties
//! keep their original feed order.

use tracing::{debug, warn};

use crate::models::{PunchKind, RawPunchEvent, TimeSlice};

/// The consolidated worked intervals of one employee on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedDay {
    /// Ordered, non-overlapping worked intervals.
    pub slices: Vec<TimeSlice>,
    /// True when at least one entry had no matching exit.
    pub missing_clock_out: bool,
}

/// Consolidates one day's punch events into ordered time slices.
///
/// Policy:
/// - events are stably sorted by time of day before pairing;
/// - an entry with no following exit yields an open slice flagged
///   `missing_exit` rather than being silently dropped;
/// - an exit with no open entry is skipped (best effort, biased toward
///   under-flagging);
/// - a second entry while one is still open closes the first as an open
///   slice and starts pairing from the new one.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DayType, PunchKind, RawPunchEvent};
/// use attendance_engine::reconcile::consolidate_day;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let punch = |h, m, kind| RawPunchEvent {
///     employee_id: "emp_001".to_string(),
///     date,
///     time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
///     kind,
///     motive_code: 0,
///     day_type: DayType::Regular,
///     shift_label: None,
/// };
///
/// let events = vec![
///     punch(7, 0, PunchKind::Entry),
///     punch(15, 0, PunchKind::Exit),
/// ];
/// let day = consolidate_day(&events);
/// assert_eq!(day.slices.len(), 1);
/// assert_eq!(day.slices[0].duration_minutes(), 480);
/// assert!(!day.missing_clock_out);
/// ```
pub fn consolidate_day(events: &[RawPunchEvent]) -> ConsolidatedDay {
    let mut ordered: Vec<&RawPunchEvent> = events.iter().collect();
    ordered.sort_by_key(|e| e.time);

    let mut slices = Vec::new();
    let mut missing_clock_out = false;
    let mut pending_entry: Option<chrono::NaiveTime> = None;

    for event in ordered {
        match event.kind {
            PunchKind::Entry => {
                if let Some(start) = pending_entry.take() {
                    debug!(
                        employee_id = %event.employee_id,
                        date = %event.date,
                        "entry while another entry is open, closing the first as missing exit"
                    );
                    slices.push(TimeSlice::open(start));
                    missing_clock_out = true;
                }
                pending_entry = Some(event.time);
            }
            PunchKind::Exit => match pending_entry.take() {
                Some(start) => slices.push(TimeSlice::closed(start, event.time)),
                None => warn!(
                    employee_id = %event.employee_id,
                    date = %event.date,
                    time = %event.time,
                    "exit punch with no open entry, skipping"
                ),
            },
        }
    }

    if let Some(start) = pending_entry {
        slices.push(TimeSlice::open(start));
        missing_clock_out = true;
    }

    ConsolidatedDay {
        slices,
        missing_clock_out,
    }
}

/// Sums the raw presence minutes of a day's slices.
///
/// Only real (non-synthetic) slices count: synthetic slices exist for
/// reporting continuity and contribute to justified or derived totals only.
/// Open slices contribute zero by construction.
pub fn presence_minutes(slices: &[TimeSlice]) -> i64 {
    slices
        .iter()
        .filter(|s| !s.is_synthetic)
        .map(TimeSlice::duration_minutes)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayType;
    use chrono::{NaiveDate, NaiveTime};

    fn punch(h: u32, m: u32, kind: PunchKind) -> RawPunchEvent {
        RawPunchEvent {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            kind,
            motive_code: 0,
            day_type: DayType::Regular,
            shift_label: None,
        }
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_single_pair_yields_one_slice() {
        let events = vec![punch(7, 0, PunchKind::Entry), punch(15, 0, PunchKind::Exit)];
        let day = consolidate_day(&events);
        assert_eq!(day.slices, vec![TimeSlice::closed(time(7, 0), time(15, 0))]);
        assert!(!day.missing_clock_out);
    }

    #[test]
    fn test_two_pairs_yield_ordered_slices() {
        let events = vec![
            punch(7, 0, PunchKind::Entry),
            punch(11, 0, PunchKind::Exit),
            punch(12, 0, PunchKind::Entry),
            punch(15, 0, PunchKind::Exit),
        ];
        let day = consolidate_day(&events);
        assert_eq!(day.slices.len(), 2);
        assert_eq!(day.slices[0].end, time(11, 0));
        assert_eq!(day.slices[1].start, time(12, 0));
    }

    #[test]
    fn test_out_of_order_events_are_sorted_first() {
        let events = vec![
            punch(15, 0, PunchKind::Exit),
            punch(12, 0, PunchKind::Entry),
            punch(11, 0, PunchKind::Exit),
            punch(7, 0, PunchKind::Entry),
        ];
        let day = consolidate_day(&events);
        assert_eq!(day.slices.len(), 2);
        assert_eq!(day.slices[0].start, time(7, 0));
        assert_eq!(day.slices[0].end, time(11, 0));
        assert!(!day.missing_clock_out);
    }

    #[test]
    fn test_trailing_entry_becomes_open_slice() {
        let events = vec![
            punch(7, 0, PunchKind::Entry),
            punch(11, 0, PunchKind::Exit),
            punch(12, 0, PunchKind::Entry),
        ];
        let day = consolidate_day(&events);
        assert_eq!(day.slices.len(), 2);
        assert!(day.slices[1].missing_exit);
        assert_eq!(day.slices[1].start, time(12, 0));
        assert!(day.missing_clock_out);
    }

    #[test]
    fn test_stray_exit_is_skipped() {
        let events = vec![
            punch(6, 0, PunchKind::Exit),
            punch(7, 0, PunchKind::Entry),
            punch(15, 0, PunchKind::Exit),
        ];
        let day = consolidate_day(&events);
        assert_eq!(day.slices.len(), 1);
        assert_eq!(day.slices[0].start, time(7, 0));
        assert!(!day.missing_clock_out);
    }

    #[test]
    fn test_double_entry_closes_first_as_open() {
        let events = vec![
            punch(7, 0, PunchKind::Entry),
            punch(8, 0, PunchKind::Entry),
            punch(15, 0, PunchKind::Exit),
        ];
        let day = consolidate_day(&events);
        assert_eq!(day.slices.len(), 2);
        assert!(day.slices[0].missing_exit);
        assert_eq!(day.slices[1].start, time(8, 0));
        assert_eq!(day.slices[1].end, time(15, 0));
        assert!(day.missing_clock_out);
    }

    #[test]
    fn test_empty_day() {
        let day = consolidate_day(&[]);
        assert!(day.slices.is_empty());
        assert!(!day.missing_clock_out);
    }

    #[test]
    fn test_presence_minutes_skips_synthetic_and_open() {
        let mut synthetic = TimeSlice::closed(time(9, 0), time(10, 0));
        synthetic.is_synthetic = true;
        let slices = vec![
            TimeSlice::closed(time(7, 0), time(9, 0)),
            synthetic,
            TimeSlice::open(time(12, 0)),
        ];
        assert_eq!(presence_minutes(&slices), 120);
    }

    #[test]
    fn test_slices_are_non_overlapping_and_ordered() {
        let events = vec![
            punch(7, 0, PunchKind::Entry),
            punch(11, 0, PunchKind::Exit),
            punch(11, 30, PunchKind::Entry),
            punch(15, 0, PunchKind::Exit),
        ];
        let day = consolidate_day(&events);
        for pair in day.slices.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
