//! Anomaly detection over consolidated time slices.
//!
//! Derives unjustified gaps, missing clock-outs, total absences, and
//! workday-start/end deviations from a day's slices against the employee's
//! expected schedule. Every anomaly kind is computed independently; a day
//! can carry several at once.
//!
//! Missing schedule metadata degrades gracefully: schedule-relative gaps,
//! absences, and deviations are skipped rather than guessed, biasing toward
//! under-flagging.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::config::EngineConfig;
use crate::models::{
    DayType, JustifiedInterval, ShiftWindow, TimeSlice, UnjustifiedGap, WorkdayDeviation,
};

use super::consolidate::ConsolidatedDay;

/// All anomalies detected on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayAnomalies {
    /// Gaps not covered by any justified interval.
    pub gaps: Vec<UnjustifiedGap>,
    /// True when an entry has no matching exit and no justification covers
    /// the open remainder of the day.
    pub missing_clock_out: bool,
    /// Boundary deviation from the assigned shift, if beyond tolerance.
    pub deviation: Option<WorkdayDeviation>,
}

/// Detects gaps, missing clock-outs, and boundary deviations for one day.
///
/// Gap spans are taken between the schedule start and the first slice,
/// between consecutive slices, and between the last slice and the schedule
/// end. Each span has the overlapping justified intervals subtracted
/// (splitting it when an interval sits in the middle); what survives below
/// `min_gap_minutes` is dropped. Without a schedule only inter-slice gaps
/// are considered. The trailing span is skipped on missing-clock-out days:
/// the open remainder is that anomaly, not a gap.
pub fn detect_anomalies(
    date: NaiveDate,
    day: &ConsolidatedDay,
    schedule: Option<ShiftWindow>,
    justified: &[JustifiedInterval],
    config: &EngineConfig,
) -> DayAnomalies {
    let spans: Vec<(i64, i64, bool)> = day
        .slices
        .iter()
        .map(|s| {
            let (start, end) = slice_span(s);
            (start, end, s.missing_exit)
        })
        .collect();

    let mut candidates: Vec<(i64, i64)> = Vec::new();

    if let Some(window) = schedule {
        let sched_start = minute_of_day(window.start);
        // Analysis is per calendar day; a rollover schedule is clamped at
        // the last minute of the day.
        let sched_end = day_end_minute(window.start, window.expected_minutes());

        if let Some(first) = spans.first() {
            if first.0 > sched_start {
                candidates.push((sched_start, first.0.min(sched_end)));
            }
        }
        if let Some(last) = spans.last() {
            if !day.missing_clock_out && last.1 < sched_end {
                candidates.push((last.1.max(sched_start), sched_end));
            }
        }
    }

    for pair in spans.windows(2) {
        // After an open slice the worked extent is unknown; only a closed
        // slice bounds a gap on its right.
        if !pair[0].2 && pair[1].0 > pair[0].1 {
            candidates.push((pair[0].1, pair[1].0));
        }
    }
    candidates.sort_unstable();

    let blocks: Vec<(i64, i64)> = justified.iter().map(justified_span).collect();

    let mut gaps = Vec::new();
    for candidate in candidates {
        for (start, end) in subtract_spans(candidate, &blocks) {
            if end - start >= config.min_gap_minutes {
                gaps.push(UnjustifiedGap {
                    date,
                    start: to_time(start),
                    end: to_time(end),
                });
            }
        }
    }

    DayAnomalies {
        gaps,
        missing_clock_out: unresolved_missing_clock_out(day, schedule, justified),
        deviation: detect_deviation(date, day, schedule, config),
    }
}

/// Returns true when the day counts as a total absence.
///
/// Only fully-expected working days qualify: the employee must have a known
/// schedule, the day must be a regular working weekday for them, and there
/// must be neither punches nor justified intervals. Without schedule
/// metadata the day is conservatively treated as not absent.
pub fn is_absent(
    date: NaiveDate,
    day_type: DayType,
    working_weekdays: &[Weekday],
    has_schedule: bool,
    punch_count: usize,
    justified_count: usize,
) -> bool {
    has_schedule
        && day_type == DayType::Regular
        && working_weekdays.contains(&date.weekday())
        && punch_count == 0
        && justified_count == 0
}

fn unresolved_missing_clock_out(
    day: &ConsolidatedDay,
    schedule: Option<ShiftWindow>,
    justified: &[JustifiedInterval],
) -> bool {
    if !day.missing_clock_out {
        return false;
    }
    let Some(open_start) = day
        .slices
        .iter()
        .filter(|s| s.missing_exit)
        .map(|s| minute_of_day(s.start))
        .max()
    else {
        return false;
    };
    let day_end = schedule
        .map(|w| day_end_minute(w.start, w.expected_minutes()))
        .unwrap_or(24 * 60 - 1);

    let covered = justified.iter().any(|j| {
        let (start, end) = justified_span(j);
        start <= open_start && end >= day_end
    });
    !covered
}

fn detect_deviation(
    date: NaiveDate,
    day: &ConsolidatedDay,
    schedule: Option<ShiftWindow>,
    config: &EngineConfig,
) -> Option<WorkdayDeviation> {
    let window = schedule?;
    let first = day.slices.first()?;
    let last_closed = day.slices.iter().rev().find(|s| !s.missing_exit)?;

    let start_drift = (minute_of_day(first.start) - minute_of_day(window.start)).abs();
    let end_drift = (minute_of_day(last_closed.end) - minute_of_day(window.end)).abs();

    if start_drift > config.deviation_tolerance_minutes
        || end_drift > config.deviation_tolerance_minutes
    {
        Some(WorkdayDeviation {
            date,
            expected_start: window.start,
            expected_end: window.end,
            actual_start: first.start,
            actual_end: last_closed.end,
        })
    } else {
        None
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    time.signed_duration_since(NaiveTime::MIN).num_minutes()
}

/// End of the schedule within the analyzed day, clamped to its last minute.
/// Shared by the gap and clock-out-coverage math so both agree on where the
/// day ends.
fn day_end_minute(start: NaiveTime, expected_minutes: i64) -> i64 {
    (minute_of_day(start) + expected_minutes).min(24 * 60 - 1)
}

fn to_time(minute: i64) -> NaiveTime {
    let clamped = minute.clamp(0, 24 * 60 - 1);
    NaiveTime::from_hms_opt((clamped / 60) as u32, (clamped % 60) as u32, 0)
        .expect("minute of day in range")
}

fn slice_span(slice: &TimeSlice) -> (i64, i64) {
    let start = minute_of_day(slice.start);
    (start, (start + slice.duration_minutes()).min(24 * 60))
}

fn justified_span(interval: &JustifiedInterval) -> (i64, i64) {
    let start = minute_of_day(interval.start);
    (start, (start + interval.duration_minutes()).min(24 * 60))
}

/// Removes every blocked span from a candidate gap, splitting it as needed.
fn subtract_spans(gap: (i64, i64), blocks: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut remaining = vec![gap];
    for &(block_start, block_end) in blocks {
        let mut next = Vec::new();
        for (start, end) in remaining {
            if block_end <= start || block_start >= end {
                next.push((start, end));
                continue;
            }
            if block_start > start {
                next.push((start, block_start));
            }
            if block_end < end {
                next.push((block_end, end));
            }
        }
        remaining = next;
    }
    remaining
}
