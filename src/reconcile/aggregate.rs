//! Per-employee period aggregation.
//!
//! Runs the full reconciliation pipeline for one employee over one analyzed
//! period: consolidation, anomaly detection, incident suppression,
//! justification merge, and the hour roll-ups. The result is a fresh
//! [`ProcessedEmployeeRecord`] on every call; inputs are never mutated.
//!
//! All minute accumulation happens in integers; conversion to decimal hours
//! and the 2-decimal rounding happen exactly once, here.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DayType, DaySlices, EmployeeProfile, JustifiedInterval, ProcessedEmployeeRecord,
    RawPunchEvent, ShiftChange, ShiftKind,
};

use super::anomalies::{detect_anomalies, is_absent};
use super::consolidate::{consolidate_day, presence_minutes};
use super::incident_key::{deviation_key_for, gap_key_for};
use super::justified::{compute_justified_hours, minutes_to_hours, special_task_summary};

/// The analyzed date range plus the company holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodContext {
    start: NaiveDate,
    end: NaiveDate,
    holidays: HashSet<NaiveDate>,
}

impl PeriodContext {
    /// Creates a period over the inclusive `[start, end]` date range.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        holidays: HashSet<NaiveDate>,
    ) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidPeriod {
                message: format!("end date {end} precedes start date {start}"),
            });
        }
        Ok(Self {
            start,
            end,
            holidays,
        })
    }

    /// Iterates every date in the period, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Returns true when the date is a company holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}

/// Everything the engine needs for one employee in one period.
///
/// All of it is owned by external stores (time-clock feed, justification
/// provider, vacation calendar); the engine only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeInput {
    /// Roster metadata for the employee.
    pub profile: EmployeeProfile,
    /// The employee's raw punches within the period.
    pub events: Vec<RawPunchEvent>,
    /// The employee's justified intervals within the period.
    pub justified: Vec<JustifiedInterval>,
    /// Authoritative justified-hours figure computed by the external system.
    pub base_justified_hours: f64,
    /// Dates of the employee's registered vacation.
    pub vacation_dates: HashSet<NaiveDate>,
}

/// Reconciles one employee's period into a processed record.
///
/// `incident_map` is the caller-held store of already-justified incidents,
/// keyed by the stable gap/deviation keys; anomalies found there are
/// suppressed. The function is a pure computation: the same inputs always
/// produce the same record.
pub fn process_employee(
    input: &EmployeeInput,
    incident_map: &HashMap<String, i32>,
    period: &PeriodContext,
    config: &EngineConfig,
) -> ProcessedEmployeeRecord {
    let profile = &input.profile;
    let schedule = profile
        .assigned_shift
        .map(|kind| config.shifts.window(kind));

    let mut events_by_day: BTreeMap<NaiveDate, Vec<RawPunchEvent>> = BTreeMap::new();
    for event in &input.events {
        events_by_day.entry(event.date).or_default().push(event.clone());
    }
    let mut justified_by_day: BTreeMap<NaiveDate, Vec<JustifiedInterval>> = BTreeMap::new();
    for interval in &input.justified {
        justified_by_day
            .entry(interval.date)
            .or_default()
            .push(interval.clone());
    }

    let mut presence_min: i64 = 0;
    let mut excess_min: i64 = 0;
    let mut holiday_min: i64 = 0;
    let mut absent_days = Vec::new();
    let mut missing_clock_outs = Vec::new();
    let mut unjustified_gaps = Vec::new();
    let mut workday_deviations = Vec::new();
    let mut time_slices = Vec::new();
    let mut vacation_conflicts = Vec::new();
    let mut shift_changes = Vec::new();

    let empty_events: Vec<RawPunchEvent> = Vec::new();
    let empty_justified: Vec<JustifiedInterval> = Vec::new();

    for date in period.days() {
        let day_events = events_by_day.get(&date).unwrap_or(&empty_events);
        let day_justified = justified_by_day.get(&date).unwrap_or(&empty_justified);

        let is_holiday = period.is_holiday(date)
            || day_events.iter().any(|e| e.day_type == DayType::Holiday);
        let day_type = if is_holiday {
            DayType::Holiday
        } else if input.vacation_dates.contains(&date) {
            DayType::Vacation
        } else {
            DayType::Regular
        };

        if day_events.is_empty() {
            if is_absent(
                date,
                day_type,
                &profile.working_weekdays,
                schedule.is_some(),
                0,
                day_justified.len(),
            ) {
                absent_days.push(date);
            }
            continue;
        }

        if input.vacation_dates.contains(&date) {
            vacation_conflicts.push(date);
        }
        if let Some(change) = shift_change_for(date, day_events, profile.assigned_shift) {
            shift_changes.push(change);
        }

        let day = consolidate_day(day_events);
        let worked_min = presence_minutes(&day.slices);
        presence_min += worked_min;

        if is_holiday {
            holiday_min += worked_min;
        } else if let Some(window) = schedule {
            excess_min += (worked_min - window.expected_minutes()).max(0);
        }

        let anomalies = detect_anomalies(date, &day, schedule, day_justified, config);

        for gap in anomalies.gaps {
            if !incident_map.contains_key(&gap_key_for(&profile.employee_id, &gap)) {
                unjustified_gaps.push(gap);
            }
        }
        if anomalies.missing_clock_out {
            missing_clock_outs.push(date);
        }
        if let Some(deviation) = anomalies.deviation {
            if !incident_map.contains_key(&deviation_key_for(&profile.employee_id, &deviation)) {
                workday_deviations.push(deviation);
            }
        }

        if !day.slices.is_empty() {
            time_slices.push(DaySlices {
                date,
                slices: day.slices,
            });
        }
    }

    let presence_hours = minutes_to_hours(presence_min).round_dp(2);
    let justified_hours = compute_justified_hours(input.base_justified_hours, &input.justified);
    let special_task = special_task_summary(&input.justified);
    let total_hours = (presence_hours + justified_hours + special_task.hours).round_dp(2);

    debug!(
        employee_id = %profile.employee_id,
        presence = %presence_hours,
        justified = %justified_hours,
        gaps = unjustified_gaps.len(),
        absences = absent_days.len(),
        "employee period reconciled"
    );

    ProcessedEmployeeRecord {
        employee_id: profile.employee_id.clone(),
        name: profile.name.clone(),
        assigned_shift: profile.assigned_shift,
        presence_hours,
        justified_hours,
        excess_hours: minutes_to_hours(excess_min).round_dp(2),
        holiday_hours: minutes_to_hours(holiday_min).round_dp(2),
        special_task,
        total_hours,
        absent_days,
        missing_clock_outs,
        unjustified_gaps,
        workday_deviations,
        justified_intervals: input.justified.clone(),
        time_slices,
        vacation_conflicts,
        shift_changes,
    }
}

/// Reconciles a whole batch of employees for the period.
///
/// Per-employee work is independent; the output ordering is produced by an
/// explicit sort (name, then employee id), never by arrival order.
pub fn process_period(
    inputs: &[EmployeeInput],
    incident_map: &HashMap<String, i32>,
    period: &PeriodContext,
    config: &EngineConfig,
) -> Vec<ProcessedEmployeeRecord> {
    let mut records: Vec<ProcessedEmployeeRecord> = inputs
        .iter()
        .map(|input| process_employee(input, incident_map, period, config))
        .collect();
    records.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
    records
}

/// Returns the day's shift change, if any punch carries a label that does
/// not match the assigned shift.
fn shift_change_for(
    date: NaiveDate,
    day_events: &[RawPunchEvent],
    assigned: Option<ShiftKind>,
) -> Option<ShiftChange> {
    let assigned = assigned?;
    day_events
        .iter()
        .filter_map(|e| e.shift_label.as_deref())
        .find(|label| ShiftKind::from_label(label) != Some(assigned))
        .map(|label| ShiftChange {
            date,
            shift_label: label.to_string(),
        })
}
