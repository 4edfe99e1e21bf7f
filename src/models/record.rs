//! Processed employee record: the per-employee/period aggregate.
//!
//! This is the sole output feed for all display and export consumers. It is
//! a pure function of the raw inputs plus the caller-held justified-incident
//! map: every recomputation builds a fresh record, never mutates one in
//! place.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    JustifiedInterval, ShiftChange, ShiftKind, TimeSlice, UnjustifiedGap, WorkdayDeviation,
};

/// Count and hours of assigned-task intervals for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecialTaskSummary {
    /// Number of assigned-task intervals.
    pub count: u32,
    /// Total assigned-task hours, rounded to 2 decimals.
    pub hours: Decimal,
}

/// The consolidated slices of a single day, kept alongside their date for
/// export consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlices {
    /// The day the slices belong to.
    pub date: NaiveDate,
    /// Ordered, non-overlapping worked intervals for the day.
    pub slices: Vec<TimeSlice>,
}

/// Aggregate attendance result for one employee over one analyzed period.
///
/// All hour figures are rounded to 2 decimal places exactly once, at the
/// point of aggregation. Excess and holiday hours are additive components
/// reported alongside presence hours; they never reduce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEmployeeRecord {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// The shift the employee is rostered on, if any.
    pub assigned_shift: Option<ShiftKind>,
    /// Hours backed by real punch pairs.
    pub presence_hours: Decimal,
    /// Justified hours after the max-merge with the externally computed base.
    pub justified_hours: Decimal,
    /// Positive overshoot of worked time over the expected shift length.
    pub excess_hours: Decimal,
    /// Worked hours falling on company holidays.
    pub holiday_hours: Decimal,
    /// Assigned-task intervals, tracked separately from justification.
    pub special_task: SpecialTaskSummary,
    /// presence + justified + special-task hours, rounded to 2 decimals.
    pub total_hours: Decimal,
    /// Expected working days with no punches and no justification.
    pub absent_days: Vec<NaiveDate>,
    /// Days with an entry punch but no matching exit.
    pub missing_clock_outs: Vec<NaiveDate>,
    /// Detected gaps not covered by justification or a registered incident.
    pub unjustified_gaps: Vec<UnjustifiedGap>,
    /// Shift-boundary deviations not suppressed by a registered incident.
    pub workday_deviations: Vec<WorkdayDeviation>,
    /// The justification intervals considered for the period.
    pub justified_intervals: Vec<JustifiedInterval>,
    /// Consolidated worked intervals, day by day.
    pub time_slices: Vec<DaySlices>,
    /// Days with punches despite a registered vacation.
    pub vacation_conflicts: Vec<NaiveDate>,
    /// Days where the punch shift label differed from the assigned shift.
    pub shift_changes: Vec<ShiftChange>,
}
