//! Data models for the Attendance Reconciliation Engine.
//!
//! This module contains the input shapes (punch events, roster metadata,
//! justified intervals) and the derived output shapes (time slices,
//! anomalies, adjustment candidates, processed employee records).

mod adjustment;
mod anomaly;
mod justification;
mod punch;
mod record;
mod schedule;
mod timeslice;

pub use adjustment::AdjustmentCandidate;
pub use anomaly::{ShiftChange, UnjustifiedGap, WorkdayDeviation};
pub use justification::{JustifiedInterval, SPECIAL_TASK_MOTIVE_ID, SPECIAL_TASK_TOKEN};
pub use punch::{DayType, PunchKind, RawPunchEvent};
pub use record::{DaySlices, ProcessedEmployeeRecord, SpecialTaskSummary};
pub use schedule::{EmployeeProfile, ShiftKind, ShiftWindow};
pub use timeslice::TimeSlice;
