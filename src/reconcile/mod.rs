//! The reconciliation pipeline.
//!
//! This module contains the deterministic rules of the engine: time
//! canonicalization, punch consolidation into time slices, anomaly
//! detection, justification reconciliation with stable incident keys, hour
//! aggregation, and tolerance-window punch normalization.

mod aggregate;
mod anomalies;
mod consolidate;
mod incident_key;
mod justified;
mod normalize;
mod parse;
mod shift_resolution;

pub use aggregate::{process_employee, process_period, EmployeeInput, PeriodContext};
pub use anomalies::{detect_anomalies, is_absent, DayAnomalies};
pub use consolidate::{consolidate_day, presence_minutes, ConsolidatedDay};
pub use incident_key::{deviation_key, deviation_key_for, gap_key, gap_key_for};
pub use justified::{compute_justified_hours, inferred_hours, special_task_summary};
pub use normalize::{apply_adjustments, propose_adjustments};
pub use parse::{canonical_date, canonical_time, parse_date, parse_time};
pub use shift_resolution::{
    resolve_shift, AssignmentResolver, InferenceResolver, LabelResolver, ShiftResolver,
};
