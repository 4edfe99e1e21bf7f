//! Configuration types for the reconciliation policy.
//!
//! Detection tolerances and the canonical shift table are configurable; the
//! snapping window boundaries in the punch-time normalizer are deliberately
//! not. Those literal minutes are attendance policy and live as constants
//! next to the normalizer.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{ShiftKind, ShiftWindow};

/// The canonical shift table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTable {
    /// Clock boundaries of the morning shift.
    pub morning: ShiftWindow,
    /// Clock boundaries of the afternoon shift.
    pub afternoon: ShiftWindow,
}

impl ShiftTable {
    /// Returns the clock window for the given shift.
    pub fn window(&self, kind: ShiftKind) -> ShiftWindow {
        match kind {
            ShiftKind::Morning => self.morning,
            ShiftKind::Afternoon => self.afternoon,
        }
    }
}

impl Default for ShiftTable {
    fn default() -> Self {
        Self {
            morning: ShiftWindow {
                start: clock(7, 0),
                end: clock(15, 0),
            },
            afternoon: ShiftWindow {
                start: clock(15, 0),
                end: clock(23, 0),
            },
        }
    }
}

/// Tunable policy knobs for anomaly detection.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.min_gap_minutes, 1);
/// assert_eq!(config.deviation_tolerance_minutes, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Gaps shorter than this many minutes are not reported.
    #[serde(default = "default_min_gap_minutes")]
    pub min_gap_minutes: i64,
    /// Boundary differences within this many minutes are not recorded as
    /// workday deviations.
    #[serde(default = "default_deviation_tolerance_minutes")]
    pub deviation_tolerance_minutes: i64,
    /// The canonical shift table.
    #[serde(default)]
    pub shifts: ShiftTable,
}

fn default_min_gap_minutes() -> i64 {
    1
}

fn default_deviation_tolerance_minutes() -> i64 {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_gap_minutes: default_min_gap_minutes(),
            deviation_tolerance_minutes: default_deviation_tolerance_minutes(),
            shifts: ShiftTable::default(),
        }
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid clock time")
}
