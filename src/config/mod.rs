//! Configuration for the Attendance Reconciliation Engine.
//!
//! Provides the tunable reconciliation policy (detection tolerances, shift
//! table) and a YAML loader with graceful defaults.

mod loader;
mod types;

pub use types::{EngineConfig, ShiftTable};
