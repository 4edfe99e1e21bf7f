//! Error types for the Attendance Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The reconciliation pipeline itself is deliberately infallible: malformed
//! but plausible input degrades to best-effort numbers rather than faults.
//! Only configuration loading and period validation can fail.

use thiserror::Error;

/// The main error type for the Attendance Reconciliation Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/reconciliation.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/reconciliation.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The analyzed period was invalid (e.g., end date before start date).
    #[error("Invalid period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
