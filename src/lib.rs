//! Attendance Reconciliation Engine.
//!
//! This crate normalizes raw punch-clock events into canonical worked
//! intervals, detects attendance anomalies against an expected schedule,
//! reconciles them with externally registered justifications, and rolls the
//! result up into per-employee period aggregates. It also proposes
//! tolerance-window corrections ("snapping") of punch times to canonical
//! shift boundaries for bulk adjustment workflows.
//!
//! The engine is a pure, synchronous computation over in-memory snapshots:
//! it never mutates its inputs and performs no I/O beyond configuration
//! loading, so it is safe to invoke repeatedly and concurrently for
//! different employees and periods.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod reconcile;
