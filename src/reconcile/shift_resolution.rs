//! Shift resolution strategies.
//!
//! The shift an event belongs to is resolved by an ordered chain of
//! strategies, first non-empty answer wins: the explicit per-employee
//! assignment map, then the event's own shift label, then a time-of-day
//! inference. Missing roster metadata thus degrades to inference instead of
//! failing.

use std::collections::HashMap;

use crate::models::{PunchKind, RawPunchEvent, ShiftKind};

/// A single strategy in the shift-resolution chain.
pub trait ShiftResolver {
    /// Attempts to resolve the shift for the event; `None` falls through to
    /// the next strategy.
    fn resolve(&self, event: &RawPunchEvent) -> Option<ShiftKind>;
}

/// Resolves from the explicit per-employee assignment map.
pub struct AssignmentResolver<'a> {
    assignments: &'a HashMap<String, ShiftKind>,
}

impl<'a> AssignmentResolver<'a> {
    /// Creates a resolver over the given assignment map.
    pub fn new(assignments: &'a HashMap<String, ShiftKind>) -> Self {
        Self { assignments }
    }
}

impl ShiftResolver for AssignmentResolver<'_> {
    fn resolve(&self, event: &RawPunchEvent) -> Option<ShiftKind> {
        self.assignments.get(&event.employee_id).copied()
    }
}

/// Resolves from the shift label carried by the event itself.
pub struct LabelResolver;

impl ShiftResolver for LabelResolver {
    fn resolve(&self, event: &RawPunchEvent) -> Option<ShiftKind> {
        event.shift_label.as_deref().and_then(ShiftKind::from_label)
    }
}

/// Infers the shift from the time of day of the punch.
///
/// Entries between 05:00 and 10:59 read as morning, between 13:00 and 16:59
/// as afternoon. Exits between 13:00 and 16:59 read as morning, from 21:00
/// onward as afternoon. Anything else stays unresolved.
pub struct InferenceResolver;

impl ShiftResolver for InferenceResolver {
    fn resolve(&self, event: &RawPunchEvent) -> Option<ShiftKind> {
        let hour = chrono::Timelike::hour(&event.time);
        match event.kind {
            PunchKind::Entry => match hour {
                5..=10 => Some(ShiftKind::Morning),
                13..=16 => Some(ShiftKind::Afternoon),
                _ => None,
            },
            PunchKind::Exit => match hour {
                13..=16 => Some(ShiftKind::Morning),
                21..=23 => Some(ShiftKind::Afternoon),
                _ => None,
            },
        }
    }
}

/// Resolves the shift for an event by walking the strategy chain.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DayType, PunchKind, RawPunchEvent, ShiftKind};
/// use attendance_engine::reconcile::resolve_shift;
/// use chrono::{NaiveDate, NaiveTime};
/// use std::collections::HashMap;
///
/// let event = RawPunchEvent {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     time: NaiveTime::from_hms_opt(6, 45, 0).unwrap(),
///     kind: PunchKind::Entry,
///     motive_code: 0,
///     day_type: DayType::Regular,
///     shift_label: None,
/// };
/// // No assignment, no label: the 06:45 entry is inferred as morning.
/// assert_eq!(
///     resolve_shift(&HashMap::new(), &event),
///     Some(ShiftKind::Morning)
/// );
/// ```
pub fn resolve_shift(
    assignments: &HashMap<String, ShiftKind>,
    event: &RawPunchEvent,
) -> Option<ShiftKind> {
    let assignment = AssignmentResolver::new(assignments);
    let resolvers: [&dyn ShiftResolver; 3] = [&assignment, &LabelResolver, &InferenceResolver];
    resolvers.iter().find_map(|r| r.resolve(event))
}
