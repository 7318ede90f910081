//! Conflict detection over the roster matrix.
//!
//! Flags cells whose member is unavailable for the event's date and
//! session, or holds more than one slot of the same event. Detection is
//! read-only and exists for UI signaling: the auto-fill pass avoids
//! creating such conflicts itself, so anything reported here was
//! introduced by an administrator — and admin intent is never repaired
//! automatically.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{AvailabilityIndex, Event, RosterMatrix};

/// Classification of cell conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The assigned member is unavailable for the event's date/session.
    MemberUnavailable,
    /// The member holds more than one slot of the same event.
    DoubleBooked,
}

/// One detected conflict, addressed to a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Kind of conflict.
    pub kind: ConflictKind,
    /// Event (row) of the affected cell.
    pub event_id: String,
    /// Slot (column) of the affected cell.
    pub slot_id: String,
    /// Member the cell assigns.
    pub member_id: String,
    /// Human-readable description.
    pub message: String,
}

impl Conflict {
    fn unavailable(event_id: &str, slot_id: &str, member_id: &str, reason: Option<&str>) -> Self {
        let message = match reason {
            Some(reason) => format!("'{member_id}' is unavailable ({reason})"),
            None => format!("'{member_id}' is unavailable on this date"),
        };
        Self {
            kind: ConflictKind::MemberUnavailable,
            event_id: event_id.to_string(),
            slot_id: slot_id.to_string(),
            member_id: member_id.to_string(),
            message,
        }
    }

    fn double_booked(event_id: &str, slot_id: &str, member_id: &str) -> Self {
        Self {
            kind: ConflictKind::DoubleBooked,
            event_id: event_id.to_string(),
            slot_id: slot_id.to_string(),
            member_id: member_id.to_string(),
            message: format!("'{member_id}' holds another slot of the same event"),
        }
    }
}

/// Read-only conflict detector over one roster snapshot.
///
/// Borrows the matrix, the availability index, and the event list;
/// nothing is mutated. Unknown event ids in the matrix yield no
/// findings (a cell that cannot be dated cannot be judged).
#[derive(Debug)]
pub struct ConflictDetector<'a> {
    matrix: &'a RosterMatrix,
    availability: &'a AvailabilityIndex,
    events: HashMap<&'a str, &'a Event>,
}

impl<'a> ConflictDetector<'a> {
    /// Creates a detector over the given snapshot.
    pub fn new(
        matrix: &'a RosterMatrix,
        availability: &'a AvailabilityIndex,
        events: &'a [Event],
    ) -> Self {
        Self {
            matrix,
            availability,
            events: events.iter().map(|e| (e.id.as_str(), e)).collect(),
        }
    }

    /// Whether the cell has any conflict. Empty cells never conflict.
    pub fn has_conflict(&self, event_id: &str, slot_id: &str) -> bool {
        !self.check_cell(event_id, slot_id).is_empty()
    }

    /// Conflicts for one cell, unavailability first.
    pub fn check_cell(&self, event_id: &str, slot_id: &str) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        let Some(cell) = self.matrix.cell(event_id, slot_id) else {
            return conflicts;
        };
        let Some(event) = self.events.get(event_id) else {
            return conflicts;
        };

        let session = event.effective_session();
        if self
            .availability
            .is_unavailable(&cell.member_id, event.date, session)
        {
            let reason = self
                .availability
                .reason_for(&cell.member_id, event.date, session);
            conflicts.push(Conflict::unavailable(
                event_id,
                slot_id,
                &cell.member_id,
                reason,
            ));
        }

        if self.matrix.occupancy_count(event_id, &cell.member_id) > 1 {
            conflicts.push(Conflict::double_booked(event_id, slot_id, &cell.member_id));
        }

        conflicts
    }

    /// Sweeps the whole matrix, sorted by (event, slot) for stable UI
    /// output.
    pub fn scan(&self) -> Vec<Conflict> {
        let mut keys: Vec<(&str, &str)> = self.matrix.iter().map(|(e, s, _)| (e, s)).collect();
        keys.sort_unstable();
        keys.into_iter()
            .flat_map(|(event_id, slot_id)| self.check_cell(event_id, slot_id))
            .collect()
    }
}
