//! Roster matrix (assignment grid) model.
//!
//! The matrix is the in-memory grid of events × role slots. A cell
//! holds at most one assignment; absence of a cell means the slot is
//! empty for that event. Occupancy per event and load per member are
//! maintained indices, kept in step with every write — the auto-fill
//! pass queries them once per candidate evaluation.
//!
//! # Pinning
//! Each cell carries a `manual` flag. `true` marks an assignment an
//! administrator explicitly set or confirmed; auto-fill must copy such
//! cells through untouched. No operation here ever flips
//! `manual: false → true` on its own — only [`RosterMatrix::assign`]
//! and [`RosterMatrix::toggle_manual`] change the flag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One filled cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCell {
    /// Assigned member.
    pub member_id: String,
    /// Whether an administrator pinned this assignment.
    pub manual: bool,
}

/// Serializable form of one cell, keyed explicitly.
///
/// The exchange format between the matrix and the caller's persistence
/// layer: a roster snapshot is a list of records plus the model lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Event (row) identifier.
    pub event_id: String,
    /// Slot (column) identifier.
    pub slot_id: String,
    /// Assigned member.
    pub member_id: String,
    /// Pin flag.
    pub manual: bool,
}

impl AssignmentRecord {
    /// Creates a new record.
    pub fn new(
        event_id: impl Into<String>,
        slot_id: impl Into<String>,
        member_id: impl Into<String>,
        manual: bool,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            slot_id: slot_id.into(),
            member_id: member_id.into(),
            manual,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CellKey {
    event_id: String,
    slot_id: String,
}

/// The assignment grid with maintained occupancy and load indices.
///
/// All cell operations are O(1) amortized. `occupants_of` and
/// `load_of` read the indices rather than rescanning the cell store.
#[derive(Debug, Clone, Default)]
pub struct RosterMatrix {
    cells: HashMap<CellKey, AssignmentCell>,
    /// event id → member id → number of slots held in that event.
    /// The count goes above 1 only through manual double-booking.
    occupancy: HashMap<String, HashMap<String, usize>>,
    /// member id → cells held across the whole matrix.
    load: HashMap<String, usize>,
}

impl RosterMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a matrix from persisted records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AssignmentRecord>,
    {
        let mut matrix = Self::new();
        for r in records {
            matrix.insert_cell(&r.event_id, &r.slot_id, &r.member_id, r.manual);
        }
        matrix
    }

    /// Extracts the cells as records, sorted by (event, slot) so that
    /// identical matrices always serialize identically.
    pub fn to_records(&self) -> Vec<AssignmentRecord> {
        let mut records: Vec<AssignmentRecord> = self
            .cells
            .iter()
            .map(|(key, cell)| {
                AssignmentRecord::new(&key.event_id, &key.slot_id, &cell.member_id, cell.manual)
            })
            .collect();
        records.sort_by(|a, b| {
            (a.event_id.as_str(), a.slot_id.as_str()).cmp(&(b.event_id.as_str(), b.slot_id.as_str()))
        });
        records
    }

    /// Pins a member to a cell (`manual = true`).
    ///
    /// Overwrites whatever the cell held. No conflict repair happens
    /// here: administrators may deliberately double-book.
    pub fn assign(&mut self, event_id: &str, slot_id: &str, member_id: &str) {
        self.insert_cell(event_id, slot_id, member_id, true);
    }

    /// Fills a cell as an auto assignment (`manual = false`).
    pub fn assign_auto(&mut self, event_id: &str, slot_id: &str, member_id: &str) {
        self.insert_cell(event_id, slot_id, member_id, false);
    }

    /// Empties a cell, returning what it held.
    pub fn remove(&mut self, event_id: &str, slot_id: &str) -> Option<AssignmentCell> {
        let key = CellKey {
            event_id: event_id.to_string(),
            slot_id: slot_id.to_string(),
        };
        let cell = self.cells.remove(&key)?;
        self.unindex(event_id, &cell.member_id);
        Some(cell)
    }

    /// Flips the pin flag on an existing cell.
    ///
    /// Returns `false` (and does nothing) when the cell is empty.
    pub fn toggle_manual(&mut self, event_id: &str, slot_id: &str) -> bool {
        let key = CellKey {
            event_id: event_id.to_string(),
            slot_id: slot_id.to_string(),
        };
        match self.cells.get_mut(&key) {
            Some(cell) => {
                cell.manual = !cell.manual;
                true
            }
            None => false,
        }
    }

    /// Reads a cell.
    pub fn cell(&self, event_id: &str, slot_id: &str) -> Option<&AssignmentCell> {
        let key = CellKey {
            event_id: event_id.to_string(),
            slot_id: slot_id.to_string(),
        };
        self.cells.get(&key)
    }

    /// Member ids filling any slot of the given event.
    pub fn occupants_of(&self, event_id: &str) -> impl Iterator<Item = &str> {
        self.occupancy
            .get(event_id)
            .into_iter()
            .flat_map(|members| members.keys().map(String::as_str))
    }

    /// Whether the member already holds a slot in the given event.
    #[inline]
    pub fn is_occupied(&self, event_id: &str, member_id: &str) -> bool {
        self.occupancy_count(event_id, member_id) > 0
    }

    /// How many slots of the given event the member holds.
    ///
    /// Above 1 only through manual double-booking.
    #[inline]
    pub fn occupancy_count(&self, event_id: &str, member_id: &str) -> usize {
        self.occupancy
            .get(event_id)
            .and_then(|members| members.get(member_id))
            .copied()
            .unwrap_or(0)
    }

    /// Cells held by the member across the whole matrix.
    #[inline]
    pub fn load_of(&self, member_id: &str) -> usize {
        self.load.get(member_id).copied().unwrap_or(0)
    }

    /// Removes every non-pinned cell and reports how many were removed.
    ///
    /// Performs no re-assignment; pinned cells stay untouched.
    pub fn clear_auto_assignments(&mut self) -> usize {
        let auto_keys: Vec<CellKey> = self
            .cells
            .iter()
            .filter(|(_, cell)| !cell.manual)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &auto_keys {
            if let Some(cell) = self.cells.remove(key) {
                self.unindex(&key.event_id, &cell.member_id);
            }
        }
        auto_keys.len()
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no filled cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over filled cells as (event id, slot id, cell).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &AssignmentCell)> {
        self.cells
            .iter()
            .map(|(key, cell)| (key.event_id.as_str(), key.slot_id.as_str(), cell))
    }

    fn insert_cell(&mut self, event_id: &str, slot_id: &str, member_id: &str, manual: bool) {
        let key = CellKey {
            event_id: event_id.to_string(),
            slot_id: slot_id.to_string(),
        };
        if let Some(previous) = self.cells.insert(
            key,
            AssignmentCell {
                member_id: member_id.to_string(),
                manual,
            },
        ) {
            self.unindex(event_id, &previous.member_id);
        }
        *self
            .occupancy
            .entry(event_id.to_string())
            .or_default()
            .entry(member_id.to_string())
            .or_insert(0) += 1;
        *self.load.entry(member_id.to_string()).or_insert(0) += 1;
    }

    fn unindex(&mut self, event_id: &str, member_id: &str) {
        if let Some(members) = self.occupancy.get_mut(event_id) {
            if let Some(count) = members.get_mut(member_id) {
                *count -= 1;
                if *count == 0 {
                    members.remove(member_id);
                }
            }
            if members.is_empty() {
                self.occupancy.remove(event_id);
            }
        }
        if let Some(count) = self.load.get_mut(member_id) {
            *count -= 1;
            if *count == 0 {
                self.load.remove(member_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_read() {
        let mut m = RosterMatrix::new();
        m.assign("E1", "S1", "U1");
        m.assign_auto("E1", "S2", "U2");

        let pinned = m.cell("E1", "S1").unwrap();
        assert_eq!(pinned.member_id, "U1");
        assert!(pinned.manual);

        let auto = m.cell("E1", "S2").unwrap();
        assert_eq!(auto.member_id, "U2");
        assert!(!auto.manual);

        assert_eq!(m.len(), 2);
        assert!(m.cell("E1", "S3").is_none());
    }

    #[test]
    fn test_overwrite_updates_indices() {
        let mut m = RosterMatrix::new();
        m.assign("E1", "S1", "U1");
        m.assign("E1", "S1", "U2");

        assert_eq!(m.cell("E1", "S1").unwrap().member_id, "U2");
        assert_eq!(m.load_of("U1"), 0);
        assert_eq!(m.load_of("U2"), 1);
        assert!(!m.is_occupied("E1", "U1"));
        assert!(m.is_occupied("E1", "U2"));
    }

    #[test]
    fn test_remove() {
        let mut m = RosterMatrix::new();
        m.assign("E1", "S1", "U1");

        let removed = m.remove("E1", "S1").unwrap();
        assert_eq!(removed.member_id, "U1");
        assert!(m.is_empty());
        assert_eq!(m.load_of("U1"), 0);
        assert!(m.remove("E1", "S1").is_none());
    }

    #[test]
    fn test_toggle_manual() {
        let mut m = RosterMatrix::new();
        m.assign_auto("E1", "S1", "U1");

        assert!(m.toggle_manual("E1", "S1"));
        assert!(m.cell("E1", "S1").unwrap().manual);
        assert!(m.toggle_manual("E1", "S1"));
        assert!(!m.cell("E1", "S1").unwrap().manual);
        // Empty cell: no effect.
        assert!(!m.toggle_manual("E1", "S9"));
    }

    #[test]
    fn test_occupants_and_load() {
        let mut m = RosterMatrix::new();
        m.assign_auto("E1", "S1", "U1");
        m.assign_auto("E1", "S2", "U2");
        m.assign_auto("E2", "S1", "U1");

        let mut occupants: Vec<&str> = m.occupants_of("E1").collect();
        occupants.sort_unstable();
        assert_eq!(occupants, ["U1", "U2"]);
        assert!(m.is_occupied("E2", "U1"));
        assert!(!m.is_occupied("E2", "U2"));
        assert_eq!(m.occupants_of("E9").count(), 0);

        assert_eq!(m.load_of("U1"), 2);
        assert_eq!(m.load_of("U2"), 1);
        assert_eq!(m.load_of("U9"), 0);
    }

    #[test]
    fn test_manual_double_booking_is_representable() {
        // Admins may pin the same member twice in one event; both slots
        // must keep their cells and the indices must survive removal of
        // either one.
        let mut m = RosterMatrix::new();
        m.assign("E1", "S1", "U1");
        m.assign("E1", "S2", "U1");

        assert_eq!(m.load_of("U1"), 2);
        assert!(m.is_occupied("E1", "U1"));

        m.remove("E1", "S1");
        assert_eq!(m.load_of("U1"), 1);
        assert!(m.is_occupied("E1", "U1"));

        m.remove("E1", "S2");
        assert!(!m.is_occupied("E1", "U1"));
    }

    #[test]
    fn test_clear_auto_assignments() {
        let mut m = RosterMatrix::new();
        m.assign("E1", "S1", "U1");
        m.assign_auto("E1", "S2", "U2");
        m.assign_auto("E2", "S1", "U3");

        let removed = m.clear_auto_assignments();
        assert_eq!(removed, 2);
        assert_eq!(m.len(), 1);
        assert!(m.cell("E1", "S1").unwrap().manual);
        assert_eq!(m.load_of("U2"), 0);
        assert_eq!(m.load_of("U3"), 0);

        // Nothing left to clear.
        assert_eq!(m.clear_auto_assignments(), 0);
    }

    #[test]
    fn test_records_round_trip() {
        let mut m = RosterMatrix::new();
        m.assign("E2", "S1", "U3");
        m.assign_auto("E1", "S2", "U2");
        m.assign_auto("E1", "S1", "U1");

        let records = m.to_records();
        // Sorted by (event, slot) for reproducible snapshots.
        assert_eq!(records[0].event_id, "E1");
        assert_eq!(records[0].slot_id, "S1");
        assert_eq!(records[2].event_id, "E2");

        let rebuilt = RosterMatrix::from_records(&records);
        assert_eq!(rebuilt.to_records(), records);
        assert_eq!(rebuilt.load_of("U1"), 1);
        assert!(rebuilt.cell("E2", "S1").unwrap().manual);

        let json = serde_json::to_string(&records).unwrap();
        let parsed: Vec<AssignmentRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }
}
