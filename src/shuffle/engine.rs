//! The shuffle engine: greedy auto-fill over events × slots.
//!
//! # Algorithm
//!
//! 1. In `All` mode, clear every non-pinned cell; in `EmptyOnly`, keep
//!    everything already filled.
//! 2. Walk events in the caller-supplied (chronological) order and slots
//!    in column order — the commitment order that gives earlier rows and
//!    columns first pick of scarce members.
//! 3. Per cell, build the candidate pool: every member not already
//!    holding a slot of this event in the matrix being built, and not
//!    unavailable for the event's date/session.
//! 4. Assign the best candidate by [`CandidateRank`], or leave the cell
//!    empty when the pool is empty. Occupancy and load indices update on
//!    commit, so the rest of the pass sees each choice.
//!
//! A single greedy pass, not a solver: fast enough to re-run on every
//! click, and reproducible for the same snapshot.
//!
//! # Complexity
//! O(e * s * m) for e events, s slots, m members.

use serde::{Deserialize, Serialize};

use super::rank::CandidateRank;
use crate::models::{AvailabilityIndex, Event, Member, RoleSlot, RosterMatrix};

/// Which cells a shuffle may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Recompute every non-pinned cell from scratch.
    All,
    /// Fill currently-empty cells only; existing assignments stay.
    #[default]
    EmptyOnly,
}

/// Input snapshot for one shuffle run.
///
/// Event and slot order are commitment order and must be stable arrays:
/// they materially affect which cells get scarce members first.
#[derive(Debug, Clone, Default)]
pub struct ShuffleRequest {
    /// Events in chronological order (rows).
    pub events: Vec<Event>,
    /// Role slots in column order.
    pub slots: Vec<RoleSlot>,
    /// Candidate pool; position is the deterministic tie-break.
    pub members: Vec<Member>,
    /// Current grid state, pinned cells included.
    pub matrix: RosterMatrix,
    /// Availability snapshot for the visible date range.
    pub availability: AvailabilityIndex,
    /// Which cells the shuffle may touch.
    pub mode: FillMode,
}

impl ShuffleRequest {
    /// Creates a request over an empty grid with default mode.
    pub fn new(events: Vec<Event>, slots: Vec<RoleSlot>, members: Vec<Member>) -> Self {
        Self {
            events,
            slots,
            members,
            ..Default::default()
        }
    }

    /// Sets the current grid state.
    pub fn with_matrix(mut self, matrix: RosterMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Sets the availability snapshot.
    pub fn with_availability(mut self, availability: AvailabilityIndex) -> Self {
        self.availability = availability;
        self
    }

    /// Sets the fill mode.
    pub fn with_mode(mut self, mode: FillMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Result of one shuffle run.
#[derive(Debug, Clone)]
pub struct ShuffleOutcome {
    /// The new grid. The caller decides when and how to persist it.
    pub matrix: RosterMatrix,
    /// Number of cells that differ from the input grid (filled,
    /// reassigned, or cleared).
    pub changed: usize,
}

/// Deterministic greedy auto-fill engine.
///
/// Pure and synchronous: consumes a snapshot, returns a new grid, never
/// performs I/O. Pinned cells pass through untouched in every mode.
#[derive(Debug, Clone, Default)]
pub struct ShuffleEngine;

impl ShuffleEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Runs one shuffle pass over the request snapshot.
    ///
    /// Never fails: malformed references or an empty member pool simply
    /// produce empty candidate pools and leave cells unfilled.
    pub fn run(&self, request: &ShuffleRequest) -> ShuffleOutcome {
        let mut result = request.matrix.clone();
        if request.mode == FillMode::All {
            result.clear_auto_assignments();
        }

        for event in &request.events {
            let session = event.effective_session();
            for slot in &request.slots {
                // Covers pinned cells in both modes and, in EmptyOnly,
                // every pre-existing assignment.
                if result.cell(&event.id, &slot.id).is_some() {
                    continue;
                }

                let best = request
                    .members
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| !result.is_occupied(&event.id, m.id()))
                    .filter(|(_, m)| {
                        request
                            .availability
                            .is_available(m.id(), event.date, session)
                    })
                    .min_by_key(|(order, m)| {
                        CandidateRank::new(m, slot, result.load_of(m.id()), *order)
                    });

                if let Some((_, member)) = best {
                    result.assign_auto(&event.id, &slot.id, member.id());
                }
            }
        }

        let changed = changed_cells(&request.matrix, &result);
        ShuffleOutcome {
            matrix: result,
            changed,
        }
    }
}

/// Counts grid cells whose content differs between two matrices.
fn changed_cells(before: &RosterMatrix, after: &RosterMatrix) -> usize {
    let mut changed = 0;
    for (event_id, slot_id, cell) in before.iter() {
        if after.cell(event_id, slot_id) != Some(cell) {
            changed += 1;
        }
    }
    for (event_id, slot_id, _) in after.iter() {
        if before.cell(event_id, slot_id).is_none() {
            changed += 1;
        }
    }
    changed
}
