//! Input validation for roster snapshots.
//!
//! Structural integrity checks run before a shuffle or a save. Detects:
//! - Duplicate IDs (events, slots, members)
//! - Assignments referencing unknown events, slots, or members
//! - Availability entries for unknown members
//!
//! Validation is advisory: the engine itself tolerates malformed input
//! by producing empty candidate pools, so a shuffle stays safely
//! retriable while the roster is still under construction. These checks
//! exist so the caller can surface problems instead of silently filling
//! nothing.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{AvailabilityEntry, Event, Member, RoleSlot, RosterMatrix};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An assignment references an event that doesn't exist.
    UnknownEvent,
    /// An assignment references a slot that doesn't exist.
    UnknownSlot,
    /// An assignment or availability entry references a member that
    /// doesn't exist in the pool.
    UnknownMember,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster snapshot.
///
/// Checks:
/// 1. No duplicate event IDs
/// 2. No duplicate slot IDs
/// 3. No duplicate member IDs (registered and guest share one namespace)
/// 4. Every matrix cell references a known event, slot, and member
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    events: &[Event],
    slots: &[RoleSlot],
    members: &[Member],
    matrix: &RosterMatrix,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut event_ids = HashSet::new();
    for e in events {
        if !event_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event ID: {}", e.id),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    for s in slots {
        if !slot_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot ID: {}", s.id),
            ));
        }
    }

    let mut member_ids = HashSet::new();
    for m in members {
        if !member_ids.insert(m.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate member ID: {}", m.id()),
            ));
        }
    }

    for (event_id, slot_id, cell) in matrix.iter() {
        if !event_ids.contains(event_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEvent,
                format!("Assignment at ({event_id}, {slot_id}) references unknown event"),
            ));
        }
        if !slot_ids.contains(slot_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSlot,
                format!("Assignment at ({event_id}, {slot_id}) references unknown slot"),
            ));
        }
        if !member_ids.contains(cell.member_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownMember,
                format!(
                    "Assignment at ({event_id}, {slot_id}) references unknown member '{}'",
                    cell.member_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates availability entries against the member pool.
///
/// An entry for an unknown member is usually a stale record from a
/// member who left the team.
pub fn validate_availability(entries: &[AvailabilityEntry], members: &[Member]) -> ValidationResult {
    let member_ids: HashSet<&str> = members.iter().map(Member::id).collect();
    let errors: Vec<ValidationError> = entries
        .iter()
        .filter(|e| !member_ids.contains(e.member_id.as_str()))
        .map(|e| {
            ValidationError::new(
                ValidationErrorKind::UnknownMember,
                format!(
                    "Availability entry for {} references unknown member '{}'",
                    e.date, e.member_id
                ),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
