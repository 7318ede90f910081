//! Roster domain models.
//!
//! Core data types for the assignment grid and its inputs: events
//! (rows), role slots (columns), members (the candidate pool), raw
//! availability records with their lookup index, and the matrix of
//! assignment cells itself.
//!
//! Everything the caller persists is serializable; the engine itself
//! never performs I/O.

mod availability;
mod event;
mod matrix;
mod member;
mod slot;

pub use availability::{AvailabilityEntry, AvailabilityIndex};
pub use event::{Event, Session};
pub use matrix::{AssignmentCell, AssignmentRecord, RosterMatrix};
pub use member::{GuestMember, Member, RegisteredMember};
pub use slot::RoleSlot;
