//! Roster assignment engine for volunteer duty scheduling.
//!
//! Computes complete or partial assignments of members to role slots
//! across scheduled events: never double-booking a member within one
//! event, never assigning an unavailable member, preferring declared
//! role matches, balancing load across the pool, and leaving
//! administrator-pinned cells untouched.
//!
//! The engine is a pure, synchronous computation over an in-memory
//! snapshot: the caller supplies events, slots, members, availability,
//! and the current grid, and receives a new grid plus a changed-cell
//! count. Persistence, auth, notifications, and rendering belong to the
//! caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Event`, `Session`, `RoleSlot`,
//!   `Member`, `AvailabilityEntry`/`AvailabilityIndex`, `RosterMatrix`
//! - **`conflict`**: Cell conflict reporting (unavailable, double-booked)
//! - **`shuffle`**: The deterministic greedy auto-fill pass
//! - **`report`**: Workload fairness summary
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown references)
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use duty_roster::models::{AvailabilityEntry, AvailabilityIndex, Event, Member, RoleSlot, Session};
//! use duty_roster::shuffle::{FillMode, ShuffleEngine, ShuffleRequest};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let events = vec![Event::new("E1", date).with_session(Session::Morning)];
//! let slots = vec![RoleSlot::new("S1", "Vocalist").with_team_role("vocals")];
//! let members = vec![
//!     Member::registered("U1").with_name("Alice").with_role("vocals"),
//!     Member::registered("U2").with_name("Bob"),
//! ];
//! let entries = [AvailabilityEntry::new("U2", date, Session::Morning, false)];
//!
//! let request = ShuffleRequest::new(events, slots, members)
//!     .with_availability(AvailabilityIndex::from_entries(&entries))
//!     .with_mode(FillMode::All);
//! let outcome = ShuffleEngine::new().run(&request);
//!
//! assert_eq!(outcome.changed, 1);
//! assert_eq!(outcome.matrix.cell("E1", "S1").unwrap().member_id, "U1");
//! ```

pub mod conflict;
pub mod models;
pub mod report;
pub mod shuffle;
pub mod validation;
