//! Auto-fill pass over the roster grid.
//!
//! Provides the shuffle engine: a single deterministic greedy pass that
//! fills assignment cells from the candidate pool while preserving
//! pinned cells, avoiding double-bookings and unavailable members, and
//! balancing load live as it commits.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use duty_roster::models::{Event, Member, RoleSlot};
//! use duty_roster::shuffle::{FillMode, ShuffleEngine, ShuffleRequest};
//!
//! let events = vec![Event::new("E1", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())];
//! let slots = vec![RoleSlot::new("S1", "Vocalist").with_team_role("vocals")];
//! let members = vec![Member::registered("U1").with_role("vocals")];
//!
//! let request = ShuffleRequest::new(events, slots, members).with_mode(FillMode::All);
//! let outcome = ShuffleEngine::new().run(&request);
//! assert_eq!(outcome.changed, 1);
//! ```

mod engine;
mod rank;

pub use engine::{FillMode, ShuffleEngine, ShuffleOutcome, ShuffleRequest};
pub use rank::CandidateRank;
