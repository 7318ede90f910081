//! Event model.
//!
//! An event is one row of the roster grid: a calendar day with an
//! optional start time and an optional session tag. Events are created
//! and removed by the caller; the engine only reads them.
//!
//! # Time Model
//! Dates are calendar days (`NaiveDate`); sub-day granularity is the
//! closed `Session` enum, not a continuous clock. An event without a
//! session tag spans the whole day.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Sub-day time bucket used to scope availability.
///
/// `AllDay` doubles as the whole-day bucket: an all-day availability
/// entry overrides session-specific entries for the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    Morning,
    Afternoon,
    Evening,
    AllDay,
}

impl Session {
    /// Stable identifier, also the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Morning => "morning",
            Session::Afternoon => "afternoon",
            Session::Evening => "evening",
            Session::AllDay => "all_day",
        }
    }
}

/// A scheduled event (one row of the roster grid).
///
/// Immutable once created. The engine never creates or deletes events;
/// it only writes assignment cells under them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: String,
    /// Human-readable name (may be empty).
    pub name: String,
    /// Calendar day of the event.
    pub date: NaiveDate,
    /// Start time within the day, if scheduled to the minute.
    pub time: Option<NaiveTime>,
    /// Session tag. `None` = the event spans the whole day.
    pub session: Option<Session>,
}

impl Event {
    /// Creates a new event on the given date.
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            date,
            time: None,
            session: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the start time.
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the session tag.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Session used for availability lookups.
    ///
    /// An untagged event is treated as all-day: only an all-day
    /// unavailability entry blocks it.
    #[inline]
    pub fn effective_session(&self) -> Session {
        self.session.unwrap_or(Session::AllDay)
    }
}
