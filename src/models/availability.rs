//! Availability records and lookup index.
//!
//! Raw entries record whether a member is available for one
//! (date, session) bucket. The index answers the engine's only
//! question: is this member unavailable here?
//!
//! # Precedence
//! An all-day entry for a date is authoritative regardless of session.
//! Otherwise a session-specific entry for that date+session decides.
//! Absence of any entry means **available**: most members never fill in
//! every day, and unset must not act as a constraint.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Session;

/// One raw availability record for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    /// Member this entry belongs to.
    pub member_id: String,
    /// Calendar day.
    pub date: NaiveDate,
    /// Bucket within the day. `AllDay` overrides the other sessions.
    pub session: Session,
    /// Whether the member is available for this bucket.
    pub available: bool,
    /// Free-form reason, shown in the UI.
    pub reason: Option<String>,
}

impl AvailabilityEntry {
    /// Creates a new entry.
    pub fn new(
        member_id: impl Into<String>,
        date: NaiveDate,
        session: Session,
        available: bool,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            date,
            session,
            available,
            reason: None,
        }
    }

    /// Attaches a reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
struct DayAvailability {
    /// All-day flag; authoritative over the session map when set.
    all_day: Option<bool>,
    sessions: HashMap<Session, bool>,
    reasons: HashMap<Session, String>,
}

/// Lookup from (member, date, session) to availability.
///
/// Built once per engine run from the raw entries for the visible date
/// range. For the same (member, date, session) key, later entries win —
/// matching how interactive edits overwrite earlier answers.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    /// member id → date → that day's entries.
    days: HashMap<String, HashMap<NaiveDate, DayAvailability>>,
}

impl AvailabilityIndex {
    /// Creates an empty index (everyone available everywhere).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from raw entries.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a AvailabilityEntry>,
    {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Inserts one entry, overwriting any earlier answer for its bucket.
    pub fn insert(&mut self, entry: &AvailabilityEntry) {
        let day = self
            .days
            .entry(entry.member_id.clone())
            .or_default()
            .entry(entry.date)
            .or_default();
        match entry.session {
            Session::AllDay => day.all_day = Some(entry.available),
            session => {
                day.sessions.insert(session, entry.available);
            }
        }
        if let Some(reason) = &entry.reason {
            day.reasons.insert(entry.session, reason.clone());
        }
    }

    /// Whether the member is unavailable for the given date and session.
    ///
    /// Resolution order: all-day entry, then session entry, then the
    /// open-world default (available). Querying with `Session::AllDay`
    /// consults only the all-day entry.
    pub fn is_unavailable(&self, member_id: &str, date: NaiveDate, session: Session) -> bool {
        let Some(day) = self.days.get(member_id).and_then(|dates| dates.get(&date)) else {
            return false;
        };
        if let Some(available) = day.all_day {
            return !available;
        }
        if session == Session::AllDay {
            return false;
        }
        day.sessions.get(&session).is_some_and(|a| !a)
    }

    /// Inverse of [`is_unavailable`](Self::is_unavailable).
    #[inline]
    pub fn is_available(&self, member_id: &str, date: NaiveDate, session: Session) -> bool {
        !self.is_unavailable(member_id, date, session)
    }

    /// Declared reason for the bucket that answers the query, if any.
    pub fn reason_for(&self, member_id: &str, date: NaiveDate, session: Session) -> Option<&str> {
        let day = self.days.get(member_id)?.get(&date)?;
        if day.all_day.is_some() {
            return day.reasons.get(&Session::AllDay).map(String::as_str);
        }
        day.reasons.get(&session).map(String::as_str)
    }

    /// Number of (member, date) pairs with at least one entry.
    pub fn day_count(&self) -> usize {
        self.days.values().map(HashMap::len).sum()
    }
}
