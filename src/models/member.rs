//! Member model.
//!
//! Members are the people assigned to slots. Registered members belong
//! to the team; guests are minted ad hoc for a single roster. Both share
//! one identity and eligibility surface so the assignment logic is
//! agnostic to provenance.

use serde::{Deserialize, Serialize};

use super::RoleSlot;

/// A persistent team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredMember {
    /// Unique member identifier (user id).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Team roles this member declares. Empty = no declared roles;
    /// the member stays assignable to every slot.
    pub role_ids: Vec<String>,
}

/// An ad-hoc guest, not a persistent team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestMember {
    /// Unique guest identifier, usable anywhere a member id is used.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declared team roles. Guests usually declare none.
    pub role_ids: Vec<String>,
}

/// A member of the candidate pool.
///
/// Tagged union over registered members and guests. The engine only
/// ever goes through the shared accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Registered(RegisteredMember),
    Guest(GuestMember),
}

impl Member {
    /// Creates a registered member.
    pub fn registered(id: impl Into<String>) -> Self {
        Member::Registered(RegisteredMember {
            id: id.into(),
            name: String::new(),
            role_ids: Vec::new(),
        })
    }

    /// Creates a guest member.
    pub fn guest(id: impl Into<String>) -> Self {
        Member::Guest(GuestMember {
            id: id.into(),
            name: String::new(),
            role_ids: Vec::new(),
        })
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Member::Registered(m) => m.name = name.into(),
            Member::Guest(m) => m.name = name.into(),
        }
        self
    }

    /// Declares a team role.
    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        match &mut self {
            Member::Registered(m) => m.role_ids.push(role_id.into()),
            Member::Guest(m) => m.role_ids.push(role_id.into()),
        }
        self
    }

    /// Member identifier.
    pub fn id(&self) -> &str {
        match self {
            Member::Registered(m) => &m.id,
            Member::Guest(m) => &m.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Member::Registered(m) => &m.name,
            Member::Guest(m) => &m.name,
        }
    }

    /// Declared team roles.
    pub fn role_ids(&self) -> &[String] {
        match self {
            Member::Registered(m) => &m.role_ids,
            Member::Guest(m) => &m.role_ids,
        }
    }

    /// Whether this member is an ad-hoc guest.
    pub fn is_guest(&self) -> bool {
        matches!(self, Member::Guest(_))
    }

    /// Whether this member declares the given team role.
    pub fn has_role(&self, role_id: &str) -> bool {
        self.role_ids().iter().any(|r| r == role_id)
    }

    /// Eligibility predicate for ranking.
    ///
    /// True when the slot has no linked team role, or when this member
    /// explicitly declares it. A member with no declared roles remains
    /// assignable everywhere; on a role-linked slot they rank below
    /// members with a declared match.
    pub fn matches_slot(&self, slot: &RoleSlot) -> bool {
        match &slot.team_role_id {
            None => true,
            Some(role_id) => self.has_role(role_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_builder() {
        let m = Member::registered("U1")
            .with_name("Alice")
            .with_role("vocals")
            .with_role("keys");

        assert_eq!(m.id(), "U1");
        assert_eq!(m.name(), "Alice");
        assert_eq!(m.role_ids(), ["vocals", "keys"]);
        assert!(!m.is_guest());
        assert!(m.has_role("vocals"));
        assert!(!m.has_role("drums"));
    }

    #[test]
    fn test_guest_member() {
        let g = Member::guest("G1").with_name("Walk-in");
        assert!(g.is_guest());
        assert!(g.role_ids().is_empty());
    }

    #[test]
    fn test_matches_slot() {
        let vocalist = RoleSlot::new("S1", "Vocalist").with_team_role("vocals");
        let helper = RoleSlot::new("S2", "Helper");

        let alice = Member::registered("U1").with_role("vocals");
        let bob = Member::registered("U2").with_role("keys");
        let guest = Member::guest("G1");

        assert!(alice.matches_slot(&vocalist));
        assert!(!bob.matches_slot(&vocalist));
        // No declared roles → no match on a role-linked slot,
        // still a match where eligibility does not discriminate.
        assert!(!guest.matches_slot(&vocalist));
        assert!(guest.matches_slot(&helper));
        assert!(bob.matches_slot(&helper));
    }

    #[test]
    fn test_member_serde_tagging() {
        let g = Member::guest("G1").with_name("Walk-in");
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("\"kind\":\"guest\""));

        let back: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
