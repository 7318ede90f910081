//! Role slot model.
//!
//! A slot is one role column of the roster. The same slot list repeats
//! across every event of the roster; a slot belongs to the roster, not
//! to a single event.

use serde::{Deserialize, Serialize};

/// A role column of the roster grid.
///
/// The optional `team_role_id` links the slot to a team role for
/// eligibility ranking. A slot without a link accepts every member on
/// equal footing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Display name (e.g., "Vocalist", "Sound desk").
    pub name: String,
    /// Linked team role used for eligibility matching.
    /// `None` = eligibility is not a discriminator for this slot.
    pub team_role_id: Option<String>,
}

impl RoleSlot {
    /// Creates a new slot.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team_role_id: None,
        }
    }

    /// Links the slot to a team role.
    pub fn with_team_role(mut self, role_id: impl Into<String>) -> Self {
        self.team_role_id = Some(role_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_builder() {
        let s = RoleSlot::new("S1", "Vocalist").with_team_role("vocals");
        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "Vocalist");
        assert_eq!(s.team_role_id.as_deref(), Some("vocals"));
    }

    #[test]
    fn test_slot_without_role_link() {
        let s = RoleSlot::new("S2", "Helper");
        assert_eq!(s.team_role_id, None);
    }
}
