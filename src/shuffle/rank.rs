//! Candidate ranking for auto-fill.
//!
//! The ranking criteria are fixed and documented rather than pluggable:
//! administrators expect a shuffle to be explainable ("it always prefers
//! people who've done less") and reproducible for the same snapshot.
//!
//! # Score Convention
//! Lower ranks win. Field order is the comparison order.

use crate::models::{Member, RoleSlot};

/// Ranking key for one candidate, compared lexicographically:
///
/// 1. `role_mismatch` — members whose declared roles match the slot's
///    linked team role rank first. On a slot with no linked role every
///    candidate ties here.
/// 2. `load` — current assignment count against the matrix in progress,
///    ascending, so load balancing is enforced live during the pass.
/// 3. `order` — the member's position in the caller-supplied pool,
///    a stable tie-break that keeps the pass deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateRank {
    role_mismatch: bool,
    load: usize,
    order: usize,
}

impl CandidateRank {
    /// Computes the rank of `member` for `slot`.
    ///
    /// `load` must be read from the matrix being built, not the
    /// pre-shuffle snapshot; `order` is the member's index in the pool.
    pub fn new(member: &Member, slot: &RoleSlot, load: usize, order: usize) -> Self {
        Self {
            role_mismatch: !member.matches_slot(slot),
            load,
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocalist_slot() -> RoleSlot {
        RoleSlot::new("S1", "Vocalist").with_team_role("vocals")
    }

    #[test]
    fn test_role_match_beats_load() {
        let slot = vocalist_slot();
        let matching = Member::registered("U1").with_role("vocals");
        let other = Member::registered("U2").with_role("keys");

        // Matching member ranks first even with higher load.
        let a = CandidateRank::new(&matching, &slot, 5, 0);
        let b = CandidateRank::new(&other, &slot, 0, 1);
        assert!(a < b);
    }

    #[test]
    fn test_load_breaks_role_ties() {
        let slot = vocalist_slot();
        let first = Member::registered("U1").with_role("vocals");
        let second = Member::registered("U2").with_role("vocals");

        let a = CandidateRank::new(&first, &slot, 2, 0);
        let b = CandidateRank::new(&second, &slot, 1, 1);
        assert!(b < a);
    }

    #[test]
    fn test_pool_order_breaks_full_ties() {
        let slot = vocalist_slot();
        let first = Member::registered("U1").with_role("vocals");
        let second = Member::registered("U2").with_role("vocals");

        let a = CandidateRank::new(&first, &slot, 1, 0);
        let b = CandidateRank::new(&second, &slot, 1, 1);
        assert!(a < b);
    }

    #[test]
    fn test_unlinked_slot_ignores_roles() {
        let slot = RoleSlot::new("S2", "Helper");
        let with_role = Member::registered("U1").with_role("vocals");
        let without = Member::guest("G1");

        // No role link → everyone ties on eligibility; load decides.
        let a = CandidateRank::new(&with_role, &slot, 1, 0);
        let b = CandidateRank::new(&without, &slot, 0, 1);
        assert!(b < a);
    }
}
