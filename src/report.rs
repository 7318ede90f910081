//! Workload summary for the fairness view.
//!
//! Derives per-member load and grid coverage from a roster snapshot.
//! Load is the only quality signal this domain has: a roster is "good"
//! when everyone carries a similar share and few cells are left open.

use std::collections::HashMap;

use crate::models::{Member, RosterMatrix};

/// Per-member load and grid coverage figures.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Cells held per member. Members from the pool appear even with
    /// zero load, so the UI can show who has not served yet.
    pub load_by_member: HashMap<String, usize>,
    /// Smallest load across the pool.
    pub min_load: usize,
    /// Largest load across the pool.
    pub max_load: usize,
    /// Filled cells.
    pub filled_cells: usize,
    /// Of the filled cells, how many are pinned.
    pub pinned_cells: usize,
    /// Cells of the full events × slots grid still without an
    /// assignment ("needs assignment" in the UI).
    pub empty_cells: usize,
}

impl LoadReport {
    /// Computes the report for one snapshot.
    ///
    /// `grid_cells` is the full grid size (event count × slot count);
    /// assignments to unknown members still count toward coverage but
    /// only pool members appear in `load_by_member`.
    pub fn calculate(matrix: &RosterMatrix, members: &[Member], grid_cells: usize) -> Self {
        let load_by_member: HashMap<String, usize> = members
            .iter()
            .map(|m| (m.id().to_string(), matrix.load_of(m.id())))
            .collect();

        let min_load = load_by_member.values().copied().min().unwrap_or(0);
        let max_load = load_by_member.values().copied().max().unwrap_or(0);

        let filled_cells = matrix.len();
        let pinned_cells = matrix.iter().filter(|(_, _, cell)| cell.manual).count();

        Self {
            load_by_member,
            min_load,
            max_load,
            filled_cells,
            pinned_cells,
            empty_cells: grid_cells.saturating_sub(filled_cells),
        }
    }

    /// Difference between the heaviest and lightest member.
    #[inline]
    pub fn load_spread(&self) -> usize {
        self.max_load - self.min_load
    }

    /// Whether every grid cell is filled.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.empty_cells == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Member> {
        vec![
            Member::registered("U1"),
            Member::registered("U2"),
            Member::guest("G1"),
        ]
    }

    #[test]
    fn test_report_basic() {
        let mut matrix = RosterMatrix::new();
        matrix.assign("E1", "S1", "U1");
        matrix.assign_auto("E1", "S2", "U2");
        matrix.assign_auto("E2", "S1", "U1");

        // 2 events × 2 slots grid.
        let report = LoadReport::calculate(&matrix, &pool(), 4);
        assert_eq!(report.load_by_member["U1"], 2);
        assert_eq!(report.load_by_member["U2"], 1);
        assert_eq!(report.load_by_member["G1"], 0);
        assert_eq!(report.min_load, 0);
        assert_eq!(report.max_load, 2);
        assert_eq!(report.load_spread(), 2);
        assert_eq!(report.filled_cells, 3);
        assert_eq!(report.pinned_cells, 1);
        assert_eq!(report.empty_cells, 1);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_report_empty_snapshot() {
        let report = LoadReport::calculate(&RosterMatrix::new(), &[], 0);
        assert!(report.load_by_member.is_empty());
        assert_eq!(report.min_load, 0);
        assert_eq!(report.max_load, 0);
        assert!(report.is_complete());
    }

    #[test]
    fn test_full_grid_is_complete() {
        let mut matrix = RosterMatrix::new();
        matrix.assign_auto("E1", "S1", "U1");
        matrix.assign_auto("E1", "S2", "U2");

        let report = LoadReport::calculate(&matrix, &pool(), 2);
        assert!(report.is_complete());
        assert_eq!(report.empty_cells, 0);
    }
}
