//! Participant-to-slot matching.
//!
//! Thin layer over the linear sum assignment solver: it knows nothing about
//! groups or capacities, only rows (participants) and columns (slots).

use crate::cost_matrix::CostMatrix;
use crate::internal::scipy::linear_sum_assignment;

/// Minimum-cost matching of participants to slots.
///
/// `rows[k]` is matched to `cols[k]`; rows are in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMatching {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    /// Slots left without a participant, ascending.
    pub unmatched: Vec<usize>,
}

impl SlotMatching {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over matched `(participant, slot)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }

    /// Sum of matched entries of `costs`.
    pub fn total_cost(&self, costs: &CostMatrix) -> u64 {
        self.pairs().map(|(r, c)| u64::from(costs.cost(r, c))).sum()
    }
}

/// Match every participant to a distinct slot at minimum total cost.
///
/// Expects at least as many slots as participants; capacity is validated before
/// the matrix is built, so this is not re-checked here. Ties between equally cheap
/// matchings resolve deterministically (lowest participant first, lowest slot first),
/// so re-solving the same matrix yields the same matching.
pub fn solve_matching(costs: &CostMatrix) -> SlotMatching {
    debug_assert!(costs.num_participants() <= costs.num_slots());

    let result = linear_sum_assignment(costs.as_matrix());
    debug_assert!(result.unmatched_rows.is_empty());
    let (rows, cols) = result
        .assignments
        .iter()
        .map(|a| (a.row_idx, a.col_idx))
        .unzip();

    SlotMatching {
        rows,
        cols,
        unmatched: result.unmatched_cols,
    }
}
