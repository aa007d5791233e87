//! Dense participant × slot cost matrix.

use std::fmt;

use nalgebra::DMatrix;

use crate::groups::GroupCapacityIndex;
use crate::preferences::Participant;

/// Integer preference cost; lower is better.
///
/// Four bytes per matrix cell, so the matrix needs `4 · participants · slots` bytes.
/// Stated costs and the bad-assignment cost may use the full `u32` range; sums are
/// accumulated in 64 bits and cannot overflow.
pub type Cost = u32;

/// Cost for groups a participant stated no preference for.
pub const DEFAULT_BAD_ASSIGNMENT_COST: Cost = 255;

/// Cost matrix with one row per participant and one column per capacity slot.
///
/// Entry (p, s) is participant p's stated cost for the group owning slot s, or the
/// bad-assignment cost if p stated none. All slots of a group carry the same cost
/// for a given participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    matrix: DMatrix<Cost>,
    bad_assignment_cost: Cost,
}

impl CostMatrix {
    /// Build the matrix from sparse participant preferences.
    ///
    /// The matrix is first filled with `bad_assignment_cost`; each stated group cost is
    /// then written over that group's slot range. Preferences for group positions past
    /// the last declared group are ignored.
    pub fn build(
        participants: &[Participant],
        index: &GroupCapacityIndex,
        bad_assignment_cost: Cost,
    ) -> Self {
        let mut matrix =
            DMatrix::from_element(participants.len(), index.total_slots(), bad_assignment_cost);

        for (row, participant) in participants.iter().enumerate() {
            for (group, cost) in participant.stated() {
                if group >= index.num_groups() {
                    break;
                }
                let slots = index.slot_range(group);
                if slots.is_empty() {
                    continue;
                }
                matrix
                    .view_mut((row, slots.start), (1, slots.len()))
                    .fill(cost);
            }
        }

        Self {
            matrix,
            bad_assignment_cost,
        }
    }

    pub fn num_participants(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn num_slots(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn bad_assignment_cost(&self) -> Cost {
        self.bad_assignment_cost
    }

    /// Cost of giving `slot` to `participant`.
    pub fn cost(&self, participant: usize, slot: usize) -> Cost {
        self.matrix[(participant, slot)]
    }

    pub fn as_matrix(&self) -> &DMatrix<Cost> {
        &self.matrix
    }
}

impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix.row_iter() {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
