//! Decoding of slot-level matchings into group-level assignments.

use crate::cost_matrix::{Cost, CostMatrix};
use crate::groups::{Group, GroupCapacityIndex};
use crate::internal::numpy::bincount;
use crate::matching::SlotMatching;
use crate::preferences::Participant;

/// Where a single participant ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantAssignment {
    /// Participant position in the input.
    pub participant: usize,
    pub name: String,
    /// Assigned group position in the input.
    pub group: usize,
    /// Matched slot; any slot of the same group is equivalent.
    pub slot: usize,
    /// Cost realized by this assignment.
    pub cost: Cost,
    /// Whether `cost` is the participant's own stated cost for the group, as opposed
    /// to the bad-assignment cost.
    pub stated: bool,
}

/// Per-group occupancy after assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    pub capacity: usize,
    pub assigned: usize,
}

impl GroupSummary {
    /// Header label `<name>=<assigned>`.
    pub fn label(&self) -> String {
        format!("{}={}", self.name, self.assigned)
    }
}

/// Complete result of an assignment run.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOutcome {
    /// One entry per participant, in input order.
    pub participants: Vec<ParticipantAssignment>,
    /// One entry per group, in input order, including empty groups.
    pub groups: Vec<GroupSummary>,
    /// Sum of realized costs.
    pub total_cost: u64,
    /// Mean realized cost; 0.0 when there are no participants.
    pub mean_cost: f64,
}

impl AssignmentOutcome {
    /// Participants assigned to `group`.
    pub fn members(&self, group: usize) -> impl Iterator<Item = &ParticipantAssignment> + '_ {
        self.participants.iter().filter(move |p| p.group == group)
    }

    /// Number of participants placed in a group they stated no preference for.
    pub fn unstated_count(&self) -> usize {
        self.participants.iter().filter(|p| !p.stated).count()
    }
}

/// Resolve matched slots back to groups, tally group sizes, and collect statistics.
///
/// # Arguments
/// * `matching` - Solved participant → slot matching
/// * `index` - Slot index the cost matrix was built with
/// * `groups` - Groups in input order
/// * `participants` - Participants in input order
/// * `costs` - The solved cost matrix
pub fn decode(
    matching: &SlotMatching,
    index: &GroupCapacityIndex,
    groups: &[Group],
    participants: &[Participant],
    costs: &CostMatrix,
) -> AssignmentOutcome {
    let slot_to_group = index.slot_to_group();

    let mut assigned: Vec<ParticipantAssignment> = matching
        .pairs()
        .map(|(row, slot)| {
            let group = slot_to_group[slot];
            let participant = &participants[row];
            ParticipantAssignment {
                participant: row,
                name: participant.name.clone(),
                group,
                slot,
                cost: costs.cost(row, slot),
                stated: participant.preference(group).is_some(),
            }
        })
        .collect();
    assigned.sort_by_key(|a| a.participant);

    let counts = bincount(assigned.iter().map(|a| a.group), groups.len());
    let summaries = groups
        .iter()
        .zip(counts)
        .map(|(group, count)| GroupSummary {
            name: group.name.clone(),
            capacity: group.capacity,
            assigned: count,
        })
        .collect();

    let total_cost: u64 = assigned.iter().map(|a| u64::from(a.cost)).sum();
    let mean_cost = if assigned.is_empty() {
        0.0
    } else {
        total_cost as f64 / assigned.len() as f64
    };

    AssignmentOutcome {
        participants: assigned,
        groups: summaries,
        total_cost,
        mean_cost,
    }
}
