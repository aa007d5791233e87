//! End-to-end assignment pipeline: slot index → cost matrix → matching → decoding.

use tracing::{debug, enabled, Level};

use crate::config::AssignConfig;
use crate::cost_matrix::CostMatrix;
use crate::decoder::{decode, AssignmentOutcome};
use crate::groups::{Group, GroupCapacityIndex};
use crate::matching::solve_matching;
use crate::preferences::Participant;
use crate::{Error, Result};

/// Assign every participant to a group at minimum total preference cost.
///
/// # Errors
/// * [`Error::TooManyColumns`] if a participant states preferences for undeclared groups
/// * [`Error::CapacityTooLarge`] if the group capacities cannot be expanded into slots
/// * [`Error::InsufficientCapacity`] if the groups cannot hold every participant
///
/// All are detected before anything is solved.
pub fn assign(
    groups: &[Group],
    participants: &[Participant],
    config: &AssignConfig,
) -> Result<AssignmentOutcome> {
    for participant in participants {
        let found = participant
            .preferences
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);
        if found > groups.len() {
            return Err(Error::TooManyColumns {
                participant: participant.name.clone(),
                found,
                expected: groups.len(),
            });
        }
    }

    let capacities: Vec<usize> = groups.iter().map(|g| g.capacity).collect();
    debug!("group sizes: {:?}", capacities);

    let index = GroupCapacityIndex::new(groups)?;
    debug!("group index: {:?}", index.boundaries());
    index.ensure_capacity(participants.len())?;
    debug!("group number from index: {:?}", index.slot_to_group());

    let costs = CostMatrix::build(participants, &index, config.bad_assignment_cost);
    if enabled!(Level::DEBUG) {
        debug!("costs\n{}", costs);
    }

    let matching = solve_matching(&costs);
    debug!(
        "row_ind {:?}, assoc. names: {:?}",
        matching.rows,
        matching
            .rows
            .iter()
            .map(|&r| participants[r].name.as_str())
            .collect::<Vec<_>>()
    );
    debug!(
        "col_ind {:?}, assoc. group nr: {:?}",
        matching.cols,
        matching
            .cols
            .iter()
            .map(|&c| index.slot_to_group()[c])
            .collect::<Vec<_>>()
    );
    debug!("unmatched slots: {:?}", matching.unmatched);

    let outcome = decode(&matching, &index, groups, participants, &costs);
    debug!("global cost: {}", outcome.total_cost);
    debug!(
        "assigned sizes: {:?}",
        outcome.groups.iter().map(|g| g.assigned).collect::<Vec<_>>()
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_prefers_global_optimum() {
        let groups = vec![Group::new("A", 1), Group::new("B", 1)];
        let participants = vec![
            Participant::new("P1", vec![Some(0), Some(9)]),
            Participant::new("P2", vec![Some(5), Some(1)]),
        ];
        let outcome = assign(&groups, &participants, &AssignConfig::default()).unwrap();

        assert_eq!(outcome.total_cost, 1);
        assert_eq!(outcome.participants[0].group, 0);
        assert_eq!(outcome.participants[1].group, 1);
    }

    #[test]
    fn test_assign_uses_configured_bad_cost() {
        let groups = vec![Group::new("A", 2)];
        let participants = vec![Participant::indifferent("P1"), Participant::indifferent("P2")];
        let config = AssignConfig::new().with_bad_assignment_cost(1000);
        let outcome = assign(&groups, &participants, &config).unwrap();

        assert_eq!(outcome.groups[0].assigned, 2);
        assert!(outcome.participants.iter().all(|p| p.cost == 1000));
        assert_eq!(outcome.total_cost, 2000);
    }

    #[test]
    fn test_assign_rejects_insufficient_capacity() {
        let groups = vec![Group::new("A", 1)];
        let participants = vec![Participant::indifferent("P1"), Participant::indifferent("P2")];
        let err = assign(&groups, &participants, &AssignConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            Error::InsufficientCapacity { participants: 2, .. }
        ));
    }

    #[test]
    fn test_assign_rejects_overflowing_capacity() {
        let groups = vec![Group::new("A", usize::MAX), Group::new("B", 1)];
        let participants = vec![Participant::new("P1", vec![Some(0)])];
        let err = assign(&groups, &participants, &AssignConfig::default()).unwrap_err();

        assert!(matches!(err, Error::CapacityTooLarge { .. }));
    }

    #[test]
    fn test_assign_rejects_undeclared_group_preferences() {
        let groups = vec![Group::new("A", 1)];
        let participants = vec![Participant::new("P1", vec![None, Some(1)])];
        let err = assign(&groups, &participants, &AssignConfig::default()).unwrap_err();

        assert!(matches!(err, Error::TooManyColumns { found: 2, expected: 1, .. }));
    }

    #[test]
    fn test_assign_with_debug_logging_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::sink)
            .finish();
        let groups = vec![Group::new("A", 2), Group::new("B", 1)];
        let participants = vec![
            Participant::new("P1", vec![Some(0), Some(1)]),
            Participant::new("P2", vec![None, Some(0)]),
        ];

        let outcome = tracing::subscriber::with_default(subscriber, || {
            assert!(enabled!(Level::DEBUG));
            assign(&groups, &participants, &AssignConfig::default()).unwrap()
        });

        assert_eq!(outcome.total_cost, 0);
        assert_eq!(outcome.groups[0].assigned, 1);
        assert_eq!(outcome.groups[1].assigned, 1);
    }

    #[test]
    fn test_assign_bad_cost_can_beat_stated_cost() {
        // Stated 300 is worse than the 255 default for an unstated group.
        let groups = vec![Group::new("A", 1), Group::new("B", 1)];
        let participants = vec![Participant::new("P1", vec![Some(300)])];
        let outcome = assign(&groups, &participants, &AssignConfig::default()).unwrap();

        assert_eq!(outcome.participants[0].group, 1);
        assert_eq!(outcome.participants[0].cost, 255);
        assert!(!outcome.participants[0].stated);
    }
}
