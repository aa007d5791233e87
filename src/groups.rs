//! Groups and the slot index that expands group capacities into assignable slots.

use std::ops::Range;

use crate::internal::numpy::{checked_cumsum, fill_ranges};
use crate::{Error, Result};

/// A named group with a fixed capacity.
///
/// Names are opaque labels and need not be unique; groups are identified by
/// their position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub capacity: usize,
}

impl Group {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    /// Parse a `<group name>=<group size>` token.
    ///
    /// The size follows the last `=`, so group names may themselves contain `=`.
    /// Surrounding whitespace around the size is ignored. Returns `None` when the
    /// separator is missing or the size is not a non-negative integer.
    pub fn parse(token: &str) -> Option<Self> {
        let (name, size) = token.rsplit_once('=')?;
        let size = size.trim();
        if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let capacity = size.parse().ok()?;
        Some(Self::new(name, capacity))
    }

    /// Parse every group token, reporting all malformed ones at once.
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Self>> {
        let mut groups = Vec::with_capacity(tokens.len());
        let mut broken = Vec::new();

        for token in tokens {
            match Self::parse(token.as_ref()) {
                Some(group) => groups.push(group),
                None => broken.push(token.as_ref().to_string()),
            }
        }

        if !broken.is_empty() {
            return Err(Error::InvalidGroupFormat { tokens: broken });
        }
        Ok(groups)
    }
}

/// Largest total capacity that is expanded into slots.
pub const MAX_TOTAL_SLOTS: usize = 1 << 24;

/// Flat index of capacity slots.
///
/// Group `i` owns the half-open slot range `boundaries[i]..boundaries[i + 1]`.
/// Slots of the same group are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCapacityIndex {
    boundaries: Vec<usize>,
    slot_to_group: Vec<usize>,
}

impl GroupCapacityIndex {
    /// Build the slot index for groups in input order.
    ///
    /// # Errors
    /// [`Error::CapacityTooLarge`] if the capacities sum to more than
    /// [`MAX_TOTAL_SLOTS`] (or overflow `usize`).
    pub fn new(groups: &[Group]) -> Result<Self> {
        let capacities: Vec<usize> = groups.iter().map(|g| g.capacity).collect();
        let boundaries = match checked_cumsum(&capacities) {
            Some(b) if b.last().map_or(true, |&total| total <= MAX_TOTAL_SLOTS) => b,
            _ => {
                return Err(Error::CapacityTooLarge {
                    capacities,
                    limit: MAX_TOTAL_SLOTS,
                })
            }
        };
        let slot_to_group = fill_ranges(&boundaries);
        Ok(Self {
            boundaries,
            slot_to_group,
        })
    }

    /// Cumulative slot offsets, length `num_groups() + 1`, starting at 0.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Owning group index for every slot.
    pub fn slot_to_group(&self) -> &[usize] {
        &self.slot_to_group
    }

    pub fn num_groups(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn total_slots(&self) -> usize {
        self.slot_to_group.len()
    }

    /// Group owning `slot`, or `None` if the slot is out of range.
    pub fn group_of(&self, slot: usize) -> Option<usize> {
        self.slot_to_group.get(slot).copied()
    }

    /// Slot range owned by `group`.
    ///
    /// # Panics
    /// Panics if `group >= num_groups()`.
    pub fn slot_range(&self, group: usize) -> Range<usize> {
        self.boundaries[group]..self.boundaries[group + 1]
    }

    pub fn capacity(&self, group: usize) -> usize {
        self.slot_range(group).len()
    }

    /// Check that there is at least one slot per participant.
    pub fn ensure_capacity(&self, participants: usize) -> Result<()> {
        if participants > self.total_slots() {
            return Err(Error::InsufficientCapacity {
                participants,
                capacities: (0..self.num_groups()).map(|g| self.capacity(g)).collect(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Parsing =====

    #[test]
    fn test_parse_group_token() {
        assert_eq!(Group::parse("Group A=5"), Some(Group::new("Group A", 5)));
        assert_eq!(Group::parse("B=0"), Some(Group::new("B", 0)));
    }

    #[test]
    fn test_parse_group_token_with_equals_in_name() {
        assert_eq!(Group::parse("x=y=3"), Some(Group::new("x=y", 3)));
    }

    #[test]
    fn test_parse_group_token_trims_size() {
        assert_eq!(Group::parse("A= 3 "), Some(Group::new("A", 3)));
    }

    #[test]
    fn test_parse_group_token_rejects_malformed() {
        assert_eq!(Group::parse("GroupA"), None);
        assert_eq!(Group::parse("GroupA="), None);
        assert_eq!(Group::parse("GroupA=-1"), None);
        assert_eq!(Group::parse("GroupA=2.5"), None);
        assert_eq!(Group::parse("GroupA=three"), None);
    }

    #[test]
    fn test_parse_all_reports_every_broken_token() {
        let err = Group::parse_all(&["A=1", "B", "C=x", "D=2"]).unwrap_err();
        match err {
            Error::InvalidGroupFormat { tokens } => {
                assert_eq!(tokens, vec!["B".to_string(), "C=x".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_all_keeps_order() {
        let groups = Group::parse_all(&["A=1", "B=2"]).unwrap();
        assert_eq!(groups, vec![Group::new("A", 1), Group::new("B", 2)]);
    }

    // ===== Slot index =====

    #[test]
    fn test_index_boundaries_and_slots() {
        let index = GroupCapacityIndex::new(&[
            Group::new("A", 2),
            Group::new("B", 0),
            Group::new("C", 3),
        ])
        .unwrap();

        assert_eq!(index.boundaries(), &[0, 2, 2, 5]);
        assert_eq!(index.slot_to_group(), &[0, 0, 2, 2, 2]);
        assert_eq!(index.num_groups(), 3);
        assert_eq!(index.total_slots(), 5);
        assert_eq!(index.slot_range(1), 2..2);
        assert_eq!(index.capacity(2), 3);
        assert_eq!(index.group_of(4), Some(2));
        assert_eq!(index.group_of(5), None);
    }

    #[test]
    fn test_index_without_groups() {
        let index = GroupCapacityIndex::new(&[]).unwrap();
        assert_eq!(index.boundaries(), &[0]);
        assert_eq!(index.total_slots(), 0);
        assert!(index.ensure_capacity(0).is_ok());
    }

    #[test]
    fn test_ensure_capacity_exact_fit() {
        let index = GroupCapacityIndex::new(&[Group::new("A", 1), Group::new("B", 1)]).unwrap();
        assert!(index.ensure_capacity(2).is_ok());
    }

    #[test]
    fn test_ensure_capacity_shortfall() {
        let index = GroupCapacityIndex::new(&[Group::new("A", 1)]).unwrap();
        match index.ensure_capacity(2) {
            Err(Error::InsufficientCapacity {
                participants,
                capacities,
            }) => {
                assert_eq!(participants, 2);
                assert_eq!(capacities, vec![1]);
            }
            other => panic!("expected capacity error, got {:?}", other),
        }
    }

    #[test]
    fn test_index_rejects_overflowing_capacity() {
        let groups = Group::parse_all(&[format!("A={}", usize::MAX), "B=1".to_string()]).unwrap();
        match GroupCapacityIndex::new(&groups) {
            Err(Error::CapacityTooLarge { capacities, limit }) => {
                assert_eq!(capacities, vec![usize::MAX, 1]);
                assert_eq!(limit, MAX_TOTAL_SLOTS);
            }
            other => panic!("expected capacity error, got {:?}", other),
        }
    }

    #[test]
    fn test_index_rejects_capacity_above_limit() {
        let groups = vec![Group::new("A", MAX_TOTAL_SLOTS), Group::new("B", 1)];
        let err = GroupCapacityIndex::new(&groups).unwrap_err();
        assert!(matches!(err, Error::CapacityTooLarge { .. }));
    }
}
