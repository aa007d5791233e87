//! Participants and their sparse per-group preferences.

use crate::cost_matrix::Cost;
use crate::{Error, Result};

/// A participant with sparse preference costs, positionally aligned to the groups.
///
/// `preferences[j]` is the stated cost for group `j` (lower is better), `None` if
/// unspecified. The vector may be shorter than the number of groups; trailing
/// groups are then unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub preferences: Vec<Option<Cost>>,
}

impl Participant {
    pub fn new(name: impl Into<String>, preferences: Vec<Option<Cost>>) -> Self {
        Self {
            name: name.into(),
            preferences,
        }
    }

    /// Participant with no stated preference at all.
    pub fn indifferent(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Stated cost for `group`, if any.
    pub fn preference(&self, group: usize) -> Option<Cost> {
        self.preferences.get(group).copied().flatten()
    }

    /// Iterate over `(group, cost)` for every stated preference.
    pub fn stated(&self) -> impl Iterator<Item = (usize, Cost)> + '_ {
        self.preferences
            .iter()
            .enumerate()
            .filter_map(|(group, cost)| cost.map(|c| (group, c)))
    }

    /// Build a participant from raw table cells.
    ///
    /// Empty (or whitespace-only) cells are unspecified. Cells past `num_groups`
    /// must be empty; trailing empty cells are dropped.
    ///
    /// # Arguments
    /// * `name` - Participant name (first table column)
    /// * `cells` - Preference cells, one per group
    /// * `num_groups` - Number of declared groups
    pub fn from_cells<S: AsRef<str>>(name: &str, cells: &[S], num_groups: usize) -> Result<Self> {
        let used = cells
            .iter()
            .rposition(|c| !c.as_ref().trim().is_empty())
            .map_or(0, |last| last + 1);

        if used > num_groups {
            return Err(Error::TooManyColumns {
                participant: name.to_string(),
                found: used,
                expected: num_groups,
            });
        }

        let preferences = cells[..used]
            .iter()
            .enumerate()
            .map(|(group, cell)| parse_cost(name, group, cell.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(name, preferences))
    }
}

/// Parse a single preference cell: empty means unspecified.
fn parse_cost(participant: &str, group: usize, cell: &str) -> Result<Option<Cost>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    // `u32::from_str` accepts a leading '+', which is not a plain integer here.
    if !cell.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(participant, group, cell));
    }
    cell.parse::<Cost>()
        .map(Some)
        .map_err(|_| invalid(participant, group, cell))
}

fn invalid(participant: &str, group: usize, cell: &str) -> Error {
    Error::InvalidPreference {
        participant: participant.to_string(),
        // 1-based table column: column 0 holds the name
        column: group + 1,
        value: cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_lookup() {
        let p = Participant::new("P1", vec![Some(1), None, Some(3)]);
        assert_eq!(p.preference(0), Some(1));
        assert_eq!(p.preference(1), None);
        assert_eq!(p.preference(2), Some(3));
        assert_eq!(p.preference(10), None);
        assert_eq!(p.stated().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_indifferent_has_no_preferences() {
        let p = Participant::indifferent("P");
        assert_eq!(p.stated().count(), 0);
    }

    #[test]
    fn test_from_cells_sparse_row() {
        // 'Name,1,,,1,3,9' from the command line help
        let p = Participant::from_cells("Name", &["1", "", "", "1", "3", "9"], 6).unwrap();
        assert_eq!(
            p.preferences,
            vec![Some(1), None, None, Some(1), Some(3), Some(9)]
        );
    }

    #[test]
    fn test_from_cells_short_row() {
        let p = Participant::from_cells("P", &["4"], 3).unwrap();
        assert_eq!(p.preferences, vec![Some(4)]);
        assert_eq!(p.preference(2), None);
    }

    #[test]
    fn test_from_cells_drops_trailing_empty_cells() {
        let p = Participant::from_cells("P", &["", "2", "", " "], 2).unwrap();
        assert_eq!(p.preferences, vec![None, Some(2)]);
    }

    #[test]
    fn test_from_cells_rejects_extra_columns() {
        let err = Participant::from_cells("P", &["1", "2", "3"], 2).unwrap_err();
        match err {
            Error::TooManyColumns {
                participant,
                found,
                expected,
            } => {
                assert_eq!(participant, "P");
                assert_eq!(found, 3);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_cells_rejects_non_integers() {
        for bad in ["-1", "1.5", "abc", "+3", "99999999999"] {
            let err = Participant::from_cells("P", &["0", bad], 2).unwrap_err();
            match err {
                Error::InvalidPreference { column, value, .. } => {
                    assert_eq!(column, 2);
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error for {}: {:?}", bad, other),
            }
        }
    }
}
