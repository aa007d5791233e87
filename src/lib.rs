//! # assign2groups - Preference-based group assignment
//!
//! Assigns participants to fixed-capacity groups so that the sum of the stated
//! preference costs is minimal.
//!
//! ## Pipeline
//!
//! - [`GroupCapacityIndex`] expands every group into one slot per unit of capacity
//! - [`CostMatrix`] broadcasts each participant's per-group cost over that group's slots,
//!   filling unspecified groups with the configured bad-assignment cost
//! - [`matching`] solves the resulting rectangular assignment problem exactly
//! - [`decoder`] maps slots back to groups and collects per-group counts and statistics
//!
//! The [`table`] module reads and writes the CSV layout used by the command line tool.
//!
//! ## Example
//!
//! ```rust
//! use assign2groups::{assign, AssignConfig, Group, Participant};
//!
//! let groups = vec![Group::new("A", 1), Group::new("B", 1)];
//! let participants = vec![
//!     Participant::new("P1", vec![Some(0), Some(9)]),
//!     Participant::new("P2", vec![Some(5), Some(1)]),
//! ];
//!
//! let outcome = assign(&groups, &participants, &AssignConfig::default()).unwrap();
//! assert_eq!(outcome.total_cost, 1);
//! assert_eq!(outcome.participants[0].group, 0);
//! assert_eq!(outcome.participants[1].group, 1);
//! ```

// Internal modules (ports of scipy, numpy)
pub(crate) mod internal;

// Public modules
pub mod config;
pub mod groups;
pub mod preferences;
pub mod cost_matrix;
pub mod matching;
pub mod decoder;
pub mod assigner;
pub mod table;

// Re-exports for convenience
pub use config::AssignConfig;
pub use groups::{Group, GroupCapacityIndex, MAX_TOTAL_SLOTS};
pub use preferences::Participant;
pub use cost_matrix::{Cost, CostMatrix, DEFAULT_BAD_ASSIGNMENT_COST};
pub use matching::{solve_matching, SlotMatching};
pub use decoder::{AssignmentOutcome, GroupSummary, ParticipantAssignment};
pub use assigner::assign;
pub use table::{output_path_for, AssignmentTable, TableWriter};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    /// Errors that can occur while reading, validating, or writing an assignment
    #[derive(Error, Debug)]
    pub enum Error {
        #[error(
            "Missing or malformed group size (expected '<group name>=<group size>', e.g. GroupA=3) for: {tokens:?}"
        )]
        InvalidGroupFormat { tokens: Vec<String> },

        #[error(
            "Too many participants ({participants}) for too little group capacity ({})",
            capacity_breakdown(.capacities)
        )]
        InsufficientCapacity {
            participants: usize,
            capacities: Vec<usize>,
        },

        #[error(
            "Total group capacity ({}) exceeds the supported maximum of {limit} slots",
            capacity_breakdown(.capacities)
        )]
        CapacityTooLarge { capacities: Vec<usize>, limit: usize },

        #[error("Input file not found or unreadable: {}", .0.display())]
        MissingInput(PathBuf),

        #[error("Invalid preference '{value}' for participant '{participant}' in column {column}: expected a non-negative integer")]
        InvalidPreference {
            participant: String,
            column: usize,
            value: String,
        },

        #[error("Participant '{participant}' has {found} preference columns, but only {expected} groups are declared")]
        TooManyColumns {
            participant: String,
            found: usize,
            expected: usize,
        },

        #[error("Input table is empty: expected a header row with group names and sizes")]
        EmptyInput,

        #[error("CSV error: {0}")]
        Csv(#[from] csv::Error),

        #[error("IO error: {0}")]
        IoError(#[from] std::io::Error),
    }

    /// Render capacities as `a+b+c=total`.
    fn capacity_breakdown(capacities: &[usize]) -> String {
        let parts: Vec<String> = capacities.iter().map(|c| c.to_string()).collect();
        let total: u128 = capacities.iter().map(|&c| c as u128).sum();
        format!("{}={}", parts.join("+"), total)
    }

    /// Result type for assign2groups operations
    pub type Result<T> = std::result::Result<T, Error>;

}
