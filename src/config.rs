//! Assignment configuration.

use crate::cost_matrix::{Cost, DEFAULT_BAD_ASSIGNMENT_COST};

/// Configuration for an assignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignConfig {
    /// Cost charged when a participant lands in a group they stated no preference for.
    pub bad_assignment_cost: Cost,
}

impl AssignConfig {
    /// Create a configuration with the default bad-assignment cost (255).
    pub fn new() -> Self {
        Self {
            bad_assignment_cost: DEFAULT_BAD_ASSIGNMENT_COST,
        }
    }

    /// Override the bad-assignment cost.
    pub fn with_bad_assignment_cost(mut self, cost: Cost) -> Self {
        self.bad_assignment_cost = cost;
        self
    }
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self::new()
    }
}
