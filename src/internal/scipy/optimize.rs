//! SciPy optimization functions port.
//!
//! Ported from scipy.optimize.linear_sum_assignment
//! License: BSD 3-Clause (SciPy Developers)
#![allow(clippy::needless_range_loop)]

use nalgebra::{DMatrix, Scalar};

/// Represents a match between a row index and column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub row_idx: usize,
    pub col_idx: usize,
}

/// Result of linear sum assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentResult {
    /// Matched (row, col) pairs, sorted by row index
    pub assignments: Vec<Assignment>,
    /// Indices of rows that were not matched
    pub unmatched_rows: Vec<usize>,
    /// Indices of columns that were not matched
    pub unmatched_cols: Vec<usize>,
}

#[cfg(test)]
impl AssignmentResult {
    /// Sum of `cost_matrix[row][col]` over all matched pairs.
    pub fn total_cost<C>(&self, cost_matrix: &DMatrix<C>) -> i64
    where
        C: Scalar + Copy + Into<i64>,
    {
        self.assignments
            .iter()
            .map(|a| cost_matrix[(a.row_idx, a.col_idx)].into())
            .sum()
    }
}

/// Solve the linear sum assignment problem using the Hungarian algorithm.
///
/// Finds the assignment between rows and columns that minimizes the total cost.
/// Every row is matched when there are at least as many columns as rows; otherwise
/// every column is matched and the surplus rows are reported as unmatched.
///
/// # Arguments
/// * `cost_matrix` - 2D integer cost matrix where entry (i, j) is the cost of assigning row i to column j
///
/// # Returns
/// AssignmentResult containing:
/// - assignments: (row, col) pairs in ascending row order
/// - unmatched_rows: Row indices that were not matched
/// - unmatched_cols: Column indices that were not matched
///
/// # Algorithm
/// Shortest augmenting path variant of Kuhn-Munkres with dual potentials, O(n²·m)
/// for n = min(rows, cols) and m = max(rows, cols). Arithmetic is exact (`i64`).
///
/// # Ties
/// Rows are inserted in ascending index order, and each augmentation grows towards
/// the column with the smallest reduced distance, the lowest column index winning
/// among equals. The result is therefore a deterministic function of the matrix;
/// under a fully uniform matrix row `i` receives column `i`.
pub fn linear_sum_assignment<C>(cost_matrix: &DMatrix<C>) -> AssignmentResult
where
    C: Scalar + Copy + Into<i64>,
{
    let (num_rows, num_cols) = cost_matrix.shape();

    let row_assignments = if num_rows <= num_cols {
        hungarian_algorithm(num_rows, num_cols, |i, j| cost_matrix[(i, j)].into())
    } else {
        // Solve the transposed problem and flip the pairs back.
        let col_assignments =
            hungarian_algorithm(num_cols, num_rows, |i, j| cost_matrix[(j, i)].into());
        let mut rows = vec![None; num_rows];
        for (col, row) in col_assignments.into_iter().enumerate() {
            if let Some(row) = row {
                rows[row] = Some(col);
            }
        }
        rows
    };

    let mut assignments = Vec::with_capacity(num_rows.min(num_cols));
    let mut matched_cols = vec![false; num_cols];
    let mut unmatched_rows = Vec::new();

    for (row_idx, col_idx) in row_assignments.into_iter().enumerate() {
        match col_idx {
            Some(col_idx) => {
                assignments.push(Assignment { row_idx, col_idx });
                matched_cols[col_idx] = true;
            }
            None => unmatched_rows.push(row_idx),
        }
    }

    let unmatched_cols: Vec<usize> = (0..num_cols).filter(|&j| !matched_cols[j]).collect();

    AssignmentResult {
        assignments,
        unmatched_rows,
        unmatched_cols,
    }
}

/// Hungarian algorithm (Kuhn-Munkres) for minimum cost assignment, `n_rows <= n_cols`.
///
/// Returns a vector where result[i] = Some(j) means row i is assigned to column j.
fn hungarian_algorithm<F>(n_rows: usize, n_cols: usize, cost: F) -> Vec<Option<usize>>
where
    F: Fn(usize, usize) -> i64,
{
    debug_assert!(n_rows <= n_cols);
    if n_rows == 0 {
        return Vec::new();
    }

    // Rows and columns are shifted by one: column 0 is a virtual column that roots
    // the alternating tree of the row being inserted, row 0 means "free".
    let mut row_potential = vec![0i64; n_rows + 1];
    let mut col_potential = vec![0i64; n_cols + 1];
    let mut col_owner = vec![0usize; n_cols + 1];
    let mut way = vec![0usize; n_cols + 1];
    let mut min_dist = vec![i64::MAX; n_cols + 1];
    let mut visited = vec![false; n_cols + 1];

    for row in 1..=n_rows {
        col_owner[0] = row;
        min_dist.fill(i64::MAX);
        visited.fill(false);
        let mut j0 = 0usize;

        // Grow the alternating tree until it reaches a free column.
        loop {
            visited[j0] = true;
            let i0 = col_owner[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0usize;

            for j in 1..=n_cols {
                if visited[j] {
                    continue;
                }
                let reduced = cost(i0 - 1, j - 1) - row_potential[i0] - col_potential[j];
                if reduced < min_dist[j] {
                    min_dist[j] = reduced;
                    way[j] = j0;
                }
                if min_dist[j] < delta {
                    delta = min_dist[j];
                    j1 = j;
                }
            }

            for j in 0..=n_cols {
                if visited[j] {
                    row_potential[col_owner[j]] += delta;
                    col_potential[j] -= delta;
                } else {
                    min_dist[j] -= delta;
                }
            }

            j0 = j1;
            if col_owner[j0] == 0 {
                break;
            }
        }

        // Augment along the recorded path back to the virtual column.
        loop {
            let j1 = way[j0];
            col_owner[j0] = col_owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut row_match = vec![None; n_rows];
    for j in 1..=n_cols {
        if col_owner[j] != 0 {
            row_match[col_owner[j] - 1] = Some(j - 1);
        }
    }
    row_match
}
