//! Greedy nearest-neighbor traversal (Gawett's rule).
//!
//! # Algorithm
//! From the current product, move to the cheapest product whose column
//! is still unmasked. The departed product is appended to the visited
//! order and its column masked across all rows. The last product reached
//! is appended once after the loop, so a run from an empty prefix
//! visits every product exactly once and sums `N - 1` setup costs.
//!
//! Each traversal owns a clone of the input matrix; the caller's matrix
//! is never modified.
//!
//! # Reference
//! Rosenkrantz, Stearns & Lewis (1977), nearest-neighbor heuristic

use tracing::debug;

use crate::error::{MatrixState, SequencingResult};
use crate::models::{SequenceResult, SetupMatrix};

/// Traversal state: position, accumulated cost, and visited prefix.
#[derive(Debug, Clone)]
pub(crate) struct Traversal {
    working: SetupMatrix,
    current: usize,
    total_cost: f64,
    visited: Vec<usize>,
}

impl Traversal {
    /// Fresh run from `start` with zero cost and an empty prefix.
    pub(crate) fn new(matrix: &SetupMatrix, start: usize) -> Self {
        Self {
            working: matrix.clone(),
            current: start,
            total_cost: 0.0,
            visited: Vec::with_capacity(matrix.size()),
        }
    }

    /// Run whose first transition `first -> second` is fixed.
    ///
    /// Seeds the cost with that transition, the prefix with `first`, and
    /// masks `first`'s column before the greedy continuation starts.
    pub(crate) fn forced(
        matrix: &SetupMatrix,
        first: usize,
        second: usize,
    ) -> SequencingResult<Self> {
        let opening = matrix
            .get(first, second)
            .ok_or(MatrixState::MissingTransition {
                from: first,
                to: second,
            })?;

        let mut working = matrix.clone();
        working.mask_column(first);

        let mut visited = Vec::with_capacity(matrix.size());
        visited.push(first);

        Ok(Self {
            working,
            current: second,
            total_cost: opening,
            visited,
        })
    }

    /// Runs the greedy loop to completion.
    ///
    /// # Errors
    /// [`MatrixState::NoSelectableTransition`] if a row has no valid
    /// entry left before the order is complete.
    pub(crate) fn run(mut self) -> SequencingResult<SequenceResult> {
        let n = self.working.size();
        let limit = n.saturating_sub(1);

        for _ in 0..limit {
            if self.visited.len() == limit {
                break;
            }

            let (next, cost) =
                self.working
                    .row_min(self.current)
                    .ok_or(MatrixState::NoSelectableTransition {
                        row: self.current,
                        visited: self.visited.len(),
                    })?;

            self.total_cost += cost;
            self.visited.push(self.current);
            self.working.mask_column(self.current);
            self.current = next;
        }

        self.visited.push(self.current);

        debug!(
            products = n,
            total_cost = self.total_cost,
            "traversal complete"
        );
        Ok(SequenceResult::new(self.visited, self.total_cost))
    }
}
