//! Sequencing results.

use serde::{Deserialize, Serialize};

use crate::labels::encode_sequence;

/// A complete production order and its cumulative setup cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceResult {
    /// Display form of `order`, e.g. `"A->C->B"`.
    pub sequence: String,
    /// Visited product indices in processing order.
    pub order: Vec<usize>,
    /// Sum of the setup costs along `order`.
    pub total_cost: f64,
}

impl SequenceResult {
    /// Creates a result, deriving the label string from `order`.
    pub fn new(order: Vec<usize>, total_cost: f64) -> Self {
        Self {
            sequence: encode_sequence(&order),
            order,
            total_cost,
        }
    }

    /// Number of products in the order.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the order is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The first product processed.
    pub fn first(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// `(label, total cost)` pair as handed to a host layer.
    pub fn as_pair(&self) -> (&str, f64) {
        (&self.sequence, self.total_cost)
    }
}
