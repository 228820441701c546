//! Error types for matrix construction and sequencing runs.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type SequencingResult<T> = Result<T, SequencingError>;

/// Errors surfaced by the sequencing engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequencingError {
    /// The working matrix cannot support the requested traversal.
    #[error("invalid matrix state: {0}")]
    InvalidMatrixState(MatrixState),

    /// A row's length differs from the number of rows.
    #[error("matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A forced start index is outside `[0, N)`.
    #[error("start index {start} out of range for {products} products")]
    StartOutOfRange { start: usize, products: usize },
}

/// Why a matrix cannot be traversed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixState {
    /// Every entry in the current row is missing.
    #[error("no selectable transition from product {row} after {visited} visited")]
    NoSelectableTransition { row: usize, visited: usize },

    /// The forced opening transition has no cost.
    #[error("transition {from} -> {to} is missing")]
    MissingTransition { from: usize, to: usize },

    /// Not enough products for the requested rule.
    #[error("need at least {required} products, got {products}")]
    TooFewProducts { products: usize, required: usize },
}

impl From<MatrixState> for SequencingError {
    fn from(state: MatrixState) -> Self {
        SequencingError::InvalidMatrixState(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_state_converts() {
        let err: SequencingError = MatrixState::MissingTransition { from: 0, to: 2 }.into();
        assert_eq!(
            err,
            SequencingError::InvalidMatrixState(MatrixState::MissingTransition { from: 0, to: 2 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SequencingError::from(MatrixState::NoSelectableTransition { row: 3, visited: 2 });
        assert_eq!(
            err.to_string(),
            "invalid matrix state: no selectable transition from product 3 after 2 visited"
        );

        let err = SequencingError::NotSquare {
            row: 1,
            expected: 3,
            found: 2,
        };
        assert!(err.to_string().contains("row 1 has 2 entries"));
    }
}
