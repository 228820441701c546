//! Production sequencing from setup-time matrices.
//!
//! Computes near-optimal processing orders for a set of products given
//! the pairwise changeover (setup) times between them, using Gawett's
//! greedy nearest-neighbor rules.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SetupMatrix`, `SequenceResult`
//! - **`sequencing`**: The greedy traversal and its two entry points
//!   (first rule: single run; second rule: every forced opening pair)
//! - **`labels`**: Product index ↔ display label conversion
//!   (`0 → "A"`, `26 → "A2"`)
//!
//! # Example
//!
//! ```
//! use u_sequence::models::SetupMatrix;
//! use u_sequence::sequencing::Sequencer;
//!
//! let matrix = SetupMatrix::from_setup_times(vec![
//!     vec![0.0, 2.0, 5.0],
//!     vec![3.0, 0.0, 1.0],
//!     vec![4.0, 6.0, 0.0],
//! ])
//! .unwrap();
//!
//! let result = Sequencer::first_rule_from(&matrix, 0).unwrap();
//! assert_eq!(result.sequence, "A->B->C");
//! assert_eq!(result.total_cost, 3.0);
//!
//! let all = Sequencer::enumerate_all(&matrix).unwrap();
//! assert_eq!(all.len(), 6);
//! ```
//!
//! # References
//!
//! - Allahverdi et al. (2008), "A survey of scheduling problems with
//!   setup times or costs"
//! - Rosenkrantz, Stearns & Lewis (1977), "An analysis of several
//!   heuristics for the traveling salesman problem"

pub mod error;
pub mod labels;
pub mod models;
pub mod sequencing;

pub use error::{MatrixState, SequencingError, SequencingResult};
