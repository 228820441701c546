//! Gawett's sequencing rules.
//!
//! A greedy nearest-neighbor traversal over a [`SetupMatrix`](crate::models::SetupMatrix),
//! exposed as two rules:
//!
//! - **First rule**: a single traversal from one start product.
//! - **Second rule**: every ordered opening pair `(first, second)` is
//!   forced, then completed greedily; all resulting orders are returned.
//!
//! # Usage
//!
//! ```
//! use u_sequence::models::SetupMatrix;
//! use u_sequence::sequencing::{FailurePolicy, Sequencer, SequencingConfig};
//!
//! let matrix = SetupMatrix::from_setup_times(vec![
//!     vec![0.0, 2.0, 5.0],
//!     vec![3.0, 0.0, 1.0],
//!     vec![4.0, 6.0, 0.0],
//! ])
//! .unwrap();
//!
//! let config = SequencingConfig::default()
//!     .with_parallel(true)
//!     .with_failure_policy(FailurePolicy::SkipPair);
//! let report = Sequencer::second_rule(&matrix, &config).unwrap();
//! assert_eq!(report.pairs()[1], ("A->C->B", 11.0));
//! ```
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), nearest-neighbor heuristic
//! - Allahverdi et al. (2008), "A survey of scheduling problems with
//!   setup times or costs"

mod config;
mod runner;
mod traversal;

pub use config::{FailurePolicy, SequencingConfig};
pub use runner::{Enumeration, Sequencer, SkippedPair};
