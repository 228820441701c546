//! Rule entry points.
//!
//! [`Sequencer`] exposes the two Gawett rules over a [`SetupMatrix`]:
//!
//! - **First rule**: one greedy traversal from a single start product
//!   (random from an injected source, or given).
//! - **Second rule**: one greedy traversal per ordered opening pair
//!   `(first, second)`, `first != second`, giving `N × (N − 1)` orders.
//!   Results are ordered by `first` ascending, then `second` ascending,
//!   whether pairs run sequentially or on the rayon pool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::{FailurePolicy, SequencingConfig};
use super::traversal::Traversal;
use crate::error::{MatrixState, SequencingError, SequencingResult};
use crate::models::{SequenceResult, SetupMatrix};

/// An opening pair the second rule could not complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPair {
    pub first: usize,
    pub second: usize,
    /// Display form of the error that stopped the pair.
    pub reason: String,
}

/// Outcome of a second-rule enumeration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enumeration {
    /// Completed orders, in `(first, second)` iteration order.
    pub results: Vec<SequenceResult>,
    /// Pairs dropped under [`FailurePolicy::SkipPair`].
    pub skipped: Vec<SkippedPair>,
    /// Whether the cancel flag stopped the run early.
    pub cancelled: bool,
    /// Whether the time limit stopped the run early.
    pub timed_out: bool,
}

impl Enumeration {
    /// Number of completed orders.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no order was completed.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether every opening pair produced an order.
    pub fn is_complete(&self) -> bool {
        !self.cancelled && !self.timed_out && self.skipped.is_empty()
    }

    /// Cheapest order; the earliest pair wins ties.
    pub fn best(&self) -> Option<&SequenceResult> {
        self.results
            .iter()
            .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
    }

    /// `(label, total cost)` pairs in result order.
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.results.iter().map(SequenceResult::as_pair).collect()
    }
}

/// Runs Gawett's first and second rules.
///
/// # Usage
///
/// ```
/// use u_sequence::models::SetupMatrix;
/// use u_sequence::sequencing::{Sequencer, SequencingConfig};
///
/// let matrix = SetupMatrix::from_setup_times(vec![
///     vec![0.0, 4.0, 1.0],
///     vec![2.0, 0.0, 3.0],
///     vec![5.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let single = Sequencer::first_rule(&matrix, &SequencingConfig::default().with_seed(1)).unwrap();
/// assert_eq!(single.len(), 3);
///
/// let report = Sequencer::second_rule(&matrix, &SequencingConfig::default()).unwrap();
/// assert!(report.is_complete());
/// assert_eq!(report.best().unwrap().total_cost, 2.0);
/// ```
pub struct Sequencer;

impl Sequencer {
    /// First rule from a random start drawn from `config.seed`.
    pub fn first_rule(
        matrix: &SetupMatrix,
        config: &SequencingConfig,
    ) -> SequencingResult<SequenceResult> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::first_rule_with_rng(matrix, &mut rng)
    }

    /// First rule from a start chosen uniformly by `rng`.
    ///
    /// # Errors
    /// [`MatrixState::TooFewProducts`] for an empty matrix.
    pub fn first_rule_with_rng<R: Rng>(
        matrix: &SetupMatrix,
        rng: &mut R,
    ) -> SequencingResult<SequenceResult> {
        if matrix.is_empty() {
            return Err(MatrixState::TooFewProducts {
                products: 0,
                required: 1,
            }
            .into());
        }
        let start = rng.random_range(0..matrix.size());
        debug!(start, "first rule: random start");
        Traversal::new(matrix, start).run()
    }

    /// First rule from a given start product.
    ///
    /// # Errors
    /// [`SequencingError::StartOutOfRange`] if `start >= N`.
    pub fn first_rule_from(matrix: &SetupMatrix, start: usize) -> SequencingResult<SequenceResult> {
        if start >= matrix.size() {
            return Err(SequencingError::StartOutOfRange {
                start,
                products: matrix.size(),
            });
        }
        Traversal::new(matrix, start).run()
    }

    /// Second rule with default settings: every order, or the first error.
    pub fn enumerate_all(matrix: &SetupMatrix) -> SequencingResult<Vec<SequenceResult>> {
        Ok(Self::second_rule(matrix, &SequencingConfig::default())?.results)
    }

    /// Second rule.
    ///
    /// # Errors
    /// [`MatrixState::TooFewProducts`] if `N < 2`; under
    /// [`FailurePolicy::Abort`], the first pair error in iteration order.
    pub fn second_rule(
        matrix: &SetupMatrix,
        config: &SequencingConfig,
    ) -> SequencingResult<Enumeration> {
        Self::second_rule_with_cancel(matrix, config, None)
    }

    /// Second rule with an optional cancellation flag.
    ///
    /// The flag and the time limit are checked before each pair starts.
    /// Orders completed before the stop are returned.
    pub fn second_rule_with_cancel(
        matrix: &SetupMatrix,
        config: &SequencingConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SequencingResult<Enumeration> {
        let n = matrix.size();
        if n < 2 {
            return Err(MatrixState::TooFewProducts {
                products: n,
                required: 2,
            }
            .into());
        }

        let pairs = opening_pairs(n);
        let stop = StopCondition {
            cancel: cancel.as_deref(),
            deadline: config.time_limit.map(|limit| Instant::now() + limit),
        };

        let outcomes: Vec<PairOutcome> = if config.parallel {
            pairs
                .par_iter()
                .map(|&(first, second)| run_pair(matrix, first, second, &stop))
                .collect()
        } else {
            let mut outcomes = Vec::with_capacity(pairs.len());
            for &(first, second) in &pairs {
                let outcome = run_pair(matrix, first, second, &stop);
                let halt = match &outcome {
                    PairOutcome::Stopped(_) => true,
                    PairOutcome::Failed { .. } => config.failure_policy == FailurePolicy::Abort,
                    PairOutcome::Done(_) => false,
                };
                outcomes.push(outcome);
                if halt {
                    break;
                }
            }
            outcomes
        };

        let mut report = Enumeration {
            results: Vec::with_capacity(pairs.len()),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome {
                PairOutcome::Done(result) => report.results.push(result),
                PairOutcome::Failed {
                    first,
                    second,
                    error,
                } => match config.failure_policy {
                    FailurePolicy::Abort => {
                        warn!(first, second, %error, "second rule aborted");
                        return Err(error);
                    }
                    FailurePolicy::SkipPair => {
                        warn!(first, second, %error, "skipping opening pair");
                        report.skipped.push(SkippedPair {
                            first,
                            second,
                            reason: error.to_string(),
                        });
                    }
                },
                PairOutcome::Stopped(StopReason::Cancelled) => report.cancelled = true,
                PairOutcome::Stopped(StopReason::TimedOut) => report.timed_out = true,
            }
        }

        if report.cancelled || report.timed_out {
            warn!(
                completed = report.results.len(),
                total = pairs.len(),
                cancelled = report.cancelled,
                timed_out = report.timed_out,
                "second rule stopped early"
            );
        }
        info!(
            products = n,
            orders = report.results.len(),
            skipped = report.skipped.len(),
            "second rule finished"
        );

        Ok(report)
    }
}

/// Ordered opening pairs: `first` outer, `second` inner, `first != second`.
fn opening_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|first| {
            (0..n)
                .filter(move |&second| second != first)
                .map(move |second| (first, second))
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum StopReason {
    Cancelled,
    TimedOut,
}

enum PairOutcome {
    Done(SequenceResult),
    Failed {
        first: usize,
        second: usize,
        error: SequencingError,
    },
    Stopped(StopReason),
}

struct StopCondition<'a> {
    cancel: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
}

impl StopCondition<'_> {
    fn check(&self) -> Option<StopReason> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Some(StopReason::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Some(StopReason::TimedOut);
        }
        None
    }
}

fn run_pair(matrix: &SetupMatrix, first: usize, second: usize, stop: &StopCondition) -> PairOutcome {
    if let Some(reason) = stop.check() {
        return PairOutcome::Stopped(reason);
    }

    debug!(first, second, "opening pair");
    match Traversal::forced(matrix, first, second).and_then(Traversal::run) {
        Ok(result) => PairOutcome::Done(result),
        Err(error) => PairOutcome::Failed {
            first,
            second,
            error,
        },
    }
}
