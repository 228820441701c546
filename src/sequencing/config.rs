//! Sequencing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the second rule does when one opening pair cannot be completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stop the enumeration and return the first error, in pair order.
    #[default]
    Abort,
    /// Record the pair in [`Enumeration::skipped`](super::Enumeration) and continue.
    SkipPair,
}

/// Configuration for [`Sequencer`](super::Sequencer) runs.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_sequence::sequencing::{FailurePolicy, SequencingConfig};
///
/// let config = SequencingConfig::default()
///     .with_seed(42)
///     .with_parallel(true)
///     .with_time_limit(Duration::from_secs(5))
///     .with_failure_policy(FailurePolicy::SkipPair);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequencingConfig {
    /// Seed for the random start of the first rule. `None` draws one.
    pub seed: Option<u64>,

    /// Whether the second rule evaluates opening pairs on the rayon pool.
    pub parallel: bool,

    /// Deadline for the second rule. Pairs not started in time are not
    /// run and the report is flagged `timed_out`.
    pub time_limit: Option<Duration>,

    /// Handling of pairs that hit an invalid matrix state.
    pub failure_policy: FailurePolicy,
}

impl SequencingConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
