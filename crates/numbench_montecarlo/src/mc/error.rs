//! Error types for the Monte Carlo estimator.
//!
//! Every error is an input validation failure raised before any sampling
//! takes place.

use thiserror::Error;

/// Estimator configuration and invocation errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EstimatorError {
    /// Sample count must be positive; zero would divide by zero.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(u64),

    /// Batch count outside `[1, n_samples]`.
    #[error("Invalid batch count {batches}: must be in range [1, {samples}]")]
    InvalidBatchCount {
        /// Requested number of batches.
        batches: usize,
        /// Configured number of samples.
        samples: u64,
    },
}
