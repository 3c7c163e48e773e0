//! Batched parallel estimation.
//!
//! Trials are independent, so the sample count is split into batches that run
//! on the Rayon pool. Batch seeds are drawn up front from a `StdRng` seeded
//! with the base seed, so each batch owns a [`SampleRng`] and the merged
//! result is independent of thread scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::trace;

use super::error::EstimatorError;
use super::estimator::tally_samples;
use super::result::{CircleTally, PiEstimate};
use crate::rng::SampleRng;

/// Splits `n_samples` into `n_batches` sizes differing by at most one.
///
/// The first `n_samples % n_batches` batches carry the extra sample.
pub fn batch_sizes(n_samples: u64, n_batches: usize) -> Vec<u64> {
    if n_batches == 0 {
        return Vec::new();
    }
    let batches = n_batches as u64;
    let base = n_samples / batches;
    let extra = n_samples % batches;

    (0..batches)
        .map(|batch| base + u64::from(batch < extra))
        .collect()
}

/// Draws one seed per batch from a generator seeded with `base_seed`.
pub fn batch_seeds(base_seed: u64, n_batches: usize) -> Vec<u64> {
    let mut seeder = StdRng::seed_from_u64(base_seed);
    (0..n_batches).map(|_| seeder.gen()).collect()
}

/// Estimates π over `n_batches` independently seeded batches in parallel.
///
/// # Errors
///
/// Returns `EstimatorError` if `n_samples` is 0 or `n_batches` is outside
/// `[1, n_samples]`.
///
/// # Examples
///
/// ```rust
/// use numbench_montecarlo::mc::estimate_pi_batched;
///
/// let a = estimate_pi_batched(100_000, 4, 9).unwrap();
/// let b = estimate_pi_batched(100_000, 4, 9).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.total_samples(), 100_000);
/// ```
pub fn estimate_pi_batched(
    n_samples: u64,
    n_batches: usize,
    seed: u64,
) -> Result<PiEstimate, EstimatorError> {
    if n_samples == 0 {
        return Err(EstimatorError::InvalidSampleCount(n_samples));
    }
    if n_batches == 0 || n_batches as u64 > n_samples {
        return Err(EstimatorError::InvalidBatchCount {
            batches: n_batches,
            samples: n_samples,
        });
    }

    let sizes = batch_sizes(n_samples, n_batches);
    let seeds = batch_seeds(seed, n_batches);

    let tally = sizes
        .par_iter()
        .zip(seeds.par_iter())
        .enumerate()
        .map(|(batch, (&size, &batch_seed))| {
            let mut rng = SampleRng::from_seed(batch_seed);
            let partial = tally_samples(&mut rng, size);
            trace!(batch, size, hits = partial.circle_hits, "batch complete");
            partial
        })
        .reduce(CircleTally::default, CircleTally::merge);

    PiEstimate::from_tally(tally, Some(seed))
}
