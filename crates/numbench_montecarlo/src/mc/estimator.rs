//! Monte Carlo π estimator.
//!
//! Points are drawn uniformly from the square `[-1, 1]²`; the fraction landing
//! in the unit disc approaches `π / 4`.

use rand::Rng;
use tracing::debug;

use super::config::PiEstimatorConfig;
use super::error::EstimatorError;
use super::parallel::estimate_pi_batched;
use super::result::{CircleTally, PiEstimate};
use crate::rng::{sample_point, symmetric_unit, SampleRng};

/// Runs `n_samples` trials against `rng` and returns the raw tally.
pub(crate) fn tally_samples<R: Rng + ?Sized>(rng: &mut R, n_samples: u64) -> CircleTally {
    let coordinate = symmetric_unit();
    let mut tally = CircleTally::default();

    for _ in 0..n_samples {
        let point = sample_point(rng, &coordinate);
        tally.record(point.in_unit_circle());
    }

    tally
}

/// Estimates π from `n_samples` random points drawn from `rng`.
///
/// # Errors
///
/// Returns [`EstimatorError::InvalidSampleCount`] if `n_samples` is 0.
///
/// # Examples
///
/// ```rust
/// use numbench_montecarlo::mc::estimate_pi;
/// use numbench_montecarlo::rng::SampleRng;
///
/// let mut rng = SampleRng::from_seed(42);
/// let estimate = estimate_pi(&mut rng, 100_000).unwrap();
/// assert!((estimate.value() - std::f64::consts::PI).abs() < 0.05);
///
/// assert!(estimate_pi(&mut rng, 0).is_err());
/// ```
pub fn estimate_pi<R: Rng + ?Sized>(
    rng: &mut R,
    n_samples: u64,
) -> Result<PiEstimate, EstimatorError> {
    if n_samples == 0 {
        return Err(EstimatorError::InvalidSampleCount(n_samples));
    }
    PiEstimate::from_tally(tally_samples(rng, n_samples), None)
}

/// Configured π estimator.
///
/// Owns a validated [`PiEstimatorConfig`]. Each call to
/// [`estimate`](Self::estimate) builds fresh generators, so repeated calls
/// with a fixed seed return the same estimate.
///
/// # Examples
///
/// ```rust
/// use numbench_montecarlo::mc::{MonteCarloPiEstimator, PiEstimatorConfig};
///
/// let config = PiEstimatorConfig::builder()
///     .n_samples(200_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let estimator = MonteCarloPiEstimator::new(config).unwrap();
/// let estimate = estimator.estimate().unwrap();
///
/// assert_eq!(estimate.total_samples(), 200_000);
/// assert_eq!(estimate.seed(), Some(42));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloPiEstimator {
    config: PiEstimatorConfig,
}

impl MonteCarloPiEstimator {
    /// Creates an estimator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if the configuration fails validation.
    pub fn new(config: PiEstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a sequential, entropy-seeded estimator for `n_samples` trials.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidSampleCount`] if `n_samples` is 0.
    pub fn with_samples(n_samples: u64) -> Result<Self, EstimatorError> {
        Self::new(PiEstimatorConfig::builder().n_samples(n_samples).build()?)
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &PiEstimatorConfig {
        &self.config
    }

    /// Runs the estimation.
    ///
    /// Uses the configured seed, or draws one from entropy and reports it in
    /// the result. More than one batch switches to the parallel path.
    pub fn estimate(&self) -> Result<PiEstimate, EstimatorError> {
        let seed = self
            .config
            .seed()
            .unwrap_or_else(|| rand::thread_rng().gen());
        let n_samples = self.config.n_samples();
        let n_batches = self.config.n_batches();

        debug!(n_samples, n_batches, seed, "estimating pi");

        let estimate = if n_batches > 1 {
            estimate_pi_batched(n_samples, n_batches, seed)?
        } else {
            let mut rng = SampleRng::from_seed(seed);
            PiEstimate::from_tally(tally_samples(&mut rng, n_samples), Some(seed))?
        };

        debug!(
            value = estimate.value(),
            standard_error = estimate.standard_error(),
            "estimate complete"
        );
        Ok(estimate)
    }

    /// Runs the configured number of trials sequentially against an injected
    /// generator.
    ///
    /// The batch count and seed of the configuration are ignored; the result
    /// carries no seed.
    pub fn estimate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PiEstimate, EstimatorError> {
        estimate_pi(rng, self.config.n_samples())
    }
}
