//! Monte Carlo estimator configuration.
//!
//! This module provides configuration types and builders for π estimation.

use super::error::EstimatorError;

/// Number of samples used when none is specified.
pub const DEFAULT_SAMPLES: u64 = 10_000_000;

/// Monte Carlo π estimator configuration.
///
/// Immutable configuration specifying sampling parameters.
/// Use [`PiEstimatorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use numbench_montecarlo::mc::PiEstimatorConfig;
///
/// let config = PiEstimatorConfig::builder()
///     .n_samples(100_000)
///     .n_batches(4)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 100_000);
/// assert_eq!(config.n_batches(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PiEstimatorConfig {
    /// Number of trial points.
    n_samples: u64,
    /// Number of independently seeded batches; 1 runs sequentially.
    n_batches: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for PiEstimatorConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SAMPLES,
            n_batches: 1,
            seed: None,
        }
    }
}

impl PiEstimatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> PiEstimatorConfigBuilder {
        PiEstimatorConfigBuilder::default()
    }

    /// Returns the number of trial points.
    #[inline]
    pub fn n_samples(&self) -> u64 {
        self.n_samples
    }

    /// Returns the number of batches.
    #[inline]
    pub fn n_batches(&self) -> usize {
        self.n_batches
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if:
    /// - `n_samples` is 0
    /// - `n_batches` is 0 or greater than `n_samples`
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.n_samples == 0 {
            return Err(EstimatorError::InvalidSampleCount(self.n_samples));
        }
        if self.n_batches == 0 || self.n_batches as u64 > self.n_samples {
            return Err(EstimatorError::InvalidBatchCount {
                batches: self.n_batches,
                samples: self.n_samples,
            });
        }
        Ok(())
    }
}

/// Builder for [`PiEstimatorConfig`].
///
/// Unset fields fall back to [`DEFAULT_SAMPLES`], a single batch and entropy
/// seeding.
#[derive(Clone, Debug, Default)]
pub struct PiEstimatorConfigBuilder {
    n_samples: Option<u64>,
    n_batches: Option<usize>,
    seed: Option<u64>,
}

impl PiEstimatorConfigBuilder {
    /// Sets the number of trial points.
    ///
    /// # Arguments
    ///
    /// * `n_samples` - Number of samples, at least 1
    #[inline]
    pub fn n_samples(mut self, n_samples: u64) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the number of batches sampled in parallel.
    ///
    /// # Arguments
    ///
    /// * `n_batches` - Number of batches in [1, n_samples]
    #[inline]
    pub fn n_batches(mut self, n_batches: usize) -> Self {
        self.n_batches = Some(n_batches);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if the sample or batch count is invalid.
    pub fn build(self) -> Result<PiEstimatorConfig, EstimatorError> {
        let config = PiEstimatorConfig {
            n_samples: self.n_samples.unwrap_or(DEFAULT_SAMPLES),
            n_batches: self.n_batches.unwrap_or(1),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
