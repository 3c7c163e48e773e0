//! Tallies and final estimates.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EstimatorError;

/// Running hit and total counters for a set of trials.
///
/// Partial tallies from independent batches combine with [`merge`](Self::merge).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CircleTally {
    /// Trials that landed in the unit disc.
    pub circle_hits: u64,
    /// All trials.
    pub total: u64,
}

impl CircleTally {
    /// Records one trial.
    #[inline]
    pub fn record(&mut self, in_circle: bool) {
        if in_circle {
            self.circle_hits += 1;
        }
        self.total += 1;
    }

    /// Sums two tallies.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            circle_hits: self.circle_hits + other.circle_hits,
            total: self.total + other.total,
        }
    }
}

/// Monte Carlo estimate of π.
///
/// `value = 4 × circle_hits / total_samples`, always in `[0, 4]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PiEstimate {
    value: f64,
    circle_hits: u64,
    total_samples: u64,
    seed: Option<u64>,
}

impl PiEstimate {
    /// Converts a tally into an estimate.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidSampleCount`] for an empty tally.
    pub fn from_tally(tally: CircleTally, seed: Option<u64>) -> Result<Self, EstimatorError> {
        if tally.total == 0 {
            return Err(EstimatorError::InvalidSampleCount(0));
        }
        debug_assert!(tally.circle_hits <= tally.total);

        Ok(Self {
            value: 4.0 * tally.circle_hits as f64 / tally.total as f64,
            circle_hits: tally.circle_hits,
            total_samples: tally.total,
            seed,
        })
    }

    /// The estimate of π.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Trials that landed in the unit disc.
    #[inline]
    pub fn circle_hits(&self) -> u64 {
        self.circle_hits
    }

    /// Number of trials drawn.
    #[inline]
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Seed that produced the estimate, if it came from a seeded generator
    /// owned by the estimator.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Fraction of trials in the disc (estimates π/4).
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        self.circle_hits as f64 / self.total_samples as f64
    }

    /// Standard error of the estimate, `4·√(p(1−p)/n)`.
    pub fn standard_error(&self) -> f64 {
        let p = self.hit_ratio();
        4.0 * (p * (1.0 - p) / self.total_samples as f64).sqrt()
    }

    /// Absolute distance from π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.value - PI).abs()
    }

    /// Tally this estimate was built from.
    #[inline]
    pub fn tally(&self) -> CircleTally {
        CircleTally {
            circle_hits: self.circle_hits,
            total: self.total_samples,
        }
    }
}
