//! Integration tests for the Monte Carlo π estimator.
//!
//! Covers the public contract end to end: validation, range and counter
//! invariants, reproducibility and statistical convergence.

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use numbench_montecarlo::mc::{
    estimate_pi, estimate_pi_batched, EstimatorError, MonteCarloPiEstimator, PiEstimatorConfig,
    DEFAULT_SAMPLES,
};
use numbench_montecarlo::rng::SampleRng;
use proptest::prelude::*;

#[test]
fn test_default_estimator_uses_ten_million_samples() {
    let estimator = MonteCarloPiEstimator::default();
    assert_eq!(estimator.config().n_samples(), DEFAULT_SAMPLES);
    assert_eq!(DEFAULT_SAMPLES, 10_000_000);
}

#[test]
fn test_zero_samples_is_an_error() {
    let result = PiEstimatorConfig::builder().n_samples(0).build();
    assert_eq!(result.unwrap_err(), EstimatorError::InvalidSampleCount(0));
}

#[test]
fn test_mean_of_runs_converges() {
    let runs = 5;
    let mean = (0..runs)
        .map(|seed| {
            let mut rng = SampleRng::from_seed(seed);
            estimate_pi(&mut rng, 400_000).unwrap().value()
        })
        .sum::<f64>()
        / runs as f64;

    assert_abs_diff_eq!(mean, PI, epsilon = 0.01);
}

#[test]
fn test_full_default_sample_count_batched() {
    let config = PiEstimatorConfig::builder()
        .n_batches(8)
        .seed(20_240_101)
        .build()
        .unwrap();
    let estimate = MonteCarloPiEstimator::new(config)
        .unwrap()
        .estimate()
        .unwrap();

    assert_eq!(estimate.total_samples(), DEFAULT_SAMPLES);
    assert_abs_diff_eq!(estimate.value(), PI, epsilon = 0.01);
}

#[test]
fn test_batched_and_sequential_agree_statistically() {
    let mut rng = SampleRng::from_seed(99);
    let sequential = estimate_pi(&mut rng, 500_000).unwrap();
    let batched = estimate_pi_batched(500_000, 4, 99).unwrap();

    // Different streams, same distribution
    assert_abs_diff_eq!(sequential.value(), batched.value(), epsilon = 0.03);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any positive sample count yields a value in [0, 4] with consistent counters.
    #[test]
    fn prop_estimate_in_range(seed in any::<u64>(), n_samples in 1u64..2_000) {
        let mut rng = SampleRng::from_seed(seed);
        let estimate = estimate_pi(&mut rng, n_samples).unwrap();

        prop_assert!((0.0..=4.0).contains(&estimate.value()));
        prop_assert_eq!(estimate.total_samples(), n_samples);
        prop_assert!(estimate.circle_hits() <= estimate.total_samples());
    }

    /// Batched totals always equal the requested sample count.
    #[test]
    fn prop_batched_total_matches(
        seed in any::<u64>(),
        n_samples in 1u64..5_000,
        n_batches in 1usize..16,
    ) {
        prop_assume!(n_batches as u64 <= n_samples);
        let estimate = estimate_pi_batched(n_samples, n_batches, seed).unwrap();

        prop_assert_eq!(estimate.total_samples(), n_samples);
        prop_assert!((0.0..=4.0).contains(&estimate.value()));
    }
}
