//! Integration tests for the prime sieve.
//!
//! Verifies ordering, primality and completeness of the emitted sequence
//! against an independent trial-division oracle, for both composite stores.

use numbench_sieve::{is_prime, primes_up_to, PrimeSieve, SieveError, MAX_DENSE_BOUND};
use proptest::prelude::*;

#[test]
fn test_known_prime_lists() {
    assert_eq!(primes_up_to(10), vec![2, 3, 5, 7]);
    assert_eq!(
        primes_up_to(30),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
}

#[test]
fn test_prime_count_one_million() {
    assert_eq!(PrimeSieve::dense(1_000_000).unwrap().count(), 78_498);
}

#[test]
fn test_last_prime_below_bound() {
    assert_eq!(PrimeSieve::new(100_000).last(), Some(99_991));
}

#[test]
fn test_dense_bound_limit() {
    assert!(matches!(
        PrimeSieve::dense(u64::MAX),
        Err(SieveError::BoundTooLarge { bound: u64::MAX, .. })
    ));
    assert!(MAX_DENSE_BOUND > 10_000_000);
}

#[test]
fn test_partial_consumption_does_not_leak_into_next_sieve() {
    let mut abandoned = PrimeSieve::new(500);
    let _ = abandoned.nth(10);
    drop(abandoned);

    assert_eq!(primes_up_to(500), PrimeSieve::new(500).collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every emitted value is a prime in (1, bound], in strictly increasing order.
    #[test]
    fn prop_sequence_is_sorted_primes(bound in 0u64..3_000) {
        let primes: Vec<u64> = PrimeSieve::new(bound).collect();

        for window in primes.windows(2) {
            prop_assert!(window[0] < window[1], "not strictly increasing: {:?}", window);
        }
        for &p in &primes {
            prop_assert!(p > 1 && p <= bound, "{} outside (1, {}]", p, bound);
            prop_assert!((2..p).all(|d| p % d != 0), "{} has a divisor", p);
        }
    }

    /// No prime in [2, bound] is skipped.
    #[test]
    fn prop_sequence_is_complete(bound in 0u64..3_000) {
        let primes: Vec<u64> = PrimeSieve::new(bound).collect();
        let expected: Vec<u64> = (0..=bound).filter(|&n| is_prime(n)).collect();
        prop_assert_eq!(primes, expected);
    }

    /// Bounds below 2, including negative ones, give nothing.
    #[test]
    fn prop_small_bounds_are_empty(bound in i64::MIN..2) {
        prop_assert_eq!(PrimeSieve::from_signed(bound).count(), 0);
    }

    /// Both stores agree and repeated runs are identical.
    #[test]
    fn prop_stores_agree_and_repeat(bound in 0u64..20_000) {
        let first: Vec<u64> = PrimeSieve::new(bound).collect();
        let second: Vec<u64> = PrimeSieve::new(bound).collect();
        let dense: Vec<u64> = PrimeSieve::dense(bound).unwrap().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &dense);
    }
}
