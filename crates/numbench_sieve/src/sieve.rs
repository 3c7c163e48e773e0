//! Lazy incremental Sieve of Eratosthenes.
//!
//! [`PrimeSieve`] scans candidates `2, 3, ..., bound` in order. A candidate
//! absent from the composite store is prime: it is returned from `next` and
//! its multiples from `p²` onwards are marked before the scan resumes on the
//! following call.

use std::iter::FusedIterator;

use crate::error::SieveError;
use crate::store::{CompositeStore, DenseComposites, SparseComposites};

/// Smallest prime; scanning starts here.
const FIRST_CANDIDATE: u64 = 2;

/// Lazy, finite stream of the primes in `[2, bound]`, strictly increasing.
///
/// Every sieve owns its composite store, so two sieves with the same bound
/// yield identical sequences, and dropping a partially consumed sieve leaves
/// nothing behind.
///
/// # Examples
///
/// ```rust
/// use numbench_sieve::PrimeSieve;
///
/// let primes: Vec<u64> = PrimeSieve::new(10).collect();
/// assert_eq!(primes, vec![2, 3, 5, 7]);
///
/// // Early termination is fine
/// let first_three: Vec<u64> = PrimeSieve::new(1_000).take(3).collect();
/// assert_eq!(first_three, vec![2, 3, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct PrimeSieve<S = SparseComposites> {
    /// Inclusive upper limit.
    bound: u64,
    /// Next candidate to examine; `None` once exhausted.
    cursor: Option<u64>,
    /// Integers proven composite so far.
    composites: S,
}

impl PrimeSieve<SparseComposites> {
    /// Creates a sieve whose composite store grows as composites are found.
    ///
    /// A bound below 2 yields an empty sequence.
    #[inline]
    pub fn new(bound: u64) -> Self {
        Self::with_store(bound, SparseComposites::new())
    }

    /// Creates a sieve from a signed bound.
    ///
    /// Negative bounds contain no primes and yield an empty sequence rather
    /// than an error.
    ///
    /// ```rust
    /// use numbench_sieve::PrimeSieve;
    ///
    /// assert_eq!(PrimeSieve::from_signed(-5).count(), 0);
    /// assert_eq!(PrimeSieve::from_signed(7).count(), 4);
    /// ```
    #[inline]
    pub fn from_signed(bound: i64) -> Self {
        Self::new(u64::try_from(bound).unwrap_or(0))
    }
}

impl PrimeSieve<DenseComposites> {
    /// Creates a sieve backed by a bitset of `bound + 1` bits.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::BoundTooLarge`] if the bound exceeds
    /// [`MAX_DENSE_BOUND`](crate::MAX_DENSE_BOUND).
    pub fn dense(bound: u64) -> Result<Self, SieveError> {
        Ok(Self::with_store(bound, DenseComposites::with_bound(bound)?))
    }
}

impl<S: CompositeStore> PrimeSieve<S> {
    /// Creates a sieve over an explicit composite store.
    ///
    /// The store is expected to be empty; anything already marked is treated
    /// as composite.
    pub fn with_store(bound: u64, composites: S) -> Self {
        Self {
            bound,
            cursor: Some(FIRST_CANDIDATE),
            composites,
        }
    }

    /// Inclusive upper limit of the enumeration.
    #[inline]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Next candidate the scan will examine, or `None` once exhausted.
    #[inline]
    pub fn cursor(&self) -> Option<u64> {
        self.cursor.filter(|&candidate| candidate <= self.bound)
    }

    /// Read access to the composite store.
    #[inline]
    pub fn composites(&self) -> &S {
        &self.composites
    }
}

impl<S: CompositeStore> Iterator for PrimeSieve<S> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while let Some(candidate) = self.cursor {
            if candidate > self.bound {
                self.cursor = None;
                return None;
            }
            self.cursor = candidate.checked_add(1);

            if !self.composites.contains(candidate) {
                self.composites.mark_multiples(candidate, self.bound);
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor() {
            Some(candidate) => {
                let remaining = usize::try_from(self.bound - candidate).ok();
                (0, remaining.and_then(|r| r.checked_add(1)))
            }
            None => (0, Some(0)),
        }
    }
}

impl<S: CompositeStore> FusedIterator for PrimeSieve<S> {}

/// Collects every prime in `[2, bound]`.
///
/// ```rust
/// use numbench_sieve::primes_up_to;
///
/// assert_eq!(primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub fn primes_up_to(bound: u64) -> Vec<u64> {
    PrimeSieve::new(bound).collect()
}

/// Counts the primes in `[2, bound]`.
pub fn count_primes(bound: u64) -> usize {
    PrimeSieve::new(bound).count()
}

/// Trial-division primality check.
///
/// Independent of the sieve; `O(√n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3_u64;
    while divisor.saturating_mul(divisor) <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
