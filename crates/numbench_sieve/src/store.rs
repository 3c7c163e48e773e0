//! Composite number stores backing the sieve.
//!
//! A [`CompositeStore`] records integers already proven composite. Two
//! implementations are provided:
//!
//! - [`SparseComposites`]: a hash set that grows as composites are
//!   discovered. Memory is bounded by the composites marked so far.
//! - [`DenseComposites`]: a packed bitset of `bound + 1` bits, allocated once.
//!   Usually much faster, at the cost of up-front allocation.
//!
//! Both are used through static dispatch; the sieve is generic over the store.

use std::collections::HashSet;

use tracing::debug;

use crate::error::SieveError;

/// Largest bound accepted by [`DenseComposites`] (2^34, i.e. a 2 GiB bitset).
pub const MAX_DENSE_BOUND: u64 = 1 << 34;

const WORD_BITS: u64 = u64::BITS as u64;

/// Storage for integers known to be composite.
pub trait CompositeStore {
    /// Returns `true` if `n` has been marked composite.
    fn contains(&self, n: u64) -> bool;

    /// Marks `n` as composite.
    fn mark(&mut self, n: u64);

    /// Marks `prime², prime² + prime, ...` up to and including `bound`.
    ///
    /// Multiples below `prime²` already carry a smaller prime factor and are
    /// marked by then. Nothing is marked when `prime²` overflows or exceeds
    /// `bound`.
    fn mark_multiples(&mut self, prime: u64, bound: u64) {
        let Some(mut multiple) = prime.checked_mul(prime) else {
            return;
        };
        while multiple <= bound {
            self.mark(multiple);
            match multiple.checked_add(prime) {
                Some(next) => multiple = next,
                None => break,
            }
        }
    }
}

/// Hash-set backed store that grows with the composites discovered.
#[derive(Clone, Debug, Default)]
pub struct SparseComposites {
    marked: HashSet<u64>,
}

impl SparseComposites {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of composites marked so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Returns `true` if nothing has been marked yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

impl CompositeStore for SparseComposites {
    #[inline]
    fn contains(&self, n: u64) -> bool {
        self.marked.contains(&n)
    }

    #[inline]
    fn mark(&mut self, n: u64) {
        self.marked.insert(n);
    }
}

/// Packed bitset covering `[0, bound]`.
///
/// Indices above the bound are never consulted by the sieve; marking them is
/// ignored.
#[derive(Clone, Debug)]
pub struct DenseComposites {
    words: Vec<u64>,
    bound: u64,
}

impl DenseComposites {
    /// Allocates a zeroed bitset for `[0, bound]`.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::BoundTooLarge`] if `bound > MAX_DENSE_BOUND` or
    /// the word count does not fit in `usize` on this target.
    pub fn with_bound(bound: u64) -> Result<Self, SieveError> {
        let too_large = SieveError::BoundTooLarge {
            bound,
            max: MAX_DENSE_BOUND,
        };
        if bound > MAX_DENSE_BOUND {
            return Err(too_large);
        }
        let n_words = usize::try_from(bound / WORD_BITS + 1).map_err(|_| too_large)?;

        debug!(bound, n_words, "allocating dense composite store");
        Ok(Self {
            words: vec![0; n_words],
            bound,
        })
    }

    /// Upper index covered by the bitset.
    #[inline]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    #[inline]
    fn locate(n: u64) -> (usize, u64) {
        // n <= MAX_DENSE_BOUND, so the word index always fits.
        ((n / WORD_BITS) as usize, 1 << (n % WORD_BITS))
    }
}

impl CompositeStore for DenseComposites {
    #[inline]
    fn contains(&self, n: u64) -> bool {
        if n > self.bound {
            return false;
        }
        let (word, mask) = Self::locate(n);
        self.words[word] & mask != 0
    }

    #[inline]
    fn mark(&mut self, n: u64) {
        if n > self.bound {
            return;
        }
        let (word, mask) = Self::locate(n);
        self.words[word] |= mask;
    }
}
