//! Error types for the prime sieve.

use thiserror::Error;

/// Errors raised while constructing a sieve.
///
/// Enumeration itself never fails: once a [`PrimeSieve`](crate::PrimeSieve)
/// exists it always runs to exhaustion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SieveError {
    /// The bound is too large for a dense bitset store.
    #[error("Bound {bound} is too large for a dense composite store: must be at most {max}")]
    BoundTooLarge {
        /// The rejected bound.
        bound: u64,
        /// Largest bound a dense store accepts.
        max: u64,
    },
}
