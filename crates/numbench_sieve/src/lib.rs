//! # Prime Sieve (Kernel Layer)
//!
//! Lazy enumeration of all primes up to an inclusive bound using an
//! incremental Sieve of Eratosthenes.
//!
//! ## Module Structure
//!
//! - [`sieve`]: the [`PrimeSieve`] iterator and convenience helpers
//! - [`store`]: composite stores ([`SparseComposites`], [`DenseComposites`])
//! - [`error`]: [`SieveError`]
//!
//! ## Usage Example
//!
//! ```rust
//! use numbench_sieve::PrimeSieve;
//!
//! // Memory grows with the composites discovered
//! let primes: Vec<u64> = PrimeSieve::new(30).collect();
//! assert_eq!(primes.len(), 10);
//!
//! // Bitset-backed, allocated once up front
//! let dense: Vec<u64> = PrimeSieve::dense(30).unwrap().collect();
//! assert_eq!(primes, dense);
//! ```
//!
//! ## Choosing a Store
//!
//! | Store | Memory | Speed |
//! |-------|--------|-------|
//! | `SparseComposites` | proportional to composites marked | hashing per lookup |
//! | `DenseComposites` | `bound / 8` bytes up front | one bit test per lookup |
//!
//! Bounds below 2 (and negative bounds passed to
//! [`PrimeSieve::from_signed`]) produce an empty sequence.

#![warn(missing_docs)]

pub mod error;
pub mod sieve;
pub mod store;

pub use error::SieveError;
pub use sieve::{count_primes, is_prime, primes_up_to, PrimeSieve};
pub use store::{CompositeStore, DenseComposites, SparseComposites, MAX_DENSE_BOUND};
