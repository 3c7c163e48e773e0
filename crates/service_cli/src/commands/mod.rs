//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod pi;
pub mod primes;
pub mod time;

use numbench_sieve::PrimeSieve;

use crate::config::StoreKind;
use crate::Result;

/// Collect every prime up to `bound` with the selected composite store
pub(crate) fn collect_primes(bound: u64, store: StoreKind) -> Result<Vec<u64>> {
    let primes = match store {
        StoreKind::Sparse => PrimeSieve::new(bound).collect(),
        StoreKind::Dense => PrimeSieve::dense(bound)?.collect(),
    };
    Ok(primes)
}
