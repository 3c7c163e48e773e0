//! Primes command implementation
//!
//! Prints every prime up to the bound, or only their count.

use std::io::{BufWriter, Write};

use tracing::info;

use super::collect_primes;
use crate::config::StoreKind;
use crate::Result;

/// Run the primes command
pub fn run(bound: u64, store: StoreKind, count_only: bool) -> Result<()> {
    info!("Enumerating primes up to {} ({:?} store)", bound, store);

    let primes = collect_primes(bound, store)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_primes(&mut out, &primes, count_only)?;
    out.flush()?;

    info!("Found {} primes", primes.len());
    Ok(())
}

fn write_primes<W: Write>(out: &mut W, primes: &[u64], count_only: bool) -> Result<()> {
    if count_only {
        writeln!(out, "{}", primes.len())?;
    } else {
        for prime in primes {
            writeln!(out, "{}", prime)?;
        }
    }
    Ok(())
}
