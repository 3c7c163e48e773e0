//! Time command implementation
//!
//! Runs the sieve repeatedly at a fixed bound, printing the wall-clock
//! duration of each run in seconds, one per line.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::collect_primes;
use crate::config::StoreKind;
use crate::{CliError, Result};

/// Aggregate of the timed runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    /// Number of runs
    pub runs: usize,
    /// Fastest run
    pub min: Duration,
    /// Mean run time
    pub mean: Duration,
    /// Slowest run
    pub max: Duration,
}

impl TimingSummary {
    /// Summarise a set of durations; `None` when empty
    pub fn from_durations(durations: &[Duration]) -> Option<Self> {
        let min = *durations.iter().min()?;
        let max = *durations.iter().max()?;
        let total: Duration = durations.iter().sum();
        let runs = durations.len();

        Some(Self {
            runs,
            min,
            mean: total / u32::try_from(runs).unwrap_or(u32::MAX),
            max,
        })
    }

    /// Summary line printed after the per-run durations
    pub fn report(&self, prime_count: usize) -> String {
        format!(
            "{} runs, {} primes: min {:.6}s, mean {:.6}s, max {:.6}s",
            self.runs,
            prime_count,
            self.min.as_secs_f64(),
            self.mean.as_secs_f64(),
            self.max.as_secs_f64()
        )
    }
}

/// Run the time command
pub fn run(bound: u64, runs: usize, store: StoreKind) -> Result<()> {
    if runs == 0 {
        return Err(CliError::InvalidArgument(
            "runs must be at least 1".to_string(),
        ));
    }

    info!("Timing sieve: bound={}, runs={}, store={:?}", bound, runs, store);

    let mut durations = Vec::with_capacity(runs);
    let mut prime_count = 0;

    for run in 0..runs {
        let started = Instant::now();
        let primes = collect_primes(bound, store)?;
        let elapsed = started.elapsed();

        prime_count = primes.len();
        debug!(run, primes = prime_count, "sieve run complete");
        println!("{}", elapsed.as_secs_f64());
        durations.push(elapsed);
    }

    if let Some(summary) = TimingSummary::from_durations(&durations) {
        println!("{}", summary.report(prime_count));
        info!(runs = summary.runs, primes = prime_count, "timing complete");
    }

    Ok(())
}
