//! numbench CLI - Timing Harness for the Numeric Kernels
//!
//! This is the operational entry point for the prime sieve and the Monte
//! Carlo π estimator.
//!
//! # Commands
//!
//! - `numbench time` - Time repeated sieve runs, one duration per line
//! - `numbench primes` - Print the primes up to a bound
//! - `numbench pi` - Estimate π by Monte Carlo sampling
//!
//! # Configuration
//!
//! Settings come from `numbench.toml` (if present), then `NUMBENCH_*`
//! environment variables, then command-line flags. `RUST_LOG` overrides the
//! configured log level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::pi::OutputFormat;
use config::{NumbenchConfig, StoreKind};
pub use error::{CliError, Result};

/// Prime sieve and Monte Carlo benchmarks
#[derive(Parser)]
#[command(name = "numbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "numbench.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time repeated sieve runs
    Time {
        /// Inclusive upper bound
        #[arg(short, long)]
        bound: Option<u64>,

        /// Number of runs
        #[arg(short, long)]
        runs: Option<usize>,

        /// Composite store
        #[arg(short, long, value_enum)]
        store: Option<StoreKind>,
    },

    /// Print the primes up to a bound
    Primes {
        /// Inclusive upper bound
        #[arg(short, long)]
        bound: Option<u64>,

        /// Composite store
        #[arg(short, long, value_enum)]
        store: Option<StoreKind>,

        /// Print only the number of primes
        #[arg(long)]
        count: bool,
    },

    /// Estimate pi by Monte Carlo sampling
    Pi {
        /// Number of samples
        #[arg(short = 'n', long)]
        samples: Option<u64>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Number of parallel batches
        #[arg(short, long)]
        batches: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = NumbenchConfig::load(&cli.config)?.with_env_override()?;
    apply_cli_overrides(&mut config, &cli.command);
    config.validate()?;

    // Initialise tracing
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = ?config, "resolved configuration");

    match cli.command {
        Commands::Time { .. } => {
            commands::time::run(config.sieve.bound, config.sieve.runs, config.sieve.store)
        }
        Commands::Primes { count, .. } => {
            commands::primes::run(config.sieve.bound, config.sieve.store, count)
        }
        Commands::Pi { format, .. } => commands::pi::run(&config.pi, format),
    }
}

/// Command-line flags take precedence over file and environment settings
fn apply_cli_overrides(config: &mut NumbenchConfig, command: &Commands) {
    match *command {
        Commands::Time {
            bound,
            runs,
            store,
        } => {
            if let Some(bound) = bound {
                config.sieve.bound = bound;
            }
            if let Some(runs) = runs {
                config.sieve.runs = runs;
            }
            if let Some(store) = store {
                config.sieve.store = store;
            }
        }
        Commands::Primes { bound, store, .. } => {
            if let Some(bound) = bound {
                config.sieve.bound = bound;
            }
            if let Some(store) = store {
                config.sieve.store = store;
            }
        }
        Commands::Pi {
            samples,
            seed,
            batches,
            ..
        } => {
            if let Some(samples) = samples {
                config.pi.samples = samples;
            }
            if seed.is_some() {
                config.pi.seed = seed;
            }
            if let Some(batches) = batches {
                config.pi.batches = batches;
            }
        }
    }
}
