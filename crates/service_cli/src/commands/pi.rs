//! Pi command implementation
//!
//! Estimates π by Monte Carlo sampling and prints the result.

use clap::ValueEnum;
use numbench_montecarlo::mc::{MonteCarloPiEstimator, PiEstimate, PiEstimatorConfig};
use tracing::info;

use crate::config::PiSettings;
use crate::Result;

/// Output format for the estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Table,
    /// JSON object
    Json,
}

/// Run the pi command
pub fn run(settings: &PiSettings, format: OutputFormat) -> Result<()> {
    info!("Estimating pi...");
    info!("  Samples: {}", settings.samples);
    info!("  Batches: {}", settings.batches);
    match settings.seed {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: (entropy)"),
    }

    let estimate = estimate(settings)?;
    println!("{}", render(&estimate, format)?);

    info!("Estimation complete");
    Ok(())
}

fn estimate(settings: &PiSettings) -> Result<PiEstimate> {
    let config = PiEstimatorConfig::builder()
        .n_samples(settings.samples)
        .n_batches(settings.batches)
        .maybe_seed(settings.seed)
        .build()?;

    Ok(MonteCarloPiEstimator::new(config)?.estimate()?)
}

fn render(estimate: &PiEstimate, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(estimate)?,
        OutputFormat::Table => {
            let seed = estimate
                .seed()
                .map_or_else(|| "-".to_string(), |s| s.to_string());
            format!(
                "pi estimate    {:.8}\n\
                 std error      {:.8}\n\
                 abs error      {:.8}\n\
                 circle hits    {}\n\
                 samples        {}\n\
                 seed           {}",
                estimate.value(),
                estimate.standard_error(),
                estimate.abs_error(),
                estimate.circle_hits(),
                estimate.total_samples(),
                seed
            )
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn settings(samples: u64, batches: usize) -> PiSettings {
        PiSettings {
            samples,
            seed: Some(42),
            batches,
        }
    }

    #[test]
    fn test_estimate_from_settings() {
        let estimate = estimate(&settings(10_000, 2)).unwrap();
        assert_eq!(estimate.total_samples(), 10_000);
        assert_eq!(estimate.seed(), Some(42));
    }

    #[test]
    fn test_zero_samples_is_an_error() {
        assert!(matches!(
            estimate(&settings(0, 1)),
            Err(CliError::Estimator(_))
        ));
    }

    #[test]
    fn test_render_table() {
        let estimate = estimate(&settings(1_000, 1)).unwrap();
        let table = render(&estimate, OutputFormat::Table).unwrap();
        assert!(table.starts_with("pi estimate"));
        assert!(table.contains("samples        1000"));
        assert!(table.contains("seed           42"));
    }

    #[test]
    fn test_render_json() {
        let estimate = estimate(&settings(1_000, 1)).unwrap();
        let json = render(&estimate, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_samples"], 1_000);
        assert_eq!(value["seed"], 42);
    }
}
