//! Error types for the numbench CLI.

use numbench_montecarlo::EstimatorError;
use numbench_sieve::SieveError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sieve construction error
    #[error("Sieve error: {0}")]
    Sieve(#[from] SieveError),

    /// Estimator error
    #[error("Estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Output serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::from(EstimatorError::InvalidSampleCount(0));
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = CliError::InvalidArgument("runs must be positive".to_string());
        assert!(err.to_string().contains("runs must be positive"));
    }
}
