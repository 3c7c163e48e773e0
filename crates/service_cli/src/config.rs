//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags, in increasing order of precedence.

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use numbench_montecarlo::mc::DEFAULT_SAMPLES;
use serde::Deserialize;
use thiserror::Error;

/// Default inclusive bound for sieve runs
pub const DEFAULT_BOUND: u64 = 10_000_000;

/// Default number of timed sieve runs
pub const DEFAULT_RUNS: usize = 10;

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid store: {0}. Must be one of: sparse, dense")]
    InvalidStore(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Composite store backing the sieve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Hash set grown as composites are found
    #[default]
    Sparse,
    /// Bitset allocated up front
    Dense,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sparse" => Ok(StoreKind::Sparse),
            "dense" => Ok(StoreKind::Dense),
            _ => Err(ConfigError::InvalidStore(s.to_string())),
        }
    }
}

/// `[sieve]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SieveSettings {
    /// Inclusive upper bound
    pub bound: u64,
    /// Number of timed runs
    pub runs: usize,
    /// Composite store
    pub store: StoreKind,
}

impl Default for SieveSettings {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            runs: DEFAULT_RUNS,
            store: StoreKind::default(),
        }
    }
}

/// `[pi]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PiSettings {
    /// Number of Monte Carlo samples
    pub samples: u64,
    /// Seed; entropy when absent
    pub seed: Option<u64>,
    /// Parallel batches; 1 runs sequentially
    pub batches: usize,
}

impl Default for PiSettings {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
            batches: 1,
        }
    }
}

/// numbench configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumbenchConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Sieve settings
    pub sieve: SieveSettings,
    /// Monte Carlo settings
    pub pi: PiSettings,
}

impl NumbenchConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `NUMBENCH_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("NUMBENCH_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(bound) = lookup("NUMBENCH_SIEVE_BOUND") {
            self.sieve.bound = parse_value("sieve.bound", &bound)?;
        }

        if let Some(runs) = lookup("NUMBENCH_SIEVE_RUNS") {
            self.sieve.runs = parse_value("sieve.runs", &runs)?;
        }

        if let Some(store) = lookup("NUMBENCH_SIEVE_STORE") {
            self.sieve.store = store.parse::<StoreKind>()?;
        }

        if let Some(samples) = lookup("NUMBENCH_PI_SAMPLES") {
            self.pi.samples = parse_value("pi.samples", &samples)?;
        }

        if let Some(seed) = lookup("NUMBENCH_PI_SEED") {
            self.pi.seed = Some(parse_value("pi.seed", &seed)?);
        }

        if let Some(batches) = lookup("NUMBENCH_PI_BATCHES") {
            self.pi.batches = parse_value("pi.batches", &batches)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sieve.runs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "sieve.runs",
                value: "must be at least 1".to_string(),
            });
        }

        if self.pi.samples == 0 {
            return Err(ConfigError::InvalidValue {
                name: "pi.samples",
                value: "must be at least 1".to_string(),
            });
        }

        if self.pi.batches == 0 || self.pi.batches as u64 > self.pi.samples {
            return Err(ConfigError::InvalidValue {
                name: "pi.batches",
                value: format!("must be in range [1, {}]", self.pi.samples),
            });
        }

        Ok(())
    }
}

fn parse_value<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = NumbenchConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.sieve.bound, 10_000_000);
        assert_eq!(config.sieve.runs, 10);
        assert_eq!(config.sieve.store, StoreKind::Sparse);
        assert_eq!(config.pi.samples, 10_000_000);
        assert_eq!(config.pi.seed, None);
        assert_eq!(config.pi.batches, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NumbenchConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, NumbenchConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[sieve]
bound = 1000
store = "dense"

[pi]
seed = 42
"#
        )
        .unwrap();

        let config = NumbenchConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.sieve.bound, 1000);
        assert_eq!(config.sieve.runs, DEFAULT_RUNS);
        assert_eq!(config.sieve.store, StoreKind::Dense);
        assert_eq!(config.pi.seed, Some(42));
        assert_eq!(config.pi.samples, DEFAULT_SAMPLES);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sieve]\nbound = \"lots\"").unwrap();

        let result = NumbenchConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_overrides_take_precedence_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sieve]\nbound = 1000\nruns = 3").unwrap();

        let config = NumbenchConfig::load(file.path())
            .unwrap()
            .with_overrides(lookup_from(&[
                ("NUMBENCH_SIEVE_BOUND", "500"),
                ("NUMBENCH_PI_SEED", "7"),
                ("NUMBENCH_LOG_LEVEL", "WARN"),
            ]))
            .unwrap();

        assert_eq!(config.sieve.bound, 500);
        assert_eq!(config.sieve.runs, 3);
        assert_eq!(config.pi.seed, Some(7));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let result = NumbenchConfig::default()
            .with_overrides(lookup_from(&[("NUMBENCH_PI_SAMPLES", "-3")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name: "pi.samples",
                value: "-3".to_string()
            })
        );

        let result = NumbenchConfig::default()
            .with_overrides(lookup_from(&[("NUMBENCH_SIEVE_STORE", "bloom")]));
        assert_eq!(result, Err(ConfigError::InvalidStore("bloom".to_string())));
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let mut config = NumbenchConfig::default();
        config.pi.samples = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                name: "pi.samples",
                ..
            })
        ));

        let mut config = NumbenchConfig::default();
        config.sieve.runs = 0;
        assert!(config.validate().is_err());

        let mut config = NumbenchConfig::default();
        config.pi.samples = 4;
        config.pi.batches = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_store_override_parses_case_insensitively() {
        let config = NumbenchConfig::default()
            .with_overrides(lookup_from(&[("NUMBENCH_SIEVE_STORE", "Dense")]))
            .unwrap();
        assert_eq!(config.sieve.store, StoreKind::Dense);
        assert_eq!("SPARSE".parse::<StoreKind>(), Ok(StoreKind::Sparse));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::Error.to_string(), "error");
        assert!(LogLevel::from_str("loud").is_err());
    }
}
