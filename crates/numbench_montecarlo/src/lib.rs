//! # Monte Carlo π Estimator (Kernel Layer)
//!
//! Statistical estimation of π by sampling points uniformly in the square
//! `[-1, 1]²` and counting those inside the unit disc.
//!
//! ## Module Structure
//!
//! - [`rng`]: seeded random number generation ([`rng::SampleRng`])
//! - [`mc`]: configuration, estimators and results
//!
//! ## Usage Example
//!
//! ```rust
//! use numbench_montecarlo::mc::estimate_pi;
//! use numbench_montecarlo::rng::SampleRng;
//!
//! // Inject a seeded generator for reproducible runs
//! let mut rng = SampleRng::from_seed(12345);
//! let estimate = estimate_pi(&mut rng, 100_000).unwrap();
//!
//! assert!(estimate.value() >= 0.0 && estimate.value() <= 4.0);
//! assert_eq!(estimate.total_samples(), 100_000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`mc::PiEstimate`]

#![warn(missing_docs)]

pub mod mc;
pub mod rng;

pub use mc::{EstimatorError, MonteCarloPiEstimator, PiEstimate, PiEstimatorConfig};
