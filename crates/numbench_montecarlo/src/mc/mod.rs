//! Monte Carlo estimation of π.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPiEstimator
//! ├── PiEstimatorConfig   (sample count, batches, seed)
//! ├── SampleRng           (seeded coordinate sampling)
//! └── Orchestration
//!     ├── estimate_pi()           sequential, injected Rng
//!     └── estimate_pi_batched()   parallel batches on Rayon
//! ```
//!
//! # Algorithm
//!
//! For each trial draw `x, y` uniformly from `[-1, 1]`; count the trial as a
//! hit when `x² + y² ≤ 1`. The estimate is `4 × hits / trials`.
//!
//! # Reproducibility
//!
//! With a seed set, [`MonteCarloPiEstimator::estimate`] is deterministic for
//! both the sequential and the batched path. Without one, a seed is drawn from
//! entropy and reported through [`PiEstimate::seed`].
//!
//! ```rust
//! use numbench_montecarlo::mc::{MonteCarloPiEstimator, PiEstimatorConfig};
//!
//! let config = PiEstimatorConfig::builder()
//!     .n_samples(400_000)
//!     .n_batches(4)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let estimate = MonteCarloPiEstimator::new(config).unwrap().estimate().unwrap();
//! assert!((estimate.value() - std::f64::consts::PI).abs() < 0.02);
//! ```

mod config;
mod error;
mod estimator;
mod parallel;
mod result;

pub use config::{PiEstimatorConfig, PiEstimatorConfigBuilder, DEFAULT_SAMPLES};
pub use error::EstimatorError;
pub use estimator::{estimate_pi, MonteCarloPiEstimator};
pub use parallel::{batch_seeds, batch_sizes, estimate_pi_batched};
pub use result::{CircleTally, PiEstimate};
