//! # Random Number Generation
//!
//! Seeded random number generation for the Monte Carlo estimator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator carries the seed it was initialised
//!   with, so any estimate can be replayed
//! - **Injection**: [`SampleRng`] implements [`rand::RngCore`]; the estimator
//!   accepts any `Rng`, so tests may pass their own generator
//! - **Closed interval**: sample coordinates are drawn from `[-1, 1]`
//!   inclusive at both ends
//!
//! ## Module Structure
//!
//! - [`prng`]: [`SampleRng`], the seeded PRNG wrapper
//! - [`point`]: [`Point`] and coordinate sampling
//!
//! ## Usage Example
//!
//! ```rust
//! use numbench_montecarlo::rng::SampleRng;
//!
//! let mut rng = SampleRng::from_seed(12345);
//!
//! let x = rng.gen_symmetric();
//! assert!((-1.0..=1.0).contains(&x));
//!
//! let point = rng.gen_point();
//! assert!(point.squared_norm() <= 2.0);
//! ```

mod point;
mod prng;

pub use point::{sample_point, symmetric_unit, Point};
pub use prng::SampleRng;
