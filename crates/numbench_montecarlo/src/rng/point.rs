//! Sample points in the square `[-1, 1] × [-1, 1]`.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// A single trial point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate in `[-1, 1]`.
    pub x: f64,
    /// Vertical coordinate in `[-1, 1]`.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance from the origin, `x² + y²`.
    #[inline]
    pub fn squared_norm(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns `true` if the point lies in the closed unit disc.
    #[inline]
    pub fn in_unit_circle(&self) -> bool {
        self.squared_norm() <= 1.0
    }
}

/// Uniform distribution over the closed interval `[-1, 1]`.
#[inline]
pub fn symmetric_unit() -> Uniform<f64> {
    Uniform::new_inclusive(-1.0, 1.0)
}

/// Draws a point with independent coordinates from `coordinate`.
#[inline]
pub fn sample_point<R: Rng + ?Sized>(rng: &mut R, coordinate: &Uniform<f64>) -> Point {
    let x = coordinate.sample(rng);
    let y = coordinate.sample(rng);
    Point { x, y }
}
