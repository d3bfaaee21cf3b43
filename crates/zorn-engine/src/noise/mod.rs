//! Noise primitives.
//!
//! Noise functions are pure: sampling never touches the per-frame random
//! stream, so spatial jitter can be added anywhere without shifting the
//! draw order.

mod gradient;
mod wash;

pub use gradient::GradientNoise;
pub use wash::{CanvasWash, WASH_CELL};

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    /// Returns a value roughly in [-1, 1].
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Quintic interpolation (smoother than smoothstep).
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
