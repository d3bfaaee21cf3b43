//! Canvas texture wash: the linen grain under every frame.

use super::{GradientNoise, Noise2D};
use crate::color::PaintColor;

/// The wash is sampled on a grid of this many pixels; each cell shares the
/// value at its top-left corner.
pub const WASH_CELL: u32 = 2;

/// Octaves as `(frequency, weight)`.
const OCTAVES: [(f64, f64); 3] = [(0.01, 0.5), (0.05, 0.3), (0.1, 0.2)];

/// Peak brightness offset of the wash, in 0-255 channel units.
const WASH_STRENGTH: f64 = 15.0;

/// Deterministic multi-octave brightness variation over the raw linen base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasWash {
    noise: GradientNoise,
}

impl CanvasWash {
    /// Raw linen ground color.
    pub const BASE: PaintColor = PaintColor::rgb(242.0, 235.0, 220.0);

    pub fn new(noise: GradientNoise) -> Self {
        Self { noise }
    }

    /// Brightness offset at a pixel, in channel units, snapped to the wash grid.
    pub fn variation_at_pixel(&self, px: u32, py: u32) -> f64 {
        let gx = px - px % WASH_CELL;
        let gy = py - py % WASH_CELL;
        self.sample(gx as f64, gy as f64)
    }

    /// Ground color at a pixel.
    pub fn color_at_pixel(&self, px: u32, py: u32) -> PaintColor {
        Self::BASE.shift(self.variation_at_pixel(px, py))
    }
}

impl Noise2D for CanvasWash {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let total: f64 = OCTAVES
            .iter()
            .map(|&(frequency, weight)| self.noise.sample(x * frequency, y * frequency) * weight)
            .sum();
        total * WASH_STRENGTH
    }
}
