//! The four-pigment Zorn palette and paint color arithmetic.
//!
//! Channels are floats in 0-255 so noise variation can be carried without
//! quantizing until the raster stage.

use serde::{Deserialize, Serialize};

use crate::intent::Rgba;
use crate::noise::{GradientNoise, Noise2D};

/// An opaque paint color with channels in 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl PaintColor {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Blend towards `other` by `ratio`, rounding each channel.
    pub fn mix(&self, other: &PaintColor, ratio: f64) -> PaintColor {
        let channel = |a: f64, b: f64| (a * (1.0 - ratio) + b * ratio).round();
        PaintColor {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Add `delta` to every channel, clamped to 0-255.
    pub fn shift(&self, delta: f64) -> PaintColor {
        PaintColor {
            r: (self.r + delta).clamp(0.0, 255.0),
            g: (self.g + delta).clamp(0.0, 255.0),
            b: (self.b + delta).clamp(0.0, 255.0),
        }
    }

    /// Brightness variation from the noise field at canvas position `(x, y)`.
    pub fn vary(&self, noise: &GradientNoise, x: f64, y: f64, intensity: f64) -> PaintColor {
        let n = noise.sample(x * 0.01, y * 0.01);
        self.shift(n * intensity * 255.0)
    }

    pub fn with_alpha(&self, alpha: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            alpha,
        }
    }
}

/// Zorn palette pigments.
pub mod palette {
    use super::PaintColor;

    pub const YELLOW_OCHRE: PaintColor = PaintColor::rgb(227.0, 168.0, 87.0);
    pub const VERMILION: PaintColor = PaintColor::rgb(217.0, 96.0, 59.0);
    pub const IVORY_BLACK: PaintColor = PaintColor::rgb(41.0, 36.0, 33.0);
    pub const TITANIUM_WHITE: PaintColor = PaintColor::rgb(252.0, 250.0, 242.0);
}

/// Pigment for a pitch, chosen by pitch class quartile.
pub fn palette_color(pitch: i32) -> PaintColor {
    let normalized = pitch.rem_euclid(12) as f64 / 12.0;

    if normalized < 0.25 {
        palette::YELLOW_OCHRE
    } else if normalized < 0.5 {
        palette::VERMILION
    } else if normalized < 0.75 {
        palette::IVORY_BLACK
    } else {
        palette::TITANIUM_WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_quartiles() {
        assert_eq!(palette_color(60), palette::YELLOW_OCHRE); // C
        assert_eq!(palette_color(62), palette::YELLOW_OCHRE); // D
        assert_eq!(palette_color(63), palette::VERMILION); // D#
        assert_eq!(palette_color(66), palette::IVORY_BLACK); // F#
        assert_eq!(palette_color(69), palette::TITANIUM_WHITE); // A
        assert_eq!(palette_color(71), palette::TITANIUM_WHITE); // B
    }

    #[test]
    fn test_negative_pitch_wraps() {
        assert_eq!(palette_color(-3), palette_color(9));
    }

    #[test]
    fn test_mix_rounds() {
        let mixed = palette::VERMILION.mix(&palette::YELLOW_OCHRE, 0.7);
        // 217 * 0.3 + 227 * 0.7 = 224.0
        assert_eq!(mixed.r, 224.0);
        assert_eq!(mixed.r.fract(), 0.0);
        assert_eq!(mixed.g.fract(), 0.0);
    }

    #[test]
    fn test_vary_does_not_touch_palette() {
        let noise = GradientNoise::for_run(42);
        let varied = palette::IVORY_BLACK.vary(&noise, 333.0, 517.0, 0.5);
        assert_eq!(palette::IVORY_BLACK, PaintColor::rgb(41.0, 36.0, 33.0));
        assert!(varied.r >= 0.0 && varied.r <= 255.0);
    }
}
