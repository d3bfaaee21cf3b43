//! Surface pixels and blend arithmetic.

use zorn_engine::{BlendMode, PaintColor, Rgba};

/// A surface pixel with components in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Pixel {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque pixel from a 0-255 paint color.
    pub fn from_paint(color: &PaintColor) -> Self {
        Self::rgb(color.r / 255.0, color.g / 255.0, color.b / 255.0)
    }

    /// Pixel from a 0-255 intent color, keeping its alpha.
    pub fn from_rgba(color: &Rgba) -> Self {
        Self {
            r: color.r / 255.0,
            g: color.g / 255.0,
            b: color.b / 255.0,
            a: color.alpha,
        }
    }

    /// Linear interpolation towards `other`, `t` clamped to [0, 1].
    pub fn lerp(&self, other: &Pixel, t: f64) -> Pixel {
        let t = t.clamp(0.0, 1.0);
        Pixel {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn multiply(&self, other: &Pixel) -> Pixel {
        Pixel {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
            a: self.a,
        }
    }

    /// Overlay with `self` as the base layer.
    pub fn overlay(&self, other: &Pixel) -> Pixel {
        fn overlay_channel(base: f64, blend: f64) -> f64 {
            if base < 0.5 {
                2.0 * base * blend
            } else {
                1.0 - 2.0 * (1.0 - base) * (1.0 - blend)
            }
        }

        Pixel {
            r: overlay_channel(self.r, other.r),
            g: overlay_channel(self.g, other.g),
            b: overlay_channel(self.b, other.b),
            a: self.a,
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Composite `src` over `dst`, weighted by the source alpha.
pub fn blend(mode: BlendMode, dst: &Pixel, src: &Pixel) -> Pixel {
    let blended = match mode {
        BlendMode::Normal => Pixel { a: dst.a, ..*src },
        BlendMode::Multiply => dst.multiply(src),
        BlendMode::Overlay => dst.overlay(src),
    };

    dst.lerp(&blended, src.a)
}
