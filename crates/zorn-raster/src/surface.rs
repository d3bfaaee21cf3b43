//! Raster surface that draw intents are composited onto.

use zorn_engine::{CanvasWash, DrawIntent, Frame, Point};

use crate::color::{blend, Pixel};
use crate::coverage::{bounds, covers};
use crate::png::RasterError;

/// A row-major RGBA surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Pixel>,
}

impl Surface {
    /// Create a surface filled with one pixel value.
    pub fn new(width: u32, height: u32, fill: Pixel) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions(format!(
                "surface must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let size = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![fill; size],
        })
    }

    /// Create a surface primed with the canvas wash.
    pub fn from_canvas(canvas: &CanvasWash, width: u32, height: u32) -> Result<Self, RasterError> {
        let mut surface = Self::new(width, height, Pixel::from_paint(&CanvasWash::BASE))?;
        for y in 0..height {
            for x in 0..width {
                surface.set(x, y, Pixel::from_paint(&canvas.color_at_pixel(x, y)));
            }
        }
        Ok(surface)
    }

    /// Rasterize a whole frame: the wash, then every intent in order.
    pub fn render_frame(frame: &Frame, width: u32, height: u32) -> Result<Self, RasterError> {
        let mut surface = Self::from_canvas(&frame.canvas, width, height)?;
        for intent in &frame.intents {
            surface.draw(intent);
        }
        log::debug!(
            "rasterized frame {} ({} intents) at {}x{}",
            frame.index,
            frame.intents.len(),
            width,
            height
        );
        Ok(surface)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.index(x, y);
        self.data[idx] = pixel;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Composite one intent. Each covered pixel is blended exactly once.
    pub fn draw(&mut self, intent: &DrawIntent) {
        let clipped = bounds(&intent.shape).and_then(|b| b.clip(self.width, self.height));
        let Some((x0, y0, x1, y1)) = clipped else {
            return;
        };

        let src = Pixel::from_rgba(&intent.color);
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if covers(&intent.shape, center) {
                    let idx = self.index(x, y);
                    self.data[idx] = blend(intent.blend, &self.data[idx], &src);
                }
            }
        }
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for pixel in &self.data {
            bytes.extend_from_slice(&pixel.to_rgba8());
        }
        bytes
    }
}
