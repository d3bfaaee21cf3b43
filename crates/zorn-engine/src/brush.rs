//! Bristle-chain oil brush.
//!
//! An [`OilBrush`] drags a bundle of [`Bristle`] chains behind a smoothed
//! cursor. Each chain is a string of joints held at fixed rest lengths, so
//! the hairs trail and bend as the stroke changes direction.

use std::f64::consts::FRAC_PI_2;

use crate::color::PaintColor;
use crate::intent::{BlendMode, LineCap, Point, Rgba, Shape, TechniqueKind};
use crate::noise::{GradientNoise, Noise2D};
use crate::strokes::Painter;

/// Cursor positions averaged to find the stroke direction.
pub const HISTORY_LEN: usize = 4;

const MAX_BRISTLE_LENGTH: f64 = 15.0;
const MAX_BRISTLE_THICKNESS: f64 = 5.0;
const BRISTLE_VERTICAL_NOISE: f64 = 8.0;
const MAX_BRISTLE_HORIZONTAL_NOISE: f64 = 4.0;
const NOISE_SPEED_FACTOR: f64 = 0.04;

/// Largest brush size used by [`Painter::oil_brushstroke`].
const MAX_BRUSH_SIZE: f64 = 8.0;

/// A single hair: a chain of joints with tapered thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct Bristle {
    positions: Vec<Point>,
    lengths: Vec<f64>,
    thicknesses: Vec<f64>,
}

impl Bristle {
    /// Build a chain of `n_elements` segments. A zero count is raised to one.
    pub fn new(n_elements: usize, thickness: f64) -> Self {
        let n_elements = n_elements.max(1);
        let n_positions = n_elements + 1;
        let decrement = thickness / n_elements as f64;

        Self {
            positions: vec![Point::default(); n_positions],
            lengths: (0..n_positions).map(|i| (n_positions - i) as f64).collect(),
            thicknesses: (0..n_positions)
                .map(|i| thickness - (i as f64 - 1.0) * decrement)
                .collect(),
        }
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Rest length between joint `i - 1` and joint `i`.
    pub fn rest_length(&self, i: usize) -> f64 {
        self.lengths[i]
    }

    /// Move every joint to `position`.
    pub fn set_position(&mut self, position: Point) {
        self.positions.fill(position);
    }

    /// Move the head to `position` and let the tail follow at rest lengths.
    pub fn update_position(&mut self, position: Point) {
        self.positions[0] = position;

        for i in 1..self.positions.len() {
            let prev = self.positions[i - 1];
            let pos = self.positions[i];
            let angle = (prev.y - pos.y).atan2(prev.x - pos.x);
            self.positions[i] = prev.offset(angle, -self.lengths[i]);
        }
    }

    fn paint(&self, color: Rgba, painter: &mut Painter) {
        for (i, segment) in self.positions.windows(2).enumerate() {
            painter.emit(
                TechniqueKind::OilBrushstroke,
                Shape::Polyline {
                    points: vec![segment[0], segment[1]],
                    width: self.thicknesses[i + 1],
                    cap: LineCap::Round,
                },
                color,
                BlendMode::Normal,
            );
        }
    }
}

/// A bundle of bristles following a smoothed cursor.
#[derive(Debug, Clone)]
pub struct OilBrush {
    position: Point,
    bristles: Vec<Bristle>,
    offsets: Vec<Point>,
    anchors: Vec<Point>,
    history: Vec<Point>,
    average: Point,
    noise_seed: f64,
    updates: usize,
    horizontal_noise: f64,
}

impl OilBrush {
    /// Build a brush of `size`, drawing its bristle layout from the frame stream.
    pub fn new(size: f64, painter: &mut Painter) -> Self {
        let n_bristles = (size * (1.6 + painter.random() * 0.3)).round().max(0.0) as usize;
        let noise_seed = painter.random() * 1000.0;

        let bristle_length = size.min(MAX_BRISTLE_LENGTH);
        let n_elements = (2.0 * bristle_length).sqrt().round() as usize;
        let thickness = (0.8 * bristle_length).min(MAX_BRISTLE_THICKNESS);

        let mut bristles = Vec::with_capacity(n_bristles);
        let mut offsets = Vec::with_capacity(n_bristles);
        for _ in 0..n_bristles {
            bristles.push(Bristle::new(n_elements, thickness));
            offsets.push(Point::new(
                size * (painter.random() - 0.5),
                BRISTLE_VERTICAL_NOISE * (painter.random() - 0.5),
            ));
        }

        Self {
            position: Point::default(),
            anchors: vec![Point::default(); n_bristles],
            bristles,
            offsets,
            history: Vec::with_capacity(HISTORY_LEN),
            average: Point::default(),
            noise_seed,
            updates: 0,
            horizontal_noise: (0.3 * size).min(MAX_BRISTLE_HORIZONTAL_NOISE),
        }
    }

    pub fn bristle_count(&self) -> usize {
        self.bristles.len()
    }

    pub fn bristles(&self) -> &[Bristle] {
        &self.bristles
    }

    /// Place the brush at `position` and forget the cursor history.
    pub fn init(&mut self, position: Point) {
        self.position = position;
        self.history.clear();
        self.average = position;
        self.updates = 0;
    }

    /// Advance the cursor to `position`.
    pub fn update(&mut self, position: Point, noise: &GradientNoise, update_elements: bool) {
        self.position = position;

        let history_size = self.history.len();
        if history_size < HISTORY_LEN {
            self.history.push(position);
        } else {
            self.history[self.updates % HISTORY_LEN] = position;
        }

        let current_size = self.history.len();
        let (mut sum_x, mut sum_y) = (0.0, 0.0);
        for p in &self.history {
            sum_x += p.x;
            sum_y += p.y;
        }
        let new_average = Point::new(sum_x / current_size as f64, sum_y / current_size as f64);

        let direction =
            FRAC_PI_2 + (new_average.y - self.average.y).atan2(new_average.x - self.average.x);
        self.average = new_average;

        self.update_anchors(direction, noise);

        if update_elements {
            if current_size == HISTORY_LEN {
                for (bristle, anchor) in self.bristles.iter_mut().zip(&self.anchors) {
                    bristle.update_position(*anchor);
                }
            } else if current_size == HISTORY_LEN - 1 {
                for (bristle, anchor) in self.bristles.iter_mut().zip(&self.anchors) {
                    bristle.set_position(*anchor);
                }
            }
        }

        self.updates += 1;
    }

    fn update_anchors(&mut self, direction: f64, noise: &GradientNoise) {
        if self.history.len() < HISTORY_LEN - 1 {
            return;
        }

        let (sin, cos) = direction.sin_cos();
        let noise_pos = self.noise_seed + NOISE_SPEED_FACTOR * self.updates as f64;

        for (b, (anchor, offset)) in self.anchors.iter_mut().zip(&self.offsets).enumerate() {
            let x = offset.x + self.horizontal_noise * (noise.sample(noise_pos + 0.1 * b as f64, 0.0) - 0.5);
            let y = offset.y;
            *anchor = Point::new(
                self.position.x + (x * cos - y * sin),
                self.position.y + (x * sin + y * cos),
            );
        }
    }

    /// Paint every bristle once the history is full. `colors` is per bristle.
    pub fn paint(&self, colors: &[Rgba], painter: &mut Painter) {
        if self.history.len() != HISTORY_LEN {
            return;
        }
        for (bristle, color) in self.bristles.iter().zip(colors) {
            bristle.paint(*color, painter);
        }
    }

    /// Bristle anchors, once the history is full.
    pub fn anchors(&self) -> Option<&[Point]> {
        (self.history.len() == HISTORY_LEN).then_some(self.anchors.as_slice())
    }
}

impl Painter<'_> {
    /// Directional stroke painted with a simulated bristle brush.
    #[allow(clippy::too_many_arguments)]
    pub fn oil_brushstroke(
        &mut self,
        x: f64,
        y: f64,
        angle: f64,
        length: f64,
        width: f64,
        color: &PaintColor,
        alpha: f64,
    ) {
        let mut brush = OilBrush::new(width.min(MAX_BRUSH_SIZE), self);
        let steps = ((length / 6.0).ceil().max(3.0)) as usize;

        brush.init(Point::new(x, y));

        let noise_seed = self.random() * 1000.0;
        let noise = self.noise;
        let colors: Vec<Rgba> = (0..brush.bristle_count())
            .map(|b| {
                let delta = 12.0 * (noise.sample(noise_seed + 0.4 * b as f64, 0.0) - 0.5);
                color.shift(delta).with_alpha(alpha)
            })
            .collect();

        for step in 0..steps {
            let t = step as f64 / steps as f64;
            let offset_angle = angle + (self.random() - 0.5) * 0.3;
            let cursor = Point::new(x, y).offset(offset_angle, length * t);

            brush.update(cursor, noise, true);
            brush.paint(&colors, self);
        }
    }
}
