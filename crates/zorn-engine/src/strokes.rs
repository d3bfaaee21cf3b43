//! Painterly mark primitives.
//!
//! Each mark turns a handful of parameters into draw intents, drawing from
//! the frame's random stream in a fixed order. Reordering draws inside a mark
//! changes every mark painted after it in the frame.

use std::f64::consts::{PI, TAU};

use crate::color::{palette, PaintColor};
use crate::intent::{curve_through, BlendMode, DrawIntent, LineCap, Point, Rgba, Shape, TechniqueKind};
use crate::noise::{GradientNoise, Noise2D};
use crate::rng::RngState;

/// Slide streak orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Up,
    Down,
}

/// Emits marks for one frame, drawing from the frame's random stream.
pub struct Painter<'a> {
    pub(crate) rng: &'a mut RngState,
    pub(crate) noise: &'a GradientNoise,
    intents: &'a mut Vec<DrawIntent>,
}

impl<'a> Painter<'a> {
    pub fn new(
        rng: &'a mut RngState,
        noise: &'a GradientNoise,
        intents: &'a mut Vec<DrawIntent>,
    ) -> Self {
        Self {
            rng,
            noise,
            intents,
        }
    }

    /// Next value from the frame's random stream.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Next value from the frame's random stream, centered on zero.
    #[inline]
    fn jitter(&mut self) -> f64 {
        self.rng.next_f64() - 0.5
    }

    #[inline]
    fn vary(&self, color: &PaintColor, x: f64, y: f64, intensity: f64) -> PaintColor {
        color.vary(self.noise, x, y, intensity)
    }

    pub(crate) fn emit(&mut self, technique: TechniqueKind, shape: Shape, color: Rgba, blend: BlendMode) {
        self.intents.push(DrawIntent {
            technique,
            shape,
            color,
            blend,
        });
    }

    fn stroke(
        &mut self,
        technique: TechniqueKind,
        points: Vec<Point>,
        width: f64,
        cap: LineCap,
        color: Rgba,
        blend: BlendMode,
    ) {
        self.emit(
            technique,
            Shape::Polyline { points, width, cap },
            color,
            blend,
        );
    }

    fn circle(&mut self, technique: TechniqueKind, center: Point, radius: f64, color: Rgba, blend: BlendMode) {
        self.emit(technique, Shape::Circle { center, radius }, color, blend);
    }

    /// Fan of 50-80 curved bristle marks along `angle`.
    #[allow(clippy::too_many_arguments)]
    pub fn brushstroke(
        &mut self,
        x: f64,
        y: f64,
        angle: f64,
        length: f64,
        width: f64,
        color: &PaintColor,
        alpha: f64,
        blend: BlendMode,
    ) {
        let bristles = (50.0 + self.random() * 30.0).floor() as usize;

        for i in 0..bristles {
            let offset_angle = angle + self.jitter() * 0.4;
            let noise_x = self.noise.sample(x * 0.1, i as f64 * 0.1) * width * 0.4;
            let noise_y = self.noise.sample(y * 0.1, i as f64 * 0.1) * width * 0.4;

            let start = Point::new(x + noise_x, y + noise_y);
            let end = start.offset(offset_angle, length);

            let pressure = 0.4 + self.random() * 0.8;
            let bristle_width = width * 0.15 * pressure;
            let stroke_color = self.vary(color, start.x, start.y, 0.08).with_alpha(alpha);

            let mid = Point::new(
                (start.x + end.x) / 2.0 + self.jitter() * width * 0.3,
                (start.y + end.y) / 2.0 + self.jitter() * width * 0.3,
            );

            self.stroke(
                TechniqueKind::Brushstroke,
                curve_through(start, mid, end),
                bristle_width,
                LineCap::Round,
                stroke_color,
                blend,
            );
        }
    }

    /// 18 stacked irregular decagons, shrinking and thickening.
    pub fn impasto(&mut self, x: f64, y: f64, radius: f64, color: &PaintColor, alpha: f64) {
        const LAYERS: usize = 18;
        const VERTICES: usize = 10;

        for layer in 0..LAYERS {
            let layer_radius = radius * (1.0 - layer as f64 * 0.04);
            let layer_alpha = alpha * (0.75 + layer as f64 * 0.015);

            let points = (0..VERTICES)
                .map(|i| {
                    let angle = i as f64 / VERTICES as f64 * TAU;
                    let variation = self.random() * 0.4 + 0.8;
                    Point::new(x, y).offset(angle, layer_radius * variation)
                })
                .collect();

            let fill = self
                .vary(color, x, y + layer as f64 * 2.0, 0.12)
                .with_alpha(layer_alpha);
            self.emit(
                TechniqueKind::Impasto,
                Shape::Polygon { points },
                fill,
                BlendMode::Multiply,
            );
        }
    }

    /// 12-18 overlay blobs grading from `primary` to `secondary`.
    pub fn wet_on_wet(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        primary: &PaintColor,
        secondary: &PaintColor,
        alpha: f64,
    ) {
        let blobs = (12.0 + self.random() * 6.0).floor() as usize;

        for i in 0..blobs {
            let mixed = primary.mix(secondary, i as f64 / blobs as f64);
            let center = Point::new(
                x + self.jitter() * radius * 1.2,
                y + self.jitter() * radius * 1.2,
            );
            let blob_radius = radius * (0.4 + self.random() * 0.5);

            self.circle(
                TechniqueKind::WetOnWet,
                center,
                blob_radius,
                mixed.with_alpha(alpha),
                BlendMode::Overlay,
            );
        }
    }

    /// 3-5 translucent multiply discs, each a little wider.
    pub fn glazing(&mut self, x: f64, y: f64, radius: f64, color: &PaintColor, alpha: f64) {
        let layers = (3.0 + self.random() * 3.0).floor() as usize;

        for i in 0..layers {
            let layer_radius = radius * (1.0 + i as f64 * 0.1);
            let center = Point::new(
                x + self.jitter() * radius * 0.3,
                y + self.jitter() * radius * 0.3,
            );
            let fill = self.vary(color, center.x, center.y, 0.05).with_alpha(alpha);

            self.circle(TechniqueKind::Glaze, center, layer_radius, fill, BlendMode::Multiply);
        }
    }

    /// 5-9 short broken segments scattered along `angle`.
    #[allow(clippy::too_many_arguments)]
    pub fn dry_brush(
        &mut self,
        x: f64,
        y: f64,
        angle: f64,
        length: f64,
        width: f64,
        color: &PaintColor,
        alpha: f64,
    ) {
        let segments = (5.0 + self.random() * 5.0).floor() as usize;

        for _ in 0..segments {
            let ratio = self.random();
            let segment_length = length * (0.1 + self.random() * 0.2);

            let start = Point::new(x, y).offset(angle, length * ratio);
            let stroke_color = self.vary(color, start.x, start.y, 0.1).with_alpha(alpha);
            let stroke_width = width * (0.5 + self.random() * 0.5);

            self.stroke(
                TechniqueKind::DryBrush,
                vec![start, start.offset(angle, segment_length)],
                stroke_width,
                LineCap::Round,
                stroke_color,
                BlendMode::Normal,
            );
        }
    }

    /// 2-4 thin runs falling straight down from `y`.
    pub fn dripping(&mut self, x: f64, y: f64, length: f64, width: f64, color: &PaintColor, alpha: f64) {
        let drips = (2.0 + self.random() * 3.0).floor() as usize;

        for _ in 0..drips {
            let start_x = x + self.jitter() * width;
            let drip_length = length * (0.5 + self.random() * 0.5);

            let stroke_color = self.vary(color, start_x, y, 0.05).with_alpha(alpha);
            let stroke_width = width * 0.1 * (0.5 + self.random() * 0.5);

            let through = Point::new(start_x + self.jitter() * 5.0, y + drip_length * 0.3);
            let end = Point::new(start_x + self.jitter() * 10.0, y + drip_length);

            self.stroke(
                TechniqueKind::Drip,
                curve_through(Point::new(start_x, y), through, end),
                stroke_width,
                LineCap::Round,
                stroke_color,
                BlendMode::Multiply,
            );
        }
    }

    /// 5-14 small droplets scattered within `radius`.
    pub fn splatter(&mut self, x: f64, y: f64, radius: f64, color: &PaintColor, alpha: f64) {
        let droplets = (5.0 + self.random() * 10.0).floor() as usize;

        for _ in 0..droplets {
            let distance = self.random() * radius;
            let angle = self.random() * TAU;
            let center = Point::new(x, y).offset(angle, distance);
            let droplet_radius = radius * 0.05 * (0.3 + self.random() * 0.7);
            let fill = self.vary(color, center.x, center.y, 0.1).with_alpha(alpha);

            self.circle(TechniqueKind::Splatter, center, droplet_radius, fill, BlendMode::Normal);
        }
    }

    /// 3-6 jagged hairline cracks radiating outwards, always ivory black.
    pub fn craquelure(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        const SEGMENTS: usize = 4;
        let cracks = (3.0 + self.random() * 4.0).floor() as usize;
        let color = palette::IVORY_BLACK.with_alpha(alpha);

        for _ in 0..cracks {
            let angle = self.random() * TAU;
            let length = radius * (0.5 + self.random() * 0.5);
            let stroke_width = 0.5 + self.random() * 0.5;

            let start = Point::new(x, y).offset(angle, radius * 0.3);
            let end = start.offset(angle, length);

            let mut points = Vec::with_capacity(SEGMENTS + 1);
            points.push(start);
            for j in 1..=SEGMENTS {
                let t = j as f64 / SEGMENTS as f64;
                points.push(Point::new(
                    start.x + (end.x - start.x) * t + self.jitter() * 5.0,
                    start.y + (end.y - start.y) * t + self.jitter() * 5.0,
                ));
            }

            self.stroke(
                TechniqueKind::Craquelure,
                points,
                stroke_width,
                LineCap::Butt,
                color,
                BlendMode::Normal,
            );
        }
    }

    /// Elongated soft blob: 15 fading multiply discs along the horizontal.
    pub fn legato(&mut self, x: f64, y: f64, size: f64, color: &PaintColor) {
        const DISCS: usize = 15;
        let length = size * 1.8;
        let width = size * 0.6;

        for i in 0..DISCS {
            let position = i as f64 / DISCS as f64 - 0.5;
            let local_width = width * (1.0 - position.abs() * 0.5);

            self.circle(
                TechniqueKind::Legato,
                Point::new(x + position * length, y),
                local_width,
                color.with_alpha(0.15 - i as f64 * 0.008),
                BlendMode::Multiply,
            );
        }
    }

    /// 3-5 dots on a ring around a larger center dot.
    pub fn staccato(&mut self, x: f64, y: f64, size: f64, color: &PaintColor) {
        let dots = 3 + (self.random() * 3.0).floor() as usize;

        for i in 0..dots {
            let angle = i as f64 / dots as f64 * TAU;
            self.circle(
                TechniqueKind::Staccato,
                Point::new(x, y).offset(angle, size * 0.4),
                size * 0.15,
                color.with_alpha(0.9),
                BlendMode::Normal,
            );
        }

        self.circle(
            TechniqueKind::Staccato,
            Point::new(x, y),
            size * 0.2,
            color.with_alpha(1.0),
            BlendMode::Normal,
        );
    }

    /// Upward bow with an arrowhead at the top.
    pub fn bend(&mut self, x: f64, y: f64, size: f64, color: &PaintColor) {
        let start = Point::new(x, y + size * 0.5);
        let end = Point::new(x, y - size * 0.5);
        let through = Point::new(x + size * 0.6, y);
        let stroke_color = color.with_alpha(0.9);

        self.stroke(
            TechniqueKind::Bend,
            curve_through(start, through, end),
            size * 0.12,
            LineCap::Round,
            stroke_color,
            BlendMode::Normal,
        );

        let arrow = size * 0.15;
        self.stroke(
            TechniqueKind::Bend,
            vec![
                Point::new(x - arrow, end.y + arrow),
                end,
                Point::new(x + arrow, end.y + arrow),
            ],
            size * 0.08,
            LineCap::Round,
            stroke_color,
            BlendMode::Normal,
        );
    }

    /// Diagonal streak with three fading motion lines.
    pub fn slide(&mut self, x: f64, y: f64, size: f64, color: &PaintColor, direction: SlideDirection) {
        let angle = match direction {
            SlideDirection::Up => -PI / 4.0,
            SlideDirection::Down => PI / 4.0,
        };
        let half = size * 1.5 / 2.0;
        let center = Point::new(x, y);
        let start = center.offset(angle, -half);
        let end = center.offset(angle, half);

        self.stroke(
            TechniqueKind::Slide,
            vec![start, end],
            size * 0.15,
            LineCap::Round,
            color.with_alpha(0.85),
            BlendMode::Normal,
        );

        for i in 0..3 {
            let offset = (i as f64 - 1.0) * size * 0.3;
            self.stroke(
                TechniqueKind::Slide,
                vec![
                    Point::new(start.x + offset, start.y),
                    Point::new(end.x + offset, end.y),
                ],
                size * 0.08,
                LineCap::Round,
                color.with_alpha(0.3 - i as f64 * 0.1),
                BlendMode::Normal,
            );
        }
    }

    /// Four-period sine ribbon across the note, stroked then filled.
    pub fn vibrato(&mut self, x: f64, y: f64, size: f64, color: &PaintColor) {
        const WAVES: usize = 4;
        const SAMPLES_PER_WAVE: usize = 4;
        let amplitude = size * 0.3;
        let samples = WAVES * SAMPLES_PER_WAVE;

        let points: Vec<Point> = (0..=samples)
            .map(|i| {
                let t = i as f64 / samples as f64;
                Point::new(
                    x - size + t * size * 2.0,
                    y + (t * WAVES as f64 * TAU).sin() * amplitude,
                )
            })
            .collect();

        self.stroke(
            TechniqueKind::Vibrato,
            points.clone(),
            size * 0.12,
            LineCap::Round,
            color.with_alpha(0.85),
            BlendMode::Normal,
        );
        self.emit(
            TechniqueKind::Vibrato,
            Shape::Polygon { points },
            color.with_alpha(0.2),
            BlendMode::Multiply,
        );
    }
}
