//! Draw intents: fully resolved, backend-independent drawing instructions.

use serde::{Deserialize, Serialize};

/// A canvas position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Offset by `distance` along `angle` (radians, y down).
    pub fn offset(&self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }
}

/// Stroke end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    Round,
}

/// How a shape composites onto what is already painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Normal,
    Multiply,
    Overlay,
}

/// Paint color with channels in 0-255 and alpha in 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub alpha: f64,
}

/// Geometry of a draw intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Polyline {
        points: Vec<Point>,
        width: f64,
        cap: LineCap,
    },
    Polygon {
        points: Vec<Point>,
    },
    Circle {
        center: Point,
        radius: f64,
    },
}

/// The painterly mark an intent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechniqueKind {
    Impasto,
    Glaze,
    WetOnWet,
    DryBrush,
    Brushstroke,
    OilBrushstroke,
    Drip,
    Splatter,
    Craquelure,
    Legato,
    Staccato,
    Bend,
    Slide,
    Vibrato,
}

/// One primitive for the graphics surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawIntent {
    pub technique: TechniqueKind,
    pub shape: Shape,
    pub color: Rgba,
    pub blend: BlendMode,
}

/// Number of straight segments used to flatten a curve.
pub const CURVE_SEGMENTS: usize = 8;

/// Flatten a quadratic curve from `start` to `end` passing through `through`
/// at its midpoint.
pub fn curve_through(start: Point, through: Point, end: Point) -> Vec<Point> {
    // Control point that puts the t = 0.5 sample on `through`
    let control = Point::new(
        2.0 * through.x - (start.x + end.x) * 0.5,
        2.0 * through.y - (start.y + end.y) * 0.5,
    );

    (0..=CURVE_SEGMENTS)
        .map(|i| {
            let t = i as f64 / CURVE_SEGMENTS as f64;
            let mt = 1.0 - t;
            Point::new(
                mt * mt * start.x + 2.0 * mt * t * control.x + t * t * end.x,
                mt * mt * start.y + 2.0 * mt * t * control.y + t * t * end.y,
            )
        })
        .collect()
}
