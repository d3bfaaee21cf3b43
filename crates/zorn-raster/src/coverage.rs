//! Hard-edged shape coverage, sampled at pixel centers.

use zorn_engine::{LineCap, Point, Shape};

/// Strokes thinner than this are widened so they still cover pixels.
pub const MIN_HALF_WIDTH: f64 = 0.5;

/// Inclusive pixel bounds of a shape, before clipping to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    fn around(points: &[Point], pad: f64) -> Option<Bounds> {
        let first = points.first()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        bounds.min_x -= pad;
        bounds.min_y -= pad;
        bounds.max_x += pad;
        bounds.max_y += pad;
        Some(bounds)
    }

    /// Clip to a `width` x `height` surface as `(x0, y0, x1, y1)`, end exclusive.
    pub fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        if !(self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite())
        {
            return None;
        }

        let x0 = self.min_x.floor().max(0.0);
        let y0 = self.min_y.floor().max(0.0);
        let x1 = (self.max_x.ceil() + 1.0).min(width as f64);
        let y1 = (self.max_y.ceil() + 1.0).min(height as f64);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Bounding box of a shape, or `None` if it can never cover a pixel.
pub fn bounds(shape: &Shape) -> Option<Bounds> {
    match shape {
        Shape::Circle { center, radius } => {
            if *radius > 0.0 {
                Bounds::around(std::slice::from_ref(center), *radius)
            } else {
                None
            }
        }
        Shape::Polygon { points } => {
            if points.len() >= 3 {
                Bounds::around(points, 0.0)
            } else {
                None
            }
        }
        Shape::Polyline { points, width, .. } => {
            Bounds::around(points, half_width(*width))
        }
    }
}

/// Whether the shape covers the sample point `p`.
pub fn covers(shape: &Shape, p: Point) -> bool {
    match shape {
        Shape::Circle { center, radius } => center.distance(&p) <= *radius,
        Shape::Polygon { points } => points.len() >= 3 && inside_even_odd(points, p),
        Shape::Polyline { points, width, cap } => {
            polyline_covers(points, half_width(*width), *cap, p)
        }
    }
}

fn half_width(width: f64) -> f64 {
    (width / 2.0).max(MIN_HALF_WIDTH)
}

fn inside_even_odd(points: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn polyline_covers(points: &[Point], half: f64, cap: LineCap, p: Point) -> bool {
    match points {
        [] => false,
        [only] => cap == LineCap::Round && only.distance(&p) <= half,
        _ => {
            let last = points.len() - 2;
            points.windows(2).enumerate().any(|(k, seg)| {
                let open_start = cap == LineCap::Butt && k == 0;
                let open_end = cap == LineCap::Butt && k == last;
                segment_covers(seg[0], seg[1], half, open_start, open_end, p)
            })
        }
    }
}

/// Capsule test against segment `a`-`b`. A butt end cuts the capsule flat
/// at that endpoint.
fn segment_covers(a: Point, b: Point, half: f64, butt_a: bool, butt_b: bool, p: Point) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq > 0.0 {
        ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq
    } else {
        0.0
    };

    if (butt_a && t < 0.0) || (butt_b && t > 1.0) {
        return false;
    }

    let t = t.clamp(0.0, 1.0);
    let closest = Point::new(a.x + dx * t, a.y + dy * t);
    closest.distance(&p) <= half
}
