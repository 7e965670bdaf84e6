//! Line segments and their thickened (Minkowski-with-disk) scan-row extents.
//!
//! Conventions
//! - Crossings use the half-open parameter range `t ∈ [0, 1)`, so a scan row
//!   through a vertex shared by two edges is counted exactly once.
//! - A thickened segment is the union of the two endpoint caps and the band
//!   between the two offset copies; its trace on a scan row is one interval.

use nalgebra::Vector2;

use crate::complex::Point;
use crate::interval::{hull, Wall};

/// Directed segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    #[inline]
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Segment {
        Segment::new(f(self.a), f(self.b))
    }
    #[inline]
    pub fn shift(&self, by: Point) -> Segment {
        self.map(|z| z + by)
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.dist(self.b)
    }
}

/// Offset copies of `segment` at distance `radius` on either side.
///
/// `None` for a zero-length segment (no normal direction).
pub fn thicken(segment: &Segment, radius: f64) -> Option<(Segment, Segment)> {
    if segment.is_degenerate() {
        return None;
    }
    let dir: Vector2<f64> = (segment.b - segment.a).into();
    let unit = dir.try_normalize(0.0)?;
    // rotate +90°
    let normal = Vector2::new(-unit.y, unit.x) * radius;
    let offset = Point::from(normal);
    Some((segment.shift(offset), segment.shift(-offset)))
}

/// x where `segment` crosses the row `y`, for `t ∈ [0, 1)`; `None` if horizontal.
pub fn intersect_horizontal(segment: &Segment, y: f64) -> Option<f64> {
    let Segment { a, b } = *segment;
    let dy = b.y - a.y;
    if dy == 0.0 {
        return None;
    }
    let t = (y - a.y) / dy;
    if (0.0..1.0).contains(&t) {
        Some((1.0 - t) * a.x + t * b.x)
    } else {
        None
    }
}

/// Half-width of a disk of `radius` centered at height `center_y`, on row `y`.
#[inline]
fn cap_half_width(center_y: f64, y: f64, radius: f64) -> Option<f64> {
    let h = (center_y - y).abs();
    if h > radius {
        None
    } else {
        Some((radius * radius - h * h).sqrt())
    }
}

/// Row trace of the thickened segment plus the thin segment's crossing.
///
/// Returns `None` when the row misses the thickened segment entirely.
pub fn thick_intersect(segment: &Segment, radius: f64, y: f64) -> Option<Wall> {
    let mut intercepts: Vec<f64> = Vec::with_capacity(6);
    for z in [segment.a, segment.b] {
        if let Some(w) = cap_half_width(z.y, y, radius) {
            intercepts.push(z.x - w);
            intercepts.push(z.x + w);
        }
    }
    if let Some((left, right)) = thicken(segment, radius) {
        intercepts.extend(intersect_horizontal(&left, y));
        intercepts.extend(intersect_horizontal(&right, y));
    }
    let interval = hull(&intercepts)?;
    Some(Wall {
        interval,
        cross: intersect_horizontal(segment, y),
    })
}

/// Orthogonal projection of `z` onto the line through `segment`.
pub fn project(segment: &Segment, z: Point) -> Point {
    if segment.is_degenerate() {
        return segment.a;
    }
    let ab = segment.b - segment.a;
    let t = (z - segment.a).dot(ab) / ab.abs2();
    segment.a + ab.scale(t)
}

/// Euclidean distance from `z` to the closed segment.
pub fn point_distance(segment: &Segment, z: Point) -> f64 {
    if segment.is_degenerate() {
        return segment.a.dist(z);
    }
    let ab = segment.b - segment.a;
    let t = (z - segment.a).dot(ab) / ab.abs2();
    if (0.0..=1.0).contains(&t) {
        (segment.a + ab.scale(t)).dist(z)
    } else {
        segment.a.dist(z).min(segment.b.dist(z))
    }
}

/// SVG path data `M x y L x y` for a single segment.
pub fn path_d(segment: &Segment) -> String {
    format!(
        "M{} {}L{} {}",
        segment.a.x, segment.a.y, segment.b.x, segment.b.y
    )
}
