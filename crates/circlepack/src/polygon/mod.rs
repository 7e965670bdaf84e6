//! Simple polygons as implicitly closed vertex lists.
//!
//! Purpose
//! - Boundary input to the lattice rasterizer, plus the small set of shape
//!   constructors and predicates used around it (path strings, containment,
//!   area/perimeter for density checks).
//!
//! Conventions
//! - A polygon is `&[Point]` with at least three vertices; the closing edge
//!   last → first is implicit. Orientation may be either.

pub mod rand;

use crate::complex::{Complex, Point};
use crate::segment::Segment;
use crate::util::adjacent_pairs;

/// Owned polygon boundary.
pub type Polygon = Vec<Point>;

/// Boundary edges including the closing edge.
pub fn edges(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    adjacent_pairs(points).map(|(a, b)| Segment::new(*a, *b))
}

/// SVG path data: `M x y`, then `L x y` per vertex, optional trailing `Z`.
///
/// Coordinates are written with `f64` `Display` (shortest round-trip form).
pub fn to_path_d(points: &[Point], close: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut out = format!("M{} {}", first.x, first.y);
    for z in rest {
        out.push_str(&format!("L{} {}", z.x, z.y));
    }
    if close {
        out.push('Z');
    }
    out
}

/// Even-odd containment test.
///
/// An edge counts when `z.y` lies in its half-open y-range `[min, max)`, so
/// horizontal edges and shared vertices are never counted twice. Points on the
/// bottom or left boundary count as inside, top or right as outside.
pub fn contains_point(points: &[Point], z: Point) -> bool {
    let crossings = edges(points)
        .filter(|e| (e.a.y <= z.y) != (e.b.y <= z.y))
        .map(|e| {
            let t = (z.y - e.a.y) / (e.b.y - e.a.y);
            e.a.x + t * (e.b.x - e.a.x)
        })
        .filter(|&x| x < z.x)
        .count();
    crossings % 2 == 1
}

/// Absolute shoelace area.
pub fn area(points: &[Point]) -> f64 {
    let twice: f64 = adjacent_pairs(points)
        .map(|(a, b)| a.x * b.y - a.y * b.x)
        .sum();
    twice.abs() / 2.0
}

pub fn perimeter(points: &[Point]) -> f64 {
    edges(points).map(|e| e.length()).sum()
}

/// Axis-aligned rectangle with opposite corners `z` and `w`.
pub fn rectangle(z: Point, w: Point) -> Polygon {
    vec![z, Complex::new(z.x, w.y), w, Complex::new(w.x, z.y)]
}

/// Circular sector: `center`, `endpoint`, then `n` points along the arc
/// sweeping `angle` radians from `endpoint`.
pub fn sector(center: Point, endpoint: Point, angle: f64, n: usize) -> Polygon {
    let ray = endpoint - center;
    let mut points = vec![center, endpoint];
    for i in 1..=n {
        let turn = Complex::polar(1.0, (i as f64 / n as f64) * angle);
        points.push(center + ray * turn);
    }
    points
}

/// Regular `n`-gon of circumradius `radius` centered at the origin (CCW).
pub fn regular(n: usize, radius: f64) -> Polygon {
    let n = n.max(3);
    (0..n)
        .map(|k| Complex::polar(radius, std::f64::consts::TAU * k as f64 / n as f64))
        .collect()
}
