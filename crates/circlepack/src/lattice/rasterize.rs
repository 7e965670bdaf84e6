//! Scan-row rasterization of a thickened polygon boundary.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Coordinate, Occupancy};
use crate::complex::Point;
use crate::error::{PackError, Result};
use crate::interval::{carve_interior, Wall};
use crate::polygon::edges;
use crate::segment::thick_intersect;

/// Cells whose circle of radius `radius` fits inside `points`.
///
/// Per edge, every row whose line lies within `radius` of the edge's y-extent
/// receives a `Wall`; per row, the carved interior spans are mapped to columns
/// via `x = (row + 2·column)·radius`. Zero-length edges are skipped.
pub fn hexagonal_fit(points: &[Point], radius: f64) -> Result<Occupancy> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(PackError::invalid(format!(
            "packing radius must be finite and > 0, got {radius}"
        )));
    }
    if points.len() < 3 {
        return Err(PackError::invalid(format!(
            "polygon needs at least 3 points, got {}",
            points.len()
        )));
    }
    if points.iter().any(|z| !(z.x.is_finite() && z.y.is_finite())) {
        return Err(PackError::invalid("polygon has a non-finite vertex"));
    }

    let row_height = 3f64.sqrt() * radius;
    let mut wall_rows: BTreeMap<i64, Vec<Wall>> = BTreeMap::new();
    for edge in edges(points) {
        if edge.is_degenerate() {
            continue;
        }
        let r_min = ((edge.a.y.min(edge.b.y) - radius) / row_height).floor() as i64;
        let r_max = ((edge.a.y.max(edge.b.y) + radius) / row_height).floor() as i64;
        for r in (r_min + 1)..=r_max {
            let y = r as f64 * row_height;
            if let Some(wall) = thick_intersect(&edge, radius, y) {
                wall_rows.entry(r).or_default().push(wall);
            }
        }
    }

    let mut occupancy = Occupancy::default();
    for (r, walls) in wall_rows.iter_mut() {
        for span in carve_interior(walls) {
            let left = ((span.min / radius - *r as f64) / 2.0).ceil() as i64;
            let right = ((span.max / radius - *r as f64) / 2.0).floor() as i64;
            for column in left..=right {
                occupancy.insert(Coordinate::new(*r, column));
            }
        }
    }
    debug!(
        rows = wall_rows.len(),
        occupied = occupancy.len(),
        radius,
        "hexagonal_fit"
    );
    Ok(occupancy)
}
