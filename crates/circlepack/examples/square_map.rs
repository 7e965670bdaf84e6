//! Pack a square into the Poincaré disk and print a short summary.
//!
//! Usage:
//!   cargo run -p circlepack --example square_map -- [radius]
//!
//! Prints node counts, the relaxation report, and the images of the square's
//! corner-most boundary circles.

use circlepack::pack::Model;
use circlepack::pipeline::{pack_polygon, PipelineCfg};
use circlepack::polygon::rectangle;
use circlepack::prelude::Point;

fn main() {
    let radius = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.5);
    let square = rectangle(Point::new(0.0, 0.0), Point::new(8.0, 8.0));
    let cfg = PipelineCfg {
        radius,
        model: Model::Hyperbolic,
        ..PipelineCfg::default()
    };
    let packing = match pack_polygon(&square, &cfg) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("square_map: {e}");
            return;
        }
    };
    let g = &packing.graph;
    println!(
        "nodes={} interior={} boundary={} placed={}",
        g.len(),
        g.interior_ids().count(),
        g.boundary_ids().count(),
        packing.placed
    );
    println!(
        "passes={} max_error={:.3e} converged={}",
        packing.report.passes, packing.report.max_error, packing.report.converged
    );
    // boundary circles closest to the unit circle stand in for the corners
    let mut outer: Vec<Point> = g.boundary_ids().filter_map(|id| g.position(id)).collect();
    outer.sort_by(|a, b| b.abs().total_cmp(&a.abs()));
    for z in outer.iter().take(4) {
        println!("  |z|={:.6} arg={:.4}", z.abs(), z.arg());
    }
}
