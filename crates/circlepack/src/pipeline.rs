//! Polygon → packing in one call.
//!
//! Purpose
//! - Wire the stages together: `cut_thick` → initial radii → `relax_with` →
//!   `layout`. No global state; everything the run needs is in `PipelineCfg`.
//!
//! Initial radii
//! - Euclidean: every node starts at the lattice radius ρ.
//! - Hyperbolic: every node starts at a tiny conformal factor, so boundary
//!   nodes act as near-horocycles and the packing fills the disk.

use tracing::debug;

use crate::cfg::HYPERBOLIC_INITIAL_RADIUS;
use crate::complex::Point;
use crate::error::{PackError, Result};
use crate::graph::{cut_thick, Graph};
use crate::pack::{layout, relax_with, Model, PackCfg, RelaxReport, Traversal};

/// Knobs for `pack_polygon`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineCfg {
    /// Lattice circle radius used for rasterization.
    pub radius: f64,
    pub model: Model,
    pub pack: PackCfg,
    pub traversal: Traversal,
    /// Overrides the model's default starting radius when set.
    pub initial_radius: Option<f64>,
}

impl Default for PipelineCfg {
    fn default() -> Self {
        Self {
            radius: 1.0,
            model: Model::Euclidean,
            pack: PackCfg::default(),
            traversal: Traversal::Depth,
            initial_radius: None,
        }
    }
}

impl PipelineCfg {
    /// Starting radius for every node.
    pub fn start_radius(&self) -> f64 {
        self.initial_radius.unwrap_or(match self.model {
            Model::Euclidean => self.radius,
            Model::Hyperbolic => HYPERBOLIC_INITIAL_RADIUS,
        })
    }
}

/// A solved, laid-out packing.
#[derive(Clone, Debug)]
pub struct Packing {
    pub graph: Graph,
    pub report: RelaxReport,
    /// Nodes that received a position.
    pub placed: usize,
}

/// Run the whole pipeline on a polygon.
pub fn pack_polygon(points: &[Point], cfg: &PipelineCfg) -> Result<Packing> {
    let start = cfg.start_radius();
    let valid = match cfg.model {
        Model::Euclidean => start.is_finite() && start > 0.0,
        Model::Hyperbolic => start > 0.0 && start < 1.0,
    };
    if !valid {
        return Err(PackError::invalid(format!(
            "initial radius {start} is invalid for the {:?} model",
            cfg.model
        )));
    }

    let mut graph = cut_thick(points, cfg.radius)?;
    graph.set_radii(start);
    let report = relax_with(&mut graph, cfg.model, &cfg.pack)?;
    let placed = layout(&mut graph, cfg.model, cfg.traversal)?;
    debug!(
        nodes = graph.len(),
        placed,
        passes = report.passes,
        max_error = report.max_error,
        "pack_polygon"
    );
    Ok(Packing {
        graph,
        report,
        placed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::center;
    use crate::polygon::{rectangle, regular};

    #[test]
    fn hyperbolic_hexagon_fills_the_disk() {
        let cfg = PipelineCfg {
            model: Model::Hyperbolic,
            ..PipelineCfg::default()
        };
        let packing = pack_polygon(&regular(6, 10.0), &cfg).unwrap();
        assert_eq!(packing.placed, packing.graph.len());
        assert!(packing.report.converged);
        assert!(packing.report.max_error < 1e-9);
        for node in packing.graph.nodes() {
            let z = node.label.position.unwrap();
            assert!(z.abs() < 1.0, "{z:?} outside the disk");
        }
        let origin = packing.graph.origin();
        assert_eq!(packing.graph.position(origin), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn hyperbolic_square_converges() {
        let cfg = PipelineCfg {
            radius: 0.5,
            model: Model::Hyperbolic,
            ..PipelineCfg::default()
        };
        let square = rectangle(Point::new(0.0, 0.0), Point::new(8.0, 8.0));
        let packing = pack_polygon(&square, &cfg).unwrap();
        assert!(packing.report.max_error < 1e-9);
        assert!(packing.graph.missing().is_empty());
    }

    #[test]
    fn euclidean_packing_keeps_lattice_shape() {
        let packing = pack_polygon(&regular(6, 10.0), &PipelineCfg::default()).unwrap();
        let g = &packing.graph;
        let shift = center(g.node(g.origin()).coordinate(), 1.0);
        for node in g.nodes() {
            assert!((node.label.radius - 1.0).abs() < 1e-12);
            let expected = center(node.coordinate(), 1.0) - shift;
            assert!(node.label.position.unwrap().dist(expected) < 1e-9);
        }
    }

    #[test]
    fn bad_initial_radius_is_rejected() {
        let cfg = PipelineCfg {
            model: Model::Hyperbolic,
            initial_radius: Some(1.5),
            ..PipelineCfg::default()
        };
        assert!(matches!(
            pack_polygon(&regular(6, 10.0), &cfg),
            Err(PackError::InvalidInput { .. })
        ));
    }

    #[test]
    fn polygon_without_interior_is_empty() {
        assert_eq!(
            pack_polygon(&regular(6, 0.5), &PipelineCfg::default()).unwrap_err(),
            PackError::EmptyPacking
        );
    }
}
