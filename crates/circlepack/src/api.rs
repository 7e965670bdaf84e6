//! Curated internal API (UNSTABLE).
//!
//! A flat re-export surface, used by the benches. Breaking changes
//! follow the modules behind it.

// Arithmetic and primitives
pub use crate::complex::{Complex, Point, I, ONE, ZERO};
pub use crate::interval::{carve_interior, hull, Interval, Wall};
pub use crate::segment::{path_d as segment_path_d, thick_intersect, thicken, Segment};
// Polygons
pub use crate::polygon::rand::{draw_star, ReplayToken, StarCfg};
pub use crate::polygon::{area, contains_point, rectangle, regular, sector, to_path_d, Polygon};
// Lattice and graph
pub use crate::graph::{
    cut_thick, example, resolve_lazy, CoordinateSource, Graph, Label, MapSource, Node, NodeId,
    UnresolvedNode,
};
pub use crate::lattice::{
    center, deepest_interior, hexagonal_fit, Coordinate, HexLattice, Occupancy,
};
// Packing
pub use crate::pack::{
    angle_sum, layout, max_angle_error, relax, relax_flower, relax_with, Model, PackCfg,
    RelaxReport, StopRule, Traversal,
};
pub use crate::pipeline::{pack_polygon, Packing, PipelineCfg};
