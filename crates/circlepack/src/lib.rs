//! Hexagonal circle packing (Thurston–Stephenson).
//!
//! A polygon is rasterized into a hexagonal lattice of fitting circles, the
//! lattice is resolved into a graph of interior flowers and boundary nodes,
//! radii are relaxed until every interior angle sum is 2π, and the packing is
//! laid out in the plane or the Poincaré disk. The result approximates a
//! conformal map of the polygon.
//!
//! Stages
//! - `lattice::hexagonal_fit`: rasterization (thickened boundary walls).
//! - `graph::resolve_lazy` / `graph::cut_thick`: lazy graph resolution.
//! - `pack::relax_with`: Euclidean / hyperbolic radius relaxation.
//! - `pack::layout`: positions by traversal from the origin.
//! - `pipeline::pack_polygon`: all of the above in one call.
//!
//! API Policy
//! - Internal crate; there is no stable public API. `api` and `prelude` are
//!   convenience surfaces and may change with the modules behind them.

pub mod api;
mod cfg;
pub mod complex;
pub mod error;
pub mod graph;
pub mod interval;
pub mod lattice;
pub mod pack;
pub mod pipeline;
pub mod polygon;
pub mod segment;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PackError, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::complex::{Complex, Point};
    pub use crate::error::{PackError, Result};
    pub use crate::graph::{cut_thick, resolve_lazy, CoordinateSource, Graph, NodeId};
    pub use crate::lattice::{Coordinate, HexLattice};
    pub use crate::pack::{layout, relax_with, Model, PackCfg, StopRule, Traversal};
    pub use crate::pipeline::{pack_polygon, Packing, PipelineCfg};
    pub use crate::polygon::{to_path_d, Polygon};
}
