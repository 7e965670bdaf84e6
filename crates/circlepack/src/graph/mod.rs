//! Packing graph: lazy resolution of a lattice into interior/boundary nodes.
//!
//! Purpose
//! - Materialize only the part of a lattice reachable from a chosen origin,
//!   through a narrow lookup trait (`CoordinateSource`) so tests can inject
//!   small finite maps and production injects the rasterizer's occupancy.
//!
//! Decisions
//! - Nodes are stored in one coordinate-sorted `Vec`; petals are `NodeId`s.
//! - Unresolvable petals are reported in `missing`; the referring node is
//!   demoted to boundary instead of carrying a short petal list.

pub mod example;
mod resolve;
mod source;
mod types;

pub use resolve::{cut_thick, resolve_lazy};
pub use source::{CoordinateSource, MapSource};
pub use types::{Graph, Label, Node, NodeId, UnresolvedNode};
