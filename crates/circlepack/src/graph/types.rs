//! Node and graph types.
//!
//! Nodes live in one `Vec` owned by the `Graph`; petal links are `NodeId`
//! indices into it, so the cyclic neighbor structure needs no shared ownership.

use std::collections::HashMap;

use crate::cfg::HEX_PETALS;
use crate::complex::Point;
use crate::lattice::Coordinate;

/// Index of a node inside its `Graph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Mutable per-node payload.
///
/// `radius` is a Euclidean radius or, for hyperbolic packings, the conformal
/// factor `v ∈ (0, 1)`. `position` is `None` until a layout reaches the node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub radius: f64,
    pub position: Option<Point>,
    pub data: Coordinate,
}

/// A lookup result before resolution: petals are still coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnresolvedNode {
    pub label: Label,
    pub petals: Option<[Coordinate; HEX_PETALS]>,
}

/// Resolved node. `petals` is `None` for boundary nodes; for interior nodes it
/// holds exactly six links in counter-clockwise lattice order.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub label: Label,
    pub petals: Option<[NodeId; HEX_PETALS]>,
}

impl Node {
    #[inline]
    pub fn is_interior(&self) -> bool {
        self.petals.is_some()
    }
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.label.data
    }
}

/// Resolved packing graph.
///
/// Invariants:
/// - `nodes` is sorted by coordinate; this pins the relaxation order.
/// - `origin` is an interior node.
/// - Petal topology is fixed after construction; only labels are mutable.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<Coordinate, NodeId>,
    origin: NodeId,
    missing: Vec<Coordinate>,
}

impl Graph {
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        index: HashMap<Coordinate, NodeId>,
        origin: NodeId,
        missing: Vec<Coordinate>,
    ) -> Self {
        debug_assert!(nodes[origin.0].is_interior(), "origin must be interior");
        Self {
            nodes,
            index,
            origin,
            missing,
        }
    }

    #[inline]
    pub fn origin(&self) -> NodeId {
        self.origin
    }
    /// Coordinates referenced as petals that the source could not resolve.
    #[inline]
    pub fn missing(&self) -> &[Coordinate] {
        &self.missing
    }
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
    #[inline]
    pub fn label_mut(&mut self, id: NodeId) -> &mut Label {
        &mut self.nodes[id.0].label
    }
    /// Node id at `c`, if it was resolved.
    #[inline]
    pub fn get(&self, c: Coordinate) -> Option<NodeId> {
        self.index.get(&c).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
    pub fn interior_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|&id| self.node(id).is_interior())
    }
    pub fn boundary_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|&id| !self.node(id).is_interior())
    }

    #[inline]
    pub fn radius(&self, id: NodeId) -> f64 {
        self.nodes[id.0].label.radius
    }
    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.nodes[id.0].label.position
    }

    /// Current radii of an interior node's petals, in petal order.
    pub fn petal_radii(&self, id: NodeId) -> Option<[f64; HEX_PETALS]> {
        self.node(id).petals.map(|ps| ps.map(|p| self.radius(p)))
    }

    /// Set every node's radius.
    pub fn set_radii(&mut self, radius: f64) {
        for node in &mut self.nodes {
            node.label.radius = radius;
        }
    }

    /// Replace every radius `r` with `f(r)`.
    pub fn map_radius(&mut self, mut f: impl FnMut(f64) -> f64) {
        for node in &mut self.nodes {
            node.label.radius = f(node.label.radius);
        }
    }

    /// Forget all positions.
    pub fn clear_positions(&mut self) {
        for node in &mut self.nodes {
            node.label.position = None;
        }
    }
}
