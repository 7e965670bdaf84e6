//! The lookup seam between lattice producers and the resolver.

use std::collections::BTreeMap;

use super::types::{Label, UnresolvedNode};
use crate::lattice::{center, petals, Coordinate, HexLattice};

/// Answers "what is at this coordinate?" for the lazy resolver.
///
/// `None` means the coordinate does not exist; it is then reported in
/// `Graph::missing` if some interior node referenced it.
pub trait CoordinateSource {
    fn lookup(&self, c: Coordinate) -> Option<UnresolvedNode>;
}

impl<F> CoordinateSource for F
where
    F: Fn(Coordinate) -> Option<UnresolvedNode>,
{
    #[inline]
    fn lookup(&self, c: Coordinate) -> Option<UnresolvedNode> {
        self(c)
    }
}

impl CoordinateSource for HexLattice {
    fn lookup(&self, c: Coordinate) -> Option<UnresolvedNode> {
        if !self.occupancy.contains(c) {
            return None;
        }
        let interior = self.occupancy.is_interior(c);
        Some(UnresolvedNode {
            label: Label {
                radius: self.radius,
                position: Some(center(c, self.radius)),
                data: c,
            },
            petals: interior.then(|| petals(c)),
        })
    }
}

/// Finite explicit mapping, mostly for tests and synthetic inputs.
#[derive(Clone, Debug, Default)]
pub struct MapSource {
    pub nodes: BTreeMap<Coordinate, UnresolvedNode>,
}

impl MapSource {
    pub fn insert(&mut self, node: UnresolvedNode) {
        self.nodes.insert(node.label.data, node);
    }
}

impl CoordinateSource for BTreeMap<Coordinate, UnresolvedNode> {
    #[inline]
    fn lookup(&self, c: Coordinate) -> Option<UnresolvedNode> {
        self.get(&c).copied()
    }
}

impl CoordinateSource for MapSource {
    #[inline]
    fn lookup(&self, c: Coordinate) -> Option<UnresolvedNode> {
        self.nodes.lookup(c)
    }
}

impl From<&HexLattice> for MapSource {
    fn from(lattice: &HexLattice) -> Self {
        let mut out = MapSource::default();
        for c in lattice.occupancy.iter() {
            if let Some(node) = lattice.lookup(c) {
                out.insert(node);
            }
        }
        out
    }
}
