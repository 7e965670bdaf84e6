//! Lazy graph resolution and the polygon → graph entry point.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::debug;

use super::source::CoordinateSource;
use super::types::{Graph, Label, Node, NodeId, UnresolvedNode};
use crate::cfg::HEX_PETALS;
use crate::complex::Point;
use crate::error::{PackError, Result};
use crate::lattice::{deepest_interior, hexagonal_fit, Coordinate, HexLattice};

/// Resolve everything reachable from `start` through interior petals.
///
/// - Stack-based search; each coordinate is looked up at most once.
/// - Interior nodes push their six petal coordinates; boundary nodes push none.
/// - Lookup misses are collected in `missing` (sorted, deduplicated).
/// - A node with any missing petal is demoted to boundary, so every interior
///   node keeps exactly six links.
///
/// Errors with `EmptyPacking` if `start` cannot be resolved or is not interior.
pub fn resolve_lazy<S>(source: &S, start: Coordinate) -> Result<Graph>
where
    S: CoordinateSource + ?Sized,
{
    let mut found: BTreeMap<Coordinate, UnresolvedNode> = BTreeMap::new();
    let mut missing: BTreeSet<Coordinate> = BTreeSet::new();
    let mut seen: HashSet<Coordinate> = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(c) = stack.pop() {
        let Some(node) = source.lookup(c) else {
            missing.insert(c);
            continue;
        };
        if let Some(petals) = node.petals {
            for p in petals {
                if seen.insert(p) {
                    stack.push(p);
                }
            }
        }
        found.insert(c, node);
    }

    let index: HashMap<Coordinate, NodeId> = found
        .keys()
        .enumerate()
        .map(|(i, &c)| (c, NodeId(i)))
        .collect();

    let mut demoted = 0usize;
    let nodes: Vec<Node> = found
        .iter()
        .map(|(&c, unresolved)| {
            let petals = unresolved.petals.and_then(|ps| wire(&index, &ps));
            if unresolved.petals.is_some() && petals.is_none() {
                demoted += 1;
            }
            Node {
                label: Label {
                    data: c,
                    ..unresolved.label
                },
                petals,
            }
        })
        .collect();

    let origin = index.get(&start).copied().ok_or(PackError::EmptyPacking)?;
    if !nodes[origin.0].is_interior() {
        return Err(PackError::EmptyPacking);
    }
    debug!(
        nodes = nodes.len(),
        missing = missing.len(),
        demoted,
        "resolve_lazy"
    );
    Ok(Graph::from_parts(
        nodes,
        index,
        origin,
        missing.into_iter().collect(),
    ))
}

/// Petal coordinates → ids, keeping order; `None` if any petal is unresolved.
fn wire(
    index: &HashMap<Coordinate, NodeId>,
    petals: &[Coordinate; HEX_PETALS],
) -> Option<[NodeId; HEX_PETALS]> {
    let mut ids = [NodeId(0); HEX_PETALS];
    for (slot, p) in ids.iter_mut().zip(petals) {
        *slot = *index.get(p)?;
    }
    Some(ids)
}

/// Rasterize `points` at `radius` and resolve the lattice from its deepest cell.
pub fn cut_thick(points: &[Point], radius: f64) -> Result<Graph> {
    let occupancy = hexagonal_fit(points, radius)?;
    if occupancy.is_empty() {
        return Err(PackError::EmptyPacking);
    }
    let origin = deepest_interior(&occupancy).ok_or(PackError::EmptyPacking)?;
    let lattice = HexLattice { occupancy, radius };
    resolve_lazy(&lattice, origin)
}
