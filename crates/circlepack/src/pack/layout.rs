//! Position assignment by traversal from the origin.
//!
//! The origin sits at 0 and its petals go around it at cumulative flower
//! angles. Every other interior node is processed once its parent (a
//! neighbor that placed it) is fixed: the walk starts at the parent's slot in
//! the petal cycle, pointing toward the parent, and places each unvisited
//! petal at the accumulated angle. First placement wins.
//!
//! Hyperbolic placement works in the frame where the node sits at 0: the
//! parent direction is read through `mobius_sub`, petals are placed at their
//! tangency distance in that frame, then carried back with `mobius_add`.

use std::collections::VecDeque;

use tracing::debug;

use super::angles::{petal_angles, Model};
use crate::cfg::HEX_PETALS;
use crate::complex::{Complex, Point, ZERO};
use crate::error::{PackError, Result};
use crate::graph::{Graph, NodeId};

/// Worklist discipline. Results agree (up to rounding) for a solved packing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    #[default]
    Depth,
    Breadth,
}

/// Euclidean distance from the disk center to a circle tangent to one at 0.
#[inline]
fn tangency_offset(model: Model, r: f64, petal: f64) -> f64 {
    match model {
        Model::Euclidean => r + petal,
        Model::Hyperbolic => {
            let d = (r * petal).sqrt();
            (1.0 - d) / (1.0 + d)
        }
    }
}

#[inline]
fn place(graph: &mut Graph, visited: &mut [bool], id: NodeId, z: Point) {
    graph.label_mut(id).position = Some(z);
    visited[id.0] = true;
}

fn flower(graph: &Graph, id: NodeId) -> Option<([NodeId; HEX_PETALS], [f64; HEX_PETALS])> {
    let petals = graph.node(id).petals?;
    Some((petals, petals.map(|p| graph.radius(p))))
}

/// Lay out every node reachable from the origin; returns how many were placed.
///
/// Previous positions are cleared first, so unreachable nodes end as `None`.
pub fn layout(graph: &mut Graph, model: Model, traversal: Traversal) -> Result<usize> {
    graph.clear_positions();
    let mut visited = vec![false; graph.len()];

    let origin = graph.origin();
    let (petals, radii) = flower(graph, origin).ok_or(PackError::EmptyPacking)?;
    let r0 = graph.radius(origin);
    let angles = petal_angles(model, r0, &radii)?;
    place(graph, &mut visited, origin, ZERO);
    let mut angle = 0.0;
    for (k, &p) in petals.iter().enumerate() {
        place(
            graph,
            &mut visited,
            p,
            Complex::polar(tangency_offset(model, r0, radii[k]), angle),
        );
        angle += angles[k];
    }

    let mut worklist: VecDeque<(NodeId, NodeId)> = petals
        .iter()
        .filter(|&&p| graph.node(p).is_interior())
        .map(|&p| (p, origin))
        .collect();

    while let Some((node, parent)) = match traversal {
        Traversal::Depth => worklist.pop_back(),
        Traversal::Breadth => worklist.pop_front(),
    } {
        let Some((petals, radii)) = flower(graph, node) else {
            continue;
        };
        let Some(start) = petals.iter().position(|&p| p == parent) else {
            debug!(?node, ?parent, "parent is not a petal; skipping");
            continue;
        };
        let (Some(z), Some(zp)) = (graph.position(node), graph.position(parent)) else {
            continue;
        };
        let r = graph.radius(node);
        let angles = petal_angles(model, r, &radii)?;

        let (axis, mut angle) = match model {
            Model::Euclidean => (None, (zp - z).arg()),
            Model::Hyperbolic => (Some(z.mobius_sub(zp)?.normalize()?), 0.0),
        };
        for i in 0..HEX_PETALS {
            let j = (start + i) % HEX_PETALS;
            let p = petals[j];
            if !visited[p.0] {
                let offset = Complex::polar(tangency_offset(model, r, radii[j]), angle);
                let w = match axis {
                    None => z + offset,
                    Some(axis) => z.mobius_add(axis * offset)?,
                };
                place(graph, &mut visited, p, w);
                if graph.node(p).is_interior() {
                    worklist.push_back((p, node));
                }
            }
            angle += angles[j];
        }
    }
    let placed = visited.iter().filter(|&&v| v).count();
    debug!(placed, nodes = graph.len(), ?model, ?traversal, "layout");
    Ok(placed)
}
