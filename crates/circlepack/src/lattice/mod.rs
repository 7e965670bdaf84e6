//! Hexagonal lattice: coordinates, petals, and polygon rasterization.
//!
//! Purpose
//! - Turn a polygon boundary and a packing radius ρ into the set of lattice
//!   cells whose circle of radius ρ fits inside the polygon.
//! - Classify cells as interior (all six neighbors occupied) or boundary, and
//!   pick the cell farthest from the boundary by erosion.
//!
//! Lattice
//! - Row height `h = √3·ρ`; cell `(row, column)` is centered at
//!   `((row + 2·column)·ρ, row·h)`, so neighboring circles are tangent.
//! - Petal offsets are listed counter-clockwise starting at angle 0; every
//!   angle and layout computation relies on this order.
//!
//! Determinism
//! - Occupancy is stored in ordered maps, so iteration (and hence erosion and
//!   the chosen origin) is reproducible across runs.

mod rasterize;

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use crate::complex::{Complex, Point};

pub use rasterize::hexagonal_fit;

/// Lattice cell `(row, column)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i64,
    pub column: i64,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }
}

/// Neighbor offsets `(Δrow, Δcolumn)` in counter-clockwise order from angle 0.
pub const PETAL_OFFSETS: [(i64, i64); 6] = [(0, 1), (1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1)];

/// The six neighbors of `c`, in `PETAL_OFFSETS` order.
#[inline]
pub fn petals(c: Coordinate) -> [Coordinate; 6] {
    PETAL_OFFSETS.map(|(dr, dc)| Coordinate::new(c.row + dr, c.column + dc))
}

/// Hex distance between two cells.
pub fn hex_distance(a: Coordinate, b: Coordinate) -> i64 {
    let dr = a.row - b.row;
    let dc = a.column - b.column;
    (dr.abs() + dc.abs() + (dr + dc).abs()) / 2
}

/// Center of `c` for packing radius `radius`.
#[inline]
pub fn center(c: Coordinate, radius: f64) -> Point {
    Complex::new(
        (c.row + 2 * c.column) as f64 * radius,
        c.row as f64 * 3f64.sqrt() * radius,
    )
}

/// Occupied cells, row → columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub rows: BTreeMap<i64, BTreeSet<i64>>,
}

impl Occupancy {
    pub fn insert(&mut self, c: Coordinate) -> bool {
        self.rows.entry(c.row).or_default().insert(c.column)
    }

    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.rows.get(&c.row).is_some_and(|cols| cols.contains(&c.column))
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(BTreeSet::is_empty)
    }

    /// Cells in (row, column) order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&column| Coordinate::new(row, column)))
    }

    /// All six neighbors occupied.
    pub fn is_interior(&self, c: Coordinate) -> bool {
        petals(c).iter().all(|&p| self.contains(p))
    }
}

impl FromIterator<Coordinate> for Occupancy {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        let mut out = Occupancy::default();
        for c in iter {
            out.insert(c);
        }
        out
    }
}

/// Cell topologically farthest from the boundary.
///
/// Multi-source BFS from every boundary cell at once, stepping only into
/// interior cells and removing them as they are reached; the last cell removed
/// is returned. `None` if no cell is interior.
pub fn deepest_interior(occupancy: &Occupancy) -> Option<Coordinate> {
    let mut frontier: VecDeque<Coordinate> = VecDeque::new();
    let mut interior: HashSet<Coordinate> = HashSet::new();
    for c in occupancy.iter() {
        if occupancy.is_interior(c) {
            interior.insert(c);
        } else {
            frontier.push_back(c);
        }
    }

    let mut last = None;
    while let Some(current) = frontier.pop_front() {
        for neighbor in petals(current) {
            if interior.remove(&neighbor) {
                last = Some(neighbor);
                frontier.push_back(neighbor);
            }
        }
    }
    last
}

/// Occupancy plus the radius used to produce it; the production lookup source.
#[derive(Clone, Debug)]
pub struct HexLattice {
    pub occupancy: Occupancy,
    pub radius: f64,
}

#[cfg(test)]
mod tests;
