//! Synthetic lattice regions used as reference inputs.

use crate::lattice::{hex_distance, Coordinate, HexLattice, Occupancy};

/// Triangle `row ≥ 0, column ≥ 0, row + column ≤ n` with unit radius.
pub fn triangle(n: i64) -> HexLattice {
    let occupancy: Occupancy = (0..=n)
        .flat_map(|row| (0..=n - row).map(move |column| Coordinate::new(row, column)))
        .collect();
    HexLattice {
        occupancy,
        radius: 1.0,
    }
}

/// Cells within hex distance `n` of the origin, unit radius.
pub fn hexagon(n: i64) -> HexLattice {
    let origin = Coordinate::new(0, 0);
    let occupancy: Occupancy = (-n..=n)
        .flat_map(|row| (-n..=n).map(move |column| Coordinate::new(row, column)))
        .filter(|&c| hex_distance(c, origin) <= n)
        .collect();
    HexLattice {
        occupancy,
        radius: 1.0,
    }
}
