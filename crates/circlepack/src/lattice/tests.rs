use super::*;
use crate::error::PackError;
use crate::polygon::rand::{draw_star, ReplayToken, StarCfg};
use crate::polygon::{area, contains_point, edges, perimeter, rectangle, regular};
use crate::segment::point_distance;

fn hex_patch(n: i64) -> Occupancy {
    let origin = Coordinate::new(0, 0);
    let mut out = Occupancy::default();
    for row in -n..=n {
        for column in -2 * n..=2 * n {
            let c = Coordinate::new(row, column);
            if hex_distance(c, origin) <= n {
                out.insert(c);
            }
        }
    }
    out
}

fn min_edge_distance(points: &[Point], z: Point) -> f64 {
    edges(points)
        .map(|e| point_distance(&e, z))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn petals_are_counter_clockwise_and_tangent() {
    let radius = 0.5;
    let c = Coordinate::new(2, -1);
    let z = center(c, radius);
    let mut prev_angle = -1.0;
    for p in petals(c) {
        let d = center(p, radius) - z;
        assert!((d.abs() - 2.0 * radius).abs() < 1e-12);
        let angle = d.arg().rem_euclid(std::f64::consts::TAU);
        assert!(angle > prev_angle);
        prev_angle = angle;
    }
}

#[test]
fn hex_distance_of_petals_is_one() {
    let c = Coordinate::new(-3, 4);
    assert!(petals(c).iter().all(|&p| hex_distance(c, p) == 1));
    assert_eq!(hex_patch(2).len(), 19);
}

#[test]
fn erosion_finds_patch_center() {
    let occ = hex_patch(3);
    assert_eq!(deepest_interior(&occ), Some(Coordinate::new(0, 0)));
    assert!(occ.is_interior(Coordinate::new(0, 0)));
    assert!(!occ.is_interior(Coordinate::new(3, 0)));
}

#[test]
fn erosion_without_interior_is_none() {
    let line: Occupancy = (0..5).map(|c| Coordinate::new(0, c)).collect();
    assert_eq!(deepest_interior(&line), None);
    assert_eq!(deepest_interior(&Occupancy::default()), None);
}

#[test]
fn fitted_disks_lie_inside_polygon() {
    let radius = 0.7;
    let poly = draw_star(StarCfg::default(), ReplayToken { seed: 9, index: 0 });
    let occ = hexagonal_fit(&poly, radius).unwrap();
    assert!(!occ.is_empty());
    for c in occ.iter() {
        let z = center(c, radius);
        assert!(contains_point(&poly, z), "{c:?} center outside");
        assert!(min_edge_distance(&poly, z) >= radius - 1e-9, "{c:?} disk crosses boundary");
    }
}

#[test]
fn every_strictly_fitting_disk_is_occupied() {
    let radius = 0.7;
    let poly = draw_star(StarCfg::default(), ReplayToken { seed: 9, index: 1 });
    let occ = hexagonal_fit(&poly, radius).unwrap();
    let reach = (15.0 / radius) as i64;
    for row in -reach..=reach {
        for column in -2 * reach..=2 * reach {
            let c = Coordinate::new(row, column);
            let z = center(c, radius);
            if contains_point(&poly, z) && min_edge_distance(&poly, z) > radius + 1e-9 {
                assert!(occ.contains(c), "{c:?} fits but was not occupied");
            }
        }
    }
}

#[test]
fn density_matches_area() {
    let radius = 0.5;
    for poly in [
        rectangle(Point::new(0.0, 0.0), Point::new(20.0, 12.0)),
        regular(7, 9.0),
    ] {
        let occ = hexagonal_fit(&poly, radius).unwrap();
        let expected = area(&poly) / (2.0 * 3f64.sqrt() * radius * radius);
        let slack = perimeter(&poly) / radius;
        let count = occ.len() as f64;
        assert!(
            (count - expected).abs() <= slack,
            "count {count}, expected ≈ {expected} ± {slack}"
        );
        assert!(count <= expected);
    }
}

#[test]
fn degenerate_edges_are_skipped() {
    let radius = 0.4;
    let poly = regular(5, 6.0);
    let mut doubled = poly.clone();
    doubled.insert(2, poly[2]);
    assert_eq!(
        hexagonal_fit(&poly, radius).unwrap(),
        hexagonal_fit(&doubled, radius).unwrap()
    );
}

#[test]
fn invalid_inputs_are_rejected() {
    let poly = regular(4, 1.0);
    assert!(matches!(
        hexagonal_fit(&poly, 0.0),
        Err(PackError::InvalidInput { .. })
    ));
    assert!(matches!(
        hexagonal_fit(&poly[..2], 0.1),
        Err(PackError::InvalidInput { .. })
    ));
}

#[test]
fn tiny_polygon_fits_nothing() {
    let occ = hexagonal_fit(&regular(6, 0.5), 1.0).unwrap();
    assert!(occ.is_empty());
}
