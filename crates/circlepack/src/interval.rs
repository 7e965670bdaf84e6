//! 1D intervals and the scan-row interior sweep.
//!
//! `carve_interior` consumes the per-row walls produced by thickened polygon
//! edges and returns the x-spans that are inside the polygon and farther than
//! the packing radius from every edge.

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// The x-range a thickened edge occupies on one scan row.
///
/// `cross` is where the thin edge itself crosses the row, if it does; only
/// such walls toggle inside/outside during the sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub interval: Interval,
    pub cross: Option<f64>,
}

/// Min/max reduction; `None` for no values.
pub fn hull(values: &[f64]) -> Option<Interval> {
    let (&first, rest) = values.split_first()?;
    let mut out = Interval::new(first, first);
    for &x in rest {
        if x < out.min {
            out.min = x;
        }
        if x > out.max {
            out.max = x;
        }
    }
    Some(out)
}

/// Gaps between walls that lie inside the polygon (even-odd on `cross`).
pub fn carve_interior(walls: &mut [Wall]) -> Vec<Interval> {
    if walls.is_empty() {
        return Vec::new();
    }
    walls.sort_by(|a, b| a.interval.min.total_cmp(&b.interval.min));

    let mut spaces = Vec::new();
    let mut right = walls[0].interval.max;
    let mut inside = walls[0].cross.is_some();
    for wall in &walls[1..] {
        if inside && wall.interval.min > right {
            spaces.push(Interval::new(right, wall.interval.min));
        }
        if wall.interval.max > right {
            right = wall.interval.max;
        }
        if wall.cross.is_some() {
            inside = !inside;
        }
    }
    spaces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(min: f64, max: f64, cross: Option<f64>) -> Wall {
        Wall {
            interval: Interval::new(min, max),
            cross,
        }
    }

    #[test]
    fn hull_of_values() {
        assert_eq!(hull(&[]), None);
        assert_eq!(hull(&[3.0, -1.0, 2.0]), Some(Interval::new(-1.0, 3.0)));
        assert_eq!(hull(&[4.0]), Some(Interval::new(4.0, 4.0)));
    }

    #[test]
    fn carve_empty() {
        assert!(carve_interior(&mut []).is_empty());
    }

    #[test]
    fn carve_between_two_crossings_any_input_order() {
        let mut walls = vec![wall(8.0, 10.0, Some(9.0)), wall(0.0, 2.0, Some(1.0))];
        assert_eq!(carve_interior(&mut walls), vec![Interval::new(2.0, 8.0)]);
    }

    #[test]
    fn thickness_only_wall_extends_without_flipping() {
        // A cap from a nearby vertex sits inside the span: it splits the gap
        // but does not toggle parity.
        let mut walls = vec![
            wall(0.0, 1.0, Some(0.5)),
            wall(4.0, 5.0, None),
            wall(9.0, 10.0, Some(9.5)),
        ];
        assert_eq!(
            carve_interior(&mut walls),
            vec![Interval::new(1.0, 4.0), Interval::new(5.0, 9.0)]
        );
    }

    #[test]
    fn overlapping_walls_leave_no_gap() {
        let mut walls = vec![wall(0.0, 6.0, Some(1.0)), wall(5.0, 10.0, Some(9.0))];
        assert!(carve_interior(&mut walls).is_empty());
    }

    #[test]
    fn outside_gap_is_not_reported() {
        // two separate spans: [1,3] inside, [3,6] outside, [6,8] inside
        let mut walls = vec![
            wall(0.0, 1.0, Some(0.5)),
            wall(3.0, 3.0, Some(3.0)),
            wall(6.0, 6.0, Some(6.0)),
            wall(8.0, 9.0, Some(8.5)),
        ];
        assert_eq!(
            carve_interior(&mut walls),
            vec![Interval::new(1.0, 3.0), Interval::new(6.0, 8.0)]
        );
    }
}
