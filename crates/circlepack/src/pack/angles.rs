//! Flower angle laws (Euclidean and hyperbolic).

use std::f64::consts::TAU;

use crate::error::{PackError, Result};

/// Geometry a packing lives in.
///
/// In the hyperbolic model a node's "radius" is the conformal factor
/// `v = e^{-2h} ∈ (0, 1)` of a circle with hyperbolic radius `h`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Model {
    #[default]
    Euclidean,
    Hyperbolic,
}

/// Angle at the center `v` of the triangle formed with tangent petals `u`, `w`.
///
/// Euclidean: law of cosines on sides `(v+u, v+w, u+w)`, evaluated in the
/// equivalent half-angle form `2·asin(√(u/(v+u) · w/(v+w)))`.
/// Hyperbolic: `2·asin(√(v·(1−u)/(1−vu) · (1−w)/(1−vw)))`, all factors in `(0, 1)`.
pub fn petal_angle(model: Model, v: f64, u: f64, w: f64) -> Result<f64> {
    for r in [v, u, w] {
        if !(r.is_finite() && r > 0.0) {
            return Err(PackError::domain(r, "radius must be finite and > 0"));
        }
        if model == Model::Hyperbolic && r >= 1.0 {
            return Err(PackError::domain(r, "conformal factor must be < 1"));
        }
    }
    let s = match model {
        Model::Euclidean => (u / (v + u)) * (w / (v + w)),
        Model::Hyperbolic => v * ((1.0 - u) / (1.0 - v * u)) * ((1.0 - w) / (1.0 - v * w)),
    };
    // asin(√s) needs √s ∈ [0, 1]
    if !(s.is_finite() && (0.0..=1.0).contains(&s)) {
        return Err(PackError::domain(v, "asin argument outside [-1, 1]"));
    }
    Ok(2.0 * s.sqrt().asin())
}

/// Angles for each cyclic consecutive petal pair `(p_i, p_{i+1})`.
pub fn petal_angles(model: Model, r: f64, petals: &[f64]) -> Result<Vec<f64>> {
    let n = petals.len();
    (0..n)
        .map(|i| petal_angle(model, r, petals[i], petals[(i + 1) % n]))
        .collect()
}

pub fn angle_sum(model: Model, r: f64, petals: &[f64]) -> Result<f64> {
    Ok(petal_angles(model, r, petals)?.iter().sum())
}

/// `|angle_sum − 2π|` for one flower.
pub fn angle_error(model: Model, r: f64, petals: &[f64]) -> Result<f64> {
    Ok((angle_sum(model, r, petals)? - TAU).abs())
}
