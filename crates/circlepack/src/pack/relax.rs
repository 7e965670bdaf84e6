//! Radius relaxation toward the angle-sum condition.
//!
//! Each flower update is the uniform-neighbor model: find the radius the
//! center would need if all petals were equal and produced the current angle
//! sum, then solve exactly for the center radius that makes that uniform
//! flower close up (angle sum 2π). Passes are Gauss–Seidel in node order,
//! which is coordinate order, so runs are reproducible.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use tracing::debug;

use super::angles::{angle_error, angle_sum, Model};
use crate::cfg::{ANGLE_EPS, DEFAULT_PASSES};
use crate::error::{PackError, Result};
use crate::graph::Graph;

/// When to stop relaxing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopRule {
    /// Exactly this many passes (reproducible).
    Fixed(usize),
    /// Until every interior flower is within `eps` of 2π, at most `max_passes`.
    Tolerance { eps: f64, max_passes: usize },
}

/// Relaxation configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackCfg {
    pub stop: StopRule,
    /// Wall-clock budget checked between passes.
    pub deadline: Option<Duration>,
}

impl Default for PackCfg {
    fn default() -> Self {
        Self {
            stop: StopRule::Fixed(DEFAULT_PASSES),
            deadline: None,
        }
    }
}

/// Outcome of `relax_with`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelaxReport {
    pub passes: usize,
    pub max_error: f64,
    pub converged: bool,
    pub timed_out: bool,
}

/// New center radius for one flower.
///
/// Errors with `RadiusDomain` for fewer than 3 petals, invalid radii, or a
/// non-finite / non-positive result (hyperbolic: also a result `≥ 1`).
pub fn relax_flower(model: Model, r: f64, petals: &[f64]) -> Result<f64> {
    let n = petals.len();
    if n < 3 {
        return Err(PackError::domain(r, "flower needs at least 3 petals"));
    }
    let theta = angle_sum(model, r, petals)?;
    let beta = (theta / (2.0 * n as f64)).sin();
    let delta = (PI / n as f64).sin();
    let next = match model {
        Model::Euclidean => r * (beta / (1.0 - beta)) * ((1.0 - delta) / delta),
        Model::Hyperbolic => {
            let sv = r.sqrt();
            let v_hat = (beta - sv) / (beta * r - sv);
            if !v_hat.is_finite() {
                return Err(PackError::domain(r, "uniform-neighbor radius is not finite"));
            }
            let v_hat = v_hat.max(0.0);
            let t = 2.0 * delta
                / (((1.0 - v_hat) * (1.0 - v_hat) + 4.0 * delta * delta * v_hat).sqrt()
                    + (1.0 - v_hat));
            t * t
        }
    };
    if !(next.is_finite() && next > 0.0) {
        return Err(PackError::domain(r, "relaxed radius is not finite and positive"));
    }
    if model == Model::Hyperbolic && next >= 1.0 {
        return Err(PackError::domain(next, "relaxed conformal factor reached 1"));
    }
    Ok(next)
}

/// One Gauss–Seidel pass over all interior nodes.
pub fn relax(graph: &mut Graph, model: Model) -> Result<()> {
    for id in graph.ids() {
        if let Some(petals) = graph.petal_radii(id) {
            let next = relax_flower(model, graph.radius(id), &petals)?;
            graph.label_mut(id).radius = next;
        }
    }
    Ok(())
}

/// Largest `|angle_sum − 2π|` over interior nodes (0 if there are none).
pub fn max_angle_error(graph: &Graph, model: Model) -> Result<f64> {
    let mut worst = 0.0f64;
    for id in graph.interior_ids() {
        if let Some(petals) = graph.petal_radii(id) {
            worst = worst.max(angle_error(model, graph.radius(id), &petals)?);
        }
    }
    Ok(worst)
}

/// Relax until `cfg.stop` or `cfg.deadline` says to stop.
pub fn relax_with(graph: &mut Graph, model: Model, cfg: &PackCfg) -> Result<RelaxReport> {
    let started = Instant::now();
    let out_of_time = || cfg.deadline.is_some_and(|d| started.elapsed() >= d);
    let mut passes = 0usize;
    let mut timed_out = false;
    let eps = match cfg.stop {
        StopRule::Fixed(n) => {
            while passes < n {
                if out_of_time() {
                    timed_out = true;
                    break;
                }
                relax(graph, model)?;
                passes += 1;
            }
            ANGLE_EPS
        }
        StopRule::Tolerance { eps, max_passes } => {
            while passes < max_passes && max_angle_error(graph, model)? >= eps {
                if out_of_time() {
                    timed_out = true;
                    break;
                }
                relax(graph, model)?;
                passes += 1;
            }
            eps
        }
    };
    let max_error = max_angle_error(graph, model)?;
    debug!(passes, max_error, timed_out, ?model, "relax_with");
    Ok(RelaxReport {
        passes,
        max_error,
        converged: max_error < eps,
        timed_out,
    })
}
