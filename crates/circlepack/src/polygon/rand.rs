//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) with bounded angular jitter, each at
//!   radius `base_radius · (1 + u)`, `u ∈ [−radial_jitter, radial_jitter]`.
//! - Angles stay sorted, so the boundary is simple and star-shaped w.r.t. 0.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Polygon;
use crate::complex::Complex;

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Relative radial jitter, clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub base_radius: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped polygon around the origin (CCW).
pub fn draw_star(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let theta = k as f64 * delta + jitter;
            let r = cfg.base_radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            Complex::polar(r, theta)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::ZERO;
    use crate::polygon::contains_point;

    #[test]
    fn replay_is_deterministic() {
        let tok = ReplayToken { seed: 42, index: 3 };
        let a = draw_star(StarCfg::default(), tok);
        let b = draw_star(StarCfg::default(), tok);
        assert_eq!(a, b);
        let c = draw_star(StarCfg::default(), ReplayToken { seed: 42, index: 4 });
        assert_ne!(a, c);
    }

    #[test]
    fn star_contains_center() {
        for index in 0..16 {
            let p = draw_star(StarCfg::default(), ReplayToken { seed: 1, index });
            assert_eq!(p.len(), 12);
            assert!(contains_point(&p, ZERO));
        }
    }
}
