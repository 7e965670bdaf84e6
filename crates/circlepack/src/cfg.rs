//! Tolerance and default constants (internal).
//!
//! Policy
//! - Defaults are fixed constants; the knobs callers actually tune live in
//!   `PackCfg` / `PipelineCfg`.

/// Passes used by the default fixed-count stopping rule.
pub(crate) const DEFAULT_PASSES: usize = 256;
/// Initial conformal factor for hyperbolic packings (near-horocycle boundary).
pub(crate) const HYPERBOLIC_INITIAL_RADIUS: f64 = 1e-5;
/// Default tolerance on |angle sum − 2π| for the tolerance stopping rule.
pub(crate) const ANGLE_EPS: f64 = 1e-9;
/// Number of petals of every interior flower on the hexagonal lattice.
pub(crate) const HEX_PETALS: usize = 6;
