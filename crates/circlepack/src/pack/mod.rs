//! Packing engine: angle laws, radius relaxation, and layout.
//!
//! Purpose
//! - Drive radii toward the angle-sum condition (six tangent-triangle angles
//!   around each interior flower sum to 2π), then place the circles.
//!
//! Concurrency
//! - Relaxation is Gauss–Seidel: a flower reads neighbor radii already updated
//!   earlier in the same pass. It is not safe to split a pass across threads
//!   without switching to a double-buffered (Jacobi) scheme.

mod angles;
mod layout;
mod relax;

pub use angles::{angle_error, angle_sum, petal_angle, petal_angles, Model};
pub use layout::{layout, Traversal};
pub use relax::{
    max_angle_error, relax, relax_flower, relax_with, PackCfg, RelaxReport, StopRule,
};
