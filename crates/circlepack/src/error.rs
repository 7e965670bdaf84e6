//! Error type shared by every pipeline stage.
//!
//! Unresolved petal references are not errors: they are collected in
//! `Graph::missing` and resolution continues.

use std::fmt;

/// Errors surfaced by the packing pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum PackError {
    /// Complex inverse or division by a zero-magnitude value.
    DivisionByZero,
    /// Relaxation or angle computation left its numeric domain.
    RadiusDomain { radius: f64, reason: &'static str },
    /// No occupied lattice coordinate, or no interior coordinate to start from.
    EmptyPacking,
    /// Caller input rejected before any work was done.
    InvalidInput { reason: String },
}

impl PackError {
    pub(crate) fn domain(radius: f64, reason: &'static str) -> Self {
        Self::RadiusDomain { radius, reason }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::DivisionByZero => write!(f, "division by a zero-magnitude complex value"),
            PackError::RadiusDomain { radius, reason } => {
                write!(f, "radius {radius} out of domain: {reason}")
            }
            PackError::EmptyPacking => {
                write!(f, "packing is empty (no interior lattice coordinate)")
            }
            PackError::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for PackError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PackError>;
