//! Complex numbers as 2D points.
//!
//! Purpose
//! - One small `Copy` type used for polygon vertices, lattice centers, and
//!   positions in both the Euclidean plane and the Poincaré disk.
//! - Fallible operations (`inv`, `div`, `normalize`, Möbius maps) return
//!   `Err(PackError::DivisionByZero)` instead of producing NaN/∞.
//!
//! Conventions
//! - Equality is exact component comparison (derived `PartialEq`); callers that
//!   need tolerance compare `dist` against their own epsilon.
//! - Converts to/from `nalgebra::Vector2<f64>` for the segment predicates.

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector2;

use crate::error::{PackError, Result};

/// Complex number `x + iy`, also used as a point in R².
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub x: f64,
    pub y: f64,
}

/// Alias used where a value is a location rather than an operand.
pub type Point = Complex;

pub const ZERO: Complex = Complex::new(0.0, 0.0);
pub const ONE: Complex = Complex::new(1.0, 0.0);
pub const I: Complex = Complex::new(0.0, 1.0);

impl Complex {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn from_re(x: f64) -> Self {
        Self { x, y: 0.0 }
    }
    /// `r · (cos θ, sin θ)`.
    #[inline]
    pub fn polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    #[inline]
    pub fn abs2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
    #[inline]
    pub fn abs(self) -> f64 {
        self.abs2().sqrt()
    }
    #[inline]
    pub fn arg(self) -> f64 {
        self.y.atan2(self.x)
    }
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.x, -self.y)
    }
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(s * self.x, s * self.y)
    }
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }
    #[inline]
    pub fn dist(self, other: Self) -> f64 {
        (self - other).abs()
    }

    /// Multiplicative inverse `conj(a) / |a|²`.
    pub fn inv(self) -> Result<Self> {
        let m = self.abs2();
        if m == 0.0 {
            return Err(PackError::DivisionByZero);
        }
        Ok(self.conj().scale(1.0 / m))
    }

    #[inline]
    pub fn div(self, other: Self) -> Result<Self> {
        Ok(self * other.inv()?)
    }

    /// Unit vector in the direction of `self`.
    pub fn normalize(self) -> Result<Self> {
        let m = self.abs();
        if m == 0.0 {
            return Err(PackError::DivisionByZero);
        }
        Ok(self.scale(1.0 / m))
    }

    pub fn exp(self) -> Self {
        Self::polar(self.x.exp(), self.y)
    }
    /// Principal branch; `ln(0)` has real part −∞ like `f64::ln`.
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }
    pub fn cosh(self) -> Self {
        (self.exp() + (-self).exp()).scale(0.5)
    }
    pub fn sinh(self) -> Self {
        (self.exp() - (-self).exp()).scale(0.5)
    }
    pub fn cos(self) -> Self {
        (I * self).cosh()
    }
    pub fn sin(self) -> Self {
        -I * (I * self).sinh()
    }
    /// `exp(ln(self) · b)`.
    pub fn pow(self, b: Self) -> Self {
        (self.ln() * b).exp()
    }

    /// Disk automorphism carrying 0 to `self`: `z ↦ (z + a) / (1 + conj(a)·z)`.
    pub fn mobius_add(self, z: Self) -> Result<Self> {
        (z + self).div(ONE + self.conj() * z)
    }

    /// Inverse of `mobius_add`: `z ↦ (z − a) / (1 − conj(a)·z)` with `a = self`.
    pub fn mobius_sub(self, z: Self) -> Result<Self> {
        (z - self).div(ONE - self.conj() * z)
    }
}

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.x, -self.y)
    }
}
impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, b: Complex) -> Complex {
        Complex::new(self.x * b.x - self.y * b.y, self.x * b.y + self.y * b.x)
    }
}

impl From<Vector2<f64>> for Complex {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Complex::new(v.x, v.y)
    }
}
impl From<Complex> for Vector2<f64> {
    #[inline]
    fn from(z: Complex) -> Self {
        Vector2::new(z.x, z.y)
    }
}
