#![warn(missing_docs)]
//! Ray-transfer (ABCD) matrices
//!
//! A [`RayTransferMatrix`] describes the linear transform an optical element performs
//! on a paraxial ray vector (transverse position, angle) or, with the same four
//! coefficients, on the complex beam parameter q of a Gaussian beam. Matrix entries
//! are stored in SI base units: `B` in meters, `C` in 1/meters, `A` and `D`
//! dimensionless.
use std::ops::Mul;

use nalgebra::{vector, Matrix2, Vector2};
use num::{Complex, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{QpResult, QpropError};

/// Tolerance below which a matrix determinant is treated as zero.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// A 2x2 ray-transfer matrix `[[A, B], [C, D]]`.
///
/// For a lossless element embedded in a single medium the determinant `A*D - B*C`
/// is unity. A composite matrix of a system whose input and output media differ has
/// determinant `n_in / n_out` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayTransferMatrix {
    m: Matrix2<f64>,
}

impl RayTransferMatrix {
    /// Create a new [`RayTransferMatrix`] from its four coefficients.
    ///
    /// # Errors
    /// This function returns an error if any of the given coefficients is not finite.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> QpResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
            return Err(QpropError::Domain(
                "all ray-transfer matrix coefficients must be finite".into(),
            ));
        }
        Ok(Self {
            m: Matrix2::new(a, b, c, d),
        })
    }
    /// Create an identity matrix (= the empty optical system).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
        }
    }
    /// Returns the `A` coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.m[(0, 0)]
    }
    /// Returns the `B` coefficient (in meters).
    #[must_use]
    pub fn b(&self) -> f64 {
        self.m[(0, 1)]
    }
    /// Returns the `C` coefficient (in 1/meters).
    #[must_use]
    pub fn c(&self) -> f64 {
        self.m[(1, 0)]
    }
    /// Returns the `D` coefficient.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.m[(1, 1)]
    }
    /// Returns the determinant `A*D - B*C`.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }
    /// Returns the inverse matrix.
    ///
    /// The inverse matrix undoes the transform of this matrix, e.g. the inverse of a
    /// free-space propagation over a distance `d` is a propagation over `-d`.
    ///
    /// # Errors
    /// This function returns an error if the matrix is singular (determinant of or
    /// near zero).
    pub fn inverse(&self) -> QpResult<Self> {
        let det = self.determinant();
        if det.abs() < SINGULAR_TOLERANCE {
            return Err(QpropError::Domain(
                "ray-transfer matrix is singular and cannot be inverted".into(),
            ));
        }
        Ok(Self {
            m: Matrix2::new(self.d(), -self.b(), -self.c(), self.a()) / det,
        })
    }
    /// Compose the given matrices into a single system matrix.
    ///
    /// The matrices must be given in the order the light travels through the
    /// corresponding elements. The first element is hence the rightmost factor of the
    /// matrix product: for light passing element 1 and then element 2 the composite is
    /// `M2 * M1`. Composing an empty slice yields the identity matrix, composing a
    /// single matrix yields that matrix unchanged.
    #[must_use]
    pub fn compose(matrices: &[Self]) -> Self {
        matrices
            .iter()
            .fold(Self::identity(), |system, element| *element * system)
    }
    /// Apply this matrix to a complex beam parameter (given in meters).
    ///
    /// This implements the ABCD law `q' = (A*q + B) / (C*q + D)`.
    ///
    /// # Errors
    /// This function returns an error if the denominator `C*q + D` is zero (degenerate
    /// transform). For a physical beam parameter (positive imaginary part) this can
    /// only happen with a singular matrix.
    pub fn transform_q(&self, q: Complex<f64>) -> QpResult<Complex<f64>> {
        let denominator = self.c() * q + self.d();
        if denominator.is_zero() {
            return Err(QpropError::Domain(
                "singular beam transform: C*q + D = 0".into(),
            ));
        }
        Ok((self.a() * q + self.b()) / denominator)
    }
    /// Apply this matrix to a paraxial ray vector.
    ///
    /// The ray vector consists of the transverse position (in meters) and the angle
    /// with respect to the optical axis (in radians).
    #[must_use]
    pub fn transform_ray(&self, position: f64, angle: f64) -> Vector2<f64> {
        self.m * vector![position, angle]
    }
}

impl Mul for RayTransferMatrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self { m: self.m * rhs.m }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;
    #[test]
    fn new() {
        let m = RayTransferMatrix::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(m.a(), 1.0);
        assert_eq!(m.b(), 2.0);
        assert_eq!(m.c(), 3.0);
        assert_eq!(m.d(), 4.0);
        assert!(RayTransferMatrix::new(f64::NAN, 2.0, 3.0, 4.0).is_err());
        assert!(RayTransferMatrix::new(1.0, f64::INFINITY, 3.0, 4.0).is_err());
        assert!(RayTransferMatrix::new(1.0, 2.0, f64::NEG_INFINITY, 4.0).is_err());
        assert!(RayTransferMatrix::new(1.0, 2.0, 3.0, f64::NAN).is_err());
    }
    #[test]
    fn identity() {
        let m = RayTransferMatrix::identity();
        assert_eq!(m.a(), 1.0);
        assert_eq!(m.b(), 0.0);
        assert_eq!(m.c(), 0.0);
        assert_eq!(m.d(), 1.0);
        assert_eq!(m.determinant(), 1.0);
    }
    #[test]
    fn determinant() {
        let m = RayTransferMatrix::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_abs_diff_eq!(m.determinant(), -2.0);
    }
    #[test]
    fn mul() {
        // thin lens (f = 1 m) after free space (d = 2 m)
        let free_space = RayTransferMatrix::new(1.0, 2.0, 0.0, 1.0).unwrap();
        let lens = RayTransferMatrix::new(1.0, 0.0, -1.0, 1.0).unwrap();
        let system = lens * free_space;
        assert_abs_diff_eq!(system.a(), 1.0);
        assert_abs_diff_eq!(system.b(), 2.0);
        assert_abs_diff_eq!(system.c(), -1.0);
        assert_abs_diff_eq!(system.d(), -1.0);
    }
    #[test]
    fn compose_empty() {
        assert_eq!(RayTransferMatrix::compose(&[]), RayTransferMatrix::identity());
    }
    #[test]
    fn compose_single() {
        let m = RayTransferMatrix::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(RayTransferMatrix::compose(&[m]), m);
    }
    #[test]
    fn compose_travel_order() {
        // first element of the sequence must end up as the rightmost factor
        let free_space = RayTransferMatrix::new(1.0, 2.0, 0.0, 1.0).unwrap();
        let lens = RayTransferMatrix::new(1.0, 0.0, -1.0, 1.0).unwrap();
        let system = RayTransferMatrix::compose(&[free_space, lens]);
        assert_eq!(system, lens * free_space);
        assert_ne!(system, free_space * lens);
    }
    #[test]
    fn inverse() {
        let m = RayTransferMatrix::new(1.0, 2.0, 0.0, 1.0).unwrap();
        let inv = m.inverse().unwrap();
        assert_relative_eq!(inv.b(), -2.0);
        assert_eq!(inv * m, RayTransferMatrix::identity());
    }
    #[test]
    fn inverse_singular() {
        let m = RayTransferMatrix::new(1.0, 0.0, 1.0, 0.0).unwrap();
        assert_matches!(m.inverse(), Err(QpropError::Domain(_)));
    }
    #[test]
    fn inverse_near_singular() {
        let m = RayTransferMatrix::new(1.0, 1.0, 1.0, 1.0 + 1e-13).unwrap();
        assert_matches!(m.inverse(), Err(QpropError::Domain(_)));
    }
    #[test]
    fn transform_q() {
        // free space shifts the real part of q
        let m = RayTransferMatrix::new(1.0, 0.5, 0.0, 1.0).unwrap();
        let q = m.transform_q(Complex::new(0.0, 2.0)).unwrap();
        assert_abs_diff_eq!(q.re, 0.5);
        assert_abs_diff_eq!(q.im, 2.0);
    }
    #[test]
    fn transform_q_singular() {
        // thin lens with f = 1 m applied to the (unphysical) real parameter q = 1 m
        let lens = RayTransferMatrix::new(1.0, 0.0, -1.0, 1.0).unwrap();
        assert_matches!(
            lens.transform_q(Complex::new(1.0, 0.0)),
            Err(QpropError::Domain(_))
        );
    }
    #[test]
    fn transform_ray() {
        let free_space = RayTransferMatrix::new(1.0, 2.0, 0.0, 1.0).unwrap();
        let ray = free_space.transform_ray(0.001, 0.01);
        assert_abs_diff_eq!(ray[0], 0.021);
        assert_abs_diff_eq!(ray[1], 0.01);
    }
}
