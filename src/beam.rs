#![warn(missing_docs)]
//! Module for handling Gaussian beams
//!
//! A [`GaussianBeam`] stores the wavelength, the beam waist and the (signed) distance
//! of the observation plane from the waist. This is an equivalent representation of
//! the complex beam parameter `q = z + i*z_R` with the Rayleigh range
//! `z_R = pi * w0^2 / lambda`. Spot size, divergence and wavefront curvature are
//! derived from these values.
use std::f64::consts::PI;

use num::Complex;
use serde::{Deserialize, Serialize};
use uom::num_traits::Zero;
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

use crate::{
    error::{QpResult, QpropError},
    matrix::RayTransferMatrix,
};

/// A rotationally symmetric Gaussian beam (TEM00 mode).
///
/// A beam is a pure value: applying a ray-transfer matrix (see
/// [`GaussianBeam::transformed`]) yields a new beam and leaves the original one
/// untouched. Deserialization runs the same validation as
/// [`GaussianBeam::new_at`], so a deserialized beam cannot carry unphysical
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaussianBeam {
    wavelength: Length,
    waist: Length,
    z: Length,
}

#[derive(Deserialize)]
struct GaussianBeamData {
    wavelength: Length,
    waist: Length,
    z: Length,
}

impl<'de> Deserialize<'de> for GaussianBeam {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = GaussianBeamData::deserialize(deserializer)?;
        Self::new_at(data.wavelength, data.waist, data.z).map_err(serde::de::Error::custom)
    }
}

impl GaussianBeam {
    /// Create a new [`GaussianBeam`] observed at its waist position.
    ///
    /// # Errors
    /// This function returns an error if the given wavelength or waist is <= 0.0,
    /// `NaN` or +inf.
    pub fn new(wavelength: Length, waist: Length) -> QpResult<Self> {
        Self::new_at(wavelength, waist, Length::zero())
    }
    /// Create a new [`GaussianBeam`] observed a (signed) distance `z` from its waist.
    ///
    /// A positive `z` corresponds to an observation plane behind the waist (in
    /// propagation direction).
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given wavelength or waist is <= 0.0, `NaN` or +inf
    ///  - the given distance is not finite.
    pub fn new_at(wavelength: Length, waist: Length, z: Length) -> QpResult<Self> {
        if wavelength.is_zero() || wavelength.is_sign_negative() || !wavelength.is_finite() {
            return Err(QpropError::Domain(
                "wavelength must be positive and finite".into(),
            ));
        }
        if waist.is_zero() || waist.is_sign_negative() || !waist.is_finite() {
            return Err(QpropError::Domain(
                "beam waist must be positive and finite".into(),
            ));
        }
        if !z.is_finite() {
            return Err(QpropError::Domain(
                "distance from waist must be finite".into(),
            ));
        }
        Ok(Self {
            wavelength,
            waist,
            z,
        })
    }
    /// Create a new [`GaussianBeam`] from a complex beam parameter (given in meters).
    ///
    /// This is the inverse of [`GaussianBeam::q`]: the imaginary part of `q` is the
    /// Rayleigh range, the real part the distance from the waist.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given wavelength is <= 0.0, `NaN` or +inf
    ///  - the imaginary part of `q` is <= 0.0 (no physical beam) or `q` is not finite.
    pub fn from_q(wavelength: Length, q: Complex<f64>) -> QpResult<Self> {
        if !q.re.is_finite() || !q.im.is_finite() {
            return Err(QpropError::Domain("beam parameter must be finite".into()));
        }
        if q.im <= 0.0 {
            return Err(QpropError::Domain(
                "beam parameter must have a positive imaginary part (Rayleigh range)".into(),
            ));
        }
        if wavelength.is_zero() || wavelength.is_sign_negative() || !wavelength.is_finite() {
            return Err(QpropError::Domain(
                "wavelength must be positive and finite".into(),
            ));
        }
        let waist = Length::new::<meter>((wavelength.get::<meter>() * q.im / PI).sqrt());
        Self::new_at(wavelength, waist, Length::new::<meter>(q.re))
    }
    /// Returns the wavelength of this [`GaussianBeam`].
    #[must_use]
    pub fn wavelength(&self) -> Length {
        self.wavelength
    }
    /// Returns the beam waist (minimum beam radius) of this [`GaussianBeam`].
    #[must_use]
    pub fn waist(&self) -> Length {
        self.waist
    }
    /// Returns the signed distance of the observation plane from the beam waist.
    #[must_use]
    pub fn distance_from_waist(&self) -> Length {
        self.z
    }
    /// Returns the Rayleigh range `z_R = pi * w0^2 / lambda` of this [`GaussianBeam`].
    #[must_use]
    pub fn rayleigh_range(&self) -> Length {
        PI * self.waist * self.waist / self.wavelength
    }
    /// Returns the complex beam parameter `q = z + i*z_R` (in meters).
    #[must_use]
    pub fn q(&self) -> Complex<f64> {
        Complex::new(self.z.get::<meter>(), self.rayleigh_range().get::<meter>())
    }
    /// Returns the beam radius `w(z) = w0 * sqrt(1 + (z / z_R)^2)` at the observation
    /// plane.
    #[must_use]
    pub fn spot_size(&self) -> Length {
        let relative_z = (self.z / self.rayleigh_range()).value;
        self.waist * relative_z.mul_add(relative_z, 1.0).sqrt()
    }
    /// Returns the far-field (half) divergence angle `lambda / (pi * w0)` of this
    /// [`GaussianBeam`].
    #[must_use]
    pub fn divergence(&self) -> Angle {
        Angle::new::<radian>((self.wavelength / (PI * self.waist)).value)
    }
    /// Returns the radius of curvature `R(z) = z * (1 + (z_R / z)^2)` of the wavefront
    /// at the observation plane.
    ///
    /// At the waist itself the wavefront is flat and the returned radius is +inf.
    #[must_use]
    pub fn radius_of_curvature(&self) -> Length {
        if self.z.is_zero() {
            return Length::new::<meter>(f64::INFINITY);
        }
        let relative_zr = (self.rayleigh_range() / self.z).value;
        self.z * relative_zr.mul_add(relative_zr, 1.0)
    }
    /// Apply a ray-transfer matrix to this beam.
    ///
    /// This implements the ABCD law `q' = (A*q + B) / (C*q + D)` and returns the
    /// resulting beam. The original beam is not modified.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the denominator `C*q + D` is zero (degenerate transform)
    ///  - the transformed parameter has no positive imaginary part. Both can only
    ///    happen for matrices violating the determinant condition.
    pub fn transformed(&self, matrix: &RayTransferMatrix) -> QpResult<Self> {
        let q_out = matrix.transform_q(self.q())?;
        Self::from_q(self.wavelength, q_out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{micrometer, millimeter};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;

    fn test_beam() -> GaussianBeam {
        // 1 mm waist at 1064 nm
        GaussianBeam::new(micrometer!(1.064), millimeter!(1.0)).unwrap()
    }
    #[test]
    fn new() {
        let beam = test_beam();
        assert_eq!(beam.wavelength(), micrometer!(1.064));
        assert_eq!(beam.waist(), millimeter!(1.0));
        assert_eq!(beam.distance_from_waist(), millimeter!(0.0));
        assert!(GaussianBeam::new(micrometer!(0.0), millimeter!(1.0)).is_err());
        assert!(GaussianBeam::new(micrometer!(-1.0), millimeter!(1.0)).is_err());
        assert!(GaussianBeam::new(micrometer!(f64::NAN), millimeter!(1.0)).is_err());
        assert!(GaussianBeam::new(micrometer!(f64::INFINITY), millimeter!(1.0)).is_err());
        assert!(GaussianBeam::new(micrometer!(1.064), millimeter!(0.0)).is_err());
        assert!(GaussianBeam::new(micrometer!(1.064), millimeter!(-1.0)).is_err());
        assert!(GaussianBeam::new(micrometer!(1.064), millimeter!(f64::NAN)).is_err());
    }
    #[test]
    fn new_at() {
        let beam = GaussianBeam::new_at(micrometer!(1.064), millimeter!(1.0), millimeter!(-20.0))
            .unwrap();
        assert_eq!(beam.distance_from_waist(), millimeter!(-20.0));
        assert!(GaussianBeam::new_at(
            micrometer!(1.064),
            millimeter!(1.0),
            millimeter!(f64::INFINITY)
        )
        .is_err());
    }
    #[test]
    fn rayleigh_range() {
        // z_R = pi * (1 mm)^2 / 1.064 um = 2.9526 m
        assert_relative_eq!(
            test_beam().rayleigh_range().get::<meter>(),
            2.952_624_7,
            max_relative = 1e-6
        );
    }
    #[test]
    fn q_at_waist_purely_imaginary() {
        let q = test_beam().q();
        assert_abs_diff_eq!(q.re, 0.0);
        assert_relative_eq!(q.im, 2.952_624_7, max_relative = 1e-6);
    }
    #[test]
    fn from_q_roundtrip() {
        let beam =
            GaussianBeam::new_at(micrometer!(1.064), millimeter!(1.0), millimeter!(35.0)).unwrap();
        let reconstructed = GaussianBeam::from_q(beam.wavelength(), beam.q()).unwrap();
        assert_relative_eq!(
            reconstructed.waist().get::<meter>(),
            beam.waist().get::<meter>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            reconstructed.distance_from_waist().get::<meter>(),
            beam.distance_from_waist().get::<meter>(),
            max_relative = 1e-12
        );
    }
    #[test]
    fn from_q_unphysical() {
        assert_matches!(
            GaussianBeam::from_q(micrometer!(1.064), Complex::new(1.0, 0.0)),
            Err(QpropError::Domain(_))
        );
        assert_matches!(
            GaussianBeam::from_q(micrometer!(1.064), Complex::new(0.0, -1.0)),
            Err(QpropError::Domain(_))
        );
        assert_matches!(
            GaussianBeam::from_q(micrometer!(1.064), Complex::new(f64::NAN, 1.0)),
            Err(QpropError::Domain(_))
        );
    }
    #[test]
    fn spot_size() {
        let beam = test_beam();
        assert_eq!(beam.spot_size(), beam.waist());
        // at z = z_R the beam radius has grown by sqrt(2)
        let expanded =
            GaussianBeam::new_at(beam.wavelength(), beam.waist(), beam.rayleigh_range()).unwrap();
        assert_relative_eq!(
            expanded.spot_size().get::<meter>(),
            beam.waist().get::<meter>() * f64::sqrt(2.0),
            max_relative = 1e-12
        );
    }
    #[test]
    fn divergence() {
        // theta = lambda / (pi * w0) = 338.7 urad
        assert_relative_eq!(
            test_beam().divergence().get::<radian>(),
            3.386_817_6e-4,
            max_relative = 1e-6
        );
    }
    #[test]
    fn radius_of_curvature() {
        let beam = test_beam();
        assert!(beam.radius_of_curvature().get::<meter>().is_infinite());
        let z_r = beam.rayleigh_range();
        let shifted = GaussianBeam::new_at(beam.wavelength(), beam.waist(), z_r).unwrap();
        // R(z_R) = 2 * z_R is the minimum wavefront curvature radius
        assert_relative_eq!(
            shifted.radius_of_curvature().get::<meter>(),
            2.0 * z_r.get::<meter>(),
            max_relative = 1e-12
        );
    }
    #[test]
    fn serde_roundtrip() {
        let beam =
            GaussianBeam::new_at(micrometer!(1.064), millimeter!(1.0), millimeter!(35.0)).unwrap();
        let json = serde_json::to_string(&beam).unwrap();
        let deserialized: GaussianBeam = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, beam);
    }
    #[test]
    fn deserialize_validates() {
        // unphysical parameters must not sneak in through deserialization
        let negative_wavelength = r#"{"wavelength":-1.064e-6,"waist":1e-3,"z":0.0}"#;
        assert!(serde_json::from_str::<GaussianBeam>(negative_wavelength).is_err());
        let zero_waist = r#"{"wavelength":1.064e-6,"waist":0.0,"z":0.0}"#;
        assert!(serde_json::from_str::<GaussianBeam>(zero_waist).is_err());
    }
    #[test]
    fn transformed_free_space() {
        let beam = test_beam();
        let free_space = RayTransferMatrix::new(1.0, 0.5, 0.0, 1.0).unwrap();
        let propagated = beam.transformed(&free_space).unwrap();
        assert_relative_eq!(
            propagated.distance_from_waist().get::<meter>(),
            0.5,
            max_relative = 1e-12
        );
        // a free-space propagation does not move the waist
        assert_relative_eq!(
            propagated.waist().get::<meter>(),
            beam.waist().get::<meter>(),
            max_relative = 1e-12
        );
    }
}
