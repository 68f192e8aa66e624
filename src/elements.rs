#![warn(missing_docs)]
//! Optical elements and their ray-transfer matrices
//!
//! The supported elements form a closed set of variants with a total mapping to
//! [`RayTransferMatrix`]. Adding a new element means adding a new variant together
//! with one match arm in [`OpticalElement::matrix`]. Curved-surface elements
//! ([`OpticalElement::CurvedMirror`], [`OpticalElement::CurvedInterface`]) can be
//! constructed but their matrices are not implemented yet.
use serde::{Deserialize, Serialize};
use uom::num_traits::Zero;
use uom::si::{f64::Length, length::meter};

use crate::{
    error::{QpResult, QpropError},
    matrix::RayTransferMatrix,
};

/// An optical element of a paraxial system.
///
/// All length parameters are [`uom`] quantities. The element parameters are validated
/// by the respective constructor functions ([`OpticalElement::free_space`],
/// [`OpticalElement::thin_lens`], ...). The parameters are checked again while
/// generating the actual matrix, so an `OpticalElement` assembled directly from its
/// fields (e.g. after deserialization) cannot bypass the validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OpticalElement {
    /// propagation through free space (or a homogeneous medium) over the given distance.
    /// The distance may be negative for a virtual back-propagation.
    FreeSpace {
        /// propagation distance
        distance: Length,
    },
    /// an ideal thin lens of the given focal length. A positive focal length
    /// corresponds to a focussing (convex) lens.
    ThinLens {
        /// focal length
        focal_length: Length,
    },
    /// a thick lens of the given focal length, modeled as the entry surface power, a
    /// propagation over the center thickness inside the lens medium and the exit
    /// surface power
    ThickLens {
        /// focal length
        focal_length: Length,
        /// refractive index of the surrounding medium
        n_in: f64,
        /// refractive index of the lens medium
        n_lens: f64,
        /// center thickness of the lens
        thickness: Length,
    },
    /// an ideal flat mirror. This element only folds the beam path and does not alter
    /// the beam parameter.
    FlatMirror,
    /// a flat refractive interface between two media
    FlatInterface {
        /// refractive index of the medium in front of the interface
        n_in: f64,
        /// refractive index of the medium behind the interface
        n_out: f64,
    },
    /// a plane-parallel plate of a medium with refractive index `n_slab` embedded in a
    /// medium with refractive index `n_in` (entry interface, propagation over the
    /// given thickness, exit interface)
    Slab {
        /// refractive index of the surrounding medium
        n_in: f64,
        /// refractive index of the slab medium
        n_slab: f64,
        /// slab thickness
        thickness: Length,
    },
    /// a curved mirror. **Not implemented yet**: generating the matrix fails with
    /// [`QpropError::NotImplemented`].
    CurvedMirror {
        /// radius of curvature of the mirror surface
        radius_of_curvature: Length,
    },
    /// a curved refractive interface. **Not implemented yet**: generating the matrix
    /// fails with [`QpropError::NotImplemented`].
    CurvedInterface {
        /// refractive index of the medium in front of the interface
        n_in: f64,
        /// refractive index of the medium behind the interface
        n_out: f64,
        /// radius of curvature of the interface
        radius_of_curvature: Length,
    },
}

fn check_refractive_index(name: &str, refractive_index: f64) -> QpResult<()> {
    if refractive_index < 1.0 || !refractive_index.is_finite() {
        return Err(QpropError::Domain(format!(
            "refractive index {name} must be >=1.0 and finite"
        )));
    }
    Ok(())
}

impl OpticalElement {
    /// Create a free-space propagation over the given distance.
    ///
    /// # Errors
    /// This function returns an error if the given distance is not finite.
    pub fn free_space(distance: Length) -> QpResult<Self> {
        if !distance.is_finite() {
            return Err(QpropError::Domain(
                "free space: propagation distance must be finite".into(),
            ));
        }
        Ok(Self::FreeSpace { distance })
    }
    /// Create a thin lens of the given focal length.
    ///
    /// # Errors
    /// This function returns an error if the given focal length is 0.0 or not finite
    /// (a zero focal length corresponds to an infinite optical power).
    pub fn thin_lens(focal_length: Length) -> QpResult<Self> {
        if focal_length.is_zero() || !focal_length.is_normal() {
            return Err(QpropError::Domain(
                "thin lens: focal length must be finite and nonzero".into(),
            ));
        }
        Ok(Self::ThinLens { focal_length })
    }
    /// Create a thick lens of the given focal length and center thickness.
    ///
    /// The two surfaces contribute opposite powers `(n_lens - n_in) / (n_in * f)` and
    /// `(n_in - n_lens) / (n_lens * f)`, separated by a propagation over the center
    /// thickness. With a zero thickness the surface powers cancel.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given focal length is 0.0 or not finite
    ///  - one of the given refractive indices is <1.0 or not finite
    ///  - the given thickness is negative or not finite.
    pub fn thick_lens(
        focal_length: Length,
        n_in: f64,
        n_lens: f64,
        thickness: Length,
    ) -> QpResult<Self> {
        if focal_length.is_zero() || !focal_length.is_normal() {
            return Err(QpropError::Domain(
                "thick lens: focal length must be finite and nonzero".into(),
            ));
        }
        check_refractive_index("n_in", n_in)?;
        check_refractive_index("n_lens", n_lens)?;
        if thickness.is_sign_negative() || !thickness.is_finite() {
            return Err(QpropError::Domain(
                "thick lens: thickness must be non-negative and finite".into(),
            ));
        }
        Ok(Self::ThickLens {
            focal_length,
            n_in,
            n_lens,
            thickness,
        })
    }
    /// Create a flat mirror.
    #[must_use]
    pub const fn flat_mirror() -> Self {
        Self::FlatMirror
    }
    /// Create a flat interface between two media of the given refractive indices.
    ///
    /// # Errors
    /// This function returns an error if one of the given refractive indices is <1.0
    /// or not finite.
    pub fn flat_interface(n_in: f64, n_out: f64) -> QpResult<Self> {
        check_refractive_index("n_in", n_in)?;
        check_refractive_index("n_out", n_out)?;
        Ok(Self::FlatInterface { n_in, n_out })
    }
    /// Create a plane-parallel plate of the given thickness.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - one of the given refractive indices is <1.0 or not finite
    ///  - the given thickness is negative or not finite.
    pub fn slab(n_in: f64, n_slab: f64, thickness: Length) -> QpResult<Self> {
        check_refractive_index("n_in", n_in)?;
        check_refractive_index("n_slab", n_slab)?;
        if thickness.is_sign_negative() || !thickness.is_finite() {
            return Err(QpropError::Domain(
                "slab: thickness must be non-negative and finite".into(),
            ));
        }
        Ok(Self::Slab {
            n_in,
            n_slab,
            thickness,
        })
    }
    /// Create a curved mirror of the given radius of curvature.
    ///
    /// **Note**: the matrix of this element is not implemented yet.
    ///
    /// # Errors
    /// This function returns an error if the given radius of curvature is 0.0 or not
    /// finite.
    pub fn curved_mirror(radius_of_curvature: Length) -> QpResult<Self> {
        if radius_of_curvature.is_zero() || !radius_of_curvature.is_normal() {
            return Err(QpropError::Domain(
                "curved mirror: radius of curvature must be finite and nonzero".into(),
            ));
        }
        Ok(Self::CurvedMirror {
            radius_of_curvature,
        })
    }
    /// Create a curved interface between two media of the given refractive indices.
    ///
    /// **Note**: the matrix of this element is not implemented yet.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - one of the given refractive indices is <1.0 or not finite
    ///  - the given radius of curvature is 0.0 or not finite.
    pub fn curved_interface(n_in: f64, n_out: f64, radius_of_curvature: Length) -> QpResult<Self> {
        check_refractive_index("n_in", n_in)?;
        check_refractive_index("n_out", n_out)?;
        if radius_of_curvature.is_zero() || !radius_of_curvature.is_normal() {
            return Err(QpropError::Domain(
                "curved interface: radius of curvature must be finite and nonzero".into(),
            ));
        }
        Ok(Self::CurvedInterface {
            n_in,
            n_out,
            radius_of_curvature,
        })
    }
    /// Generate the ray-transfer matrix of this element.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the element parameters are invalid (see the respective constructor functions)
    ///  - the element is a curved-surface element ([`QpropError::NotImplemented`]).
    pub fn matrix(&self) -> QpResult<RayTransferMatrix> {
        match self {
            Self::FreeSpace { distance } => {
                if !distance.is_finite() {
                    return Err(QpropError::Domain(
                        "free space: propagation distance must be finite".into(),
                    ));
                }
                RayTransferMatrix::new(1.0, distance.get::<meter>(), 0.0, 1.0)
            }
            Self::ThinLens { focal_length } => {
                if focal_length.is_zero() || !focal_length.is_normal() {
                    return Err(QpropError::Domain(
                        "thin lens: focal length must be finite and nonzero".into(),
                    ));
                }
                RayTransferMatrix::new(1.0, 0.0, -1.0 / focal_length.get::<meter>(), 1.0)
            }
            Self::ThickLens {
                focal_length,
                n_in,
                n_lens,
                thickness,
            } => {
                if focal_length.is_zero() || !focal_length.is_normal() {
                    return Err(QpropError::Domain(
                        "thick lens: focal length must be finite and nonzero".into(),
                    ));
                }
                check_refractive_index("n_in", *n_in)?;
                check_refractive_index("n_lens", *n_lens)?;
                if thickness.is_sign_negative() || !thickness.is_finite() {
                    return Err(QpropError::Domain(
                        "thick lens: thickness must be non-negative and finite".into(),
                    ));
                }
                let f = focal_length.get::<meter>();
                let entry =
                    RayTransferMatrix::new(1.0, 0.0, (n_in - n_lens) / (n_lens * f), n_in / n_lens)?;
                let propagation =
                    RayTransferMatrix::new(1.0, thickness.get::<meter>(), 0.0, 1.0)?;
                let exit =
                    RayTransferMatrix::new(1.0, 0.0, (n_lens - n_in) / (n_in * f), n_lens / n_in)?;
                Ok(RayTransferMatrix::compose(&[entry, propagation, exit]))
            }
            Self::FlatMirror => Ok(RayTransferMatrix::identity()),
            Self::FlatInterface { n_in, n_out } => {
                check_refractive_index("n_in", *n_in)?;
                check_refractive_index("n_out", *n_out)?;
                RayTransferMatrix::new(1.0, 0.0, 0.0, n_in / n_out)
            }
            Self::Slab {
                n_in,
                n_slab,
                thickness,
            } => {
                check_refractive_index("n_in", *n_in)?;
                check_refractive_index("n_slab", *n_slab)?;
                if thickness.is_sign_negative() || !thickness.is_finite() {
                    return Err(QpropError::Domain(
                        "slab: thickness must be non-negative and finite".into(),
                    ));
                }
                let entry = RayTransferMatrix::new(1.0, 0.0, 0.0, n_in / n_slab)?;
                let propagation =
                    RayTransferMatrix::new(1.0, thickness.get::<meter>(), 0.0, 1.0)?;
                let exit = RayTransferMatrix::new(1.0, 0.0, 0.0, n_slab / n_in)?;
                Ok(RayTransferMatrix::compose(&[entry, propagation, exit]))
            }
            Self::CurvedMirror { .. } => Err(QpropError::NotImplemented(
                "curved mirror: radius-of-curvature based elements are not implemented yet".into(),
            )),
            Self::CurvedInterface { .. } => Err(QpropError::NotImplemented(
                "curved interface: radius-of-curvature based elements are not implemented yet"
                    .into(),
            )),
        }
    }
}
