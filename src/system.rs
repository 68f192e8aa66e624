#![warn(missing_docs)]
//! Optical systems and beam propagation
//!
//! An [`OpticalSystem`] is an ordered sequence of [`OpticalElement`]s in the order the
//! light travels through them. It composes the elements into a single system matrix
//! and applies it to a [`GaussianBeam`], yielding a [`PropagationResult`].
use log::warn;
use serde::{Deserialize, Serialize};
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

use crate::{
    beam::GaussianBeam,
    elements::OpticalElement,
    error::QpResult,
    matrix::RayTransferMatrix,
};

/// Tolerance for the unity-determinant check of the composed system matrix.
const DETERMINANT_TOLERANCE: f64 = 1e-9;

/// An ordered sequence of optical elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalSystem {
    elements: Vec<OpticalElement>,
}

impl OpticalSystem {
    /// Create a new, empty [`OpticalSystem`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Append the given element to this system.
    ///
    /// The elements must be added in the order the light travels through them.
    pub fn add_element(&mut self, element: OpticalElement) {
        self.elements.push(element);
    }
    /// Append a free-space propagation over the given distance to this system.
    ///
    /// # Errors
    /// This function returns an error if the given distance is not finite.
    pub fn add_free_space(&mut self, distance: Length) -> QpResult<()> {
        self.add_element(OpticalElement::free_space(distance)?);
        Ok(())
    }
    /// Append a thin lens of the given focal length to this system.
    ///
    /// # Errors
    /// This function returns an error if the given focal length is 0.0 or not finite.
    pub fn add_thin_lens(&mut self, focal_length: Length) -> QpResult<()> {
        self.add_element(OpticalElement::thin_lens(focal_length)?);
        Ok(())
    }
    /// Returns the elements of this system in travel order.
    #[must_use]
    pub fn elements(&self) -> &[OpticalElement] {
        &self.elements
    }
    /// Returns the number of elements of this system.
    #[must_use]
    pub fn nr_of_elements(&self) -> usize {
        self.elements.len()
    }
    /// Returns `true` if this system contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    /// Compose all elements into a single system matrix.
    ///
    /// The composite is the matrix product taken in reverse travel order (the first
    /// element the light encounters is the rightmost factor). An empty system yields
    /// the identity matrix. A warning is logged if the determinant of the composite
    /// deviates from unity. This happens if the input and output media of the system
    /// differ (e.g. a single [`OpticalElement::FlatInterface`]) or if a custom element
    /// matrix violates the determinant condition.
    ///
    /// # Errors
    /// This function returns an error if one of the elements has invalid parameters or
    /// is not implemented (curved-surface elements).
    pub fn system_matrix(&self) -> QpResult<RayTransferMatrix> {
        let matrices = self
            .elements
            .iter()
            .map(OpticalElement::matrix)
            .collect::<QpResult<Vec<RayTransferMatrix>>>()?;
        let system_matrix = RayTransferMatrix::compose(&matrices);
        if (system_matrix.determinant() - 1.0).abs() > DETERMINANT_TOLERANCE {
            warn!(
                "system matrix determinant deviates from unity: {}",
                system_matrix.determinant()
            );
        }
        Ok(system_matrix)
    }
    /// Propagate the given beam through this system.
    ///
    /// This is the end-to-end operation of the crate: it composes the system matrix,
    /// applies it to the beam parameter and extracts the output beam properties. An
    /// empty system returns the unchanged input beam properties.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - one of the elements has invalid parameters or is not implemented
    ///  - the beam transform is degenerate (`C*q + D = 0`).
    pub fn propagate(&self, beam: &GaussianBeam) -> QpResult<PropagationResult> {
        let output = beam.transformed(&self.system_matrix()?)?;
        Ok(PropagationResult {
            waist: output.waist(),
            spot_size: output.spot_size(),
            position: output.distance_from_waist(),
            divergence: output.divergence(),
        })
    }
    /// Trace a paraxial ray through this system.
    ///
    /// The ray is given by its transverse position and its angle with respect to the
    /// optical axis. The function returns the transformed (position, angle) pair.
    ///
    /// # Errors
    /// This function returns an error if one of the elements has invalid parameters or
    /// is not implemented (curved-surface elements).
    pub fn trace_ray(&self, position: Length, angle: Angle) -> QpResult<(Length, Angle)> {
        let ray = self
            .system_matrix()?
            .transform_ray(position.get::<meter>(), angle.get::<radian>());
        Ok((
            Length::new::<meter>(ray[0]),
            Angle::new::<radian>(ray[1]),
        ))
    }
}

/// The beam properties at the output plane of an [`OpticalSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropagationResult {
    waist: Length,
    spot_size: Length,
    position: Length,
    divergence: Angle,
}

impl PropagationResult {
    /// Returns the waist (minimum radius) of the output beam.
    #[must_use]
    pub fn waist(&self) -> Length {
        self.waist
    }
    /// Returns the beam radius at the output plane.
    #[must_use]
    pub fn spot_size(&self) -> Length {
        self.spot_size
    }
    /// Returns the signed distance of the output plane from the output beam waist.
    ///
    /// A negative value means the waist (e.g. the focus of a lens system) lies behind
    /// the output plane in propagation direction.
    #[must_use]
    pub fn position(&self) -> Length {
        self.position
    }
    /// Returns the far-field (half) divergence angle of the output beam.
    #[must_use]
    pub fn divergence(&self) -> Angle {
        self.divergence
    }
}
