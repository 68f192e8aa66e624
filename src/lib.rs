//! This is the documentation for the **QPROP** software package. **QPROP** propagates
//! Gaussian laser beams through paraxial optical systems using the ray-transfer
//! (ABCD) matrix formalism.
//!
//! A beam is described by its complex beam parameter `q = z + i*z_R` (see
//! [`GaussianBeam`](crate::beam::GaussianBeam)). Optical elements (free space, thin
//! lenses, flat mirrors, interfaces) are described by 2x2 ray-transfer matrices
//! (see [`OpticalElement`](crate::elements::OpticalElement) and
//! [`RayTransferMatrix`](crate::matrix::RayTransferMatrix)). An
//! [`OpticalSystem`](crate::system::OpticalSystem) holds the elements in the order
//! the light travels through them, composes them into a single system matrix and
//! applies it to the beam parameter:
//!
//! ```rust
//! use qprop::{error::QpResult, micrometer, millimeter, GaussianBeam, OpticalSystem};
//!
//! fn main() -> QpResult<()> {
//!     let beam = GaussianBeam::new(micrometer!(1.064), millimeter!(1.0))?;
//!     let mut system = OpticalSystem::new();
//!     system.add_free_space(millimeter!(118.0))?;
//!     system.add_thin_lens(millimeter!(118.0))?;
//!     system.add_free_space(millimeter!(118.0))?;
//!     let result = system.propagate(&beam)?;
//!     println!("focussed beam waist: {:?}", result.waist());
//!     Ok(())
//! }
//! ```
//!
//! All lengths and angles at the API boundary are [`uom`] quantities. This way the
//! caller can freely mix units (millimeters, micrometers, ...) without silent
//! unit-mismatch bugs; internally all calculations are performed in SI base units.
#![allow(clippy::module_name_repetitions)]

pub mod beam;
pub mod elements;
pub mod error;
pub mod matrix;
pub mod system;
pub mod utils;

pub use beam::GaussianBeam;
pub use elements::OpticalElement;
pub use matrix::RayTransferMatrix;
pub use system::{OpticalSystem, PropagationResult};
