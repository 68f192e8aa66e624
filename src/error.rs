#![warn(missing_docs)]
//! QPROP specific error structures
use std::{error::Error, fmt::Display};

/// QPROP application specific Result type
pub type QpResult<T> = std::result::Result<T, QpropError>;

/// Errors that can be returned by various QPROP functions.
#[derive(Debug, PartialEq, Eq)]
pub enum QpropError {
    /// physically invalid input such as a non-positive wavelength or beam waist,
    /// a zero focal length or a singular (C*q + D = 0) beam transform
    Domain(String),
    /// a requested optical element (e.g. a curved-surface element) is not implemented
    NotImplemented(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for QpropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(m) => {
                write!(f, "Domain:{m}")
            }
            Self::NotImplemented(m) => {
                write!(f, "NotImplemented:{m}")
            }
            Self::Other(m) => write!(f, "Qprop Error:Other:{m}"),
        }
    }
}
impl Error for QpropError {}

impl std::convert::From<String> for QpropError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
