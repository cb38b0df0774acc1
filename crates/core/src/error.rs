//! Error types for solver configuration and field assembly
//!
//! All errors are surfaced synchronously to the caller; there is no notion
//! of partial success. A field assembly either completes for every requested
//! source and mirror, or fails outright with one of these variants.

use std::fmt;

/// Errors reported by the baseplate solver.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A configuration value violates its constraint (non-positive power,
    /// footprint dimension, resolution, view extent, conductivity or
    /// thickness, or a non-finite value).
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint, e.g. `"must be finite and positive"`.
        constraint: &'static str,
    },

    /// A source footprint (or queried sub-window) extends outside the
    /// configured view window. Never silently truncated.
    FootprintOutOfBounds {
        /// Center of the offending footprint, x in mm.
        x0: f64,
        /// Center of the offending footprint, z in mm.
        z0: f64,
    },

    /// Two fields computed under different view/resolution configurations
    /// were combined.
    GridMismatch,

    /// A `SourceId` that was not issued by this solver (or whose source was
    /// never registered).
    UnknownSource(usize),

    /// Mirror index 0 was requested from the image-source kernel. The real
    /// source is not an image; indices start at 1.
    InvalidMirrorIndex(usize),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidParameter {
                name,
                value,
                constraint,
            } => {
                write!(f, "parameter '{name}' {constraint}, got {value}")
            }
            SolverError::FootprintOutOfBounds { x0, z0 } => {
                write!(
                    f,
                    "source footprint centered at ({x0}, {z0}) mm extends outside the view window"
                )
            }
            SolverError::GridMismatch => {
                write!(
                    f,
                    "cannot combine fields computed under different view/resolution configurations"
                )
            }
            SolverError::UnknownSource(id) => {
                write!(f, "source id {id} does not belong to this solver")
            }
            SolverError::InvalidMirrorIndex(m) => {
                write!(f, "mirror index must be >= 1, got {m}")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Validate that a value is finite and strictly positive.
pub(crate) fn require_positive(
    name: &'static str,
    value: f64,
) -> Result<f64, SolverError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SolverError::InvalidParameter {
            name,
            value,
            constraint: "must be finite and positive",
        })
    }
}

/// Validate that a value is finite and non-negative.
pub(crate) fn require_non_negative(
    name: &'static str,
    value: f64,
) -> Result<f64, SolverError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SolverError::InvalidParameter {
            name,
            value,
            constraint: "must be finite and non-negative",
        })
    }
}

/// Validate that a value is finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, SolverError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::InvalidParameter {
            name,
            value,
            constraint: "must be finite",
        })
    }
}
