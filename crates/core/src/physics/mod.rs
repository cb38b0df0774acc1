//! Thermal field kernels
//!
//! Closed-form heat-spreading physics for rectangular sources on a
//! conducting substrate:
//!
//! - [`plate_contribution`] — analytical temperature-rise field of one real
//!   rectangular source on a semi-infinite solid.
//! - [`mirror_contribution`] — method-of-images approximation of the
//!   insulated back face at the substrate thickness.
//!
//! Both kernels produce a [`crate::TemperatureField`] over the configured
//! view window; superposing them is plain field addition.

pub mod mirror;
pub mod plate;

pub use mirror::mirror_contribution;
pub use plate::plate_contribution;

/// Millimetres to metres
pub(crate) const MM_TO_M: f64 = 1e-3;

/// Substituted for a signed edge offset that evaluates to exactly zero,
/// i.e. a grid point lying on a source edge, where the asinh argument
/// would be singular. One nanometre, in metres.
pub(crate) const EDGE_EPSILON_M: f64 = 1e-9;
