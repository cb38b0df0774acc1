//! Baseplate Heat-Spreading Solver
//!
//! Estimates steady-state surface temperature rise on a thermally
//! conductive baseplate caused by rectangular heat sources (power
//! transistors), combining:
//!
//! - the closed-form solution for a uniformly-fluxed rectangular source on
//!   a semi-infinite solid, and
//! - the method of images, which approximates the insulated back face of a
//!   finite-thickness plate with alternating-sign reflections at multiples
//!   of twice the thickness.
//!
//! The solver is a pure computational core: it produces a 2D
//! temperature-rise field over a configurable view window plus per-source
//! case and junction temperature estimates. Plotting and sweep scenarios
//! live with the caller. Assembly progress is reported through `tracing`
//! debug events; the crate is silent by default.

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod estimator;
pub mod field;
pub mod physics;
pub mod solver;
pub mod source;

// Re-export the public surface
pub use core_types::{Celsius, Point2D};
pub use error::SolverError;
pub use estimator::{case_temperature, junction_temperature, Estimate, SourceReport};
pub use field::{FootprintBounds, TemperatureField, ViewConfig};
pub use physics::{mirror_contribution, plate_contribution};
pub use solver::{Baseplate, Substrate};
pub use source::{HeatSource, MirrorMode, SourceId};
