//! Core types shared across the solver

pub mod point;
pub mod units;

pub use point::Point2D;
pub use units::Celsius;
