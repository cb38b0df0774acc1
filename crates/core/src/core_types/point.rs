//! Vector type alias for positions on the baseplate surface.

use nalgebra::Vector2;

/// 2D position on the plate surface in millimetres, (x, z) plane.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`, used throughout
/// the solver for source centers and view-window coordinates.
pub type Point2D = Vector2<f64>;
