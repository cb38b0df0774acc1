//! Rectangular heat sources (transistor footprints)
//!
//! A heat source is a uniformly-fluxed rectangle dissipating power `P` into
//! the plate, with a junction-to-case thermal resistance for junction
//! temperature estimates. Footprint and resistance default to a TO-247
//! style package (4.1 mm × 9.5 mm, 4.8 °C/W).

use crate::core_types::Point2D;
use crate::error::{require_finite, require_non_negative, require_positive, SolverError};
use serde::{Deserialize, Serialize};

/// Default footprint width (mm), TO-247 style package
const DEFAULT_WIDTH_MM: f64 = 4.1;

/// Default footprint length (mm), TO-247 style package
const DEFAULT_LENGTH_MM: f64 = 9.5;

/// Default junction-to-case thermal resistance (°C/W)
const DEFAULT_RTH: f64 = 4.8;

/// How the method-of-images reflections of a source are evaluated.
///
/// Selected per source; both modes produce identical results when no
/// mirror sources are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MirrorMode {
    /// Decompose the mirrored footprint into one point source per grid
    /// cell it covers. Accurate near the source, and the dominant cost of
    /// the whole solver.
    #[default]
    AreaAccurate,
    /// Collapse the mirrored footprint to a single point source at its
    /// center carrying the full power. Strictly cheaper and less accurate;
    /// intended for quick iteration.
    PointApproximate,
}

/// Opaque handle identifying a registered source within a solver.
///
/// Issued by [`crate::Baseplate::add_source`]; stable for the lifetime of
/// the solver (sources are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(pub(crate) usize);

/// A rectangular, uniform-flux heat source mounted on the plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatSource {
    /// Dissipated power (W)
    power: f64,
    /// Footprint extent along x (mm)
    width: f64,
    /// Footprint extent along z (mm)
    length: f64,
    /// Center position (mm)
    position: Point2D,
    /// Junction-to-case thermal resistance (°C/W)
    rth: f64,
    /// Mirror-source evaluation mode
    mirror_mode: MirrorMode,
}

impl HeatSource {
    /// Create a source with the default TO-247 footprint and resistance.
    ///
    /// `power` must be finite and strictly positive; the center position
    /// must be finite.
    pub fn new(power: f64, x0: f64, z0: f64) -> Result<Self, SolverError> {
        Ok(Self {
            power: require_positive("power", power)?,
            width: DEFAULT_WIDTH_MM,
            length: DEFAULT_LENGTH_MM,
            position: Point2D::new(require_finite("x0", x0)?, require_finite("z0", z0)?),
            rth: DEFAULT_RTH,
            mirror_mode: MirrorMode::default(),
        })
    }

    /// Replace the footprint dimensions (mm). Both must be finite and
    /// strictly positive.
    pub fn with_footprint(mut self, width: f64, length: f64) -> Result<Self, SolverError> {
        self.width = require_positive("width", width)?;
        self.length = require_positive("length", length)?;
        Ok(self)
    }

    /// Replace the junction-to-case thermal resistance (°C/W, >= 0).
    pub fn with_rth(mut self, rth: f64) -> Result<Self, SolverError> {
        self.rth = require_non_negative("rth", rth)?;
        Ok(self)
    }

    /// Select the mirror-source evaluation mode.
    #[must_use]
    pub fn with_mirror_mode(mut self, mode: MirrorMode) -> Self {
        self.mirror_mode = mode;
        self
    }

    /// Move the source center (mm).
    pub fn set_position(&mut self, x0: f64, z0: f64) -> Result<(), SolverError> {
        self.position = Point2D::new(require_finite("x0", x0)?, require_finite("z0", z0)?);
        Ok(())
    }

    /// Exchange footprint width and length (rotate the package 90°).
    pub fn swap_orientation(&mut self) {
        std::mem::swap(&mut self.width, &mut self.length);
    }

    /// Dissipated power (W).
    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Footprint extent along x (mm).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Footprint extent along z (mm).
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Center position (mm).
    #[must_use]
    pub fn position(&self) -> Point2D {
        self.position
    }

    /// Center x coordinate (mm).
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.position.x
    }

    /// Center z coordinate (mm).
    #[must_use]
    pub fn z0(&self) -> f64 {
        self.position.y
    }

    /// Junction-to-case thermal resistance (°C/W).
    #[must_use]
    pub fn rth(&self) -> f64 {
        self.rth
    }

    /// Mirror-source evaluation mode.
    #[must_use]
    pub fn mirror_mode(&self) -> MirrorMode {
        self.mirror_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_package() {
        let source = HeatSource::new(25.0, 10.0, 10.0).unwrap();
        assert_eq!(source.power(), 25.0);
        assert_eq!(source.width(), 4.1);
        assert_eq!(source.length(), 9.5);
        assert_eq!(source.rth(), 4.8);
        assert_eq!(source.mirror_mode(), MirrorMode::AreaAccurate);
    }

    #[test]
    fn test_rejects_invalid_power() {
        assert!(HeatSource::new(0.0, 10.0, 10.0).is_err());
        assert!(HeatSource::new(-5.0, 10.0, 10.0).is_err());
        assert!(HeatSource::new(f64::NAN, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_rejects_invalid_footprint() {
        let source = HeatSource::new(25.0, 10.0, 10.0).unwrap();
        assert!(source.clone().with_footprint(0.0, 9.5).is_err());
        assert!(source.with_footprint(4.1, -9.5).is_err());
    }

    #[test]
    fn test_swap_orientation() {
        let mut source = HeatSource::new(25.0, 10.0, 10.0).unwrap();
        source.swap_orientation();
        assert_eq!(source.width(), 9.5);
        assert_eq!(source.length(), 4.1);
        source.swap_orientation();
        assert_eq!(source.width(), 4.1);
    }

    #[test]
    fn test_reposition() {
        let mut source = HeatSource::new(25.0, 10.0, 10.0).unwrap();
        source.set_position(12.5, 7.5).unwrap();
        assert_eq!(source.x0(), 12.5);
        assert_eq!(source.z0(), 7.5);
        assert!(source.set_position(f64::INFINITY, 0.0).is_err());
    }
}
