//! Case and junction temperature estimators
//!
//! Scalar temperature queries over an assembled field. The case estimate
//! reads the sub-rectangle of the field covered by a source's footprint
//! and reduces it to its maximum or arithmetic mean; the junction estimate
//! adds the ambient temperature and the source's own conduction rise
//! `Rth · P` on top.

use crate::core_types::{Celsius, Point2D};
use crate::error::SolverError;
use crate::field::TemperatureField;
use crate::source::{HeatSource, SourceId};
use serde::{Deserialize, Serialize};

/// How a footprint sub-rectangle is reduced to a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Estimate {
    /// Hottest grid point inside the footprint.
    Max,
    /// Arithmetic mean over the footprint.
    Average,
}

/// Per-source temperature statistics over one assembled field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReport {
    /// Handle of the reported source.
    pub id: SourceId,
    /// Source center (mm).
    pub position: Point2D,
    /// Dissipated power (W).
    pub power: f64,
    /// Mean temperature rise over the footprint (K).
    pub rise_avg: f64,
    /// Peak temperature rise over the footprint (K).
    pub rise_max: f64,
    /// Mean case temperature (rise plus ambient).
    pub case_avg: Celsius,
    /// Peak case temperature (rise plus ambient).
    pub case_max: Celsius,
}

/// Temperature rise (K above ambient) over a source's footprint.
///
/// The footprint must lie entirely inside the field's view window;
/// anything else is a [`SolverError::FootprintOutOfBounds`], never a
/// silent truncation.
pub fn case_temperature(
    field: &TemperatureField,
    source: &HeatSource,
    estimate: Estimate,
) -> Result<f64, SolverError> {
    let bounds = field.view().footprint_bounds(
        source.x0(),
        source.z0(),
        source.width(),
        source.length(),
    )?;

    match estimate {
        Estimate::Max => {
            let mut max = f64::NEG_INFINITY;
            for ix in bounds.x_lo..bounds.x_hi {
                for iz in bounds.z_lo..bounds.z_hi {
                    max = max.max(field.get(ix, iz));
                }
            }
            Ok(max)
        }
        Estimate::Average => {
            let mut sum = 0.0;
            for ix in bounds.x_lo..bounds.x_hi {
                for iz in bounds.z_lo..bounds.z_hi {
                    sum += field.get(ix, iz);
                }
            }
            Ok(sum / bounds.cell_count() as f64)
        }
    }
}

/// Junction temperature of a source: case estimate plus ambient plus the
/// source's own conduction rise `Rth · P`.
pub fn junction_temperature(
    field: &TemperatureField,
    source: &HeatSource,
    estimate: Estimate,
    ambient: Celsius,
) -> Result<Celsius, SolverError> {
    let case_rise = case_temperature(field, source, estimate)?;
    Ok(ambient + case_rise + source.rth() * source.power())
}
