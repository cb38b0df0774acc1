//! Substrate configuration and the field-assembly solver
//!
//! [`Baseplate`] owns the substrate properties, the view configuration and
//! the registered heat sources, and orchestrates superposition of all real
//! and mirror contributions into a single [`TemperatureField`]. Assembly is
//! pure recomputation: changing a position, the conductivity or the
//! thickness invalidates nothing, the next assembly simply starts from a
//! zero field.

use crate::core_types::Celsius;
use crate::error::{require_positive, SolverError};
use crate::estimator::{case_temperature, junction_temperature, Estimate, SourceReport};
use crate::field::{TemperatureField, ViewConfig};
use crate::physics::{mirror_contribution, plate_contribution};
use crate::source::{HeatSource, SourceId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Material and environment properties of the baseplate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    /// Thermal conductivity (W/(m·K))
    conductivity: f64,
    /// Plate thickness (mm)
    thickness: f64,
    /// Ambient temperature
    ambient: Celsius,
}

impl Substrate {
    /// Create a substrate. Conductivity and thickness must be finite and
    /// strictly positive.
    pub fn new(conductivity: f64, thickness_mm: f64, ambient: Celsius) -> Result<Self, SolverError> {
        Ok(Self {
            conductivity: require_positive("conductivity", conductivity)?,
            thickness: require_positive("thickness", thickness_mm)?,
            ambient,
        })
    }

    /// Thermal conductivity (W/(m·K)).
    #[must_use]
    pub fn conductivity(&self) -> f64 {
        self.conductivity
    }

    /// Plate thickness (mm).
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Ambient temperature.
    #[must_use]
    pub fn ambient(&self) -> Celsius {
        self.ambient
    }
}

/// The thermal field solver for one plate configuration.
///
/// Sources are registered once and addressed through the opaque
/// [`SourceId`] returned at registration; they can be repositioned and
/// reoriented in place for sweep scenarios.
#[derive(Debug, Clone)]
pub struct Baseplate {
    substrate: Substrate,
    view: ViewConfig,
    sources: Vec<HeatSource>,
}

impl Baseplate {
    /// Create a solver for the given substrate and view window.
    #[must_use]
    pub fn new(substrate: Substrate, view: ViewConfig) -> Self {
        Self {
            substrate,
            view,
            sources: Vec::new(),
        }
    }

    /// Register a heat source and return its stable handle.
    ///
    /// The source footprint must lie entirely inside the view window.
    pub fn add_source(&mut self, source: HeatSource) -> Result<SourceId, SolverError> {
        self.view
            .footprint_bounds(source.x0(), source.z0(), source.width(), source.length())?;
        self.sources.push(source);
        Ok(SourceId(self.sources.len() - 1))
    }

    /// Move a registered source to a new center position (mm).
    ///
    /// The footprint at the new position must still lie inside the view
    /// window; on error the source is left where it was.
    pub fn reposition(&mut self, id: SourceId, x0: f64, z0: f64) -> Result<(), SolverError> {
        let source = self.source(id)?;
        let (width, length) = (source.width(), source.length());
        self.view.footprint_bounds(x0, z0, width, length)?;
        self.source_mut(id)?.set_position(x0, z0)
    }

    /// Exchange a registered source's footprint width and length.
    ///
    /// The rotated footprint must still lie inside the view window; on
    /// error the orientation is left unchanged.
    pub fn swap_orientation(&mut self, id: SourceId) -> Result<(), SolverError> {
        let source = self.source(id)?;
        let (x0, z0) = (source.x0(), source.z0());
        let (width, length) = (source.width(), source.length());
        self.view.footprint_bounds(x0, z0, length, width)?;
        self.source_mut(id)?.swap_orientation();
        Ok(())
    }

    /// Replace the substrate properties (sweep-style mutation of
    /// conductivity, thickness or ambient temperature).
    pub fn set_substrate(&mut self, substrate: Substrate) {
        self.substrate = substrate;
    }

    /// Replace the view window and resolution. Every registered source must
    /// fit inside the new window; on error the view is left unchanged.
    pub fn set_view(&mut self, view: ViewConfig) -> Result<(), SolverError> {
        for source in &self.sources {
            view.footprint_bounds(source.x0(), source.z0(), source.width(), source.length())?;
        }
        self.view = view;
        Ok(())
    }

    /// The current substrate properties.
    #[must_use]
    pub fn substrate(&self) -> Substrate {
        self.substrate
    }

    /// The current view configuration.
    #[must_use]
    pub fn view(&self) -> ViewConfig {
        self.view
    }

    /// Look up a registered source.
    pub fn source(&self, id: SourceId) -> Result<&HeatSource, SolverError> {
        self.sources.get(id.0).ok_or(SolverError::UnknownSource(id.0))
    }

    /// All registered sources, in registration order.
    #[must_use]
    pub fn sources(&self) -> &[HeatSource] {
        &self.sources
    }

    fn source_mut(&mut self, id: SourceId) -> Result<&mut HeatSource, SolverError> {
        self.sources
            .get_mut(id.0)
            .ok_or(SolverError::UnknownSource(id.0))
    }

    /// Assemble the temperature-rise field for the current configuration.
    ///
    /// Sums, for every registered source, its real analytical contribution
    /// plus its first `mirror_count` image contributions. Per-source fields
    /// are computed in parallel and combined only through commutative field
    /// addition, so the result is independent of evaluation order (up to
    /// floating tolerance). `mirror_count == 0` skips the image kernel
    /// entirely.
    pub fn assemble_field(&self, mirror_count: usize) -> Result<TemperatureField, SolverError> {
        debug!(
            sources = self.sources.len(),
            mirror_count,
            conductivity = self.substrate.conductivity,
            thickness_mm = self.substrate.thickness,
            "assembling temperature field"
        );

        let per_source: Vec<TemperatureField> = self
            .sources
            .par_iter()
            .enumerate()
            .map(|(index, source)| self.source_field(index, source, mirror_count))
            .collect::<Result<_, _>>()?;

        let mut total = TemperatureField::zeros(self.view);
        for field in &per_source {
            total.accumulate(field)?;
        }
        Ok(total)
    }

    /// Real contribution plus the first `mirror_count` images of one source.
    fn source_field(
        &self,
        index: usize,
        source: &HeatSource,
        mirror_count: usize,
    ) -> Result<TemperatureField, SolverError> {
        debug!(
            source = index,
            power = source.power(),
            x0 = source.x0(),
            z0 = source.z0(),
            "computing real-source contribution"
        );
        let mut field = plate_contribution(source, self.substrate.conductivity, self.view)?;

        for m in 1..=mirror_count {
            debug!(source = index, mirror = m, "adding mirror-source contribution");
            let image = mirror_contribution(
                source,
                self.substrate.conductivity,
                self.substrate.thickness,
                m,
                self.view,
            )?;
            field.accumulate(&image)?;
        }
        Ok(field)
    }

    /// Per-source temperature statistics over an assembled field: average
    /// and maximum rise over each footprint, and the corresponding case
    /// temperatures (rise plus ambient).
    pub fn source_reports(
        &self,
        field: &TemperatureField,
    ) -> Result<Vec<SourceReport>, SolverError> {
        self.sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let rise_avg = case_temperature(field, source, Estimate::Average)?;
                let rise_max = case_temperature(field, source, Estimate::Max)?;
                Ok(SourceReport {
                    id: SourceId(index),
                    position: source.position(),
                    power: source.power(),
                    rise_avg,
                    rise_max,
                    case_avg: self.substrate.ambient + rise_avg,
                    case_max: self.substrate.ambient + rise_max,
                })
            })
            .collect()
    }

    /// Junction temperature of every registered source over an assembled
    /// field, in registration order.
    pub fn junction_temperatures(
        &self,
        field: &TemperatureField,
        estimate: Estimate,
    ) -> Result<Vec<Celsius>, SolverError> {
        self.sources
            .iter()
            .map(|source| junction_temperature(field, source, estimate, self.substrate.ambient))
            .collect()
    }
}
