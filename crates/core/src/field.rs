//! View-window configuration and the temperature-rise field
//!
//! The field stores the steady-state surface temperature rise (kelvin above
//! ambient) over a rectangular view window, as a flat `Vec<f64>` indexed
//! x-major (`ix * nz + iz`). Every contribution summed into a field must be
//! computed under the same [`ViewConfig`]; mixing resolutions or extents is
//! rejected with [`SolverError::GridMismatch`].

use crate::error::{require_positive, SolverError};
use serde::{Deserialize, Serialize};

/// View window and sampling resolution for field assembly.
///
/// The window spans `[0, view_x] × [0, view_z]` millimetres on the plate
/// surface, sampled at `points_per_mm` grid points per millimetre. Grid
/// point `(ix, iz)` sits at physical position
/// `(ix / points_per_mm, iz / points_per_mm)` mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View extent along x (mm)
    view_x: f64,
    /// View extent along z (mm)
    view_z: f64,
    /// Sampling resolution (grid points per mm)
    points_per_mm: f64,
}

impl ViewConfig {
    /// Create a view configuration. All three values must be finite and
    /// strictly positive, and the resulting grid must contain at least one
    /// point along each axis.
    pub fn new(view_x: f64, view_z: f64, points_per_mm: f64) -> Result<Self, SolverError> {
        let view_x = require_positive("view_x", view_x)?;
        let view_z = require_positive("view_z", view_z)?;
        let points_per_mm = require_positive("points_per_mm", points_per_mm)?;
        let view = Self {
            view_x,
            view_z,
            points_per_mm,
        };
        if view.nx() == 0 || view.nz() == 0 {
            return Err(SolverError::InvalidParameter {
                name: "points_per_mm",
                value: points_per_mm,
                constraint: "must yield at least one grid point per axis",
            });
        }
        Ok(view)
    }

    /// View extent along x (mm).
    #[must_use]
    pub fn view_x(&self) -> f64 {
        self.view_x
    }

    /// View extent along z (mm).
    #[must_use]
    pub fn view_z(&self) -> f64 {
        self.view_z
    }

    /// Sampling resolution (grid points per mm).
    #[must_use]
    pub fn points_per_mm(&self) -> f64 {
        self.points_per_mm
    }

    /// Number of grid points along x.
    #[must_use]
    pub fn nx(&self) -> usize {
        (self.view_x * self.points_per_mm) as usize
    }

    /// Number of grid points along z.
    #[must_use]
    pub fn nz(&self) -> usize {
        (self.view_z * self.points_per_mm) as usize
    }

    /// Physical position (mm) of a grid index along either axis.
    #[inline]
    #[must_use]
    pub fn position_mm(&self, index: usize) -> f64 {
        index as f64 / self.points_per_mm
    }

    /// Grid index range covered by a rectangular footprint centered at
    /// `(x0, z0)` with the given `width × length` (all mm).
    ///
    /// The footprint must lie entirely inside the view window; a footprint
    /// extending past an edge is an error, never truncated. A footprint
    /// narrower than one grid cell at this resolution is degenerate and is
    /// also rejected.
    pub fn footprint_bounds(
        &self,
        x0: f64,
        z0: f64,
        width: f64,
        length: f64,
    ) -> Result<FootprintBounds, SolverError> {
        let x_lo = (x0 - width * 0.5) * self.points_per_mm;
        let x_hi = (x0 + width * 0.5) * self.points_per_mm;
        let z_lo = (z0 - length * 0.5) * self.points_per_mm;
        let z_hi = (z0 + length * 0.5) * self.points_per_mm;

        if x_lo < 0.0 || z_lo < 0.0 || x_hi > self.nx() as f64 || z_hi > self.nz() as f64 {
            return Err(SolverError::FootprintOutOfBounds { x0, z0 });
        }

        let bounds = FootprintBounds {
            x_lo: x_lo as usize,
            x_hi: x_hi as usize,
            z_lo: z_lo as usize,
            z_hi: z_hi as usize,
        };
        if bounds.x_hi <= bounds.x_lo || bounds.z_hi <= bounds.z_lo {
            return Err(SolverError::InvalidParameter {
                name: "footprint_cells",
                value: 0.0,
                constraint: "footprint must cover at least one grid cell at this resolution",
            });
        }
        Ok(bounds)
    }
}

/// Half-open grid index ranges `[x_lo, x_hi) × [z_lo, z_hi)` covered by a
/// source footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootprintBounds {
    /// Lower x index (inclusive)
    pub x_lo: usize,
    /// Upper x index (exclusive)
    pub x_hi: usize,
    /// Lower z index (inclusive)
    pub z_lo: usize,
    /// Upper z index (exclusive)
    pub z_hi: usize,
}

impl FootprintBounds {
    /// Number of grid cells inside the footprint.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        (self.x_hi - self.x_lo) * (self.z_hi - self.z_lo)
    }
}

/// 2D temperature-rise field over a view window.
///
/// Values are kelvin above ambient. Constructed zero-filled and accumulated
/// additively; superposition of contributions is plain commutative addition.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureField {
    data: Vec<f64>,
    view: ViewConfig,
}

impl TemperatureField {
    /// Create a zero-filled field for the given view configuration.
    #[must_use]
    pub fn zeros(view: ViewConfig) -> Self {
        Self {
            data: vec![0.0; view.nx() * view.nz()],
            view,
        }
    }

    /// The view configuration this field was computed under.
    #[must_use]
    pub fn view(&self) -> ViewConfig {
        self.view
    }

    /// Number of grid points along x.
    #[must_use]
    pub fn nx(&self) -> usize {
        self.view.nx()
    }

    /// Number of grid points along z.
    #[must_use]
    pub fn nz(&self) -> usize {
        self.view.nz()
    }

    /// Temperature rise at grid position.
    ///
    /// # Panics
    /// Panics if indices are out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, ix: usize, iz: usize) -> f64 {
        assert!(
            ix < self.nx() && iz < self.nz(),
            "grid indices out of bounds"
        );
        self.data[ix * self.view.nz() + iz]
    }

    /// Flat x-major view of the field values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flat x-major view of the field values.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Add another field point-wise into this one.
    ///
    /// Both fields must have been computed under the identical view
    /// configuration; anything else is a [`SolverError::GridMismatch`].
    pub fn accumulate(&mut self, other: &TemperatureField) -> Result<(), SolverError> {
        if self.view != other.view {
            return Err(SolverError::GridMismatch);
        }
        for (dst, src) in self.data.iter_mut().zip(&other.data) {
            *dst += src;
        }
        Ok(())
    }
}
