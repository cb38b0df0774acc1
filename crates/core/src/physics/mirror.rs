//! Method-of-images contribution of one mirror source
//!
//! A substrate of finite thickness with an insulated (adiabatic) back face
//! is approximated by reflecting each source through the back face: the
//! m-th image sits at vertical offset `2·m·h` below the surface and its
//! contribution alternates in sign as `(−1)^m`. Each image point follows
//! the 3D point-source spreading law
//!
//! ```text
//! T = P / (2π·k·r),   r = sqrt(Δx² + Δz² + (2·m·h)²)
//! ```
//!
//! Two fidelity modes, selected per source via
//! [`MirrorMode`](crate::MirrorMode):
//!
//! - `AreaAccurate` decomposes the mirrored footprint into one point per
//!   grid cell it covers, each carrying `P/count`. This triple loop
//!   (footprint points × grid rows × grid columns) dominates solver cost;
//!   it is parallelized across grid rows.
//! - `PointApproximate` collapses the footprint to a single center point
//!   carrying the full power.
//!
//! # References
//! - Carslaw & Jaeger (1959). "Conduction of Heat in Solids", §10.10 —
//!   the method of images for bounded solids.

use super::MM_TO_M;
use crate::error::{require_positive, SolverError};
use crate::field::{TemperatureField, ViewConfig};
use crate::source::{HeatSource, MirrorMode};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Compute the field contribution of the `mirror_index`-th image of a
/// source, over the given view window.
///
/// `mirror_index` starts at 1; index 0 denotes the real source and is
/// rejected with [`SolverError::InvalidMirrorIndex`]. In `AreaAccurate`
/// mode the mirrored footprint must lie inside the view window, matching
/// the real footprint's registration constraint.
pub fn mirror_contribution(
    source: &HeatSource,
    conductivity: f64,
    thickness_mm: f64,
    mirror_index: usize,
    view: ViewConfig,
) -> Result<TemperatureField, SolverError> {
    let k = require_positive("conductivity", conductivity)?;
    let thickness = require_positive("thickness", thickness_mm)?;
    if mirror_index == 0 {
        return Err(SolverError::InvalidMirrorIndex(0));
    }

    // Image depth below the surface, squared (m²)
    let y_sq = (2.0 * mirror_index as f64 * thickness * MM_TO_M).powi(2);
    // Images alternate in sign: the first cancels flux at the back face,
    // the second restores the surface condition, and so on.
    let sign = if mirror_index % 2 == 0 { 1.0 } else { -1.0 };

    let (points_mm, power_per_point) = match source.mirror_mode() {
        MirrorMode::AreaAccurate => {
            let bounds =
                view.footprint_bounds(source.x0(), source.z0(), source.width(), source.length())?;
            let mut points = Vec::with_capacity(bounds.cell_count());
            for ix in bounds.x_lo..bounds.x_hi {
                for iz in bounds.z_lo..bounds.z_hi {
                    points.push((view.position_mm(ix), view.position_mm(iz)));
                }
            }
            let power = sign * source.power() / points.len() as f64;
            (points, power)
        }
        MirrorMode::PointApproximate => {
            (vec![(source.x0(), source.z0())], sign * source.power())
        }
    };

    let mut field = TemperatureField::zeros(view);
    accumulate_point_sources(&mut field, &points_mm, power_per_point, k, y_sq);
    Ok(field)
}

/// Sum the point-source spreading law of every image point into the field.
///
/// Accumulation order is not semantically significant (commutative
/// addition), so rows are processed in parallel.
fn accumulate_point_sources(
    field: &mut TemperatureField,
    points_mm: &[(f64, f64)],
    power_per_point: f64,
    conductivity: f64,
    y_sq: f64,
) {
    let view = field.view();
    let nz = view.nz();
    let scale = power_per_point / (2.0 * PI * conductivity);

    field
        .as_mut_slice()
        .par_chunks_mut(nz)
        .enumerate()
        .for_each(|(ix, row)| {
            let x = view.position_mm(ix);
            for (iz, value) in row.iter_mut().enumerate() {
                let z = view.position_mm(iz);
                let mut sum = 0.0;
                for &(px, pz) in points_mm {
                    let dx = (x - px) * MM_TO_M;
                    let dz = (z - pz) * MM_TO_M;
                    // y_sq > 0, so r never vanishes
                    let r = (dx * dx + dz * dz + y_sq).sqrt();
                    sum += scale / r;
                }
                *value += sum;
            }
        });
}
