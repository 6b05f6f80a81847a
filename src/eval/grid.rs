//! Bemonstering van de actieve functie over een vierkant raster.
//!
//! Het raster dekt `[-extent, extent]²` met `resolution` segmenten per as,
//! dus `(resolution + 1)²` vertices, rij voor rij in `y`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{BoundFunction, EvalError};
use crate::session::FrameSnapshot;

/// Bovengrens zodat vertex-indices in `u32` blijven passen.
pub const MAX_RESOLUTION: u32 = 1024;

const DEFAULT_EXTENT: f64 = 10.0;
const DEFAULT_RESOLUTION: u32 = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("grid resolution must be between 1 and {max} (got {resolution})")]
    InvalidResolution { resolution: u32, max: u32 },
    #[error("grid extent must be finite and positive (got {0})")]
    InvalidExtent(f64),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Rasterconfiguratie zoals die vanuit JS wordt meegegeven.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Halve breedte van het vierkant.
    pub extent: f64,
    /// Aantal segmenten per as.
    pub resolution: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl GridSpec {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
            return Err(GridError::InvalidResolution {
                resolution: self.resolution,
                max: MAX_RESOLUTION,
            });
        }
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(GridError::InvalidExtent(self.extent));
        }
        Ok(())
    }

    #[must_use]
    pub fn vertices_per_axis(&self) -> usize {
        self.resolution as usize + 1
    }

    /// Coördinaat van rasterlijn `index` op één as.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> f64 {
        let step = 2.0 * self.extent / f64::from(self.resolution);
        -self.extent + index as f64 * step
    }
}

/// Resultaat van een rasterbemonstering.
///
/// Niet-eindige hoogtes blijven in `positions` staan; de consument beslist
/// of zulke vertices worden weggelaten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeightField {
    pub resolution: u32,
    /// `[x, y, hoogte]` per vertex.
    pub positions: Vec<[f64; 3]>,
    /// Driehoekslijst, twee driehoeken per cel.
    pub indices: Vec<u32>,
    /// Kleinste eindige hoogte (of `0.0` als er geen is).
    pub min_height: f64,
    /// Grootste eindige hoogte (of `0.0` als er geen is).
    pub max_height: f64,
    pub non_finite: usize,
}

impl HeightField {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Bemonster de functie uit `snapshot` over het raster.
///
/// Met de feature `parallel` worden rijen via rayon verdeeld; elke worker
/// leest alleen uit de onveranderlijke snapshot.
pub fn sample_grid(snapshot: &FrameSnapshot, spec: &GridSpec) -> Result<HeightField, GridError> {
    spec.validate()?;
    let bound = snapshot.bind()?;
    let positions = sample_rows(&bound, spec);
    Ok(assemble(spec, positions))
}

/// Seriële bemonstering met een meegegeven generator (reproduceerbaar met een seed).
pub fn sample_grid_with_rng<R: Rng + ?Sized>(
    snapshot: &FrameSnapshot,
    spec: &GridSpec,
    rng: &mut R,
) -> Result<HeightField, GridError> {
    spec.validate()?;
    let bound = snapshot.bind()?;
    let n = spec.vertices_per_axis();
    let mut positions = Vec::with_capacity(n * n);
    for row in 0..n {
        push_row(&bound, spec, row, &mut positions, rng);
    }
    Ok(assemble(spec, positions))
}

#[cfg(feature = "parallel")]
fn sample_rows(bound: &BoundFunction, spec: &GridSpec) -> Vec<[f64; 3]> {
    use rayon::prelude::*;

    let n = spec.vertices_per_axis();
    let rows: Vec<Vec<[f64; 3]>> = (0..n)
        .into_par_iter()
        .map(|row| {
            let mut positions = Vec::with_capacity(n);
            push_row(bound, spec, row, &mut positions, &mut rand::rng());
            positions
        })
        .collect();
    rows.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
fn sample_rows(bound: &BoundFunction, spec: &GridSpec) -> Vec<[f64; 3]> {
    let n = spec.vertices_per_axis();
    let mut rng = rand::rng();
    let mut positions = Vec::with_capacity(n * n);
    for row in 0..n {
        push_row(bound, spec, row, &mut positions, &mut rng);
    }
    positions
}

fn push_row<R: Rng + ?Sized>(
    bound: &BoundFunction,
    spec: &GridSpec,
    row: usize,
    positions: &mut Vec<[f64; 3]>,
    rng: &mut R,
) {
    let y = spec.coordinate(row);
    for column in 0..spec.vertices_per_axis() {
        let x = spec.coordinate(column);
        positions.push([x, y, bound.height(x, y, rng)]);
    }
}

fn assemble(spec: &GridSpec, positions: Vec<[f64; 3]>) -> HeightField {
    let mut min_height = f64::INFINITY;
    let mut max_height = f64::NEG_INFINITY;
    let mut non_finite = 0;
    for height in positions.iter().map(|p| p[2]) {
        if height.is_finite() {
            min_height = min_height.min(height);
            max_height = max_height.max(height);
        } else {
            non_finite += 1;
        }
    }
    if non_finite == positions.len() {
        min_height = 0.0;
        max_height = 0.0;
    }
    if non_finite > 0 {
        log::warn!("{non_finite} van {} vertices hebben een niet-eindige hoogte", positions.len());
    }
    log::debug!(
        "raster {0}x{0} bemonsterd, hoogte [{min_height}, {max_height}]",
        spec.resolution
    );

    HeightField {
        resolution: spec.resolution,
        indices: triangle_indices(spec.vertices_per_axis()),
        positions,
        min_height,
        max_height,
        non_finite,
    }
}

fn triangle_indices(n: usize) -> Vec<u32> {
    let cells = n - 1;
    let mut indices = Vec::with_capacity(cells * cells * 6);
    for row in 0..cells {
        for column in 0..cells {
            let idx = (row * n + column) as u32;
            let above = idx + n as u32;
            indices.extend_from_slice(&[idx, idx + 1, above, idx + 1, above + 1, above]);
        }
    }
    indices
}
