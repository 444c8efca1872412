// src/models/grid_model.rs
//
// The grid partition of the viewport.

use super::cell::Cells;

/// Cell edge length used when no config overrides it.
pub const DEFAULT_CELL_SIZE: f32 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn cell_count(&self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Every cell of this generation, row-major.
    pub fn cells(&self) -> Cells {
        Cells::new(self.cell_count())
    }
}

/// Number of whole cells of `cell_size` that fit along each axis.
///
/// Zero, negative and NaN sizes give 0 on that axis, as does a
/// non-positive cell size.
pub fn compute_grid(width: f32, height: f32, cell_size: f32) -> GridDimensions {
    GridDimensions {
        columns: cells_along(width, cell_size),
        rows: cells_along(height, cell_size),
    }
}

fn cells_along(length: f32, cell_size: f32) -> u32 {
    if !(cell_size > 0.0) || !(length > 0.0) {
        return 0;
    }
    // float -> int casts saturate
    (length / cell_size).floor() as u32
}
