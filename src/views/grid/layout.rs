// src/views/grid/layout.rs
//
// Tiles the viewport with the cells of one generation.
// Cells are at least `cell_size` on each side and grow evenly to use up the
// remainder, so the grid covers the whole window with no gaps. Index 0 is the
// top-left cell; indices run row-major. Coordinates are nannou window points
// (origin at the centre, y up).

use nannou::prelude::*;

use crate::models::{Cell, GridDimensions};

#[derive(Debug, Clone, Copy)]
pub struct CellLayout {
    bounds: Rect,
    dims: GridDimensions,
}

impl CellLayout {
    pub fn new(bounds: Rect, dims: GridDimensions) -> Self {
        Self { bounds, dims }
    }

    /// Layout for a window of `size` centred on the origin.
    pub fn for_viewport(size: Vec2, dims: GridDimensions) -> Self {
        Self::new(Rect::from_w_h(size.x.max(0.0), size.y.max(0.0)), dims)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// Width and height of every cell, `None` for an empty grid.
    pub fn cell_size(&self) -> Option<Vec2> {
        if self.dims.is_empty() {
            return None;
        }
        Some(vec2(
            self.bounds.w() / self.dims.columns as f32,
            self.bounds.h() / self.dims.rows as f32,
        ))
    }

    pub fn rect_for(&self, index: usize) -> Option<Rect> {
        if index >= self.dims.cell_count() {
            return None;
        }
        let size = self.cell_size()?;
        let (col, row) = Cell::new(index).position(self.dims.columns)?;

        let x = self.bounds.left() + (col as f32 + 0.5) * size.x;
        let y = self.bounds.top() - (row as f32 + 0.5) * size.y;
        Some(Rect::from_x_y_w_h(x, y, size.x, size.y))
    }

    /// The cell under `point`, if any.
    pub fn hit_test(&self, point: Point2) -> Option<usize> {
        let size = self.cell_size()?;
        let b = &self.bounds;
        if point.x < b.left() || point.x > b.right() || point.y < b.bottom() || point.y > b.top() {
            return None;
        }

        // points on the far edges belong to the last row / column
        let col = (((point.x - b.left()) / size.x).floor() as u32).min(self.dims.columns - 1);
        let row = (((b.top() - point.y) / size.y).floor() as u32).min(self.dims.rows - 1);
        Some(row as usize * self.dims.columns as usize + col as usize)
    }
}
