pub mod cell;
pub mod grid_model;

pub use cell::{Cell, Cells};
pub use grid_model::{compute_grid, GridDimensions, DEFAULT_CELL_SIZE};
