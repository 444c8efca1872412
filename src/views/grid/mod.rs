// src/views/grid/mod.rs

pub mod hover_grid;
pub mod layout;
pub mod sizer;

pub use hover_grid::HoverGrid;
pub use layout::CellLayout;
pub use sizer::GridSizer;
