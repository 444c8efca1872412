// src/views/mod.rs

pub mod background;
pub mod grid;
pub mod resize;

pub use background::BackgroundManager;
pub use grid::{CellLayout, GridSizer, HoverGrid};
pub use resize::{ResizeChannel, ResizeSubscription};
