pub mod hover_controller;

pub use hover_controller::{HoverTracker, PointerEvent};
