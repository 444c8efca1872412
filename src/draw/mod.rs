// src/draw/mod.rs
// Turns grid and overlay state into nannou Draw commands

pub mod cell_draw;
pub mod debug_draw;
pub mod hero_draw;

pub use cell_draw::draw_cells;
pub use debug_draw::draw_debug;
pub use hero_draw::{draw_hero, HeroLayout};

use crate::config::{color_to_rgba, StyleConfig};
use nannou::prelude::*;

/// Border style shared by every cell.
#[derive(Debug, Clone, Copy)]
pub struct DrawStyle {
    pub color: Rgba,
    pub stroke_weight: f32,
}

impl DrawStyle {
    pub fn from_config(style: &StyleConfig) -> Self {
        Self {
            color: color_to_rgba(style.border_color, 1.0),
            stroke_weight: style.border_weight.max(0.0),
        }
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}
