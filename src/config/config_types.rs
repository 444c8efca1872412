// src/config/config_types.rs
//
// Config types for the app

use crate::animation::EasingType;
use crate::models::DEFAULT_CELL_SIZE;
use nannou::prelude::*;
use serde::Deserialize;

/// 8-bit RGB triple as written in config.toml, e.g. `[129, 140, 248]`.
pub type ColorConfig = [u8; 3];

pub fn color_to_rgba(color: ColorConfig, alpha: f32) -> Rgba {
    rgba(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        alpha,
    )
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            title: "hovergrid".to_string(),
        }
    }
}

/************************* Grid & Animation ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GridConfig {
    pub cell_size_px: f32,
    pub accent_color: ColorConfig,
    pub enter_duration_ms: f32,
    pub leave_duration_ms: f32,
    pub easing: EasingType,
    pub coalesce_resize: bool, // one recompute per frame instead of per event
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size_px: DEFAULT_CELL_SIZE,
            accent_color: [129, 140, 248],
            enter_duration_ms: 150.0,
            leave_duration_ms: 1500.0,
            easing: EasingType::EaseOut,
            coalesce_resize: false,
        }
    }
}

impl GridConfig {
    pub fn enter_duration(&self) -> f32 {
        self.enter_duration_ms / 1000.0
    }

    pub fn leave_duration(&self) -> f32 {
        self.leave_duration_ms / 1000.0
    }

    pub fn accent(&self) -> Rgba {
        color_to_rgba(self.accent_color, 1.0)
    }
}

/************************* Style ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub background_color: ColorConfig,
    pub border_color: ColorConfig,
    pub border_weight: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: [10, 10, 10],
            border_color: [23, 23, 23],
            border_weight: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HeroConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub button_label: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Engineering Project".to_string(),
            subtitle: "Developing an advanced Carriage Control System integrating ESP32 and \
                       MCP for efficient communication and precise carriage operations."
                .to_string(),
            button_label: "Learn More".to_string(),
        }
    }
}
