// src/views/background.rs
//
// The flat page color behind the grid. Transparent cells show it through.

use crate::config::{color_to_rgba, StyleConfig};
use nannou::prelude::*;

pub struct BackgroundManager {
    current_color: Rgba,
}

impl BackgroundManager {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            current_color: color_to_rgba(style.background_color, 1.0),
        }
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.current_color);
    }

    pub fn get_current_color(&self) -> Rgba {
        self.current_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_style() {
        let style = StyleConfig {
            background_color: [255, 0, 51],
            ..StyleConfig::default()
        };
        let color = BackgroundManager::new(&style).get_current_color();
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert!((color.blue - 0.2).abs() < 1e-6);
        assert_eq!(color.alpha, 1.0);
    }
}
