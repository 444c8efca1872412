// src/draw/hero_draw.rs
//
// Title, subtitle and call-to-action drawn over the centre of the grid.
// The overlay is never hit-tested, so hovering over the text still reaches
// the cells underneath.

use nannou::prelude::*;

use crate::config::HeroConfig;

const PADDING: f32 = 32.0;
const SUBTITLE_MAX_W: f32 = 768.0;
const BUTTON_H: f32 = 44.0;

#[derive(Debug, Clone, Copy)]
pub struct HeroLayout {
    pub title: Rect,
    pub subtitle: Rect,
    pub button: Rect,
    pub title_size: u32,
    pub subtitle_size: u32,
}

impl HeroLayout {
    /// Stacks the three blocks vertically around the centre of `bounds`,
    /// scaling type to the window width.
    pub fn new(bounds: Rect) -> Self {
        let (title_size, subtitle_size) = font_sizes(bounds.w());
        let content_w = (bounds.w() - 2.0 * PADDING).max(0.0);

        let title_h = title_size as f32 * 1.1;
        let subtitle_h = subtitle_size as f32 * 4.5;
        let gap = 16.0;
        let total_h = title_h + gap + subtitle_h + gap + BUTTON_H;

        let (cx, cy) = bounds.x_y();
        let top = cy + total_h / 2.0;

        let title_y = top - title_h / 2.0;
        let subtitle_y = top - title_h - gap - subtitle_h / 2.0;
        let button_y = top - title_h - gap - subtitle_h - gap - BUTTON_H / 2.0;

        Self {
            title: Rect::from_x_y_w_h(cx, title_y, content_w, title_h),
            subtitle: Rect::from_x_y_w_h(
                cx,
                subtitle_y,
                content_w.min(SUBTITLE_MAX_W),
                subtitle_h,
            ),
            button: Rect::from_x_y_w_h(cx, button_y, 180.0, BUTTON_H),
            title_size,
            subtitle_size,
        }
    }
}

/// Title and subtitle point sizes for a window `width` points wide.
pub fn font_sizes(width: f32) -> (u32, u32) {
    if width >= 768.0 {
        (128, 20)
    } else if width >= 640.0 {
        (96, 18)
    } else {
        (72, 18)
    }
}

pub fn draw_hero(draw: &Draw, bounds: Rect, hero: &HeroConfig, accent: Rgba, ink: Rgba) {
    if !hero.enabled {
        return;
    }
    let layout = HeroLayout::new(bounds);

    let (x, y) = layout.title.x_y();
    draw.text(&hero.title.to_uppercase())
        .x_y(x, y)
        .w(layout.title.w())
        .font_size(layout.title_size)
        .center_justify()
        .color(WHITE);

    let (x, y) = layout.subtitle.x_y();
    draw.text(&hero.subtitle)
        .x_y(x, y)
        .w(layout.subtitle.w())
        .font_size(layout.subtitle_size)
        .center_justify()
        .color(rgba(0.45, 0.45, 0.45, 1.0));

    if !hero.button_label.is_empty() {
        let (x, y) = layout.button.x_y();
        draw.rect()
            .x_y(x, y)
            .w_h(layout.button.w(), layout.button.h())
            .color(accent);
        draw.text(&hero.button_label.to_uppercase())
            .x_y(x, y)
            .w(layout.button.w())
            .font_size(20)
            .center_justify()
            .color(ink);
    }
}
