// src/draw/debug_draw.rs
// FPS and grid readout, toggled with `P`

use nannou::prelude::*;

use crate::views::HoverGrid;

pub fn debug_text(grid: &HoverGrid, fps: f32) -> String {
    let dims = grid.dimensions();
    format!(
        "FPS: {:.1}\ngrid: {} x {} ({} cells)\ngeneration: {}\nanimating: {}",
        fps,
        dims.columns,
        dims.rows,
        grid.cell_count(),
        grid.generation(),
        grid.animator().active_count(),
    )
}

pub fn draw_debug(draw: &Draw, bounds: Rect, grid: &HoverGrid, fps: f32) {
    let text_box = Rect::from_w_h(260.0, 90.0).top_left_of(bounds.pad(12.0));
    let (x, y) = text_box.x_y();

    draw.text(&debug_text(grid, fps))
        .x_y(x, y)
        .w_h(text_box.w(), text_box.h())
        .font_size(14)
        .left_justify()
        .align_text_top()
        .color(RED);
}
