// src/draw/cell_draw.rs
// Draws every cell of the current generation in its animated color

use nannou::prelude::*;

use super::DrawStyle;
use crate::views::HoverGrid;

pub fn draw_cells(draw: &Draw, grid: &HoverGrid, border: &DrawStyle, time: f32) {
    let layout = grid.layout();
    let animator = grid.animator();
    let idle = animator.transparent();

    for cell in grid.cells() {
        let Some(rect) = layout.rect_for(cell.index) else {
            continue;
        };
        let (x, y) = rect.x_y();
        let fill = animator.color_at(cell.index, time).unwrap_or(idle);

        draw.rect()
            .x_y(x, y)
            .w_h(rect.w(), rect.h())
            .color(fill)
            .stroke(border.color)
            .stroke_weight(border.stroke_weight);
    }
}
