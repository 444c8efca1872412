// src/views/grid/hover_grid.rs
//
// The HoverGrid is the background grid the user sees.
//
// It owns the current cell generation, its layout and the per-cell
// animation state. Dimensions come in from the GridSizer; pointer events come
// in from the HoverTracker and are routed by cell identifier only.

use nannou::prelude::*;

use crate::{
    animation::{CellAnimator, HoverDirection},
    config::GridConfig,
    controllers::PointerEvent,
    models::{Cell, Cells, GridDimensions},
    views::CellLayout,
};

pub struct HoverGrid {
    layout: CellLayout,
    animator: CellAnimator,
    generation: u64,
}

impl HoverGrid {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            layout: CellLayout::for_viewport(Vec2::ZERO, GridDimensions::default()),
            animator: CellAnimator::from_config(config),
            generation: 0,
        }
    }

    /// Brings the grid in line with the sizer. New dimensions replace every
    /// cell and drop their animations; a viewport change alone only
    /// relayouts. Returns true when a new generation was produced.
    pub fn sync(&mut self, dims: GridDimensions, viewport: Vec2) -> bool {
        let regenerate = dims != self.layout.dimensions();
        self.layout = CellLayout::for_viewport(viewport, dims);

        if regenerate {
            self.animator.reset(dims.cell_count());
            self.generation += 1;
            tracing::debug!(
                generation = self.generation,
                cells = dims.cell_count(),
                "grid regenerated"
            );
        }
        regenerate
    }

    /// Routes a pointer event to the cell it names. Events without a valid
    /// cell identifier for this generation are ignored.
    pub fn handle_pointer(&mut self, event: &PointerEvent, time: f32) -> bool {
        let direction = match event {
            PointerEvent::Enter { .. } => HoverDirection::Enter,
            PointerEvent::Leave { .. } => HoverDirection::Leave,
        };

        let Some(index) = event.target().and_then(Cell::parse_id) else {
            tracing::trace!(?event, "pointer event without a cell target");
            return false;
        };

        let applied = self.animator.trigger(index, direction, time);
        if applied {
            tracing::trace!(cell = index, ?direction, "hover");
        } else {
            tracing::trace!(cell = index, "pointer event for a cell outside this generation");
        }
        applied
    }

    pub fn update(&mut self, time: f32) {
        self.animator.update(time);
    }

    pub fn cells(&self) -> Cells {
        self.layout.dimensions().cells()
    }

    pub fn cell_count(&self) -> usize {
        self.animator.len()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.layout.dimensions()
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    pub fn animator(&self) -> &CellAnimator {
        &self.animator
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Color of the cell named `id` at `time`.
    pub fn color_of(&self, id: &str, time: f32) -> Option<Rgba> {
        Cell::parse_id(id).and_then(|index| self.animator.color_at(index, time))
    }
}
