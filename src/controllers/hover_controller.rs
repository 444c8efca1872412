// src/controllers/hover_controller.rs
//
// nannou reports raw pointer positions; the grid wants per-cell enter and
// leave notifications addressed by cell identifier. HoverTracker remembers
// which cell the pointer is over and emits the transitions.

use nannou::prelude::*;

use crate::models::Cell;
use crate::views::CellLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    Enter { target: Option<String> },
    Leave { target: Option<String> },
}

impl PointerEvent {
    pub fn enter(index: usize) -> Self {
        PointerEvent::Enter {
            target: Some(Cell::new(index).id()),
        }
    }

    pub fn leave(index: usize) -> Self {
        PointerEvent::Leave {
            target: Some(Cell::new(index).id()),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            PointerEvent::Enter { target } | PointerEvent::Leave { target } => target.as_deref(),
        }
    }
}

#[derive(Debug, Default)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Leave for the old cell comes before enter for the new one.
    pub fn pointer_moved(&mut self, point: Point2, layout: &CellLayout) -> Vec<PointerEvent> {
        let current = layout.hit_test(point);
        if current == self.hovered {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.hovered {
            events.push(PointerEvent::leave(previous));
        }
        if let Some(next) = current {
            events.push(PointerEvent::enter(next));
        }
        self.hovered = current;
        events
    }

    pub fn pointer_exited(&mut self) -> Vec<PointerEvent> {
        self.hovered
            .take()
            .map(PointerEvent::leave)
            .into_iter()
            .collect()
    }

    /// Forget the hovered cell; its generation has been replaced.
    pub fn reset(&mut self) {
        self.hovered = None;
    }
}
