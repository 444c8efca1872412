// src/animation/cell_animator.rs
//
// Per-cell hover animation state.
//
// Each cell holds a settled color and at most one running tween. A new
// hover request on a cell replaces its tween, starting from the color the
// cell shows at that instant.

use nannou::prelude::*;

use super::{ColorTween, EasingType};
use crate::config::GridConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverDirection {
    Enter, // toward the opaque accent
    Leave, // toward transparent
}

#[derive(Debug, Clone, Copy)]
pub struct HoverTiming {
    pub enter_duration: f32,
    pub leave_duration: f32,
    pub easing: EasingType,
}

impl HoverTiming {
    pub fn duration_for(&self, direction: HoverDirection) -> f32 {
        match direction {
            HoverDirection::Enter => self.enter_duration,
            HoverDirection::Leave => self.leave_duration,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CellState {
    color: Rgba,
    active: Option<(HoverDirection, ColorTween)>,
}

impl CellState {
    fn color_at(&self, time: f32) -> Rgba {
        match &self.active {
            Some((_, tween)) => tween.value_at(time),
            None => self.color,
        }
    }
}

pub struct CellAnimator {
    cells: Vec<CellState>,
    accent: Rgba,
    timing: HoverTiming,
}

impl CellAnimator {
    pub fn new(accent: Rgba, timing: HoverTiming) -> Self {
        Self {
            cells: Vec::new(),
            accent,
            timing,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(
            config.accent(),
            HoverTiming {
                enter_duration: config.enter_duration(),
                leave_duration: config.leave_duration(),
                easing: config.easing,
            },
        )
    }

    /// Replaces every cell with `count` fresh transparent cells. In-flight
    /// tweens of the previous generation are dropped.
    pub fn reset(&mut self, count: usize) {
        let idle = CellState {
            color: self.transparent(),
            active: None,
        };
        self.cells.clear();
        self.cells.resize(count, idle);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn accent(&self) -> Rgba {
        self.accent
    }

    pub fn transparent(&self) -> Rgba {
        rgba(self.accent.red, self.accent.green, self.accent.blue, 0.0)
    }

    pub fn timing(&self) -> HoverTiming {
        self.timing
    }

    /// Starts a hover tween on one cell. Returns false when the index is not
    /// part of the current generation.
    pub fn trigger(&mut self, index: usize, direction: HoverDirection, time: f32) -> bool {
        let target = match direction {
            HoverDirection::Enter => self.accent,
            HoverDirection::Leave => self.transparent(),
        };
        let duration = self.timing.duration_for(direction);
        let easing = self.timing.easing;

        let Some(state) = self.cells.get_mut(index) else {
            return false;
        };

        let tween = match &state.active {
            Some((_, running)) => running.retarget(target, time, duration),
            None => ColorTween::new(state.color, target, time, duration, easing),
        };
        state.active = Some((direction, tween));
        true
    }

    pub fn color_at(&self, index: usize, time: f32) -> Option<Rgba> {
        self.cells.get(index).map(|state| state.color_at(time))
    }

    /// Direction of the tween currently running on `index`, if any.
    pub fn direction(&self, index: usize) -> Option<HoverDirection> {
        self.cells
            .get(index)
            .and_then(|state| state.active.as_ref().map(|(direction, _)| *direction))
    }

    pub fn tween(&self, index: usize) -> Option<&ColorTween> {
        self.cells
            .get(index)
            .and_then(|state| state.active.as_ref().map(|(_, tween)| tween))
    }

    /// Settles finished tweens into their target color. Returns how many
    /// cells settled on this call.
    pub fn update(&mut self, time: f32) -> usize {
        let mut settled = 0;
        for state in self.cells.iter_mut() {
            if let Some((_, tween)) = &state.active {
                if tween.is_finished(time) {
                    state.color = tween.target;
                    state.active = None;
                    settled += 1;
                }
            }
        }
        settled
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|s| s.active.is_some()).count()
    }
}
