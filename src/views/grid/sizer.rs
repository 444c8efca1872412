// src/views/grid/sizer.rs
//
// Keeps GridDimensions in step with the window size.
//
// By default every resize notification recomputes immediately, in the order
// the host delivers them. With `coalesce_resize` on, notifications only
// record the latest size and `flush` applies it once per frame.

use nannou::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::GridConfig;
use crate::models::{compute_grid, GridDimensions};
use crate::views::{ResizeChannel, ResizeSubscription};

#[derive(Debug, Default)]
struct SizerState {
    viewport: Vec2,
    dimensions: GridDimensions,
    pending: Option<Vec2>,
    recompute_count: u64,
}

impl SizerState {
    fn recompute(&mut self, viewport: Vec2, cell_size: f32) {
        self.viewport = viewport;
        self.dimensions = compute_grid(viewport.x, viewport.y, cell_size);
        self.pending = None;
        self.recompute_count += 1;
        tracing::debug!(
            width = viewport.x,
            height = viewport.y,
            columns = self.dimensions.columns,
            rows = self.dimensions.rows,
            "grid recomputed"
        );
    }
}

pub struct GridSizer {
    cell_size: f32,
    coalesce: bool,
    state: Rc<RefCell<SizerState>>,
    subscription: Option<ResizeSubscription>,
}

impl GridSizer {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            cell_size: config.cell_size_px,
            coalesce: config.coalesce_resize,
            state: Rc::new(RefCell::new(SizerState::default())),
            subscription: None,
        }
    }

    /// Computes the initial grid for `viewport` and starts listening on
    /// `channel`. Mounting again replaces the previous subscription.
    pub fn mount(&mut self, channel: &mut ResizeChannel, viewport: Vec2) {
        self.state.borrow_mut().recompute(viewport, self.cell_size);

        let state = Rc::clone(&self.state);
        let cell_size = self.cell_size;
        let coalesce = self.coalesce;
        self.subscription = Some(channel.subscribe(move |size| {
            let mut state = state.borrow_mut();
            if coalesce {
                state.pending = Some(size);
            } else {
                state.recompute(size, cell_size);
            }
        }));

        let dims = self.dimensions();
        tracing::info!(
            columns = dims.columns,
            rows = dims.rows,
            cell_size = self.cell_size,
            "grid sizer mounted"
        );
    }

    /// Stops listening for resizes. The last computed dimensions stay readable.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            self.state.borrow_mut().pending = None;
            tracing::info!("grid sizer unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Applies a coalesced size, if one is waiting. Returns true when the
    /// grid was recomputed.
    pub fn flush(&self) -> bool {
        let mut state = self.state.borrow_mut();
        match state.pending {
            Some(size) => {
                state.recompute(size, self.cell_size);
                true
            }
            None => false,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.state.borrow().dimensions
    }

    pub fn viewport(&self) -> Vec2 {
        self.state.borrow().viewport
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn recompute_count(&self) -> u64 {
        self.state.borrow().recompute_count
    }
}

impl Drop for GridSizer {
    fn drop(&mut self) {
        self.unmount();
    }
}
