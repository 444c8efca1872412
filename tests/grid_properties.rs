//! Property tests for viewport partitioning and cell generation.
//!
//! 1. Columns and rows are the floor of viewport / cell size.
//! 2. A viewport narrower or shorter than one cell renders no cells.
//! 3. A generation has exactly columns * rows cells with distinct ids.
//! 4. Resizing recomputes on every notification, last write wins.

use std::collections::HashSet;

use hovergrid::config::GridConfig;
use hovergrid::models::{compute_grid, Cell, GridDimensions, DEFAULT_CELL_SIZE};
use hovergrid::views::{GridSizer, HoverGrid, ResizeChannel};
use nannou::prelude::*;
use proptest::prelude::*;

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn full_hd_ish_viewport() {
    let dims = compute_grid(1600.0, 900.0, DEFAULT_CELL_SIZE);
    assert_eq!(dims, GridDimensions::new(21, 12));

    let ids: Vec<String> = dims.cells().map(|cell| cell.id()).collect();
    assert_eq!(ids.len(), 252);
    assert_eq!(ids.first().map(String::as_str), Some("square-0"));
    assert_eq!(ids.last().map(String::as_str), Some("square-251"));
}

#[test]
fn viewport_smaller_than_a_cell() {
    let dims = compute_grid(50.0, 50.0, DEFAULT_CELL_SIZE);
    assert_eq!(dims, GridDimensions::new(0, 0));
    assert_eq!(dims.cells().count(), 0);

    let mut grid = HoverGrid::new(&GridConfig::default());
    grid.sync(dims, vec2(50.0, 50.0));
    assert_eq!(grid.cell_count(), 0);
    grid.update(1.0);
}

#[test]
fn sizer_feeds_grid() {
    let config = GridConfig::default();
    let mut channel = ResizeChannel::new();
    let mut sizer = GridSizer::new(&config);
    let mut grid = HoverGrid::new(&config);

    sizer.mount(&mut channel, vec2(1600.0, 900.0));
    grid.sync(sizer.dimensions(), sizer.viewport());
    assert_eq!(grid.cell_count(), 252);

    channel.notify(vec2(50.0, 50.0));
    grid.sync(sizer.dimensions(), sizer.viewport());
    assert_eq!(grid.cell_count(), 0);

    channel.notify(vec2(750.0, 300.0));
    grid.sync(sizer.dimensions(), sizer.viewport());
    assert_eq!(grid.cell_count(), 40);
    assert_eq!(sizer.recompute_count(), 3);

    sizer.unmount();
    channel.notify(vec2(1600.0, 900.0));
    assert_eq!(sizer.dimensions(), GridDimensions::new(10, 4));
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn columns_and_rows_are_floored(w in 0u32..=8000, h in 0u32..=8000) {
        let dims = compute_grid(w as f32, h as f32, DEFAULT_CELL_SIZE);
        prop_assert_eq!(dims.columns, w / 75, "columns for w={}", w);
        prop_assert_eq!(dims.rows, h / 75, "rows for h={}", h);
    }
}

proptest! {
    #[test]
    fn tunable_cell_size(w in 0u32..=4000, h in 0u32..=4000, cell in 1u32..=300) {
        let dims = compute_grid(w as f32, h as f32, cell as f32);
        prop_assert_eq!(dims.columns, w / cell);
        prop_assert_eq!(dims.rows, h / cell);
    }
}

proptest! {
    #[test]
    fn below_one_cell_is_empty(short in 0u32..75, long in 0u32..=8000, swap in any::<bool>()) {
        let (w, h) = if swap { (long, short) } else { (short, long) };
        let dims = compute_grid(w as f32, h as f32, DEFAULT_CELL_SIZE);
        prop_assert_eq!(dims.cell_count(), 0);
        prop_assert_eq!(dims.cells().count(), 0);
    }
}

proptest! {
    #[test]
    fn negative_or_nonfinite_never_panics(
        w in prop_oneof![any::<f32>(), Just(f32::NAN), Just(f32::INFINITY), Just(-1.0f32)],
        h in -10_000.0f32..10_000.0,
    ) {
        let dims = compute_grid(w, h, DEFAULT_CELL_SIZE);
        if !(w > 0.0) {
            prop_assert_eq!(dims.columns, 0);
        }
        if h < DEFAULT_CELL_SIZE {
            prop_assert_eq!(dims.rows, 0);
        }
    }
}

proptest! {
    #[test]
    fn generation_has_distinct_sequential_ids(columns in 0u32..=40, rows in 0u32..=40) {
        let dims = GridDimensions::new(columns, rows);
        let cells: Vec<Cell> = dims.cells().collect();
        prop_assert_eq!(cells.len(), (columns * rows) as usize);

        let ids: HashSet<String> = cells.iter().map(Cell::id).collect();
        prop_assert_eq!(ids.len(), cells.len());

        for (i, cell) in cells.iter().enumerate() {
            prop_assert_eq!(cell.index, i);
            prop_assert_eq!(cell.id(), format!("square-{}", i));
            prop_assert_eq!(Cell::parse_id(&cell.id()), Some(i));
        }
    }
}

proptest! {
    #[test]
    fn rendering_is_restartable(columns in 0u32..=30, rows in 0u32..=30) {
        let dims = GridDimensions::new(columns, rows);
        let first: Vec<Cell> = dims.cells().collect();
        let second: Vec<Cell> = dims.cells().collect();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn last_resize_wins(sizes in prop::collection::vec((0u32..=3000, 0u32..=3000), 1..20)) {
        let mut channel = ResizeChannel::new();
        let mut sizer = GridSizer::new(&GridConfig::default());
        sizer.mount(&mut channel, vec2(1600.0, 900.0));

        for (w, h) in &sizes {
            channel.notify(vec2(*w as f32, *h as f32));
        }

        let (w, h) = sizes[sizes.len() - 1];
        prop_assert_eq!(sizer.dimensions(), GridDimensions::new(w / 75, h / 75));
        prop_assert_eq!(sizer.recompute_count(), sizes.len() as u64 + 1);
    }
}
