// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use hovergrid::{
    config::Config,
    controllers::{HoverTracker, PointerEvent},
    draw::{draw_cells, draw_debug, draw_hero, DrawStyle},
    logging,
    views::{BackgroundManager, GridSizer, HoverGrid, ResizeChannel},
};

struct Model {
    config: Config,

    // Grid components:
    resize_channel: ResizeChannel,
    sizer: GridSizer,
    grid: HoverGrid,
    tracker: HoverTracker,

    // Style
    background: BackgroundManager,
    border_style: DrawStyle,

    // FPS
    last_update: Instant,
    fps: f32,

    // Debug overlay
    debug_flag: bool,
}

fn main() {
    logging::init();
    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}; falling back to the default config", e);
            Config::default()
        }
    };

    // Create window
    app.new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .resized(resized)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .build()
        .expect("Failed to create window");

    // Mount the sizer on the initial window size
    let mut resize_channel = ResizeChannel::new();
    let mut sizer = GridSizer::new(&config.grid);
    let window_rect = app.window_rect();
    sizer.mount(&mut resize_channel, vec2(window_rect.w(), window_rect.h()));

    let mut grid = HoverGrid::new(&config.grid);
    grid.sync(sizer.dimensions(), sizer.viewport());

    Model {
        background: BackgroundManager::new(&config.style),
        border_style: DrawStyle::from_config(&config.style),
        config,

        resize_channel,
        sizer,
        grid,
        tracker: HoverTracker::new(),

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => {
            model.sizer.unmount();
            app.quit();
        }
        _ => (),
    }
}

// ******************************* Host events *******************************

fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.resize_channel.notify(dim);
    sync_grid(model);
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let events = model.tracker.pointer_moved(pos, model.grid.layout());
    dispatch_pointer(model, &events, app.time);
}

fn mouse_exited(app: &App, model: &mut Model) {
    let events = model.tracker.pointer_exited();
    dispatch_pointer(model, &events, app.time);
}

fn dispatch_pointer(model: &mut Model, events: &[PointerEvent], time: f32) {
    for event in events {
        model.grid.handle_pointer(event, time);
    }
}

fn sync_grid(model: &mut Model) {
    if model
        .grid
        .sync(model.sizer.dimensions(), model.sizer.viewport())
    {
        // the hovered cell belonged to the previous generation
        model.tracker.reset();
    }
}

// ******************************* Frame loop *******************************

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    // Apply a coalesced resize, at most once per frame
    if model.sizer.flush() {
        sync_grid(model);
    }

    model.grid.update(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let bounds = app.window_rect();

    model.background.draw(&draw);
    draw_cells(&draw, &model.grid, &model.border_style, app.time);
    draw_hero(
        &draw,
        bounds,
        &model.config.hero,
        model.grid.animator().accent(),
        model.background.get_current_color(),
    );

    if model.debug_flag {
        draw_debug(&draw, bounds, &model.grid, model.fps);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::error!("failed to render frame: {:?}", e);
    }
}

fn exit(_app: &App, mut model: Model) {
    model.sizer.unmount();
    tracing::info!("exiting");
}
