// src/lib.rs
//
// hovergrid: a full-window grid of cells that light up under the pointer
// and fade out slowly after it leaves.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod draw;
pub mod logging;
pub mod models;
pub mod views;
