//! Host side of the controller: page bridge, effect execution and rendering.
mod app;
mod bridge;
mod clipboard;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
