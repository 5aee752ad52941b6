//! Windowed construction viewer.
//!
//! winit owns the window and the event loop, pixels holds the rasterized
//! construction framebuffer, and egui draws the control panel and charts on
//! top of it.

mod app;
pub mod error;
pub mod keys;
pub mod ports;
mod run_gui;

pub use error::GuiError;
pub use run_gui::run_gui;
