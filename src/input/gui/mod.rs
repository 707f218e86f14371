//! Windowed drag-and-drop front end.
//!
//! winit owns the window and event loop, pixels blits the rasterized board
//! and egui draws the disk selector, move counter and win message on top.

pub mod app;
pub mod commands;
mod errors;

pub use errors::GuiError;
