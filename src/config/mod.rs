//! Runtime configuration.
//!
//! Everything visual or tunable lives in [`HanoiConfig`], which is built once
//! at startup and handed to the layout, renderer and controller.

mod errors;
mod hanoi_config;

pub use errors::ConfigError;
pub use hanoi_config::{BoardConfig, GameConfig, HanoiConfig, Palette, WindowConfig};
