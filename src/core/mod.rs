//! Pure game logic and board geometry.
//!
//! Nothing in here knows about windows, fonts or input devices.

pub mod board;
pub mod data;
pub mod puzzle;
pub mod render;
