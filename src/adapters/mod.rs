//! Adapters that plug infrastructure into the controller ports.

pub mod move_log;
pub mod pixel_format;
