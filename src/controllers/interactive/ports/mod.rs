//! Port definitions for the interactive controller.

pub mod move_observer;
