//! Interactive controller for drag-and-drop play.
//!
//! Turns pointer gestures into puzzle moves and decides when the win
//! celebration starts.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: pointer positions in board coordinates and reset requests
//! - **Output**: the [`MoveObserver`] port, told about every gesture outcome
//! - **Core**: [`PuzzleState`](crate::core::puzzle::PuzzleState) for the rules,
//!   [`BoardLayout`](crate::core::board::BoardLayout) for rod hit-testing

mod controller;
mod phase;
pub mod ports;

pub use controller::InteractionController;
pub use phase::{DragIntent, InteractionPhase};
pub use ports::move_observer::{MoveEvent, MoveObserver};
