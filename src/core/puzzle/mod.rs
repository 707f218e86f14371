//! The Tower of Hanoi puzzle state machine.
//!
//! [`PuzzleState`] owns the three rods, enforces the size-ordering rule and
//! answers whether the tower has been rebuilt on the target rod.

pub mod disk;
pub mod errors;
pub mod outcome;
pub mod rod;
pub mod state;

pub use disk::Disk;
pub use errors::PuzzleError;
pub use outcome::MoveOutcome;
pub use rod::{Rod, RodId};
pub use state::PuzzleState;
