//! Input adapters for the puzzle.
//!
//! These receive input from the outside world and translate it into
//! controller calls.

pub mod gui;
