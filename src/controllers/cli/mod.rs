//! Headless replay of a move list, for scripting and quick checks.

mod errors;
mod move_list;
mod replay;

pub use errors::{MoveParseError, ReplayError};
pub use move_list::parse_moves;
pub use replay::{ReplayController, ReplaySummary};
