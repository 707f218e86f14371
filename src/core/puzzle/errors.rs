use thiserror::Error;

/// Contract violations. These indicate a caller bug, never a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("rod index {index} is out of range, expected 0, 1 or 2")]
    RodOutOfRange { index: usize },
    #[error("a puzzle needs at least one disk")]
    NoDisks,
}
