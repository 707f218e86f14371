use thiserror::Error;

use crate::core::data::pixel_rect::PixelRectError;
use crate::core::puzzle::PuzzleError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move `{token}` must name exactly two rods, e.g. `AC` or `02`")]
    Malformed { token: String },
    #[error("move `{token}` names unknown rod `{rod}`")]
    UnknownRod { token: String, rod: char },
    #[error("move `{token}` is invalid")]
    OutOfRange {
        token: String,
        #[source]
        source: PuzzleError,
    },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Parse(#[from] MoveParseError),
    #[error("board layout is invalid")]
    Layout(#[from] PixelRectError),
    #[error("failed to write board snapshot")]
    Io(#[from] std::io::Error),
}
