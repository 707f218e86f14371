use std::time::Instant;

use crate::core::puzzle::{Disk, RodId};

/// A disk lifted off `source` but not yet dropped anywhere.
///
/// The disk stays on its rod in the puzzle state until the drop succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragIntent {
    pub disk: Disk,
    pub source: RodId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    #[default]
    Idle,
    Dragging(DragIntent),
    WinCelebration { since: Instant },
}
