use crate::core::puzzle::disk::Disk;
use crate::core::puzzle::rod::RodId;

/// Result of a move attempt.
///
/// Rejections are ordinary outcomes, not errors; the state is untouched in
/// every variant except [`MoveOutcome::Moved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    Moved { disk: Disk, from: RodId, to: RodId },
    Rejected { disk: Disk, blocking: Disk },
    NoOp,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
