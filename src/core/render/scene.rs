use crate::core::data::point::Point;
use crate::core::puzzle::{Disk, PuzzleState, RodId};

/// A disk lifted off `source` and following the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldDisk {
    pub disk: Disk,
    pub source: RodId,
    pub at: Point,
}

/// Everything the rasterizer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardScene<'a> {
    pub puzzle: &'a PuzzleState,
    pub held: Option<HeldDisk>,
}

impl<'a> BoardScene<'a> {
    #[must_use]
    pub fn at_rest(puzzle: &'a PuzzleState) -> Self {
        Self { puzzle, held: None }
    }

    /// Disks of `rod` bottom to top, without the held disk.
    pub fn resting_disks(&self, rod: RodId) -> &'a [Disk] {
        let disks = self.puzzle.rod(rod).disks();

        match self.held {
            Some(held) if held.source == rod && disks.last() == Some(&held.disk) => {
                &disks[..disks.len() - 1]
            }
            _ => disks,
        }
    }
}
