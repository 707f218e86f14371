use crate::core::puzzle::disk::Disk;
use crate::core::puzzle::errors::PuzzleError;
use crate::core::puzzle::outcome::MoveOutcome;
use crate::core::puzzle::rod::{Rod, RodId};

/// Rod the tower has to be rebuilt on unless stated otherwise.
pub const DEFAULT_TARGET_ROD: RodId = RodId::C;

/// The three rods, the fixed disk count and the number of applied moves.
///
/// The only mutation is [`PuzzleState::try_move`]. Starting over means
/// building a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    rods: [Rod; 3],
    num_disks: u32,
    move_count: u64,
}

impl PuzzleState {
    /// Stacks `num_disks` disks on rod A, largest at the bottom.
    pub fn new(num_disks: u32) -> Result<Self, PuzzleError> {
        if num_disks == 0 {
            return Err(PuzzleError::NoDisks);
        }

        Ok(Self {
            rods: [Rod::full_tower(num_disks), Rod::default(), Rod::default()],
            num_disks,
            move_count: 0,
        })
    }

    #[must_use]
    pub fn num_disks(&self) -> u32 {
        self.num_disks
    }

    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    #[must_use]
    pub fn rods(&self) -> &[Rod; 3] {
        &self.rods
    }

    #[must_use]
    pub fn rod(&self, rod: RodId) -> &Rod {
        &self.rods[rod.index()]
    }

    #[must_use]
    pub fn peek_top(&self, rod: RodId) -> Option<Disk> {
        self.rod(rod).top()
    }

    #[must_use]
    pub fn total_disks(&self) -> usize {
        self.rods.iter().map(Rod::len).sum()
    }

    /// Moves the top disk of `from` onto `to` if the size rule allows it.
    pub fn try_move(&mut self, from: RodId, to: RodId) -> MoveOutcome {
        if from == to {
            return MoveOutcome::NoOp;
        }

        let Some(disk) = self.peek_top(from) else {
            return MoveOutcome::NoOp;
        };

        if let Some(blocking) = self.peek_top(to).filter(|&top| top < disk) {
            return MoveOutcome::Rejected { disk, blocking };
        }

        self.rods[from.index()].pop();
        self.rods[to.index()].push(disk);
        self.move_count += 1;

        MoveOutcome::Moved { disk, from, to }
    }

    /// Whether the whole tower sits on rod C.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_won_on(DEFAULT_TARGET_ROD)
    }

    #[must_use]
    pub fn is_won_on(&self, target: RodId) -> bool {
        let complete = self
            .rod(target)
            .disks()
            .iter()
            .map(|disk| disk.size())
            .eq((1..=self.num_disks).rev());

        complete
            && RodId::ALL
                .iter()
                .filter(|&&rod| rod != target)
                .all(|&rod| self.rod(rod).is_empty())
    }
}
