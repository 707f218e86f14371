use crate::core::puzzle::{Disk, MoveOutcome, RodId};

/// Something that happened while the player was handling disks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    Picked { disk: Disk, from: RodId },
    Dropped { disk: Disk, onto: RodId, outcome: MoveOutcome },
    Cancelled { disk: Disk, from: RodId },
    Won { move_count: u64 },
    Reset { num_disks: u32 },
}

pub trait MoveObserver: Send + Sync {
    fn observe(&self, event: MoveEvent);
}
