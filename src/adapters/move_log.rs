//! Move observer that reports gestures through `tracing`.

use tracing::{debug, info};

use crate::controllers::interactive::{MoveEvent, MoveObserver};
use crate::core::puzzle::MoveOutcome;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMoveObserver;

impl MoveObserver for TracingMoveObserver {
    fn observe(&self, event: MoveEvent) {
        match event {
            MoveEvent::Picked { disk, from } => {
                debug!(%disk, rod = %from, "picked disk");
            }
            MoveEvent::Dropped {
                disk,
                onto,
                outcome,
            } => match outcome {
                MoveOutcome::Moved { from, to, .. } => {
                    debug!(%disk, %from, %to, "move accepted");
                }
                MoveOutcome::Rejected { blocking, .. } => {
                    debug!(%disk, rod = %onto, %blocking, "move rejected, disk too large");
                }
                MoveOutcome::NoOp => {
                    debug!(%disk, rod = %onto, "dropped back on source rod");
                }
            },
            MoveEvent::Cancelled { disk, from } => {
                debug!(%disk, rod = %from, "drop missed every rod");
            }
            MoveEvent::Won { move_count } => {
                info!(move_count, "puzzle solved");
            }
            MoveEvent::Reset { num_disks } => {
                info!(num_disks, "new game");
            }
        }
    }
}
