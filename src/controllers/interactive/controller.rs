use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::controllers::interactive::phase::{DragIntent, InteractionPhase};
use crate::controllers::interactive::ports::move_observer::{MoveEvent, MoveObserver};
use crate::core::board::BoardLayout;
use crate::core::data::point::Point;
use crate::core::puzzle::{PuzzleError, PuzzleState};
use crate::core::render::{BoardScene, HeldDisk};

pub struct InteractionController {
    puzzle: PuzzleState,
    layout: BoardLayout,
    celebration_delay: Duration,
    phase: InteractionPhase,
    celebration_shown: bool,
    observer: Option<Arc<dyn MoveObserver>>,
}

impl InteractionController {
    pub fn new(
        num_disks: u32,
        layout: BoardLayout,
        celebration_delay: Duration,
    ) -> Result<Self, PuzzleError> {
        Ok(Self {
            puzzle: PuzzleState::new(num_disks)?,
            layout,
            celebration_delay,
            phase: InteractionPhase::Idle,
            celebration_shown: false,
            observer: None,
        })
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn MoveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    #[must_use]
    pub fn drag(&self) -> Option<DragIntent> {
        match self.phase {
            InteractionPhase::Dragging(intent) => Some(intent),
            _ => None,
        }
    }

    /// Lifts the top disk of the rod under `at`, if there is one.
    pub fn pointer_down(&mut self, at: Point) {
        if !matches!(self.phase, InteractionPhase::Idle) {
            return;
        }

        let Some(rod) = self.layout.rod_at(at) else {
            return;
        };

        let Some(disk) = self.puzzle.peek_top(rod) else {
            return;
        };

        self.phase = InteractionPhase::Dragging(DragIntent { disk, source: rod });
        self.notify(MoveEvent::Picked { disk, from: rod });
    }

    /// Drops the held disk on the rod under `at`. Rejected and off-board drops
    /// leave the puzzle untouched.
    pub fn pointer_up(&mut self, at: Point) {
        let InteractionPhase::Dragging(intent) = self.phase else {
            return;
        };

        self.phase = InteractionPhase::Idle;

        match self.layout.rod_at(at) {
            Some(onto) => {
                let outcome = self.puzzle.try_move(intent.source, onto);
                self.notify(MoveEvent::Dropped {
                    disk: intent.disk,
                    onto,
                    outcome,
                });
            }
            None => self.notify(MoveEvent::Cancelled {
                disk: intent.disk,
                from: intent.source,
            }),
        }
    }

    /// Starts the celebration the first time the puzzle is seen solved.
    pub fn tick(&mut self, now: Instant) {
        if !matches!(self.phase, InteractionPhase::Idle) || self.celebration_shown {
            return;
        }

        if self.puzzle.is_won() {
            self.celebration_shown = true;
            self.phase = InteractionPhase::WinCelebration { since: now };
            self.notify(MoveEvent::Won {
                move_count: self.puzzle.move_count(),
            });
        }
    }

    /// Whether the win message should be on screen yet.
    #[must_use]
    pub fn celebration_visible(&self, now: Instant) -> bool {
        match self.phase {
            InteractionPhase::WinCelebration { since } => {
                now.saturating_duration_since(since) >= self.celebration_delay
            }
            _ => false,
        }
    }

    /// Replaces the puzzle with a fresh one and forgets any drag or
    /// celebration. On error nothing changes.
    pub fn reset(&mut self, num_disks: u32) -> Result<(), PuzzleError> {
        let puzzle = PuzzleState::new(num_disks)?;

        self.puzzle = puzzle;
        self.phase = InteractionPhase::Idle;
        self.celebration_shown = false;
        self.notify(MoveEvent::Reset { num_disks });

        Ok(())
    }

    #[must_use]
    pub fn scene(&self, pointer: Point) -> BoardScene<'_> {
        BoardScene {
            puzzle: &self.puzzle,
            held: self.drag().map(|intent| HeldDisk {
                disk: intent.disk,
                source: intent.source,
                at: pointer,
            }),
        }
    }

    fn notify(&self, event: MoveEvent) {
        if let Some(observer) = &self.observer {
            observer.observe(event);
        }
    }
}
