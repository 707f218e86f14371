use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::config::HanoiConfig;
use crate::controllers::cli::errors::ReplayError;
use crate::controllers::interactive::{MoveEvent, MoveObserver};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::board::BoardLayout;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::puzzle::{PuzzleState, RodId};
use crate::core::render::{BoardScene, draw_board};

/// Final state of a replay, printable as a small text board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub puzzle: PuzzleState,
    pub accepted: usize,
    pub refused: usize,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rod in RodId::ALL {
            write!(f, "{rod}:")?;
            for disk in self.puzzle.rod(rod).disks() {
                write!(f, " {disk}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Moves: {}", self.puzzle.move_count())?;
        writeln!(f, "Refused: {}", self.refused)?;
        write!(f, "Solved: {}", if self.puzzle.is_won() { "yes" } else { "no" })
    }
}

pub struct ReplayController<P: FilePresenterPort> {
    presenter: P,
    config: HanoiConfig,
    puzzle: PuzzleState,
    accepted: usize,
    refused: usize,
    observer: Option<Arc<dyn MoveObserver>>,
}

impl<P: FilePresenterPort> ReplayController<P> {
    pub fn new(presenter: P, config: HanoiConfig, num_disks: u32) -> Result<Self, ReplayError> {
        Ok(Self {
            presenter,
            config,
            puzzle: PuzzleState::new(num_disks)?,
            accepted: 0,
            refused: 0,
            observer: None,
        })
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn MoveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Applies every move in order. Illegal moves are counted and skipped.
    pub fn apply(&mut self, moves: &[(RodId, RodId)]) {
        for &(from, to) in moves {
            let disk = self.puzzle.peek_top(from);
            let outcome = self.puzzle.try_move(from, to);

            if outcome.is_moved() {
                self.accepted += 1;
            } else {
                self.refused += 1;
            }

            if let (Some(observer), Some(disk)) = (&self.observer, disk) {
                observer.observe(MoveEvent::Dropped {
                    disk,
                    onto: to,
                    outcome,
                });
            }
        }

        if let Some(observer) = &self.observer {
            if self.puzzle.is_won() {
                observer.observe(MoveEvent::Won {
                    move_count: self.puzzle.move_count(),
                });
            }
        }
    }

    #[must_use]
    pub fn summary(&self) -> ReplaySummary {
        ReplaySummary {
            puzzle: self.puzzle.clone(),
            accepted: self.accepted,
            refused: self.refused,
        }
    }

    pub fn render(&self) -> Result<PixelBuffer, ReplayError> {
        let layout = BoardLayout::from_config(&self.config)?;
        let mut buffer = PixelBuffer::new(layout.bounds());

        draw_board(
            &mut buffer,
            &layout,
            &self.config.palette,
            &BoardScene::at_rest(&self.puzzle),
        )?;

        Ok(buffer)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ReplayError> {
        let buffer = self.render()?;
        self.presenter.present(&buffer, path.as_ref())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::controllers::cli::parse_moves;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::puzzle::MoveOutcome;

    #[derive(Default)]
    struct RecordingPresenter {
        written: Mutex<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, board: &PixelBuffer, path: &Path) -> std::io::Result<()> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), board.buffer().len()));
            Ok(())
        }
    }

    fn describe(outcome: MoveOutcome) -> &'static str {
        match outcome {
            MoveOutcome::Moved { .. } => "moved",
            MoveOutcome::Rejected { .. } => "rejected",
            MoveOutcome::NoOp => "no-op",
        }
    }

    #[derive(Default)]
    struct CountingObserver {
        outcomes: Mutex<Vec<&'static str>>,
    }

    impl MoveObserver for CountingObserver {
        fn observe(&self, event: MoveEvent) {
            let label = match event {
                MoveEvent::Dropped { outcome, .. } => describe(outcome),
                MoveEvent::Won { .. } => "won",
                _ => "other",
            };
            self.outcomes.lock().unwrap().push(label);
        }
    }

    #[test]
    fn replay_counts_accepted_and_refused_moves() {
        let presenter = RecordingPresenter::default();
        let mut replay = ReplayController::new(&presenter, HanoiConfig::default(), 3).unwrap();

        replay.apply(&parse_moves("AC AC AB BB").unwrap());
        let summary = replay.summary();

        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.refused, 2);
        assert_eq!(summary.puzzle.move_count(), 2);
    }

    #[test]
    fn replay_of_optimal_solution_is_solved() {
        let presenter = RecordingPresenter::default();
        let observer = Arc::new(CountingObserver::default());
        let mut replay = ReplayController::new(&presenter, HanoiConfig::default(), 3)
            .unwrap()
            .with_observer(Arc::clone(&observer) as Arc<dyn MoveObserver>);

        replay.apply(&parse_moves("AC AB CB AC BA BC AC").unwrap());

        let summary = replay.summary();
        assert!(summary.puzzle.is_won());
        assert_eq!(summary.puzzle.move_count(), 7);
        assert_eq!(
            summary.to_string(),
            "A:\nB:\nC: 3 2 1\nMoves: 7\nRefused: 0\nSolved: yes"
        );

        let outcomes = observer.outcomes.lock().unwrap();
        assert_eq!(outcomes.len(), 8);
        assert_eq!(outcomes.last(), Some(&"won"));
    }

    #[test]
    fn moves_from_empty_rods_are_not_reported() {
        let presenter = RecordingPresenter::default();
        let observer = Arc::new(CountingObserver::default());
        let mut replay = ReplayController::new(&presenter, HanoiConfig::default(), 3)
            .unwrap()
            .with_observer(Arc::clone(&observer) as Arc<dyn MoveObserver>);

        replay.apply(&parse_moves("BC").unwrap());

        assert_eq!(replay.summary().refused, 1);
        assert!(observer.outcomes.lock().unwrap().is_empty());
    }

    #[test]
    fn summary_lists_rods_bottom_to_top() {
        let presenter = RecordingPresenter::default();
        let mut replay = ReplayController::new(&presenter, HanoiConfig::default(), 3).unwrap();

        replay.apply(&parse_moves("AC").unwrap());

        assert_eq!(
            replay.summary().to_string(),
            "A: 3 2\nB:\nC: 1\nMoves: 1\nRefused: 0\nSolved: no"
        );
    }

    #[test]
    fn render_draws_final_board() {
        let presenter = RecordingPresenter::default();
        let mut replay = ReplayController::new(&presenter, HanoiConfig::default(), 3).unwrap();
        replay.apply(&parse_moves("AC").unwrap());

        let buffer = replay.render().unwrap();

        assert_eq!(buffer.pixel_rect().width(), 640);
        // Disk 1 now rests at the bottom of rod C.
        assert_eq!(buffer.pixel(Point::new(470, 420)), Some(Colour::SKY_BLUE));
    }

    #[test]
    fn write_hands_rendered_board_to_presenter() {
        let presenter = RecordingPresenter::default();
        let replay = ReplayController::new(&presenter, HanoiConfig::default(), 3).unwrap();

        replay.write("out/board.ppm").unwrap();

        assert_eq!(
            presenter.written.lock().unwrap().as_slice(),
            &[(PathBuf::from("out/board.ppm"), 640 * 480 * 3)]
        );
    }

    #[test]
    fn zero_disks_is_rejected() {
        let presenter = RecordingPresenter::default();

        assert!(matches!(
            ReplayController::new(&presenter, HanoiConfig::default(), 0),
            Err(ReplayError::Puzzle(_))
        ));
    }
}
