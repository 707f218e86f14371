pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;
mod storage;

pub use crate::adapters::move_log::TracingMoveObserver;
pub use crate::config::{ConfigError, HanoiConfig};
pub use crate::controllers::cli::{
    MoveParseError, ReplayController, ReplayError, ReplaySummary, parse_moves,
};
pub use crate::controllers::interactive::{
    InteractionController, InteractionPhase, MoveEvent, MoveObserver,
};
pub use crate::core::puzzle::{Disk, MoveOutcome, PuzzleError, PuzzleState, RodId};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::GuiError;
#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
