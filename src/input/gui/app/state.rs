use std::sync::Arc;
use std::time::Instant;

use crate::config::HanoiConfig;
use crate::controllers::interactive::{
    InteractionController, InteractionPhase, MoveEvent, MoveObserver,
};
use crate::core::board::BoardLayout;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::point::Point;
use crate::core::puzzle::PuzzleError;
use crate::core::render::draw_board;

pub enum Screen {
    SelectingDisks,
    Playing(InteractionController),
}

/// Everything the window shows, independent of winit and egui.
pub struct GuiAppState {
    config: HanoiConfig,
    layout: BoardLayout,
    screen: Screen,
    cursor: Point,
    last_num_disks: Option<u32>,
    observer: Option<Arc<dyn MoveObserver>>,
}

impl GuiAppState {
    pub fn new(config: HanoiConfig) -> Result<Self, PixelRectError> {
        let layout = BoardLayout::from_config(&config)?;

        Ok(Self {
            config,
            layout,
            screen: Screen::SelectingDisks,
            cursor: Point::new(0, 0),
            last_num_disks: None,
            observer: None,
        })
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn MoveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub fn config(&self) -> &HanoiConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn set_cursor(&mut self, at: Point) {
        self.cursor = at;
    }

    #[must_use]
    pub fn move_count(&self) -> Option<u64> {
        match &self.screen {
            Screen::Playing(controller) => Some(controller.puzzle().move_count()),
            Screen::SelectingDisks => None,
        }
    }

    #[must_use]
    pub fn dragging(&self) -> bool {
        matches!(&self.screen, Screen::Playing(controller) if controller.drag().is_some())
    }

    /// Starts a game with `num_disks` disks, reusing the running controller.
    pub fn start_game(&mut self, num_disks: u32) -> Result<(), PuzzleError> {
        match &mut self.screen {
            Screen::Playing(controller) => controller.reset(num_disks)?,
            Screen::SelectingDisks => {
                let mut controller = InteractionController::new(
                    num_disks,
                    self.layout,
                    self.config.game.celebration_delay(),
                )?;

                if let Some(observer) = &self.observer {
                    observer.observe(MoveEvent::Reset { num_disks });
                    controller = controller.with_observer(Arc::clone(observer));
                }

                self.screen = Screen::Playing(controller);
            }
        }

        self.last_num_disks = Some(num_disks);

        Ok(())
    }

    pub fn return_to_selector(&mut self) {
        self.screen = Screen::SelectingDisks;
    }

    /// Starts over with the same disk count once the game is won, even
    /// before the win message has appeared.
    pub fn restart_if_celebrating(&mut self) -> Result<(), PuzzleError> {
        let celebrating = matches!(
            &self.screen,
            Screen::Playing(controller)
                if matches!(controller.phase(), InteractionPhase::WinCelebration { .. })
        );

        match self.last_num_disks {
            Some(num_disks) if celebrating => self.start_game(num_disks),
            _ => Ok(()),
        }
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.cursor = at;

        if let Screen::Playing(controller) = &mut self.screen {
            controller.pointer_down(at);
        }
    }

    pub fn pointer_up(&mut self, at: Point) {
        self.cursor = at;

        if let Screen::Playing(controller) = &mut self.screen {
            controller.pointer_up(at);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Screen::Playing(controller) = &mut self.screen {
            controller.tick(now);
        }
    }

    #[must_use]
    pub fn celebration_visible(&self, now: Instant) -> bool {
        match &self.screen {
            Screen::Playing(controller) => controller.celebration_visible(now),
            Screen::SelectingDisks => false,
        }
    }

    /// Rasterizes the current screen. The selector shows an empty background
    /// under its egui buttons.
    pub fn draw(&self, buffer: &mut PixelBuffer) -> Result<(), PixelRectError> {
        match &self.screen {
            Screen::Playing(controller) => draw_board(
                buffer,
                &self.layout,
                &self.config.palette,
                &controller.scene(self.cursor),
            ),
            Screen::SelectingDisks => {
                buffer.fill(self.config.palette.background);
                Ok(())
            }
        }
    }
}
