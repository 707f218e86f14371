use winit::window::Window;

use crate::core::data::pixel_rect::PixelRect;
use crate::input::gui::GuiError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default, Clone, Copy)]
pub struct PixelsPresenterFactory;

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        board: PixelRect,
    ) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window, board)
    }
}
