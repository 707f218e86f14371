use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::input::gui::GuiError;

pub trait GuiPresenterPort {
    /// Creates a presenter whose board buffer covers `board`.
    fn new(window: &'static Window, board: PixelRect) -> Result<Self, GuiError>
    where
        Self: Sized;
    /// Mutable board frame, RGB, sized to the board passed to `new`.
    fn board_mut(&mut self) -> &mut PixelBuffer;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    /// Maps a physical window position to board coordinates. Positions off the
    /// board map to points outside it.
    fn window_to_board(&self, position: (f64, f64)) -> Point;
}
