use thiserror::Error;

use crate::core::data::pixel_rect::PixelRectError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to create event loop")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixels surface")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize pixels surface")]
    Texture(#[from] pixels::TextureError),
    #[error("board layout is invalid")]
    Layout(#[from] PixelRectError),
}
