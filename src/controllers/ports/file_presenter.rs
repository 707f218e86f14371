use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a rendered board somewhere on disk.
pub trait FilePresenterPort {
    fn present(&self, board: &PixelBuffer, path: &Path) -> std::io::Result<()>;
}
