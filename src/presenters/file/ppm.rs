use std::path::Path;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;

/// Saves boards as binary PPM images.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, board: &PixelBuffer, path: &Path) -> std::io::Result<()> {
        write_ppm(board, path)?;
        info!(path = %path.display(), "wrote board snapshot");

        Ok(())
    }
}
