use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes `buffer` as a binary (P6) PPM image.
pub fn encode_ppm<W: Write>(buffer: &PixelBuffer, mut out: W) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6 header: magic, dimensions, max channel value
    writeln!(out, "P6")?;
    writeln!(out, "{width} {height}")?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())?;
    out.flush()
}

/// Writes `buffer` to `filepath`, creating missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    encode_ppm(buffer, BufWriter::new(File::create(filepath)?))
}
