//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::PixelBuffer;

/// Expands an RGB board frame into an RGBA surface, alpha fully opaque.
///
/// # Panics
/// Panics if `dst` does not hold exactly four bytes per board pixel.
pub fn copy_board_to_rgba(board: &PixelBuffer, dst: &mut [u8]) {
    let src = board.buffer();
    let expected_dst_len = (src.len() / 3) * 4;

    assert_eq!(
        dst.len(),
        expected_dst_len,
        "surface length {} does not match {}x{} board",
        dst.len(),
        board.pixel_rect().width(),
        board.pixel_rect().height()
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}
