use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    (pixel_rect.size() * 3) as usize
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel {pixel:?} outside of bounds {pixel_rect:?}")]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB frame covering `pixel_rect`, row-major, three bytes per pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let pixel_rect_size = pixel_rect_to_buffer_size(pixel_rect);

        if pixel_rect_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;

        Some(Colour::rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })?;

        self.buffer[index..index + 3].copy_from_slice(&[colour.r, colour.g, colour.b]);

        Ok(())
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(3) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }

    /// Fills `rect`, clipped to the buffer bounds.
    pub fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
        self.fill_clipped(rect.top_left(), rect.bottom_right(), colour);
    }

    /// Draws the inner border of `rect`, `thickness` pixels wide, clipped to
    /// the buffer bounds.
    pub fn stroke_rect(&mut self, rect: PixelRect, thickness: u32, colour: Colour) {
        if thickness == 0 {
            return;
        }

        let t = i32::try_from(thickness).unwrap_or(i32::MAX) - 1;
        let tl = rect.top_left();
        let br = rect.bottom_right();

        self.fill_clipped(tl, Point::new(br.x, tl.y.saturating_add(t)), colour);
        self.fill_clipped(Point::new(tl.x, br.y.saturating_sub(t)), br, colour);
        self.fill_clipped(tl, Point::new(tl.x.saturating_add(t), br.y), colour);
        self.fill_clipped(Point::new(br.x.saturating_sub(t), tl.y), br, colour);
    }

    fn fill_clipped(&mut self, from: Point, to: Point, colour: Colour) {
        let bounds_tl = self.pixel_rect.top_left();
        let bounds_br = self.pixel_rect.bottom_right();

        let left = from.x.max(bounds_tl.x);
        let right = to.x.min(bounds_br.x);
        let top = from.y.max(bounds_tl.y);
        let bottom = to.y.min(bounds_br.y);

        if left > right || top > bottom {
            return;
        }

        let rgb = [colour.r, colour.g, colour.b];
        let width = self.pixel_rect.width() as usize;

        for y in top..=bottom {
            let row = (y - bounds_tl.y) as usize * width;
            let start = (row + (left - bounds_tl.x) as usize) * 3;
            let end = (row + (right - bounds_tl.x) as usize + 1) * 3;

            for pixel in self.buffer[start..end].chunks_exact_mut(3) {
                pixel.copy_from_slice(&rgb);
            }
        }
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Some((relative_y * self.pixel_rect.width() as usize + relative_x) * 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
        .unwrap()
    }

    fn count_colour(buffer: &PixelBuffer, colour: Colour) -> usize {
        buffer
            .buffer()
            .chunks_exact(3)
            .filter(|pixel| **pixel == [colour.r, colour.g, colour.b])
            .count()
    }

    #[test]
    fn new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(create_pixel_rect(10, 10));

        assert_eq!(buffer.buffer().len(), 300);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let result = PixelBuffer::from_data(create_pixel_rect(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn set_pixel_and_read_back() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 3));

        buffer.set_pixel(Point { x: 1, y: 1 }, Colour::SKY_BLUE).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[100, 200, 255]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some(Colour::SKY_BLUE));
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
    }

    #[test]
    fn set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let result = buffer.set_pixel(Point { x: -1, y: 5 }, Colour::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: -1, y: 5 },
                pixel_rect
            })
        );
        assert_eq!(buffer.pixel(Point { x: 3, y: 0 }), None);
    }

    #[test]
    fn fill_paints_every_pixel() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 5));

        buffer.fill(Colour::WHITE);

        assert_eq!(count_colour(&buffer, Colour::WHITE), 20);
    }

    #[test]
    fn fill_rect_covers_inclusive_bounds() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(10, 10));
        let rect = PixelRect::new(Point { x: 2, y: 3 }, Point { x: 4, y: 6 }).unwrap();

        buffer.fill_rect(rect, Colour::GREEN);

        assert_eq!(count_colour(&buffer, Colour::GREEN), 12);
        assert_eq!(buffer.pixel(Point { x: 2, y: 3 }), Some(Colour::GREEN));
        assert_eq!(buffer.pixel(Point { x: 4, y: 6 }), Some(Colour::GREEN));
        assert_eq!(buffer.pixel(Point { x: 5, y: 6 }), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 4, y: 7 }), Some(Colour::BLACK));
    }

    #[test]
    fn fill_rect_is_clipped_to_buffer() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(10, 10));
        let overhanging = PixelRect::new(Point { x: -5, y: 8 }, Point { x: 3, y: 20 }).unwrap();
        let outside = PixelRect::new(Point { x: 20, y: 20 }, Point { x: 30, y: 30 }).unwrap();

        buffer.fill_rect(overhanging, Colour::GRAY);
        buffer.fill_rect(outside, Colour::WHITE);

        assert_eq!(count_colour(&buffer, Colour::GRAY), 8);
        assert_eq!(count_colour(&buffer, Colour::WHITE), 0);
    }

    #[test]
    fn stroke_rect_leaves_interior_untouched() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(10, 10));
        let rect = PixelRect::new(Point { x: 1, y: 1 }, Point { x: 8, y: 8 }).unwrap();

        buffer.stroke_rect(rect, 2, Colour::WHITE);

        // 8x8 outline two pixels thick leaves a 4x4 hole.
        assert_eq!(count_colour(&buffer, Colour::WHITE), 64 - 16);
        assert_eq!(buffer.pixel(Point { x: 4, y: 4 }), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 2, y: 2 }), Some(Colour::WHITE));
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
    }

    #[test]
    fn stroke_rect_with_zero_thickness_draws_nothing() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 4));
        let rect = create_pixel_rect(4, 4);

        buffer.stroke_rect(rect, 0, Colour::WHITE);

        assert_eq!(count_colour(&buffer, Colour::WHITE), 0);
    }
}
