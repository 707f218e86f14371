use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be at least 2x2: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
    #[error("coordinate {value} does not fit the pixel grid")]
    CoordinateOutOfRange { value: i64 },
}

/// An inclusive rectangle of pixels, at least two pixels on each side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_origin_size(
        origin: Point,
        width: u32,
        height: u32,
    ) -> Result<Self, PixelRectError> {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);

        Self::new(
            origin,
            Point {
                x: origin.x.saturating_add(width).saturating_sub(1),
                y: origin.y.saturating_add(height).saturating_sub(1),
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.top_left.x + (self.width() / 2) as i32,
            y: self.top_left.y + (self.height() / 2) as i32,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}
