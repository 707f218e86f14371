use crate::config::{BoardConfig, HanoiConfig};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::puzzle::{Disk, RodId};

/// Pixel geometry of the three rods and their disks.
///
/// Rods stand at a quarter, half and three quarters of the board width, on a
/// base line `base_margin` pixels above the bottom edge. Positions are worked
/// out in `i64` and must land back on the `i32` pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    bounds: PixelRect,
    board: BoardConfig,
    rod_centers: [i32; 3],
    base_y: i32,
}

fn coordinate(value: i64) -> Result<i32, PixelRectError> {
    i32::try_from(value).map_err(|_| PixelRectError::CoordinateOutOfRange { value })
}

impl BoardLayout {
    pub fn new(width: u32, height: u32, board: BoardConfig) -> Result<Self, PixelRectError> {
        let width = coordinate(i64::from(width))?;
        let height = coordinate(i64::from(height))?;
        let bounds = PixelRect::new(Point::new(0, 0), Point::new(width - 1, height - 1))?;

        let rod_centers = [1, 2, 3].map(|quarters| width / 4 * quarters + width % 4 * quarters / 4);
        let base_y = coordinate(i64::from(height) - i64::from(board.base_margin))?;

        Ok(Self {
            bounds,
            board,
            rod_centers,
            base_y,
        })
    }

    pub fn from_config(config: &HanoiConfig) -> Result<Self, PixelRectError> {
        Self::new(config.window.width, config.window.height, config.board)
    }

    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    #[must_use]
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    #[must_use]
    pub fn rod_center_x(&self, rod: RodId) -> i32 {
        self.rod_centers[rod.index()]
    }

    #[must_use]
    pub fn base_y(&self) -> i32 {
        self.base_y
    }

    pub fn rod_rect(&self, rod: RodId) -> Result<PixelRect, PixelRectError> {
        let origin = Point::new(
            coordinate(i64::from(self.rod_center_x(rod)) - i64::from(self.board.rod_width / 2))?,
            coordinate(i64::from(self.base_y) - i64::from(self.board.rod_height))?,
        );

        PixelRect::from_origin_size(origin, self.board.rod_width, self.board.rod_height)
    }

    /// Saturates instead of wrapping for disk counts the config never allows.
    #[must_use]
    pub fn disk_width(&self, disk: Disk) -> u32 {
        disk.size()
            .saturating_mul(self.board.disk_width_step)
            .saturating_add(self.board.disk_base_width)
    }

    /// Rectangle of `disk` resting at `level` on `rod`, level 0 being the
    /// bottom of the stack.
    pub fn disk_rect(
        &self,
        rod: RodId,
        level: usize,
        disk: Disk,
    ) -> Result<PixelRect, PixelRectError> {
        let width = self.disk_width(disk);
        let levels = i64::try_from(level).unwrap_or(i64::MAX).saturating_add(1);
        let rise = levels.saturating_mul(i64::from(self.board.disk_height));
        let origin = Point::new(
            coordinate(i64::from(self.rod_center_x(rod)) - i64::from(width / 2))?,
            coordinate(i64::from(self.base_y).saturating_sub(rise))?,
        );

        PixelRect::from_origin_size(origin, width, self.board.disk_height)
    }

    /// Rectangle of a held disk, centred on the pointer.
    pub fn floating_disk_rect(&self, disk: Disk, at: Point) -> Result<PixelRect, PixelRectError> {
        let width = self.disk_width(disk);
        let origin = Point::new(
            coordinate(i64::from(at.x) - i64::from(width / 2))?,
            coordinate(i64::from(at.y) - i64::from(self.board.disk_height / 2))?,
        );

        PixelRect::from_origin_size(origin, width, self.board.disk_height)
    }

    /// The rod whose centre line is horizontally closest to `point`, as long
    /// as it is strictly within the hit radius. A point farther than the
    /// radius from every rod is over no rod, even if one rod is nearer.
    #[must_use]
    pub fn rod_at(&self, point: Point) -> Option<RodId> {
        RodId::ALL
            .into_iter()
            .map(|rod| (rod, point.x.abs_diff(self.rod_center_x(rod))))
            .filter(|&(_, distance)| distance < self.board.hit_radius)
            .min_by_key(|&(_, distance)| distance)
            .map(|(rod, _)| rod)
    }
}
