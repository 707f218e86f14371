use crate::config::Palette;
use crate::core::board::BoardLayout;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::puzzle::RodId;
use crate::core::render::scene::BoardScene;

/// Paints `scene` into `buffer`, which must cover the layout bounds.
///
/// The held disk is hidden from its source rod and drawn at the pointer,
/// on top of everything else.
pub fn draw_board(
    buffer: &mut PixelBuffer,
    layout: &BoardLayout,
    palette: &Palette,
    scene: &BoardScene<'_>,
) -> Result<(), PixelRectError> {
    buffer.fill(palette.background);

    for rod in RodId::ALL {
        buffer.fill_rect(layout.rod_rect(rod)?, palette.rod);
    }

    for rod in RodId::ALL {
        for (level, &disk) in scene.resting_disks(rod).iter().enumerate() {
            draw_disk(buffer, layout, palette, layout.disk_rect(rod, level, disk)?);
        }
    }

    if let Some(held) = scene.held {
        draw_disk(
            buffer,
            layout,
            palette,
            layout.floating_disk_rect(held.disk, held.at)?,
        );
    }

    Ok(())
}

fn draw_disk(buffer: &mut PixelBuffer, layout: &BoardLayout, palette: &Palette, rect: PixelRect) {
    buffer.fill_rect(rect, palette.disk);
    buffer.stroke_rect(rect, layout.board().disk_outline, palette.disk_outline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HanoiConfig;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::puzzle::{Disk, PuzzleState};
    use crate::core::render::scene::HeldDisk;

    fn render(scene: &BoardScene<'_>) -> (PixelBuffer, BoardLayout) {
        let config = HanoiConfig::default();
        let layout = BoardLayout::from_config(&config).unwrap();
        let mut buffer = PixelBuffer::new(layout.bounds());

        draw_board(&mut buffer, &layout, &config.palette, scene).unwrap();

        (buffer, layout)
    }

    #[test]
    fn empty_areas_use_background_colour() {
        let puzzle = PuzzleState::new(3).unwrap();
        let (buffer, _) = render(&BoardScene::at_rest(&puzzle));

        assert_eq!(buffer.pixel(Point::new(5, 5)), Some(Colour::WHITE));
        assert_eq!(buffer.pixel(Point::new(639, 479)), Some(Colour::WHITE));
    }

    #[test]
    fn rods_are_painted_above_base_line() {
        let puzzle = PuzzleState::new(3).unwrap();
        let (buffer, _) = render(&BoardScene::at_rest(&puzzle));

        assert_eq!(buffer.pixel(Point::new(480, 300)), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point::new(480, 279)), Some(Colour::WHITE));
        assert_eq!(buffer.pixel(Point::new(480, 430)), Some(Colour::WHITE));
    }

    #[test]
    fn resting_disks_have_fill_and_outline() {
        let puzzle = PuzzleState::new(3).unwrap();
        let (buffer, _) = render(&BoardScene::at_rest(&puzzle));

        // Bottom disk (size 3) spans x 115..=204, y 410..=429.
        assert_eq!(buffer.pixel(Point::new(130, 420)), Some(Colour::SKY_BLUE));
        assert_eq!(buffer.pixel(Point::new(115, 420)), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point::new(116, 420)), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point::new(117, 420)), Some(Colour::SKY_BLUE));
        assert_eq!(buffer.pixel(Point::new(114, 420)), Some(Colour::WHITE));
    }

    #[test]
    fn held_disk_is_hidden_from_source_and_drawn_at_pointer() {
        let puzzle = PuzzleState::new(3).unwrap();
        let scene = BoardScene {
            puzzle: &puzzle,
            held: Some(HeldDisk {
                disk: Disk::new(1),
                source: RodId::A,
                at: Point::new(320, 100),
            }),
        };
        let (buffer, layout) = render(&scene);

        // Top disk (size 1, level 2) would span y 370..=389 left of the rod.
        let resting = layout.disk_rect(RodId::A, 2, Disk::new(1)).unwrap();
        assert_eq!(
            buffer.pixel(Point::new(resting.top_left().x + 5, resting.center().y)),
            Some(Colour::WHITE)
        );
        assert_eq!(buffer.pixel(Point::new(310, 100)), Some(Colour::SKY_BLUE));
        assert_eq!(scene.resting_disks(RodId::A).len(), 2);
    }

    #[test]
    fn resting_disks_ignore_held_disk_from_another_rod() {
        let puzzle = PuzzleState::new(2).unwrap();
        let scene = BoardScene {
            puzzle: &puzzle,
            held: Some(HeldDisk {
                disk: Disk::new(1),
                source: RodId::B,
                at: Point::new(0, 0),
            }),
        };

        assert_eq!(scene.resting_disks(RodId::A).len(), 2);
        assert!(scene.resting_disks(RodId::B).is_empty());
    }
}
