//! Software rasterizer for the board.
//!
//! Text and buttons are drawn by the GUI overlay; this module only paints
//! the background, rods and disks.

pub mod draw_board;
pub mod scene;

pub use draw_board::draw_board;
pub use scene::{BoardScene, HeldDisk};
