use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::config::errors::ConfigError;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tower of Hanoi - Drag & Drop Version".to_owned(),
            width: 640,
            height: 480,
            fps: 60,
        }
    }
}

impl WindowConfig {
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        if self.fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / self.fps
        }
    }
}

/// Board geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rod_width: u32,
    pub rod_height: u32,
    /// Distance from the bottom edge of the window to the rod bases.
    pub base_margin: u32,
    pub disk_height: u32,
    /// Width of a disk is `disk_base_width + size * disk_width_step`.
    pub disk_base_width: u32,
    pub disk_width_step: u32,
    pub disk_outline: u32,
    /// Horizontal distance from a rod centre within which a pointer counts
    /// as being over that rod.
    pub hit_radius: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rod_width: 10,
            rod_height: 150,
            base_margin: 50,
            disk_height: 20,
            disk_base_width: 30,
            disk_width_step: 20,
            disk_outline: 2,
            hit_radius: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub min_disks: u32,
    pub max_disks: u32,
    pub celebration_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_disks: 3,
            max_disks: 8,
            celebration_delay_ms: 1000,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn celebration_delay(&self) -> Duration {
        Duration::from_millis(self.celebration_delay_ms)
    }

    #[must_use]
    pub fn disk_choices(&self) -> std::ops::RangeInclusive<u32> {
        self.min_disks..=self.max_disks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Colour,
    pub rod: Colour,
    pub disk: Colour,
    pub disk_outline: Colour,
    pub text: Colour,
    pub win_text: Colour,
    pub button: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Colour::WHITE,
            rod: Colour::BLACK,
            disk: Colour::SKY_BLUE,
            disk_outline: Colour::BLACK,
            text: Colour::BLACK,
            win_text: Colour::GREEN,
            button: Colour::GRAY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HanoiConfig {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub game: GameConfig,
    pub palette: Palette,
}

impl HanoiConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let GameConfig {
            min_disks,
            max_disks,
            ..
        } = self.game;

        if min_disks == 0 || min_disks > max_disks {
            return Err(ConfigError::InvalidDiskRange {
                min: min_disks,
                max: max_disks,
            });
        }

        if self.window.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        self.validate_geometry()?;

        // Rods must fit above the base line.
        let min_height = self
            .board
            .base_margin
            .checked_add(self.board.rod_height)
            .ok_or(ConfigError::InvalidGeometry {
                field: "board.base_margin",
                reason: "plus board.rod_height overflows",
            })?;
        if self.window.width < 2 || self.window.height < 2 || self.window.height <= min_height {
            return Err(ConfigError::BoardTooSmall {
                width: self.window.width,
                height: self.window.height,
            });
        }

        if self.board.hit_radius == 0 {
            return Err(ConfigError::NonPositiveHitRadius);
        }

        Ok(())
    }

    /// Rejects sizes the rasterizer cannot turn into pixel rects.
    fn validate_geometry(&self) -> Result<(), ConfigError> {
        let fits_i32 = |value: u32| i32::try_from(value).is_ok();
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), ConfigError> {
            Err(ConfigError::InvalidGeometry { field, reason })
        };
        let board = &self.board;

        if !fits_i32(self.window.width) {
            return invalid("window.width", "does not fit the pixel grid");
        }
        if !fits_i32(self.window.height) {
            return invalid("window.height", "does not fit the pixel grid");
        }
        if board.rod_width < 2 {
            return invalid("board.rod_width", "must be at least 2");
        }
        if board.rod_height < 2 {
            return invalid("board.rod_height", "must be at least 2");
        }
        if board.disk_height < 2 {
            return invalid("board.disk_height", "must be at least 2");
        }
        if !fits_i32(board.disk_outline) {
            return invalid("board.disk_outline", "does not fit the pixel grid");
        }

        let disk_width = |size: u32| {
            size.checked_mul(board.disk_width_step)
                .and_then(|width| width.checked_add(board.disk_base_width))
        };

        match disk_width(1) {
            Some(width) if width >= 2 => {}
            _ => {
                return invalid("board.disk_base_width", "leaves the smallest disk under 2 pixels");
            }
        }
        match disk_width(self.game.max_disks) {
            Some(width) if fits_i32(width) => {}
            _ => {
                return invalid("board.disk_width_step", "makes the widest disk overflow");
            }
        }

        Ok(())
    }
}
