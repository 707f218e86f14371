use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("disk range {min}..={max} is invalid, expected 1 <= min <= max")]
    InvalidDiskRange { min: u32, max: u32 },
    #[error("frame rate must be greater than zero")]
    ZeroFrameRate,
    #[error("board {width}x{height} is too small")]
    BoardTooSmall { width: u32, height: u32 },
    #[error("rod hit radius must be greater than zero")]
    NonPositiveHitRadius,
    #[error("{field} {reason}")]
    InvalidGeometry {
        field: &'static str,
        reason: &'static str,
    },
}
