use serde::Deserialize;

/// An opaque RGB colour. Deserializes from `[r, g, b]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const SKY_BLUE: Self = Self::rgb(100, 200, 255);
    pub const GRAY: Self = Self::rgb(200, 200, 200);
    pub const GREEN: Self = Self::rgb(0, 128, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
