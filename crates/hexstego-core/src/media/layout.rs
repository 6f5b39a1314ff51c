use std::fmt::{self, Display, Formatter};

use image::ColorType;

/// The decoded pixel layouts accepted as carrier.
///
/// Both can supply red, green, blue and alpha once converted to RGBA, every
/// other layout is refused instead of guessed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PixelLayout {
    Rgb8,
    Rgba8,
}

impl PixelLayout {
    pub fn from_color_type(color_type: ColorType) -> Option<Self> {
        match color_type {
            ColorType::Rgb8 => Some(PixelLayout::Rgb8),
            ColorType::Rgba8 => Some(PixelLayout::Rgba8),
            _ => None,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, PixelLayout::Rgba8)
    }
}

impl Display for PixelLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PixelLayout::Rgb8 => f.write_str("RGB"),
            PixelLayout::Rgba8 => f.write_str("RGBA"),
        }
    }
}
