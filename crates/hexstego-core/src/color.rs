use std::fmt::{self, Display, Formatter};

use crate::result::Result;
use crate::SteganoError;

const COLOR_TEXT_LEN: usize = 7;

/// A color in its textual `#rrggbb` form, lowercase and zero padded.
///
/// Only ever built from valid input, so every position `1..=6` holds an
/// ASCII hex digit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ColorText(String);

impl ColorText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the hex digit at `position`, `0` being the leading `#`
    pub fn digit_at(&self, position: usize) -> Option<char> {
        self.0.as_bytes().get(position).map(|b| *b as char)
    }

    /// replaces the hex digit at `position`, positions outside `1..=6` or
    /// non hex digits are refused
    pub fn with_digit_at(&self, position: usize, digit: char) -> Result<Self> {
        if !(1..COLOR_TEXT_LEN).contains(&position) || !digit.is_ascii_hexdigit() {
            return Err(SteganoError::InvalidFormat(format!(
                "cannot put '{digit}' at position {position} of {}",
                self.0
            )));
        }
        let mut text = self.0.clone();
        let lower = digit.to_ascii_lowercase();
        text.replace_range(position..=position, lower.encode_utf8(&mut [0; 4]));

        Ok(Self(text))
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        // the constructors validated all six digits already
        let channel = |at: usize| u8::from_str_radix(&self.0[at..at + 2], 16).unwrap_or_default();
        (channel(1), channel(3), channel(5))
    }
}

impl Display for ColorText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ColorText {
    type Error = SteganoError;

    fn try_from(text: &str) -> Result<Self> {
        let valid = text.len() == COLOR_TEXT_LEN
            && text.starts_with('#')
            && text[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(SteganoError::InvalidFormat(format!(
                "{text:?} is not a #rrggbb color"
            )));
        }

        Ok(Self(text.to_ascii_lowercase()))
    }
}

/// Formats three channel values as `#rrggbb`
pub fn pixel_to_hex(r: u8, g: u8, b: u8) -> ColorText {
    ColorText(format!("#{r:02x}{g:02x}{b:02x}"))
}

/// Parses `#rrggbb` back into its channel values
pub fn hex_to_pixel(text: &str) -> Result<(u8, u8, u8)> {
    ColorText::try_from(text).map(|c| c.to_rgb())
}
