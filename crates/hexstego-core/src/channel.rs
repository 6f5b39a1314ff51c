use crate::color::ColorText;

/// The color channel a single bit is hidden in.
///
/// The bit lives in the low hex digit of the channel, read from the
/// `#rrggbb` form of the pixel.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Channel {
    Green,
    Blue,
}

impl Channel {
    /// even pixel indices carry blue, odd ones green
    pub fn for_pixel(index: usize) -> Self {
        if index % 2 == 0 {
            Channel::Blue
        } else {
            Channel::Green
        }
    }

    /// position of the low hex digit inside `#rrggbb`
    pub fn position(self) -> usize {
        match self {
            Channel::Green => 4,
            Channel::Blue => 6,
        }
    }
}

/// A digit in `0..=5` can be overwritten with `0` or `1` without visible
/// distortion.
pub fn is_eligible(color: &ColorText, channel: Channel) -> bool {
    matches!(color.digit_at(channel.position()), Some('0'..='5'))
}

/// Writes `bit` into the low digit of `channel`.
///
/// Returns `None` if the digit is out of range, the pixel is then skipped
/// and the bit goes to a later pixel.
pub fn encode_channel(color: &ColorText, channel: Channel, bit: bool) -> Option<ColorText> {
    if !is_eligible(color, channel) {
        return None;
    }
    let digit = if bit { '1' } else { '0' };
    color.with_digit_at(channel.position(), digit).ok()
}

/// Reads the bit stored in `channel`, `None` if the digit is neither `0` nor `1`.
pub fn decode_channel(color: &ColorText, channel: Channel) -> Option<bool> {
    match color.digit_at(channel.position()) {
        Some('0') => Some(false),
        Some('1') => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(text: &str) -> ColorText {
        ColorText::try_from(text).expect("test color is malformed")
    }

    #[test]
    fn should_alternate_channels_by_pixel_parity() {
        assert_eq!(Channel::for_pixel(0), Channel::Blue);
        assert_eq!(Channel::for_pixel(1), Channel::Green);
        assert_eq!(Channel::for_pixel(2), Channel::Blue);
        assert_eq!(Channel::for_pixel(9), Channel::Green);
    }

    #[test]
    fn should_encode_blue() {
        let encode = |c: &str, bit| encode_channel(&color(c), Channel::Blue, bit);

        assert_eq!(encode("#000000", true), Some(color("#000001")));
        assert_eq!(encode("#000007", true), None);
        assert_eq!(encode("#000005", true), Some(color("#000001")));
        assert_eq!(encode("#000001", true), Some(color("#000001")));
        assert_eq!(encode("#abcde3", false), Some(color("#abcde0")));
    }

    #[test]
    fn should_encode_green() {
        let encode = |c: &str, bit| encode_channel(&color(c), Channel::Green, bit);

        assert_eq!(encode("#000700", true), None);
        assert_eq!(encode("#000500", true), Some(color("#000100")));
        assert_eq!(encode("#000100", true), Some(color("#000100")));
        assert_eq!(encode("#12f4ff", false), Some(color("#12f0ff")));
    }

    #[test]
    fn should_skip_every_digit_above_five() {
        for digit in "6789abcdef".chars() {
            let blue = color(&format!("#00000{digit}"));
            let green = color(&format!("#000{digit}00"));
            assert_eq!(encode_channel(&blue, Channel::Blue, true), None);
            assert_eq!(encode_channel(&green, Channel::Green, false), None);
        }
        for digit in "012345".chars() {
            let blue = color(&format!("#00000{digit}"));
            let encoded = encode_channel(&blue, Channel::Blue, true).unwrap();
            assert_eq!(encoded.digit_at(6), Some('1'));
        }
    }

    #[test]
    fn should_decode_blue() {
        assert_eq!(decode_channel(&color("#000000"), Channel::Blue), Some(false));
        assert_eq!(decode_channel(&color("#000001"), Channel::Blue), Some(true));
        assert_eq!(decode_channel(&color("#000007"), Channel::Blue), None);
    }

    #[test]
    fn should_decode_green() {
        assert_eq!(decode_channel(&color("#000100"), Channel::Green), Some(true));
        assert_eq!(decode_channel(&color("#000700"), Channel::Green), None);
        for digit in "23456789abcdef".chars() {
            let green = color(&format!("#000{digit}00"));
            assert_eq!(decode_channel(&green, Channel::Green), None);
        }
    }
}
