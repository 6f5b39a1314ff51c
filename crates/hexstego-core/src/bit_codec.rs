//! Turns text into the bit stream that gets spread over the pixels and back.
//!
//! Two layouts exist. [`BitLayout::FixedWidth`] writes every byte as exactly
//! 8 bits, most significant bit first. [`BitLayout::Legacy`] reads the message
//! bytes as one big unsigned integer and writes it in binary without leading
//! zeros. The legacy layout loses the leading zero bits of the first byte, it
//! is only there to read and write images of older tools that used it.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::result::Result;
use crate::SteganoError;

/// Marks the end of the message inside the embedded bit stream
pub const TERMINATOR: &str = "1111111111111110";

const TERMINATOR_BITS: [bool; 16] = [
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    false,
];

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum BitLayout {
    /// 8 bits per byte, MSB first
    #[default]
    FixedWidth,
    /// the message as big integer in binary, no leading zeros
    Legacy,
}

/// An ordered sequence of bits, printed as a string of `0` and `1`
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct BitStream(Vec<bool>);

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// a stream that contains nothing but the terminator
    pub fn terminator() -> Self {
        Self(TERMINATOR_BITS.to_vec())
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn ends_with_terminator(&self) -> bool {
        self.0.ends_with(&TERMINATOR_BITS)
    }

    /// removes a trailing terminator, returns true if there was one
    pub fn strip_terminator(&mut self) -> bool {
        if self.ends_with_terminator() {
            self.0.truncate(self.0.len() - TERMINATOR_BITS.len());
            true
        } else {
            false
        }
    }

    pub fn with_terminator(mut self) -> Self {
        self.0.extend_from_slice(&TERMINATOR_BITS);
        self
    }
}

impl From<Vec<bool>> for BitStream {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl Display for BitStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitStream {
    type Err = SteganoError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SteganoError::InvalidFormat(format!(
                    "'{other}' is not a binary digit"
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

/// Turns the UTF-8 bytes of `message` into bits, without terminator.
pub fn text_to_bits(message: &str, layout: BitLayout) -> BitStream {
    let bytes = message.as_bytes();
    let mut bits = BitStream::with_capacity(bytes.len() * 8);
    let mut reader = BitReader::endian(bytes, BigEndian);
    while let Ok(bit) = reader.read_bit() {
        bits.push(bit);
    }

    match layout {
        BitLayout::FixedWidth => bits,
        BitLayout::Legacy if bits.is_empty() => bits,
        BitLayout::Legacy => {
            let significant: Vec<bool> = bits.iter().skip_while(|bit| !bit).collect();
            if significant.is_empty() {
                // zero is still written as one digit
                BitStream::from(vec![false])
            } else {
                BitStream::from(significant)
            }
        }
    }
}

/// Turns bits back into text, the inverse of [`text_to_bits`].
pub fn bits_to_text(bits: &BitStream, layout: BitLayout) -> Result<String> {
    let bytes = match layout {
        BitLayout::FixedWidth => {
            if bits.len() % 8 != 0 {
                return Err(SteganoError::DecodeError(format!(
                    "{} bits do not form whole bytes",
                    bits.len()
                )));
            }
            pack(bits.iter())?
        }
        BitLayout::Legacy => {
            if bits.is_empty() {
                return Err(SteganoError::DecodeError(
                    "no bits to decode".to_string(),
                ));
            }
            let significant = bits.iter().skip_while(|bit| !bit).count();
            let hex_digits = if significant == 0 {
                1
            } else {
                significant.div_ceil(4)
            };
            if hex_digits % 2 != 0 {
                return Err(SteganoError::DecodeError(format!(
                    "{hex_digits} hex digits do not form whole bytes"
                )));
            }
            let padding = hex_digits * 4 - significant;
            let value = bits.iter().skip(bits.len() - significant);
            pack(std::iter::repeat(false).take(padding).chain(value))?
        }
    };

    Ok(String::from_utf8(bytes)?)
}

/// packs a byte aligned bit sequence into bytes
fn pack(bits: impl Iterator<Item = bool>) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    for bit in bits {
        writer.write_bit(bit)?;
    }

    Ok(writer.into_writer())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitStream {
        s.parse().expect("test bit string is not binary")
    }

    #[test]
    fn terminator_constants_agree() {
        assert_eq!(BitStream::terminator().to_string(), TERMINATOR);
        assert_eq!(bits(TERMINATOR), BitStream::terminator());
    }

    #[test]
    fn should_expand_every_byte_to_eight_bits() {
        assert_eq!(
            text_to_bits("hi", BitLayout::FixedWidth).to_string(),
            "0110100001101001"
        );
        assert_eq!(
            text_to_bits("\n", BitLayout::FixedWidth).to_string(),
            "00001010"
        );
        assert!(text_to_bits("", BitLayout::FixedWidth).is_empty());
    }

    #[test]
    fn should_drop_leading_zeros_in_legacy_layout() {
        assert_eq!(text_to_bits("h", BitLayout::Legacy).to_string(), "1101000");
        assert_eq!(
            text_to_bits("hi", BitLayout::Legacy).to_string(),
            "110100001101001"
        );
        assert_eq!(text_to_bits("\0", BitLayout::Legacy).to_string(), "0");
        assert!(text_to_bits("", BitLayout::Legacy).is_empty());
    }

    #[test]
    fn should_round_trip_any_text_in_fixed_width_layout() {
        for text in ["hello", "Hello World!", "\u{1}\u{2}", "grüße 🦀", ""] {
            let encoded = text_to_bits(text, BitLayout::FixedWidth);
            assert_eq!(
                bits_to_text(&encoded, BitLayout::FixedWidth).unwrap(),
                text,
                "round trip failed for {text:?}"
            );
        }
    }

    #[test]
    fn should_round_trip_text_with_a_high_first_nibble_in_legacy_layout() {
        for text in ["hello", "Hello World!", "grüße 🦀", "~"] {
            let encoded = text_to_bits(text, BitLayout::Legacy);
            assert_eq!(
                bits_to_text(&encoded, BitLayout::Legacy).unwrap(),
                text,
                "round trip failed for {text:?}"
            );
        }
    }

    #[test]
    fn legacy_layout_cannot_restore_a_low_first_byte() {
        let encoded = text_to_bits("\u{1}abc", BitLayout::Legacy);
        assert!(matches!(
            bits_to_text(&encoded, BitLayout::Legacy),
            Err(SteganoError::DecodeError(_))
        ));
    }

    #[test]
    fn should_reject_partial_bytes() {
        assert!(matches!(
            bits_to_text(&bits("0110100"), BitLayout::FixedWidth),
            Err(SteganoError::DecodeError(_))
        ));
        assert!(matches!(
            bits_to_text(&bits(""), BitLayout::Legacy),
            Err(SteganoError::DecodeError(_))
        ));
        assert!(matches!(
            bits_to_text(&bits("0000"), BitLayout::Legacy),
            Err(SteganoError::DecodeError(_))
        ));
    }

    #[test]
    fn should_reject_invalid_utf8() {
        assert!(matches!(
            bits_to_text(&bits("11111111"), BitLayout::FixedWidth),
            Err(SteganoError::DecodeError(_))
        ));
    }

    #[test]
    fn should_strip_a_trailing_terminator_only() {
        let mut stream = text_to_bits("a", BitLayout::FixedWidth).with_terminator();
        assert!(stream.ends_with_terminator());
        assert!(stream.strip_terminator());
        assert_eq!(stream.to_string(), "01100001");
        assert!(!stream.strip_terminator());
    }

    #[test]
    fn should_refuse_non_binary_text() {
        assert!(matches!(
            "0120".parse::<BitStream>(),
            Err(SteganoError::InvalidFormat(_))
        ));
    }
}
