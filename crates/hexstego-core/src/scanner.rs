//! Walks the pixels in row-major order and moves single bits in and out.
//!
//! Pixel `0` carries its bit in blue, pixel `1` in green, and so on
//! alternating. A pixel whose target digit is out of range is skipped, the
//! pending bit then goes to the next pixel no matter which channel that one
//! targets.

use image::{Rgba, RgbaImage};
use log::{debug, info, warn};

use crate::bit_codec::{BitLayout, BitStream};
use crate::channel::{decode_channel, encode_channel, is_eligible, Channel};
use crate::color::pixel_to_hex;
use crate::result::Result;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScanState {
    Scanning,
    Done,
}

/// Outcome of a hide pass
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct HideReport {
    /// bits that made it into the image
    pub bits_embedded: usize,
    /// bits that were asked to be hidden, terminator included
    pub bits_total: usize,
    /// pixels that got rewritten
    pub pixels_written: usize,
}

impl HideReport {
    pub fn is_complete(&self) -> bool {
        self.bits_embedded == self.bits_total
    }
}

/// Outcome of a retrieve pass
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Extraction {
    /// payload bits, without terminator
    pub bits: BitStream,
    /// whether the terminator was found before the pixels ran out
    pub terminated: bool,
    pub pixels_scanned: usize,
}

impl Extraction {
    pub fn into_text(self, layout: BitLayout) -> Result<String> {
        crate::bit_codec::bits_to_text(&self.bits, layout)
    }
}

/// Number of pixels that can take one bit each.
pub fn capacity(image: &RgbaImage) -> usize {
    image
        .pixels()
        .enumerate()
        .filter(|(index, pixel)| {
            let [r, g, b, _] = pixel.0;
            is_eligible(&pixel_to_hex(r, g, b), Channel::for_pixel(*index))
        })
        .count()
}

/// Hides `bits` in `image`, one bit per eligible pixel.
///
/// Rewritten pixels get a fully opaque alpha. If the image runs out of
/// eligible pixels the remaining bits are dropped, see [`HideReport`].
pub fn hide_bits(image: &mut RgbaImage, bits: &BitStream) -> HideReport {
    let mut report = HideReport {
        bits_total: bits.len(),
        ..HideReport::default()
    };
    let mut state = if bits.is_empty() {
        ScanState::Done
    } else {
        ScanState::Scanning
    };

    for (index, pixel) in image.pixels_mut().enumerate() {
        if state == ScanState::Done {
            break;
        }
        let Some(bit) = bits.get(report.bits_embedded) else {
            break;
        };

        let [r, g, b, _] = pixel.0;
        let color = pixel_to_hex(r, g, b);
        if let Some(encoded) = encode_channel(&color, Channel::for_pixel(index), bit) {
            let (r, g, b) = encoded.to_rgb();
            *pixel = Rgba([r, g, b, u8::MAX]);
            report.bits_embedded += 1;
            report.pixels_written += 1;
            if report.bits_embedded == bits.len() {
                debug!("All {} bits hidden at pixel {index}", bits.len());
                state = ScanState::Done;
            }
        }
    }

    if !report.is_complete() {
        warn!(
            "Image ran out of pixels, only {} of {} bits were hidden",
            report.bits_embedded, report.bits_total
        );
    }

    report
}

/// Collects bits until the terminator shows up or the pixels run out.
pub fn retrieve_bits(image: &RgbaImage) -> Extraction {
    let mut extraction = Extraction::default();

    for (index, pixel) in image.pixels().enumerate() {
        extraction.pixels_scanned = index + 1;
        let [r, g, b, _] = pixel.0;
        let Some(bit) = decode_channel(&pixel_to_hex(r, g, b), Channel::for_pixel(index)) else {
            continue;
        };

        extraction.bits.push(bit);
        if extraction.bits.strip_terminator() {
            info!(
                "Terminator found at pixel {index}, {} payload bits",
                extraction.bits.len()
            );
            extraction.terminated = true;
            return extraction;
        }
    }

    warn!(
        "No terminator found in {} pixels, decoding {} bits as they are",
        extraction.pixels_scanned,
        extraction.bits.len()
    );
    extraction
}
