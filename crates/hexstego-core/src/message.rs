use image::RgbaImage;
use log::{debug, warn};

use crate::bit_codec::text_to_bits;
use crate::result::Result;
use crate::scanner::{self, HideReport};
use crate::{CodecOptions, SteganoError};

/// Hides `message` plus terminator in the pixels of `image`.
///
/// Fails before touching any pixel if the image has not enough eligible
/// pixels, unless truncation is allowed by `opts`.
pub fn hide_message(
    image: &mut RgbaImage,
    message: &str,
    opts: &CodecOptions,
) -> Result<HideReport> {
    let bits = text_to_bits(message, opts.bit_layout).with_terminator();
    let available = scanner::capacity(image);
    debug!(
        "Hiding {} bytes as {} bits, {available} pixels are eligible",
        message.len(),
        bits.len()
    );

    if available < bits.len() {
        if !opts.allow_truncation {
            return Err(SteganoError::InsufficientCapacity {
                required: bits.len(),
                available,
            });
        }
        warn!(
            "Message is cut off after {available} of {} bits",
            bits.len()
        );
    }

    Ok(scanner::hide_bits(image, &bits))
}

/// Reads the hidden message back, best effort when no terminator is found.
pub fn retrieve_message(image: &RgbaImage, opts: &CodecOptions) -> Result<String> {
    scanner::retrieve_bits(image).into_text(opts.bit_layout)
}
