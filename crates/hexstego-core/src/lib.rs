//! # Hexstego Core API
//!
//! Hides a text message in the low hex digit of the blue and green color
//! channels of a PNG image, alternating the channel from pixel to pixel.
//! Only digits `0` to `5` are touched, which keeps the change invisible.
//!
//! The entry points are the builders in [`api::hide`] and [`api::retrieve`],
//! the in-memory functions [`hide_message`] and [`retrieve_message`] work on
//! an [`image::RgbaImage`] directly.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbaImage::from_pixel(16, 16, image::Rgba([0x10, 0x20, 0x30, 0xff]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! hexstego_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Retrieve the message from an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let secret = temp_dir.path().join("secret.png");
//! image::RgbaImage::from_pixel(16, 16, image::Rgba([0x10, 0x20, 0x30, 0xff]))
//!     .save(&secret)
//!     .expect("Failed to write carrier image");
//! hexstego_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&secret)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = hexstego_core::api::retrieve::prepare()
//!     .from_secret_file(&secret)
//!     .execute()
//!     .expect("Failed to retrieve message from image");
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_codec;
pub mod channel;
pub mod codec_options;
pub mod color;
pub mod error;
pub mod media;
pub mod message;
pub mod result;
pub mod scanner;

pub use crate::bit_codec::{bits_to_text, text_to_bits, BitLayout, BitStream, TERMINATOR};
pub use crate::channel::{decode_channel, encode_channel, Channel};
pub use crate::codec_options::CodecOptions;
pub use crate::color::{hex_to_pixel, pixel_to_hex, ColorText};
pub use crate::error::SteganoError;
pub use crate::media::{Carrier, Persist, PixelLayout};
pub use crate::message::{hide_message, retrieve_message};
pub use crate::result::Result;
pub use crate::scanner::{Extraction, HideReport};

#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, Rgba, RgbaImage};

    /// One row of opaque pixels with the given colors, in that order.
    pub fn prepare_image_from_colors(colors: &[[u8; 3]]) -> RgbaImage {
        let mut img = ImageBuffer::new(colors.len() as u32, 1);
        for (pixel, [r, g, b]) in img.pixels_mut().zip(colors) {
            *pixel = Rgba([*r, *g, *b, 255]);
        }

        img
    }

    /// This image has some traits:
    /// - every color has a low hex digit of 2, 3 or 4, so each pixel can take a bit
    /// - no pixel holds a readable bit yet
    /// - the high hex digit grows with the pixel index
    pub fn prepare_8x8_low_nibble_image() -> RgbaImage {
        ImageBuffer::from_fn(8, 8, |x, y| {
            let high = (((x + 8 * y) % 16) as u8) << 4;
            Rgba([high | 0x2, high | 0x3, high | 0x4, 255])
        })
    }
}
