use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::{debug, error};

use super::{Persist, PixelLayout};
use crate::result::Result;
use crate::SteganoError;

/// An image held in memory as RGBA pixels, ready to carry hidden bits.
#[derive(Debug, Clone)]
pub struct Carrier {
    image: RgbaImage,
    layout: PixelLayout,
}

impl Carrier {
    /// decodes the image at `path` and converts it to RGBA
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|e| {
            debug!("Cannot decode image {path:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Self::from_image(image)
    }

    pub fn from_image(image: DynamicImage) -> Result<Self> {
        let color_type = image.color();
        let Some(layout) = PixelLayout::from_color_type(color_type) else {
            return Err(SteganoError::UnsupportedFormat(format!("{color_type:?}")));
        };
        if !layout.has_alpha() {
            debug!("Converting {layout} image to RGBA");
        }

        Ok(Self {
            image: image.into_rgba8(),
            layout,
        })
    }

    /// the layout the image had before it was converted to RGBA
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// writes all pixels as PNG, lossless so every hidden digit survives
    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            })
    }
}

impl From<RgbaImage> for Carrier {
    fn from(image: RgbaImage) -> Self {
        Self {
            image,
            layout: PixelLayout::Rgba8,
        }
    }
}

impl Persist for Carrier {
    /// encodes in memory first, so a failed encode leaves `file` as it was
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut buf = Cursor::new(Vec::new());
        self.save_to_writer(&mut buf)?;

        fs::write(file, buf.into_inner()).map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })
    }
}
