use std::path::{Path, PathBuf};

use log::info;

use crate::media::{Carrier, Persist};
use crate::scanner::HideReport;
use crate::{hide_message, CodecOptions, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the image with the hidden message is written to, as PNG.
    /// Without an output the source image gets overwritten.
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<HideReport, SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let output = self.output.unwrap_or_else(|| image.clone());

        let mut carrier = Carrier::open(&image)?;
        let report = hide_message(carrier.pixels_mut(), &message, &self.options)?;
        carrier.save_as(&output)?;
        info!(
            "Hid {} bits in {} pixels of {output:?}",
            report.bits_embedded, report.pixels_written
        );

        Ok(report)
    }
}
