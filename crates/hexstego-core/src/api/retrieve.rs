use std::path::{Path, PathBuf};

use crate::media::Carrier;
use crate::{retrieve_message, CodecOptions, SteganoError};

pub fn prepare() -> RetrieveApi {
    RetrieveApi::default()
}

#[derive(Default, Debug)]
pub struct RetrieveApi {
    secret_media: Option<PathBuf>,
    options: CodecOptions,
}

impl RetrieveApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be retrieved
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Execute the retrieval and return the hidden message
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let carrier = Carrier::open(&secret_media)?;
        retrieve_message(carrier.pixels(), &self.options)
    }
}
