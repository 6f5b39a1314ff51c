use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an image whose pixel layout cannot provide four color channels,
    /// for example a grayscale or 16 bit PNG
    #[error("Incorrect image mode detected: {0} is not supported, only RGB and RGBA images are")]
    UnsupportedFormat(String),

    /// Represents malformed color or bit text handed to the conversion helpers
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Represents a bit stream that does not form valid UTF-8 text
    #[error("Cannot decode the hidden bits into text: {0}")]
    DecodeError(String),

    /// Represents a carrier with fewer eligible color channels than bits to hide
    #[error(
        "Capacity Error: {required} bits are needed to hide the message, the image only offers {available}"
    )]
    InsufficientCapacity { required: usize, available: usize },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

impl From<FromUtf8Error> for SteganoError {
    fn from(e: FromUtf8Error) -> Self {
        SteganoError::DecodeError(e.to_string())
    }
}
