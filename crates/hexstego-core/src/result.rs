use crate::SteganoError;

pub type Result<T> = std::result::Result<T, SteganoError>;
