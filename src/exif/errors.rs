//! Custom error types for EXIF processing

use std::fmt;
use std::io;

/// EXIF-specific error types
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// Field type code outside the TIFF range, with the tag that carried it
    UnknownFieldType(u16, u16),
    /// A stored value could not be re-read as an integer
    MalformedInteger(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::UnknownFieldType(ft, tag) => {
                write!(f, "unknown type {} in tag 0x{:04X}", ft, tag)
            }
            ExifError::MalformedInteger(v) => write!(f, "malformed integer value: {}", v),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;
