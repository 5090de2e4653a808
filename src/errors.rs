//! Custom error types for label extraction and archiving

use std::fmt;
use std::io;

/// Error types raised by indexkit
///
/// Only `ValidationError` is raised by the number extractor itself; the
/// "nothing found" outcome is modelled as `Ok(None)`, never as an error.
#[derive(Debug)]
pub enum IndexError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding error
    ImageError(image::ImageError),
    /// Malformed or missing input, naming the offending argument
    ValidationError {
        argument: String,
        reason: String,
    },
    /// The text recognition engine is unavailable or failed
    RecognitionError(String),
    /// HTTP request failed
    HttpError(String),
    /// Spreadsheet generation failed
    SheetError(String),
    /// Invalid configuration file or value
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl IndexError {
    /// Shorthand for building a validation error
    pub fn validation(argument: &str, reason: impl Into<String>) -> Self {
        IndexError::ValidationError {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error is an argument validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, IndexError::ValidationError { .. })
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::IoError(e) => write!(f, "I/O error: {}", e),
            IndexError::ImageError(e) => write!(f, "Image error: {}", e),
            IndexError::ValidationError { argument, reason } => {
                write!(f, "Invalid argument '{}': {}", argument, reason)
            }
            IndexError::RecognitionError(msg) => write!(f, "Recognition error: {}", msg),
            IndexError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            IndexError::SheetError(msg) => write!(f, "Sheet error: {}", msg),
            IndexError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            IndexError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::IoError(e) => Some(e),
            IndexError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IndexError {
    fn from(error: io::Error) -> Self {
        IndexError::IoError(error)
    }
}

impl From<image::ImageError> for IndexError {
    fn from(error: image::ImageError) -> Self {
        IndexError::ImageError(error)
    }
}

impl From<reqwest::Error> for IndexError {
    fn from(error: reqwest::Error) -> Self {
        IndexError::HttpError(error.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for IndexError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        IndexError::SheetError(error.to_string())
    }
}

impl From<String> for IndexError {
    fn from(msg: String) -> Self {
        IndexError::GenericError(msg)
    }
}

/// Result type for indexkit operations
pub type IndexResult<T> = Result<T, IndexError>;
