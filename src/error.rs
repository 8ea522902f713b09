//! Unified error type for logogen.

use thiserror::Error;

/// Errors that can occur while generating template images.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or saving an image failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
