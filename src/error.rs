//! Error types for qrmint operations

use thiserror::Error;

/// Result type alias using qrmint's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrmint operations
#[derive(Error, Debug)]
pub enum Error {
    /// Payload was empty after trimming surrounding whitespace
    #[error("No data entered")]
    EmptyPayload,

    /// Payload does not fit any symbol version at the configured error correction level
    #[error("Payload of {len} bytes exceeds QR capacity at error correction level {level}")]
    PayloadTooLarge {
        /// Byte length of the rejected payload
        len: usize,
        /// Error correction level in effect
        level: &'static str,
    },

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Viewer launch failed
    #[error("Failed to launch viewer: {0}")]
    Viewer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
