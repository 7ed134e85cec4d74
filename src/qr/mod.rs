//! QR code encoding
//!
//! This module provides the payload type accepted by the generator and the
//! encoder that turns it into a black-on-white raster ready for disk.

mod encoder;

pub use encoder::QrEncoder;

use crate::error::{Error, Result};
use image::GrayImage;
use std::path::Path;

/// Text accepted for encoding into a QR symbol
///
/// Built through [`Payload::parse`], which applies the only validation the
/// generator performs: surrounding whitespace is trimmed and the remainder
/// must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    text: String,
}

impl Payload {
    /// Parse raw user input into a payload
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyPayload);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Get the payload text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the raw bytes handed to the encoder
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// QR error correction level
///
/// The four standard recovery tiers. The generator defaults to the lowest,
/// which maximises payload capacity per symbol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    /// Recovers from ~7% symbol damage (default)
    Low,
    /// Recovers from ~15% symbol damage
    Medium,
    /// Recovers from ~25% symbol damage
    Quartile,
    /// Recovers from ~30% symbol damage
    High,
}

impl EcLevel {
    /// Convert to the encoder crate's level
    pub fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            EcLevel::Low => qrcode::EcLevel::L,
            EcLevel::Medium => qrcode::EcLevel::M,
            EcLevel::Quartile => qrcode::EcLevel::Q,
            EcLevel::High => qrcode::EcLevel::H,
        }
    }

    /// Canonical label used in configuration and output
    pub fn as_str(self) -> &'static str {
        match self {
            EcLevel::Low => "low",
            EcLevel::Medium => "medium",
            EcLevel::Quartile => "quartile",
            EcLevel::High => "high",
        }
    }

    /// Parse a level from user input, accepting the single-letter QR aliases
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Some(EcLevel::Low),
            "m" | "medium" => Some(EcLevel::Medium),
            "q" | "quartile" => Some(EcLevel::Quartile),
            "h" | "high" => Some(EcLevel::High),
            _ => None,
        }
    }
}

/// Rendering parameters for generated symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Side length of one module in pixels
    pub module_size: u32,
    /// Surround the symbol with the standard 4-module quiet zone
    pub quiet_zone: bool,
    /// Error correction level
    pub ec_level: EcLevel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_size: 10,
            quiet_zone: true,
            ec_level: EcLevel::Low,
        }
    }
}

/// A rendered QR symbol ready to be written to disk
#[derive(Debug, Clone)]
pub struct EncodedQr {
    /// Black-on-white raster of the symbol
    pub image: GrayImage,
    /// Auto-selected symbol version (1-40)
    pub version: i16,
    /// Symbol width in modules, excluding the quiet zone
    pub modules: usize,
    /// Error correction level baked into the symbol
    pub ec_level: EcLevel,
}

impl EncodedQr {
    /// Raster width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Raster height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Write the raster to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_trims_whitespace() {
        let payload = Payload::parse("  https://example.com  ").unwrap();
        assert_eq!(payload.as_str(), "https://example.com");
        assert_eq!(payload.as_bytes(), b"https://example.com");
    }

    #[test]
    fn test_payload_rejects_empty_input() {
        assert!(matches!(Payload::parse(""), Err(Error::EmptyPayload)));
        assert!(matches!(Payload::parse("   \t\n"), Err(Error::EmptyPayload)));
    }

    #[test]
    fn test_ec_level_parse() {
        assert_eq!(EcLevel::parse("LOW"), Some(EcLevel::Low));
        assert_eq!(EcLevel::parse("m"), Some(EcLevel::Medium));
        assert_eq!(EcLevel::parse(" quartile "), Some(EcLevel::Quartile));
        assert_eq!(EcLevel::parse("H"), Some(EcLevel::High));
        assert!(EcLevel::parse("ultra").is_none());
    }

    #[test]
    fn test_ec_level_labels_round_trip() {
        for level in [
            EcLevel::Low,
            EcLevel::Medium,
            EcLevel::Quartile,
            EcLevel::High,
        ] {
            assert_eq!(EcLevel::parse(level.as_str()), Some(level));
        }
    }
}
