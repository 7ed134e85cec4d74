//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::{EncodedQr, Payload, RenderConfig};
use image::Luma;
use qrcode::types::QrError;
use qrcode::{QrCode, Version};

/// QR code encoder with fixed rendering parameters
pub struct QrEncoder {
    config: RenderConfig,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (low ECC, 10px modules)
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Create a new QR encoder with specific rendering parameters
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Encode a payload into a QR code raster
    ///
    /// The smallest symbol version that fits the payload at the configured
    /// error correction level is selected automatically.
    pub fn encode(&self, payload: &Payload) -> Result<EncodedQr> {
        let level = self.config.ec_level.to_qrcode();
        let code = QrCode::with_error_correction_level(payload.as_bytes(), level)
            .map_err(|e| self.encode_error(payload, e))?;

        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(self.config.module_size, self.config.module_size)
            .quiet_zone(self.config.quiet_zone)
            .build();

        // The auto builder never selects micro symbols
        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        };

        tracing::debug!(
            version,
            modules = code.width(),
            width_px = image.width(),
            "Encoded QR symbol"
        );

        Ok(EncodedQr {
            image,
            version,
            modules: code.width(),
            ec_level: self.config.ec_level,
        })
    }

    fn encode_error(&self, payload: &Payload, e: QrError) -> Error {
        match e {
            QrError::DataTooLong => Error::PayloadTooLarge {
                len: payload.as_bytes().len(),
                level: self.config.ec_level.as_str(),
            },
            other => Error::QrEncode(format!("Failed to create QR code: {}", other)),
        }
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::EcLevel;

    #[test]
    fn test_encode_dimensions() {
        let encoder = QrEncoder::new();
        let payload = Payload::parse("HELLO").unwrap();
        let encoded = encoder.encode(&payload).unwrap();

        // 21 modules for version 1, plus a 4-module quiet zone on each side
        assert_eq!(encoded.version, 1);
        assert_eq!(encoded.modules, 21);
        assert_eq!(encoded.width(), (21 + 8) * 10);
        assert_eq!(encoded.height(), encoded.width());
    }

    #[test]
    fn test_module_size_and_quiet_zone_apply() {
        let encoder = QrEncoder::with_config(RenderConfig {
            module_size: 3,
            quiet_zone: false,
            ec_level: EcLevel::Low,
        });
        let encoded = encoder.encode(&Payload::parse("HELLO").unwrap()).unwrap();
        assert_eq!(encoded.width(), 21 * 3);
    }

    #[test]
    fn test_oversized_payload_reported_distinctly() {
        let encoder = QrEncoder::new();
        // Version 40 at level L tops out at 2953 bytes
        let huge = "x".repeat(4000);
        let payload = Payload::parse(&huge).unwrap();

        match encoder.encode(&payload) {
            Err(Error::PayloadTooLarge { len, level }) => {
                assert_eq!(len, 4000);
                assert_eq!(level, "low");
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("encode unexpectedly succeeded"),
        }
    }

    #[test]
    fn test_round_trip() {
        let encoder = QrEncoder::new();
        let original = "Test payload for round trip";
        let encoded = encoder.encode(&Payload::parse(original).unwrap()).unwrap();

        let mut prepared = rqrr::PreparedImage::prepare(encoded.image.clone());
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);

        let (_meta, content) = grids[0].decode().unwrap();
        assert_eq!(content, original);
    }
}
