//! qrmint - prompt-driven QR code generation
//!
//! This library turns a line of text into a black-on-white QR code PNG,
//! writes it to disk and optionally hands it to the platform image viewer.
//!
//! # Features
//!
//! - **Automatic sizing**: The smallest symbol version that fits the payload is chosen
//! - **PNG output**: Fixed 10px modules with the standard quiet zone, `.png` enforced
//! - **Viewer launch**: Best-effort open via `xdg-open`, `open` or `start`
//! - **Scriptable**: Prompting and viewer launch sit behind traits for testing
//!
//! # Example
//!
//! ```no_run
//! use qrmint::{MintConfig, Payload, QrMinter};
//! use std::path::Path;
//!
//! fn main() -> qrmint::Result<()> {
//!     let minter = QrMinter::new(MintConfig::default());
//!
//!     let payload = Payload::parse("https://example.com")?;
//!     let outcome = minter.mint(&payload, Path::new("qr_code.png"))?;
//!
//!     println!("Saved {} ({} modules)", outcome.path.display(), outcome.modules);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod qr;
pub mod session;

use std::path::{Path, PathBuf};

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LoggingOptions, OutputOptions, QrmintConfig, RenderOptions};
pub use output::{Launch, OutputConfig, SystemViewer, Viewer};
pub use prompt::{ConsolePrompter, Prompter};
pub use qr::{EcLevel, EncodedQr, Payload, QrEncoder, RenderConfig};
pub use session::{SessionInputs, SessionOutcome, ViewerStatus};

/// High-level generator combining encoding and persistence
pub struct QrMinter {
    encoder: QrEncoder,
}

impl QrMinter {
    /// Create a new generator with the given configuration
    pub fn new(config: MintConfig) -> Self {
        Self {
            encoder: QrEncoder::with_config(config.render),
        }
    }

    /// Encode `payload` and write the raster to `path`.
    ///
    /// Any file already at `path` is replaced without confirmation.
    pub fn mint(&self, payload: &Payload, path: &Path) -> Result<MintOutcome> {
        let encoded = self.encoder.encode(payload)?;
        encoded.save(path)?;

        tracing::info!(
            path = %path.display(),
            version = encoded.version,
            modules = encoded.modules,
            "QR code written"
        );

        Ok(MintOutcome {
            path: path.to_path_buf(),
            version: encoded.version,
            modules: encoded.modules,
            ec_level: encoded.ec_level,
            width: encoded.width(),
            height: encoded.height(),
        })
    }
}

/// Configuration for QR generation operations
#[derive(Debug, Clone)]
pub struct MintConfig {
    /// Symbol rendering configuration
    pub render: RenderConfig,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
        }
    }
}

/// Details of a written QR image
#[derive(Debug, Clone)]
pub struct MintOutcome {
    /// Where the image was written
    pub path: PathBuf,
    /// Auto-selected symbol version (1-40)
    pub version: i16,
    /// Symbol width in modules, excluding the quiet zone
    pub modules: usize,
    /// Error correction level baked into the symbol
    pub ec_level: EcLevel,
    /// Raster width in pixels
    pub width: u32,
    /// Raster height in pixels
    pub height: u32,
}
