//! The interactive generate-save-open pipeline

use crate::error::{Error, Result};
use crate::output::{Launch, OutputConfig, Viewer};
use crate::prompt::Prompter;
use crate::qr::Payload;
use crate::{MintOutcome, QrMinter};
use tracing::warn;

/// Input values supplied ahead of time; prompts fill the gaps
#[derive(Debug, Clone, Default)]
pub struct SessionInputs {
    /// Payload text, prompted for when absent
    pub text: Option<String>,
    /// Output filename, prompted for when absent
    pub file_name: Option<String>,
}

/// What happened with the viewer at the end of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerStatus {
    /// A viewer process was spawned
    Spawned,
    /// The platform has no known open command
    Unsupported,
    /// Viewer launch disabled by configuration
    Skipped,
    /// Launch was attempted and failed; the saved file is unaffected
    Failed(String),
}

/// Record of one completed session
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Byte length of the encoded payload
    pub payload_bytes: usize,
    /// Details of the written image
    pub mint: MintOutcome,
    /// Result of the best-effort viewer launch
    pub viewer: ViewerStatus,
}

/// Drive one interactive session: collect input, encode, save, launch viewer.
///
/// Viewer failures are reported and logged but never fail the session; by
/// that point the image is already on disk.
pub fn run(
    minter: &QrMinter,
    output: &OutputConfig,
    inputs: SessionInputs,
    prompter: &mut dyn Prompter,
    viewer: &dyn Viewer,
) -> Result<SessionOutcome> {
    let raw_text = match inputs.text {
        Some(text) => text,
        None => prompter.prompt_line("Enter the text or URL: ")?,
    };
    let payload = Payload::parse(&raw_text)?;

    let raw_name = match inputs.file_name {
        Some(name) => name,
        None => prompter.prompt_line("Enter the filename (without extension): ")?,
    };
    let path = output.resolve_path(&raw_name);
    prompter.notify(&format!("Will save to: {}", path.display()))?;

    let minted = minter.mint(&payload, &path)?;
    prompter.notify(&format!("QR code saved as {}", minted.path.display()))?;

    let viewer_status = if output.open_viewer {
        match viewer.open(&minted.path) {
            Ok(Launch::Spawned) => ViewerStatus::Spawned,
            Ok(Launch::Unsupported) => ViewerStatus::Unsupported,
            Err(err) => {
                let message = match err {
                    Error::Viewer(message) => message,
                    other => other.to_string(),
                };
                warn!("Viewer launch failed: {message}");
                prompter.notify(&format!("Could not open image automatically: {message}"))?;
                ViewerStatus::Failed(message)
            }
        }
    } else {
        ViewerStatus::Skipped
    };

    Ok(SessionOutcome {
        payload_bytes: payload.as_bytes().len(),
        mint: minted,
        viewer: viewer_status,
    })
}
