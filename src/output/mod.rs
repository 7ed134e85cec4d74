//! Helpers for naming, rendering and distributing generator output

pub mod path;
pub mod viewer;

pub use viewer::{Launch, SystemViewer, Viewer};

use crate::session::{SessionOutcome, ViewerStatus};
use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// Resolved output handling parameters
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Base filename used when the user provides none
    pub default_stem: String,
    /// Directory joined onto relative output paths
    pub directory: Option<PathBuf>,
    /// Launch the platform image viewer after saving
    pub open_viewer: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_stem: path::DEFAULT_STEM.to_string(),
            directory: None,
            open_viewer: true,
        }
    }
}

impl OutputConfig {
    /// Normalize a user-supplied name into the final output path.
    ///
    /// Absolute names ignore the configured directory.
    pub fn resolve_path(&self, raw_name: &str) -> PathBuf {
        let normalized = path::normalize(raw_name, &self.default_stem);
        match &self.directory {
            Some(dir) => dir.join(normalized),
            None => normalized,
        }
    }
}

/// Produce a structured JSON representation of a completed session.
pub fn outcome_value(outcome: &SessionOutcome) -> Value {
    let mut root = Map::new();
    root.insert(
        "path".to_string(),
        Value::String(outcome.mint.path.display().to_string()),
    );
    root.insert(
        "payload_bytes".to_string(),
        Value::from(outcome.payload_bytes),
    );
    root.insert(
        "symbol".to_string(),
        json!({
            "version": outcome.mint.version,
            "modules": outcome.mint.modules,
            "ec_level": outcome.mint.ec_level.as_str(),
            "width_px": outcome.mint.width,
            "height_px": outcome.mint.height,
        }),
    );
    root.insert("viewer".to_string(), viewer_value(&outcome.viewer));

    Value::Object(root)
}

fn viewer_value(status: &ViewerStatus) -> Value {
    match status {
        ViewerStatus::Failed(message) => json!({
            "status": viewer_status_label(status),
            "error": message,
        }),
        other => json!({ "status": viewer_status_label(other) }),
    }
}

fn viewer_status_label(status: &ViewerStatus) -> &'static str {
    match status {
        ViewerStatus::Spawned => "spawned",
        ViewerStatus::Unsupported => "unsupported",
        ViewerStatus::Skipped => "skipped",
        ViewerStatus::Failed(_) => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MintOutcome;
    use crate::qr::EcLevel;

    fn sample_outcome(viewer: ViewerStatus) -> SessionOutcome {
        SessionOutcome {
            payload_bytes: 5,
            mint: MintOutcome {
                path: PathBuf::from("qr_code.png"),
                version: 1,
                modules: 21,
                ec_level: EcLevel::Low,
                width: 290,
                height: 290,
            },
            viewer,
        }
    }

    #[test]
    fn renders_outcome_consistently() {
        let value = outcome_value(&sample_outcome(ViewerStatus::Spawned));

        assert_eq!(value["path"], "qr_code.png");
        assert_eq!(value["payload_bytes"], 5);
        assert_eq!(value["symbol"]["version"], 1);
        assert_eq!(value["symbol"]["modules"], 21);
        assert_eq!(value["symbol"]["ec_level"], "low");
        assert_eq!(value["symbol"]["width_px"], 290);
        assert_eq!(value["viewer"]["status"], "spawned");
        assert!(value["viewer"].get("error").is_none());
    }

    #[test]
    fn viewer_failure_carries_the_error() {
        let value = outcome_value(&sample_outcome(ViewerStatus::Failed(
            "xdg-open: not found".to_string(),
        )));

        assert_eq!(value["viewer"]["status"], "failed");
        assert_eq!(value["viewer"]["error"], "xdg-open: not found");
    }

    #[test]
    fn resolve_path_joins_configured_directory() {
        let config = OutputConfig {
            default_stem: "qr_code".to_string(),
            directory: Some(PathBuf::from("/tmp/out")),
            open_viewer: true,
        };

        assert_eq!(
            config.resolve_path("badge"),
            PathBuf::from("/tmp/out/badge.png")
        );
        assert_eq!(
            config.resolve_path(""),
            PathBuf::from("/tmp/out/qr_code.png")
        );
    }
}
