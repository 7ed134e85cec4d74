//! qrmint runtime configuration handling

use crate::error::{Error, Result};
use crate::output::OutputConfig;
use crate::output::path::DEFAULT_STEM;
use crate::qr::{EcLevel, RenderConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrmintConfig {
    /// Symbol rendering overrides
    pub render: RenderOptions,
    /// Output naming and viewer behaviour
    pub output: OutputOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl Default for QrmintConfig {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            output: OutputOptions::default(),
            logging: LoggingOptions::default(),
        }
    }
}

impl QrmintConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No qrmint.toml / qrmint.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["qrmint.toml", "qrmint.yaml", "qrmint.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qrmint");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.render.apply_env_overrides();
        self.output.apply_env_overrides();
        self.logging.apply_env_overrides();
    }

    /// Produce fully resolved rendering parameters for the encoder.
    pub fn render_config(&self) -> Result<RenderConfig> {
        self.render.to_render_config()
    }

    /// Produce fully resolved output handling parameters for the session.
    pub fn output_config(&self) -> Result<OutputConfig> {
        self.output.to_output_config()
    }
}

/// User-friendly rendering overrides that are merged on top of `RenderConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Override for the error correction level (low/medium/quartile/high).
    pub ec_level: Option<String>,
    /// Override for the side length of one module in pixels.
    pub module_size: Option<u32>,
    /// Override for the standard 4-module quiet zone around the symbol.
    pub quiet_zone: Option<bool>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ec_level: None,
            module_size: None,
            quiet_zone: None,
        }
    }
}

impl RenderOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRMINT_EC_LEVEL") {
            self.ec_level = Some(level);
        }
        if let Ok(px) = env::var("QRMINT_MODULE_SIZE") {
            self.module_size = px.parse::<u32>().ok();
        }
        if let Ok(quiet) = env::var("QRMINT_QUIET_ZONE") {
            match quiet.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.quiet_zone = Some(false),
                "1" | "true" | "on" => self.quiet_zone = Some(true),
                _ => {}
            }
        }
    }

    /// Merge overrides onto the default rendering configuration.
    pub fn to_render_config(&self) -> Result<RenderConfig> {
        let mut config = RenderConfig::default();

        if let Some(level) = &self.ec_level {
            config.ec_level = EcLevel::parse(level).ok_or_else(|| {
                Error::Config(format!(
                    "Unknown error correction level '{}'. Use low, medium, quartile, or high",
                    level
                ))
            })?;
        }

        if let Some(px) = self.module_size {
            config.module_size = px.max(1);
        }

        if let Some(quiet_zone) = self.quiet_zone {
            config.quiet_zone = quiet_zone;
        }

        Ok(config)
    }
}

/// Output naming and viewer-launch overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Base filename used when the user provides none (extension excluded)
    pub default_stem: String,
    /// Directory joined onto relative output paths; cwd when unset
    pub directory: Option<PathBuf>,
    /// Launch the platform image viewer after saving
    pub open_viewer: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            default_stem: DEFAULT_STEM.to_string(),
            directory: None,
            open_viewer: true,
        }
    }
}

impl OutputOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(stem) = env::var("QRMINT_OUTPUT_STEM") {
            self.default_stem = stem;
        }
        if let Ok(dir) = env::var("QRMINT_OUTPUT_DIR") {
            if dir.trim().is_empty() {
                self.directory = None;
            } else {
                self.directory = Some(PathBuf::from(dir));
            }
        }
        if let Ok(open) = env::var("QRMINT_OPEN_VIEWER") {
            match open.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.open_viewer = false,
                "1" | "true" | "on" => self.open_viewer = true,
                _ => {}
            }
        }
    }

    /// Validate and freeze the output handling configuration.
    pub fn to_output_config(&self) -> Result<OutputConfig> {
        let default_stem = self.default_stem.trim();
        if default_stem.is_empty() {
            return Err(Error::Config(
                "output.default_stem must not be empty".to_string(),
            ));
        }

        Ok(OutputConfig {
            default_stem: default_stem.to_string(),
            directory: self.directory.clone(),
            open_viewer: self.open_viewer,
        })
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRMINT_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stderr logging
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: true,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRMINT_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRMINT_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRMINT_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults_resolve_unchanged() {
        let resolved = RenderOptions::default().to_render_config().unwrap();
        assert_eq!(resolved, RenderConfig::default());
        assert_eq!(resolved.module_size, 10);
        assert_eq!(resolved.ec_level, EcLevel::Low);
        assert!(resolved.quiet_zone);
    }

    #[test]
    fn render_overrides_merge_and_clamp() {
        let options = RenderOptions {
            ec_level: Some("H".to_string()),
            module_size: Some(0),
            quiet_zone: Some(false),
        };
        let resolved = options.to_render_config().unwrap();

        assert_eq!(resolved.ec_level, EcLevel::High);
        assert_eq!(resolved.module_size, 1);
        assert!(!resolved.quiet_zone);
    }

    #[test]
    fn unknown_ec_level_is_rejected() {
        let options = RenderOptions {
            ec_level: Some("ultra".to_string()),
            module_size: None,
            quiet_zone: None,
        };
        assert!(matches!(
            options.to_render_config(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn blank_default_stem_is_rejected() {
        let options = OutputOptions {
            default_stem: "   ".to_string(),
            directory: None,
            open_viewer: true,
        };
        assert!(matches!(options.to_output_config(), Err(Error::Config(_))));
    }

    #[test]
    fn toml_config_parses_and_resolves() {
        let parsed: QrmintConfig = toml::from_str(
            r#"
            [render]
            ec_level = "medium"
            module_size = 4

            [output]
            default_stem = "badge"
            open_viewer = false
            "#,
        )
        .unwrap();

        let render = parsed.render_config().unwrap();
        assert_eq!(render.ec_level, EcLevel::Medium);
        assert_eq!(render.module_size, 4);

        let output = parsed.output_config().unwrap();
        assert_eq!(output.default_stem, "badge");
        assert!(!output.open_viewer);
        assert!(output.directory.is_none());
    }
}
