//! Configuration file support for paintboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintboard/config.toml`. Settings include the initial pen,
//! the surface size and background, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ExportConfig, PenConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest surface edge accepted from the config file.
const MAX_SURFACE_EDGE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [pen]
/// tool = "brush"
/// color = "#000"
/// width = 5.0
/// fill = false
///
/// [surface]
/// width = 800
/// height = 600
/// background = "white"
///
/// [export]
/// format = "jpeg"
/// quality = 92
/// directory = "~/Pictures/Paintboard"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial pen settings (tool, color, width, fill)
    #[serde(default)]
    pub pen: PenConfig,

    /// Raster surface settings
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced with the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `pen.width`: 1.0 - 100.0
    /// - `surface.width`, `surface.height`: 1 - 16384
    /// - `export.quality`: 1 - 100
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=100.0).contains(&self.pen.width) {
            warn!(
                "Invalid pen width {:.1}, clamping to 1.0-100.0 range",
                self.pen.width
            );
            self.pen.width = if self.pen.width.is_nan() {
                PenConfig::default().width
            } else {
                self.pen.width.clamp(1.0, 100.0)
            };
        }

        if !self.pen.color.is_valid() {
            warn!("Invalid pen color {:?}, falling back to black", self.pen.color);
            self.pen.color = PenConfig::default().color;
        }

        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.width) {
            warn!(
                "Invalid surface width {}, clamping to 1-{} range",
                self.surface.width, MAX_SURFACE_EDGE
            );
            self.surface.width = self.surface.width.clamp(1, MAX_SURFACE_EDGE);
        }

        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.height) {
            warn!(
                "Invalid surface height {}, clamping to 1-{} range",
                self.surface.height, MAX_SURFACE_EDGE
            );
            self.surface.height = self.surface.height.clamp(1, MAX_SURFACE_EDGE);
        }

        if !self.surface.background.is_valid() {
            warn!(
                "Invalid background {:?}, falling back to white",
                self.surface.background
            );
            self.surface.background = SurfaceConfig::default().background;
        }

        if !(1..=100).contains(&self.export.quality) {
            warn!(
                "Invalid export quality {}, clamping to 1-100 range",
                self.export.quality
            );
            self.export.quality = self.export.quality.clamp(1, 100);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration from a TOML string without validation.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Returns the directory exports are written to, with `~/` expanded.
    pub fn export_directory(&self) -> PathBuf {
        crate::export::expand_tilde(&self.export.directory)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};
    use crate::export::ExportFormat;
    use crate::input::Tool;

    #[test]
    fn defaults_match_initial_toolbar_state() {
        let config = Config::default();
        assert_eq!(config.pen.tool, Tool::Brush);
        assert_eq!(config.pen.color.to_color(), BLACK);
        assert_eq!(config.pen.width, 5.0);
        assert!(!config.pen.fill);
        assert_eq!(config.surface.background.to_color(), WHITE);
        assert!(config.surface.clear_ends_stroke);
        assert_eq!(config.export.format, ExportFormat::Jpeg);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [pen]
            tool = "triangle"
            color = [0, 128, 255]
            fill = true

            [export]
            format = "png"
            "#,
        )
        .unwrap();

        assert_eq!(config.pen.tool, Tool::Triangle);
        assert_eq!(config.pen.color.to_color().to_rgb8(), [0, 128, 255]);
        assert!(config.pen.fill);
        assert_eq!(config.pen.width, 5.0);
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.export.format, ExportFormat::Png);
        assert_eq!(config.export.quality, 92);
    }

    #[test]
    fn unknown_tool_is_a_parse_error() {
        assert!(Config::from_toml("[pen]\ntool = \"lasso\"").is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r##"
            [pen]
            width = 0.0
            color = "not-a-color"

            [surface]
            width = -5
            height = 100000
            background = "#zzz"

            [export]
            quality = 0
            "##,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.pen.width, 1.0);
        assert_eq!(config.pen.color.to_color(), BLACK);
        assert_eq!(config.surface.width, 1);
        assert_eq!(config.surface.height, MAX_SURFACE_EDGE);
        assert_eq!(config.surface.background.to_color(), WHITE);
        assert_eq!(config.export.quality, 1);
    }

    #[test]
    fn load_from_reads_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[surface]\nwidth = 320\nheight = 200\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!((config.surface.width, config.surface.height), (320, 200));

        assert!(Config::load_from(&temp.path().join("missing.toml")).is_err());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("pen"));
        assert!(schema.contains("surface"));
        assert!(schema.contains("export"));
    }
}
