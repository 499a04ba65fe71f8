//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::{DEFAULT_JPEG_QUALITY, ExportFormat};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen settings applied when the surface opens.
///
/// The toolbar changes these at runtime through the surface setters.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PenConfig {
    /// Initial tool (brush, eraser, rectangle, circle, triangle)
    #[serde(default)]
    pub tool: Tool,

    /// Initial pen color - a color string (name, `#rgb`, `#rrggbb`, `rgb(...)`)
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Initial stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub width: f64,

    /// Fill shapes instead of outlining them
    #[serde(default)]
    pub fill: bool,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: default_color(),
            width: default_width(),
            fill: false,
        }
    }
}

/// Raster surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_height")]
    pub height: i32,

    /// Background color, also painted by the eraser and by clear
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// End any stroke in progress when the surface is cleared.
    /// When false, the next pointer move restores the pre-clear contents.
    #[serde(default = "default_clear_ends_stroke")]
    pub clear_ends_stroke: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
            background: default_background(),
            clear_ends_stroke: default_clear_ends_stroke(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Encoded format (jpeg or png)
    #[serde(default)]
    pub format: ExportFormat,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Directory exports are saved to (supports `~/`)
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            quality: default_quality(),
            directory: default_directory(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000".to_string())
}

fn default_width() -> f64 {
    5.0
}

fn default_surface_width() -> i32 {
    800
}

fn default_surface_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_clear_ends_stroke() -> bool {
    true
}

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

fn default_directory() -> String {
    "~/Pictures/Paintboard".to_string()
}
