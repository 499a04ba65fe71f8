//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color, hex or CSS functional notation
/// color = "red"
/// color = "#4a98f7"
/// color = "rgb(230, 126, 34)"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color name, `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Checks that the specification can be turned into a color.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => name.parse::<Color>().is_ok(),
            ColorSpec::Rgb(_) => true,
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color strings fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name.parse().unwrap_or_else(|_| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
