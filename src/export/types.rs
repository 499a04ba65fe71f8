//! Data types for image export.

use crate::draw::SurfaceError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Encoded image format of an export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossy JPEG without alpha (default)
    #[default]
    Jpeg,
    /// Lossless PNG written by Cairo
    Png,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Png => "png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Jpeg => f.write_str("jpeg"),
            ExportFormat::Png => f.write_str("png"),
        }
    }
}

/// An encoded snapshot of the drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// Suggested file name, `<unix-epoch-millis>.<ext>`
    pub filename: String,
    /// Encoding of `bytes`
    pub format: ExportFormat,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Encoded image data
    pub bytes: Vec<u8>,
}

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to read surface pixels: {0}")]
    Surface(#[from] SurfaceError),

    #[error("JPEG encoding failed: {0}")]
    Jpeg(#[from] image::ImageError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },

    #[error("Failed to save export: {0}")]
    Save(#[from] std::io::Error),
}
