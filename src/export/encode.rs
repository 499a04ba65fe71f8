//! Surface encoding to JPEG and PNG.

use super::file::generate_filename;
use super::types::{ExportError, ExportFormat, ExportedImage};
use crate::draw::RasterSurface;
use image::codecs::jpeg::JpegEncoder;
use log::debug;

/// JPEG quality used when nothing else is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Encodes the surface pixels in `format`.
///
/// Encoding is deterministic: the same pixels always produce the same bytes.
pub fn encode(
    surface: &RasterSurface,
    format: ExportFormat,
    quality: u8,
) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => surface.write_png(&mut bytes)?,
        ExportFormat::Jpeg => {
            let width = surface.width() as u32;
            let height = surface.height() as u32;
            let rgb = image::RgbImage::from_raw(width, height, surface.to_rgb8()?)
                .ok_or(ExportError::BufferSize { width, height })?;
            let encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
            rgb.write_with_encoder(encoder)?;
        }
    }
    debug!("Encoded surface as {} ({} bytes)", format, bytes.len());
    Ok(bytes)
}

/// Encodes the surface and pairs it with a fresh timestamp file name.
pub fn export_surface(
    surface: &RasterSurface,
    format: ExportFormat,
    quality: u8,
) -> Result<ExportedImage, ExportError> {
    let bytes = encode(surface, format, quality)?;
    Ok(ExportedImage {
        filename: generate_filename(format),
        format,
        width: surface.width() as u32,
        height: surface.height() as u32,
        bytes,
    })
}
