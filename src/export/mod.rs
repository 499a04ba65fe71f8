//! Image export of the drawing surface.
//!
//! Encodes the raster as JPEG (default, lossy, opaque) or PNG, names the result
//! after the current Unix time in milliseconds and optionally writes it to disk.

pub mod encode;
pub mod file;
pub mod types;

pub use encode::{DEFAULT_JPEG_QUALITY, encode, export_surface};
pub use file::{expand_tilde, generate_filename, save_export};
pub use types::{ExportError, ExportFormat, ExportedImage};
