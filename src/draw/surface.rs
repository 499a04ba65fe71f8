//! Owned Cairo raster surface with full-buffer snapshots.

use super::color::Color;
use log::{debug, warn};
use std::io::Write;
use thiserror::Error;

/// Errors raised while allocating or accessing the raster surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface pixels are not accessible: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("snapshot is {snapshot_width}x{snapshot_height}, surface is {width}x{height}")]
    SnapshotMismatch {
        snapshot_width: i32,
        snapshot_height: i32,
        width: i32,
        height: i32,
    },
}

/// A full copy of the surface pixels at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterSnapshot {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

/// Fixed-size opaque pixel buffer backed by a Cairo ARGB32 image surface.
///
/// Drawing goes through [`RasterSurface::paint`], which creates a short-lived Cairo
/// context so the pixel data stays exclusively owned between operations.
#[derive(Debug)]
pub struct RasterSurface {
    surface: cairo::ImageSurface,
    background: Color,
}

impl RasterSurface {
    /// Allocates a surface and fills it with `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let mut raster = Self {
            surface,
            background,
        };
        raster.fill_background();
        debug!("Allocated {}x{} raster surface", width, height);
        Ok(raster)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Runs `draw` against a fresh context for this surface.
    ///
    /// Cairo drawing errors are logged and otherwise ignored; a failed stroke simply
    /// leaves the pixels as they were.
    pub fn paint<F>(&mut self, draw: F)
    where
        F: FnOnce(&cairo::Context),
    {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => {
                draw(&ctx);
                if let Err(err) = ctx.status() {
                    warn!("Cairo reported an error while drawing: {}", err);
                }
            }
            Err(err) => warn!("Failed to create drawing context: {}", err),
        }
    }

    /// Replaces every pixel with the background color.
    pub fn fill_background(&mut self) {
        let background = self.background;
        self.paint(|ctx| {
            ctx.set_operator(cairo::Operator::Source);
            background.apply(ctx);
            let _ = ctx.paint();
        });
    }

    /// Copies the current pixels.
    pub fn snapshot(&self) -> Result<RasterSnapshot, SurfaceError> {
        let mut pixels = Vec::new();
        self.surface.flush();
        self.surface.with_data(|data| pixels.extend_from_slice(data))?;
        Ok(RasterSnapshot {
            width: self.width(),
            height: self.height(),
            pixels,
        })
    }

    /// Overwrites the pixels with a snapshot taken from this surface.
    pub fn restore(&mut self, snapshot: &RasterSnapshot) -> Result<(), SurfaceError> {
        let (width, height) = (self.width(), self.height());
        if snapshot.width != width || snapshot.height != height {
            return Err(SurfaceError::SnapshotMismatch {
                snapshot_width: snapshot.width,
                snapshot_height: snapshot.height,
                width,
                height,
            });
        }
        self.surface.flush();
        let mut data = self.surface.data()?;
        data.copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    /// Reads one pixel as straight (non-premultiplied) RGBA.
    ///
    /// Returns `None` when the coordinate lies outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = y as usize * self.surface.stride() as usize + x as usize * 4;
        let mut result = None;
        self.surface.flush();
        let read = self.surface.with_data(|data| {
            let [r, g, b, a] = unpack_argb32(&data[offset..offset + 4]);
            result = Some(Color {
                r: r as f64 / 255.0,
                g: g as f64 / 255.0,
                b: b as f64 / 255.0,
                a: a as f64 / 255.0,
            });
        });
        if let Err(err) = read {
            warn!("Failed to read pixel ({}, {}): {}", x, y, err);
        }
        result
    }

    /// Returns the pixels as tightly packed 8-bit RGB, dropping alpha.
    pub fn to_rgb8(&self) -> Result<Vec<u8>, SurfaceError> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let stride = self.surface.stride() as usize;
        let mut rgb = Vec::with_capacity(width * height * 3);
        self.surface.flush();
        self.surface.with_data(|data| {
            for row in data.chunks(stride).take(height) {
                for px in row[..width * 4].chunks_exact(4) {
                    let [r, g, b, _] = unpack_argb32(px);
                    rgb.extend_from_slice(&[r, g, b]);
                }
            }
        })?;
        Ok(rgb)
    }

    /// Encodes the surface as PNG using Cairo's writer.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), cairo::IoError> {
        self.surface.write_to_png(writer)
    }
}

/// Decodes one native-endian premultiplied ARGB32 pixel into straight RGBA bytes.
fn unpack_argb32(px: &[u8]) -> [u8; 4] {
    let value = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
    let a = (value >> 24) as u8;
    let unpremultiply = |c: u32| -> u8 {
        if a == 0 {
            0
        } else {
            ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
        }
    };
    [
        unpremultiply((value >> 16) & 0xff),
        unpremultiply((value >> 8) & 0xff),
        unpremultiply(value & 0xff),
        a,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    #[test]
    fn new_surface_is_filled_with_background() {
        let surface = RasterSurface::new(4, 3, WHITE).unwrap();
        assert_eq!(surface.pixel(0, 0), Some(WHITE));
        assert_eq!(surface.pixel(3, 2), Some(WHITE));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(-1, 0), None);
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(matches!(
            RasterSurface::new(0, 10, WHITE),
            Err(SurfaceError::InvalidSize { .. })
        ));
    }

    #[test]
    fn restore_reverts_painting() {
        let mut surface = RasterSurface::new(8, 8, WHITE).unwrap();
        let snapshot = surface.snapshot().unwrap();

        surface.paint(|ctx| {
            BLACK.apply(ctx);
            let _ = ctx.paint();
        });
        assert_eq!(surface.pixel(4, 4), Some(BLACK));

        surface.restore(&snapshot).unwrap();
        assert_eq!(surface.pixel(4, 4), Some(WHITE));
        assert_eq!(surface.snapshot().unwrap(), snapshot);
    }

    #[test]
    fn restore_rejects_foreign_snapshot() {
        let other = RasterSurface::new(2, 2, WHITE).unwrap();
        let mut surface = RasterSurface::new(4, 4, WHITE).unwrap();
        let snapshot = other.snapshot().unwrap();
        assert!(matches!(
            surface.restore(&snapshot),
            Err(SurfaceError::SnapshotMismatch { .. })
        ));
    }

    #[test]
    fn rgb_export_drops_alpha_and_padding() {
        let surface = RasterSurface::new(3, 2, BLACK).unwrap();
        let rgb = surface.to_rgb8().unwrap();
        assert_eq!(rgb.len(), 3 * 2 * 3);
        assert!(rgb.iter().all(|&c| c == 0));
    }
}
