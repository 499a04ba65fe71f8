//! Drawing surface controller: pen settings, raster ownership and stroke state.

use crate::config::Config;
use crate::draw::{Color, RasterSnapshot, RasterSurface, SurfaceError};
use crate::export::{self, ExportError, ExportFormat, ExportedImage};
use crate::input::tool::Tool;
use crate::util;
use log::debug;

/// Pen configuration applied by the drawing operations.
///
/// Changed by toolbar collaborators through the [`DrawingSurface`] setters; every
/// stroke operation reads the current values, so a change never affects pixels that
/// were already painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenSettings {
    /// Active tool
    pub tool: Tool,
    /// Stroke/fill color
    pub color: Color,
    /// Stroke width in pixels; callers keep this positive
    pub width: f64,
    /// Fill shapes instead of outlining them
    pub fill: bool,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: crate::draw::BLACK,
            width: 5.0,
            fill: false,
        }
    }
}

/// Pointer interaction state machine.
#[derive(Debug)]
pub enum DrawingState {
    /// No stroke in progress
    Idle,
    /// Pointer is down and strokes are being previewed
    Drawing {
        /// Pointer-down X coordinate
        anchor_x: f64,
        /// Pointer-down Y coordinate
        anchor_y: f64,
        /// Free-hand pen positions, starting at the anchor
        path: Vec<(f64, f64)>,
        /// Surface contents at pointer-down, restored before every preview
        snapshot: RasterSnapshot,
    },
}

/// The drawing surface controller.
///
/// Owns the raster, the pen settings and the interaction state. All mutation goes
/// through `&mut self`, so the raster has a single writer.
#[derive(Debug)]
pub struct DrawingSurface {
    pub(super) surface: RasterSurface,
    pub(super) state: DrawingState,
    pub(super) pen: PenSettings,
    clear_ends_stroke: bool,
    export_quality: u8,
}

impl DrawingSurface {
    /// Allocates a `width` x `height` surface filled with `background`.
    pub fn new(
        width: i32,
        height: i32,
        pen: PenSettings,
        background: Color,
    ) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: RasterSurface::new(width, height, background)?,
            state: DrawingState::Idle,
            pen,
            clear_ends_stroke: true,
            export_quality: export::DEFAULT_JPEG_QUALITY,
        })
    }

    /// Builds a surface from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        let pen = PenSettings {
            tool: config.pen.tool,
            color: config.pen.color.to_color(),
            width: config.pen.width,
            fill: config.pen.fill,
        };
        let mut surface = Self::new(
            config.surface.width,
            config.surface.height,
            pen,
            config.surface.background.to_color(),
        )?;
        surface.clear_ends_stroke = config.surface.clear_ends_stroke;
        surface.export_quality = config.export.quality;
        Ok(surface)
    }

    /// Reallocates the raster at a new size, discarding all content and any stroke.
    pub fn init(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        self.surface = RasterSurface::new(width, height, self.surface.background())?;
        self.state = DrawingState::Idle;
        debug!("Surface reset to {}x{}", width, height);
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Read access to the raster, e.g. for pixel inspection or presentation.
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn pen(&self) -> PenSettings {
        self.pen
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool set to {}", tool);
        self.pen.tool = tool;
    }

    pub fn set_width(&mut self, width: f64) {
        self.pen.width = width;
    }

    pub fn set_color(&mut self, color: Color) {
        debug!("Color set to {}", util::color_to_name(&color));
        self.pen.color = color;
    }

    pub fn set_fill_enabled(&mut self, fill: bool) {
        self.pen.fill = fill;
    }

    /// Whether [`clear`](Self::clear) also terminates an in-progress stroke.
    ///
    /// When disabled, a stroke that survives a clear restores its pre-clear snapshot
    /// on the next move, bringing the cleared content back.
    pub fn set_clear_ends_stroke(&mut self, enabled: bool) {
        self.clear_ends_stroke = enabled;
    }

    /// JPEG quality used by [`export_image`](Self::export_image), 1 - 100.
    pub fn set_export_quality(&mut self, quality: u8) {
        self.export_quality = quality.clamp(1, 100);
    }

    /// Wipes the surface back to the background color.
    pub fn clear(&mut self) {
        if self.clear_ends_stroke && self.is_drawing() {
            debug!("Clear ended the stroke in progress");
            self.state = DrawingState::Idle;
        }
        self.surface.fill_background();
    }

    /// Encodes the current surface without modifying it.
    pub fn export_image(&self, format: ExportFormat) -> Result<ExportedImage, ExportError> {
        export::export_surface(&self.surface, format, self.export_quality)
    }
}
