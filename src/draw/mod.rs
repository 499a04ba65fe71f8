//! Rendering primitives and the raster surface (Cairo-based).
//!
//! This module defines the core drawing types used by the drawing surface:
//! - [`Color`]: RGBA color representation with palette constants and parsing
//! - [`RasterSurface`]: the owned pixel buffer, with full-buffer snapshots
//! - [`Shape`]: rectangle/circle/triangle geometry derived from a drag
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use render::{render_pen_path, render_shape};
pub use shape::Shape;
pub use surface::{RasterSnapshot, RasterSurface, SurfaceError};

pub use color::{BLACK, BLUE, GREEN, ORANGE, RED, WHITE, YELLOW};
