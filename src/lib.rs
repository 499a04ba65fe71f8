//! Library exports for the paintboard drawing surface.
//!
//! Exposes the [`DrawingSurface`] controller together with the raster, input,
//! export and configuration modules it relies on, so hosts (a windowed front-end,
//! a web shell, the bundled script runner) can drive the same core.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::DrawingSurface;
