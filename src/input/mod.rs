//! Pointer input handling and the drawing surface state machine.
//!
//! This module adapts platform mouse/touch input into normalized pointer events and
//! drives the [`DrawingSurface`] controller, which owns the raster, the pen settings
//! and the idle/drawing state machine.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerAdapter, PointerEvent, RawPointer, Viewport};
pub use state::{DrawingState, DrawingSurface, PenSettings};
pub use tool::Tool;
