mod core;
mod pointer;

pub use core::{DrawingState, DrawingSurface, PenSettings};
