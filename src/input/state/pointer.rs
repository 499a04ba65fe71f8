use crate::draw::{Shape, render};
use crate::input::{events::PointerEvent, tool::Tool};
use log::{debug, error, warn};

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Dispatches a normalized pointer event to the matching stroke operation.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.begin_stroke(x, y),
            PointerEvent::Move { x, y } => self.continue_stroke(x, y),
            PointerEvent::Up => self.end_stroke(),
            PointerEvent::Cancel => self.cancel_stroke(),
        }
    }

    /// Starts a stroke at `(x, y)` and snapshots the surface.
    ///
    /// Coordinates are not bounds-checked; painting outside the surface is clipped.
    /// A stroke that was never ended is terminated first so its snapshot is released.
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        if self.is_drawing() {
            warn!("Pointer down while a stroke is active; ending the previous stroke");
            self.end_stroke();
        }

        match self.surface.snapshot() {
            Ok(snapshot) => {
                self.state = DrawingState::Drawing {
                    anchor_x: x,
                    anchor_y: y,
                    path: vec![(x, y)],
                    snapshot,
                };
                debug!("Stroke started at ({:.1}, {:.1}) with {}", x, y, self.pen.tool);
            }
            Err(err) => error!("Failed to snapshot surface, ignoring stroke: {}", err),
        }
    }

    /// Redraws the stroke preview for a pointer at `(x, y)`.
    ///
    /// The surface is restored from the pointer-down snapshot first, so shape tools
    /// show a single rubber-band shape and the brush re-strokes its whole path.
    /// Does nothing when no stroke is active.
    pub fn continue_stroke(&mut self, x: f64, y: f64) {
        let DrawingState::Drawing {
            anchor_x,
            anchor_y,
            path,
            snapshot,
        } = &mut self.state
        else {
            return;
        };

        if let Err(err) = self.surface.restore(snapshot) {
            error!("Failed to restore stroke snapshot: {}", err);
            return;
        }

        let pen = self.pen;
        match pen.tool {
            Tool::Brush | Tool::Eraser => {
                path.push((x, y));
                let color = if pen.tool == Tool::Eraser {
                    self.surface.background()
                } else {
                    pen.color
                };
                self.surface
                    .paint(|ctx| render::render_pen_path(ctx, path.as_slice(), color, pen.width));
            }
            tool => {
                if let Some(shape) = Shape::from_drag(tool, *anchor_x, *anchor_y, x, y) {
                    self.surface.paint(|ctx| {
                        render::render_shape(ctx, &shape, pen.color, pen.width, pen.fill)
                    });
                }
            }
        }
    }

    /// Finishes the stroke, keeping what was painted. Idempotent.
    pub fn end_stroke(&mut self) {
        if let DrawingState::Drawing { path, .. } = &self.state {
            debug!("Stroke ended after {} pen positions", path.len());
        }
        self.state = DrawingState::Idle;
    }

    /// Aborts the stroke, reverting the surface to its pointer-down contents. Idempotent.
    pub fn cancel_stroke(&mut self) {
        let state = std::mem::replace(&mut self.state, DrawingState::Idle);
        if let DrawingState::Drawing { snapshot, .. } = state {
            if let Err(err) = self.surface.restore(&snapshot) {
                error!("Failed to restore snapshot on cancel: {}", err);
            }
            debug!("Stroke cancelled");
        }
    }
}
