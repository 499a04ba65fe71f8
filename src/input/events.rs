//! Pointer event types and the mouse/touch adaptation boundary.
//!
//! Hosts translate their native events into [`RawPointer`] values; the
//! [`PointerAdapter`] maps those into surface-local [`PointerEvent`]s, which are the
//! only input the drawing surface ever sees.

/// Normalized pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed or finger touched down
    Down { x: f64, y: f64 },
    /// Pointer moved (with or without a stroke in progress)
    Move { x: f64, y: f64 },
    /// Primary button released or finger lifted
    Up,
    /// Interaction aborted by the platform (e.g. touch cancel)
    Cancel,
}

/// Platform-shaped pointer input in client (viewport) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPointer {
    /// Mouse position
    Mouse { client_x: f64, client_y: f64 },
    /// Active touch points; only the first one is used
    Touch { touches: Vec<(f64, f64)> },
}

/// Position of the drawing surface inside the client area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Client X of the surface's left edge
    pub left: f64,
    /// Client Y of the surface's top edge
    pub top: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Maps raw client coordinates onto the surface.
    ///
    /// Returns `None` for a touch event without any active touch point.
    pub fn to_surface(&self, raw: &RawPointer) -> Option<(f64, f64)> {
        let (client_x, client_y) = match raw {
            RawPointer::Mouse { client_x, client_y } => (*client_x, *client_y),
            RawPointer::Touch { touches } => *touches.first()?,
        };
        Some((client_x - self.left, client_y - self.top))
    }
}

/// Turns raw mouse/touch callbacks into normalized pointer events.
#[derive(Debug, Default)]
pub struct PointerAdapter {
    viewport: Viewport,
    touch_active: bool,
}

impl PointerAdapter {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            touch_active: false,
        }
    }

    /// Updates the surface position, e.g. after a layout change.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Button press or touch start.
    pub fn press(&mut self, raw: &RawPointer) -> Option<PointerEvent> {
        let (x, y) = self.viewport.to_surface(raw)?;
        self.touch_active = matches!(raw, RawPointer::Touch { .. });
        Some(PointerEvent::Down { x, y })
    }

    /// Mouse motion or touch move.
    pub fn motion(&mut self, raw: &RawPointer) -> Option<PointerEvent> {
        let (x, y) = self.viewport.to_surface(raw)?;
        Some(PointerEvent::Move { x, y })
    }

    /// Button release or touch end.
    pub fn release(&mut self) -> PointerEvent {
        self.touch_active = false;
        PointerEvent::Up
    }

    /// Pointer left the tracking area; resolved into a synthetic release.
    pub fn leave(&mut self) -> PointerEvent {
        self.release()
    }

    /// Platform cancelled the interaction (touch cancel).
    pub fn cancel(&mut self) -> PointerEvent {
        self.touch_active = false;
        PointerEvent::Cancel
    }

    /// Whether the host must suppress default scroll/zoom gestures right now.
    pub fn suppress_default_gestures(&self) -> bool {
        self.touch_active
    }
}
