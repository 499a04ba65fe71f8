//! Shape geometry for the rubber-band shape tools.

use crate::input::Tool;
use crate::util;

/// Miter limit applied when stroking shape outlines (matches Cairo's default).
pub const MITER_LIMIT: f64 = 10.0;

/// Geometry of a shape preview derived from the anchor point and the current pointer.
///
/// Shapes are transient: they are rasterized immediately and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle.
    ///
    /// The origin is the current pointer position and the size is `anchor - current`,
    /// so the extent may be negative; the covered area always spans anchor to pointer.
    Rect {
        /// Origin X (current pointer)
        x: f64,
        /// Origin Y (current pointer)
        y: f64,
        /// Signed width (`anchor_x - x`)
        w: f64,
        /// Signed height (`anchor_y - y`)
        h: f64,
    },
    /// Circle centered on the anchor
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Distance from anchor to pointer
        radius: f64,
    },
    /// Isosceles triangle with its apex at the anchor
    Triangle {
        /// Apex (the anchor)
        apex: (f64, f64),
        /// Base endpoint under the pointer
        base_a: (f64, f64),
        /// Base endpoint mirrored across the apex's x coordinate
        base_b: (f64, f64),
    },
}

impl Shape {
    /// Builds the shape a drag from `(anchor_x, anchor_y)` to `(x, y)` describes.
    ///
    /// Returns `None` for the free-hand tools, which paint paths instead of shapes.
    pub fn from_drag(tool: Tool, anchor_x: f64, anchor_y: f64, x: f64, y: f64) -> Option<Self> {
        match tool {
            Tool::Brush | Tool::Eraser => None,
            Tool::Rectangle => Some(Shape::Rect {
                x,
                y,
                w: anchor_x - x,
                h: anchor_y - y,
            }),
            Tool::Circle => Some(Shape::Circle {
                cx: anchor_x,
                cy: anchor_y,
                radius: util::distance(anchor_x, anchor_y, x, y),
            }),
            Tool::Triangle => Some(Shape::Triangle {
                apex: (anchor_x, anchor_y),
                base_a: (x, y),
                base_b: (util::mirror_x(x, anchor_x), y),
            }),
        }
    }

    /// True when the shape has no extent at all and would paint nothing.
    pub fn is_degenerate(&self) -> bool {
        match *self {
            Shape::Rect { w, h, .. } => w == 0.0 && h == 0.0,
            Shape::Circle { radius, .. } => radius <= 0.0,
            Shape::Triangle { apex, base_a, .. } => apex == base_a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_extends_from_pointer_toward_anchor() {
        let shape = Shape::from_drag(Tool::Rectangle, 10.0, 10.0, 50.0, 80.0).unwrap();
        assert_eq!(
            shape,
            Shape::Rect {
                x: 50.0,
                y: 80.0,
                w: -40.0,
                h: -70.0
            }
        );

        let reversed = Shape::from_drag(Tool::Rectangle, 50.0, 80.0, 10.0, 10.0).unwrap();
        assert_eq!(
            reversed,
            Shape::Rect {
                x: 10.0,
                y: 10.0,
                w: 40.0,
                h: 70.0
            }
        );
    }

    #[test]
    fn circle_radius_is_distance_from_anchor() {
        let shape = Shape::from_drag(Tool::Circle, 0.0, 0.0, 3.0, 4.0).unwrap();
        assert_eq!(
            shape,
            Shape::Circle {
                cx: 0.0,
                cy: 0.0,
                radius: 5.0
            }
        );
    }

    #[test]
    fn triangle_base_mirrors_across_apex() {
        let shape = Shape::from_drag(Tool::Triangle, 50.0, 50.0, 70.0, 90.0).unwrap();
        assert_eq!(
            shape,
            Shape::Triangle {
                apex: (50.0, 50.0),
                base_a: (70.0, 90.0),
                base_b: (30.0, 90.0),
            }
        );
    }

    #[test]
    fn freehand_tools_have_no_shape() {
        assert!(Shape::from_drag(Tool::Brush, 0.0, 0.0, 5.0, 5.0).is_none());
        assert!(Shape::from_drag(Tool::Eraser, 0.0, 0.0, 5.0, 5.0).is_none());
    }

    #[test]
    fn zero_extent_shapes_are_degenerate() {
        for tool in [Tool::Rectangle, Tool::Circle, Tool::Triangle] {
            let shape = Shape::from_drag(tool, 20.0, 20.0, 20.0, 20.0).unwrap();
            assert!(shape.is_degenerate(), "{tool:?} should be degenerate");
        }
        let line = Shape::from_drag(Tool::Rectangle, 20.0, 20.0, 40.0, 20.0).unwrap();
        assert!(!line.is_degenerate());
    }
}
