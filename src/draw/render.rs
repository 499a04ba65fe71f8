//! Cairo-based rendering functions for pen paths and shapes.

use super::color::Color;
use super::shape::{MITER_LIMIT, Shape};

/// Renders a free-hand pen path (polyline through points).
///
/// A path needs at least two points to paint anything; a single press without motion
/// leaves the surface untouched.
pub fn render_pen_path(ctx: &cairo::Context, points: &[(f64, f64)], color: Color, thick: f64) {
    if points.len() < 2 {
        return;
    }

    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.set_miter_limit(MITER_LIMIT);

    let (x0, y0) = points[0];
    ctx.move_to(x0, y0);
    for &(x, y) in &points[1..] {
        ctx.line_to(x, y);
    }

    let _ = ctx.stroke();
}

/// Renders a shape, filled or as an outline of width `thick`.
///
/// Degenerate shapes (no extent) paint nothing.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, color: Color, thick: f64, filled: bool) {
    if shape.is_degenerate() {
        return;
    }

    match *shape {
        Shape::Rect { x, y, w, h } => render_rect(ctx, x, y, w, h),
        Shape::Circle { cx, cy, radius } => render_circle(ctx, cx, cy, radius),
        Shape::Triangle {
            apex,
            base_a,
            base_b,
        } => render_triangle(ctx, apex, base_a, base_b),
    }

    color.apply(ctx);
    if filled {
        let _ = ctx.fill();
    } else {
        ctx.set_line_width(thick);
        ctx.set_line_join(cairo::LineJoin::Miter);
        ctx.set_miter_limit(MITER_LIMIT);
        let _ = ctx.stroke();
    }
}

/// Builds a rectangle path, normalizing negative extents
fn render_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64) {
    let (norm_x, norm_w) = if w >= 0.0 { (x, w) } else { (x + w, -w) };
    let (norm_y, norm_h) = if h >= 0.0 { (y, h) } else { (y + h, -h) };
    ctx.rectangle(norm_x, norm_y, norm_w, norm_h);
}

fn render_circle(ctx: &cairo::Context, cx: f64, cy: f64, radius: f64) {
    ctx.new_sub_path();
    ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
    ctx.close_path();
}

fn render_triangle(ctx: &cairo::Context, apex: (f64, f64), base_a: (f64, f64), base_b: (f64, f64)) {
    ctx.move_to(apex.0, apex.1);
    ctx.line_to(base_a.0, base_a.1);
    ctx.line_to(base_b.0, base_b.1);
    ctx.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RasterSurface;
    use crate::draw::color::{BLUE, WHITE};

    #[test]
    fn single_point_path_paints_nothing() {
        let mut surface = RasterSurface::new(20, 20, WHITE).unwrap();
        let before = surface.snapshot().unwrap();
        surface.paint(|ctx| render_pen_path(ctx, &[(10.0, 10.0)], BLUE, 6.0));
        assert_eq!(surface.snapshot().unwrap(), before);
    }

    #[test]
    fn pen_path_paints_along_segments() {
        let mut surface = RasterSurface::new(40, 40, WHITE).unwrap();
        surface.paint(|ctx| {
            render_pen_path(ctx, &[(5.0, 10.0), (35.0, 10.0), (35.0, 30.0)], BLUE, 4.0)
        });
        assert_eq!(surface.pixel(20, 10), Some(BLUE));
        assert_eq!(surface.pixel(35, 20), Some(BLUE));
        assert_eq!(surface.pixel(20, 25), Some(WHITE));
    }

    #[test]
    fn filled_and_outlined_circle_differ_at_center() {
        let circle = Shape::Circle {
            cx: 20.0,
            cy: 20.0,
            radius: 12.0,
        };

        let mut outlined = RasterSurface::new(40, 40, WHITE).unwrap();
        outlined.paint(|ctx| render_shape(ctx, &circle, BLUE, 4.0, false));
        assert_eq!(outlined.pixel(20, 20), Some(WHITE));
        assert_eq!(outlined.pixel(32, 20), Some(BLUE));

        let mut filled = RasterSurface::new(40, 40, WHITE).unwrap();
        filled.paint(|ctx| render_shape(ctx, &circle, BLUE, 4.0, true));
        assert_eq!(filled.pixel(20, 20), Some(BLUE));
    }
}
