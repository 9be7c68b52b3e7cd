//! Background grid generation.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::doc::Shape;
use crate::geom::Point;

/// Build the guide lines for a `width` × `height` surface.
///
/// Produces one vertical line per multiple of `grid_size` strictly below
/// `width` (⌈width / grid_size⌉ lines), each spanning the full height, followed
/// by the horizontal lines built the same way against `height`.
#[must_use]
pub fn grid_lines(width: f64, height: f64, grid_size: f64, color: &str, stroke_width: f64) -> Vec<Shape> {
    let mut lines = Vec::new();
    if grid_size <= 0.0 {
        return lines;
    }

    for x in offsets(width, grid_size) {
        lines.push(Shape::grid_line(Point::new(x, 0.0), Point::new(x, height), color, stroke_width));
    }
    for y in offsets(height, grid_size) {
        lines.push(Shape::grid_line(Point::new(0.0, y), Point::new(width, y), color, stroke_width));
    }
    lines
}

fn offsets(extent: f64, grid_size: f64) -> impl Iterator<Item = f64> {
    let steps = extent / grid_size;
    (0u32..)
        .map(f64::from)
        .take_while(move |i| *i < steps)
        .map(move |i| i * grid_size)
}
