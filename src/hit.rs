#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::LINE_HIT_SLOP;
use crate::doc::{DocStore, Geometry, Shape, ShapeId};
use crate::geom::{Point, distance_to_segment};

/// Return the topmost evented shape under `pt`, if any.
///
/// Shapes with `evented == false` (grid lines) are never targets.
#[must_use]
pub fn find_target(pt: Point, doc: &DocStore) -> Option<ShapeId> {
    doc.sorted_shapes()
        .into_iter()
        .rev()
        .find(|shape| shape.flags.evented && contains(shape, pt))
        .map(|shape| shape.id)
}

/// Whether `pt` lies on `shape`.
///
/// Rectangles test their bounds inclusively. Segments accept points within
/// half the stroke width, but never less than [`LINE_HIT_SLOP`].
#[must_use]
pub fn contains(shape: &Shape, pt: Point) -> bool {
    match shape.geometry {
        Geometry::Rect { x, y, width, height } => pt.x >= x && pt.x <= x + width && pt.y >= y && pt.y <= y + height,
        Geometry::Segment { a, b } => {
            let tolerance = (shape.style.stroke_width / 2.0).max(LINE_HIT_SLOP);
            distance_to_segment(pt, a, b) <= tolerance
        }
    }
}
