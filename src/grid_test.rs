#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{Geometry, ShapeKind};

fn split(lines: &[Shape]) -> (Vec<&Shape>, Vec<&Shape>) {
    lines.iter().partition(|s| match s.geometry {
        Geometry::Segment { a, b } => a.x == b.x,
        Geometry::Rect { .. } => false,
    })
}

#[test]
fn grid_300_by_180_has_10_vertical_and_6_horizontal() {
    let lines = grid_lines(300.0, 180.0, 30.0, "#ccc", 1.0);
    let (vertical, horizontal) = split(&lines);
    assert_eq!(vertical.len(), 10);
    assert_eq!(horizontal.len(), 6);
}

#[test]
fn vertical_lines_span_full_height_at_grid_offsets() {
    let lines = grid_lines(300.0, 180.0, 30.0, "#ccc", 1.0);
    let (vertical, _) = split(&lines);
    let mut x = 0.0;
    for line in vertical {
        assert_eq!(line.geometry, Geometry::Segment { a: Point::new(x, 0.0), b: Point::new(x, 180.0) });
        x += 30.0;
    }
}

#[test]
fn horizontal_lines_span_full_width_at_grid_offsets() {
    let lines = grid_lines(300.0, 180.0, 30.0, "#ccc", 1.0);
    let (_, horizontal) = split(&lines);
    let mut y = 0.0;
    for line in horizontal {
        assert_eq!(line.geometry, Geometry::Segment { a: Point::new(0.0, y), b: Point::new(300.0, y) });
        y += 30.0;
    }
}

#[test]
fn vertical_lines_come_first() {
    let lines = grid_lines(90.0, 60.0, 30.0, "#ccc", 1.0);
    assert_eq!(lines.len(), 5);
    let first_horizontal = lines.iter().position(|s| match s.geometry {
        Geometry::Segment { a, b } => a.y == b.y,
        Geometry::Rect { .. } => false,
    });
    assert_eq!(first_horizontal, Some(3));
}

#[test]
fn partial_cell_rounds_count_up() {
    let lines = grid_lines(310.0, 181.0, 30.0, "#ccc", 1.0);
    let (vertical, horizontal) = split(&lines);
    assert_eq!(vertical.len(), 11);
    assert_eq!(horizontal.len(), 7);
}

#[test]
fn grid_lines_are_inert_with_style() {
    for line in grid_lines(120.0, 90.0, 30.0, "#ccc", 1.0) {
        assert_eq!(line.kind, ShapeKind::GridLine);
        assert!(!line.flags.selectable);
        assert!(!line.flags.evented);
        assert_eq!(line.style.stroke, "#ccc");
        assert_eq!(line.style.stroke_width, 1.0);
    }
}

#[test]
fn empty_surface_has_no_lines() {
    assert!(grid_lines(0.0, 0.0, 30.0, "#ccc", 1.0).is_empty());
}

#[test]
fn zero_width_surface_has_only_horizontal_lines() {
    let lines = grid_lines(0.0, 60.0, 30.0, "#ccc", 1.0);
    assert_eq!(lines.len(), 2);
}

#[test]
fn non_positive_grid_size_produces_nothing() {
    assert!(grid_lines(300.0, 180.0, 0.0, "#ccc", 1.0).is_empty());
    assert!(grid_lines(300.0, 180.0, -30.0, "#ccc", 1.0).is_empty());
}
