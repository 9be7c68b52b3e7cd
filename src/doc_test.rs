#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn rect_position_is_corner() {
    let g = Geometry::Rect { x: 10.0, y: 20.0, width: 5.0, height: 6.0 };
    assert_eq!(g.position(), pt(10.0, 20.0));
}

#[test]
fn segment_position_is_bounding_box_corner() {
    let g = Geometry::Segment { a: pt(90.0, 30.0), b: pt(30.0, 60.0) };
    assert_eq!(g.position(), pt(30.0, 30.0));
}

#[test]
fn rect_set_position_keeps_size() {
    let mut g = Geometry::Rect { x: 0.0, y: 0.0, width: 120.0, height: 60.0 };
    g.set_position(pt(30.0, 60.0));
    assert_eq!(g, Geometry::Rect { x: 30.0, y: 60.0, width: 120.0, height: 60.0 });
}

#[test]
fn segment_set_position_translates_both_endpoints() {
    let mut g = Geometry::Segment { a: pt(90.0, 30.0), b: pt(30.0, 60.0) };
    g.set_position(pt(60.0, 90.0));
    assert_eq!(g, Geometry::Segment { a: pt(120.0, 90.0), b: pt(60.0, 120.0) });
    assert_eq!(g.position(), pt(60.0, 90.0));
}

#[test]
fn segment_bounds_are_absolute_extent() {
    let g = Geometry::Segment { a: pt(90.0, 30.0), b: pt(30.0, 60.0) };
    assert_eq!(g.bounds(), (30.0, 30.0, 60.0, 30.0));
}

#[test]
fn zero_length_segment_has_empty_bounds() {
    let g = Geometry::Segment { a: pt(30.0, 30.0), b: pt(30.0, 30.0) };
    assert_eq!(g.bounds(), (30.0, 30.0, 0.0, 0.0));
}

// =============================================================
// Shape constructors
// =============================================================

#[test]
fn desk_is_selectable_and_scale_locked() {
    let desk = Shape::desk(0.0, 0.0, 120.0, 60.0, "brown");
    assert_eq!(desk.kind, ShapeKind::Desk);
    assert!(desk.flags.selectable);
    assert!(desk.flags.evented);
    assert!(desk.flags.lock_scaling_x);
    assert!(desk.flags.lock_scaling_y);
    assert_eq!(desk.style.fill, "brown");
    assert_eq!(desk.geometry.bounds(), (0.0, 0.0, 120.0, 60.0));
}

#[test]
fn line_uses_color_for_fill_and_stroke() {
    let line = Shape::line(pt(0.0, 0.0), pt(30.0, 0.0), "red", 3.0);
    assert_eq!(line.kind, ShapeKind::Line);
    assert_eq!(line.style.fill, "red");
    assert_eq!(line.style.stroke, "red");
    assert_eq!(line.style.stroke_width, 3.0);
    assert!(line.flags.selectable);
    assert!(line.flags.evented);
    assert!(!line.flags.lock_scaling_x);
}

#[test]
fn grid_line_is_inert() {
    let g = Shape::grid_line(pt(0.0, 0.0), pt(0.0, 180.0), "#ccc", 1.0);
    assert_eq!(g.kind, ShapeKind::GridLine);
    assert!(!g.flags.selectable);
    assert!(!g.flags.evented);
}

#[test]
fn constructors_assign_unique_ids() {
    let a = Shape::line(pt(0.0, 0.0), pt(0.0, 0.0), "red", 3.0);
    let b = Shape::line(pt(0.0, 0.0), pt(0.0, 0.0), "red", 3.0);
    assert_ne!(a.id, b.id);
}

// =============================================================
// DocStore
// =============================================================

#[test]
fn store_new_is_empty() {
    let store = DocStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn store_add_and_get() {
    let mut store = DocStore::new();
    let id = store.add(Shape::desk(0.0, 0.0, 120.0, 60.0, "brown"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id).map(|s| s.kind), Some(ShapeKind::Desk));
}

#[test]
fn store_add_assigns_increasing_z() {
    let mut store = DocStore::new();
    let a = store.add(Shape::desk(0.0, 0.0, 1.0, 1.0, "brown"));
    let b = store.add(Shape::line(pt(0.0, 0.0), pt(1.0, 1.0), "red", 3.0));
    let za = store.get(&a).map(|s| s.z_index);
    let zb = store.get(&b).map(|s| s.z_index);
    assert!(za < zb);
}

#[test]
fn store_sorted_shapes_follow_insertion_order() {
    let mut store = DocStore::new();
    let ids: Vec<ShapeId> = (0..5)
        .map(|i| {
            let x = f64::from(i) * 30.0;
            store.add(Shape::line(pt(x, 0.0), pt(x, 30.0), "red", 3.0))
        })
        .collect();
    let sorted: Vec<ShapeId> = store.sorted_shapes().iter().map(|s| s.id).collect();
    assert_eq!(sorted, ids);
}

#[test]
fn store_remove_returns_shape() {
    let mut store = DocStore::new();
    let id = store.add(Shape::desk(0.0, 0.0, 1.0, 1.0, "brown"));
    let removed = store.remove(&id);
    assert_eq!(removed.map(|s| s.id), Some(id));
    assert!(store.is_empty());
}

#[test]
fn store_remove_missing_is_none() {
    let mut store = DocStore::new();
    store.add(Shape::desk(0.0, 0.0, 1.0, 1.0, "brown"));
    assert!(store.remove(&Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn store_get_mut_allows_moves() {
    let mut store = DocStore::new();
    let id = store.add(Shape::desk(0.0, 0.0, 120.0, 60.0, "brown"));
    if let Some(shape) = store.get_mut(&id) {
        shape.geometry.set_position(pt(30.0, 60.0));
    }
    assert_eq!(store.get(&id).map(Shape::position), Some(pt(30.0, 60.0)));
}

#[test]
fn store_count_kind() {
    let mut store = DocStore::new();
    store.add(Shape::desk(0.0, 0.0, 1.0, 1.0, "brown"));
    store.add(Shape::grid_line(pt(0.0, 0.0), pt(0.0, 1.0), "#ccc", 1.0));
    store.add(Shape::grid_line(pt(30.0, 0.0), pt(30.0, 1.0), "#ccc", 1.0));
    assert_eq!(store.count_kind(ShapeKind::Desk), 1);
    assert_eq!(store.count_kind(ShapeKind::GridLine), 2);
    assert_eq!(store.count_kind(ShapeKind::Line), 0);
}
