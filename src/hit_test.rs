use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn desk_at(x: f64, y: f64) -> Shape {
    Shape::desk(x, y, 120.0, 60.0, "brown")
}

// =============================================================
// contains
// =============================================================

#[test]
fn rect_contains_interior_and_edges() {
    let desk = desk_at(30.0, 60.0);
    assert!(contains(&desk, pt(90.0, 90.0)));
    assert!(contains(&desk, pt(30.0, 60.0)));
    assert!(contains(&desk, pt(150.0, 120.0)));
}

#[test]
fn rect_excludes_outside_points() {
    let desk = desk_at(30.0, 60.0);
    assert!(!contains(&desk, pt(29.0, 90.0)));
    assert!(!contains(&desk, pt(90.0, 121.0)));
}

#[test]
fn segment_contains_points_within_slop() {
    let line = Shape::line(pt(0.0, 0.0), pt(90.0, 0.0), "red", 3.0);
    assert!(contains(&line, pt(45.0, 0.0)));
    assert!(contains(&line, pt(45.0, LINE_HIT_SLOP)));
    assert!(!contains(&line, pt(45.0, LINE_HIT_SLOP + 1.0)));
}

#[test]
fn thick_segment_uses_half_stroke_width() {
    let line = Shape::line(pt(0.0, 0.0), pt(90.0, 0.0), "red", 20.0);
    assert!(contains(&line, pt(45.0, 9.5)));
    assert!(!contains(&line, pt(45.0, 10.5)));
}

#[test]
fn zero_length_segment_is_hit_near_its_point() {
    let line = Shape::line(pt(30.0, 30.0), pt(30.0, 30.0), "red", 3.0);
    assert!(contains(&line, pt(31.0, 31.0)));
    assert!(!contains(&line, pt(40.0, 40.0)));
}

// =============================================================
// find_target
// =============================================================

#[test]
fn find_target_empty_doc_is_none() {
    let doc = DocStore::new();
    assert!(find_target(pt(10.0, 10.0), &doc).is_none());
}

#[test]
fn find_target_hits_desk() {
    let mut doc = DocStore::new();
    let id = doc.add(desk_at(0.0, 0.0));
    assert_eq!(find_target(pt(60.0, 30.0), &doc), Some(id));
}

#[test]
fn find_target_misses_empty_space() {
    let mut doc = DocStore::new();
    doc.add(desk_at(0.0, 0.0));
    assert!(find_target(pt(200.0, 200.0), &doc).is_none());
}

#[test]
fn find_target_ignores_grid_lines() {
    let mut doc = DocStore::new();
    doc.add(Shape::grid_line(pt(30.0, 0.0), pt(30.0, 180.0), "#ccc", 1.0));
    assert!(find_target(pt(30.0, 90.0), &doc).is_none());
}

#[test]
fn find_target_prefers_topmost() {
    let mut doc = DocStore::new();
    doc.add(desk_at(0.0, 0.0));
    let line = doc.add(Shape::line(pt(0.0, 30.0), pt(120.0, 30.0), "red", 3.0));
    assert_eq!(find_target(pt(60.0, 30.0), &doc), Some(line));
}

#[test]
fn find_target_falls_through_to_lower_shape() {
    let mut doc = DocStore::new();
    let desk = doc.add(desk_at(0.0, 0.0));
    doc.add(Shape::line(pt(0.0, 30.0), pt(120.0, 30.0), "red", 3.0));
    assert_eq!(find_target(pt(60.0, 50.0), &doc), Some(desk));
}
