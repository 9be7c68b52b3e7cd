#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Snap a point to the nearest grid intersection.
///
/// Each coordinate becomes `round(v / grid_size) * grid_size`, with ties
/// rounding half up (toward positive infinity), so `15 → 30` and `-15 → 0`
/// on a 30-unit grid.
#[must_use]
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point {
        x: snap_coord(point.x, grid_size),
        y: snap_coord(point.y, grid_size),
    }
}

fn snap_coord(v: f64, grid_size: f64) -> f64 {
    // -0.0 normalizes to 0.0 so snapped points compare cleanly.
    ((v / grid_size + 0.5).floor() * grid_size) + 0.0
}

/// Shortest distance from `p` to the segment `a`–`b`.
///
/// A degenerate segment (`a == b`) measures the distance to that point.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}
