//! Shape model: the things drawn on the surface and the store that owns them.
//!
//! This module defines what is on the surface (`Shape`, `ShapeKind`,
//! `Geometry`), its paint (`Style`) and interaction flags (`Flags`), and the
//! runtime store that owns every live shape (`DocStore`).
//!
//! Data flows into this layer from the input engine (creation, moves and
//! deletion). The renderer reads from `DocStore` via `sorted_shapes` to
//! determine draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::geom::Point;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// The fixed-size furniture rectangle.
    Desk,
    /// A user-drawn straight segment.
    Line,
    /// A background guide line; never selectable or hit-tested.
    GridLine,
}

/// Where a shape sits on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Axis-aligned rectangle anchored at its top-left corner.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Straight segment between two endpoints.
    Segment { a: Point, b: Point },
}

impl Geometry {
    /// Top-left corner of the bounding box.
    #[must_use]
    pub fn position(&self) -> Point {
        match *self {
            Self::Rect { x, y, .. } => Point::new(x, y),
            Self::Segment { a, b } => Point::new(a.x.min(b.x), a.y.min(b.y)),
        }
    }

    /// Move the bounding box so its top-left corner lands on `to`.
    ///
    /// Segments translate both endpoints by the same delta.
    pub fn set_position(&mut self, to: Point) {
        match self {
            Self::Rect { x, y, .. } => {
                *x = to.x;
                *y = to.y;
            }
            Self::Segment { a, b } => {
                let from = Point::new(a.x.min(b.x), a.y.min(b.y));
                let (dx, dy) = (to.x - from.x, to.y - from.y);
                *a = Point::new(a.x + dx, a.y + dy);
                *b = Point::new(b.x + dx, b.y + dy);
            }
        }
    }

    /// Bounding box as `(x, y, width, height)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match *self {
            Self::Rect { x, y, width, height } => (x, y, width, height),
            Self::Segment { a, b } => {
                let p = self.position();
                (p.x, p.y, (a.x - b.x).abs(), (a.y - b.y).abs())
            }
        }
    }
}

/// Paint properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Fill color as a CSS color string.
    pub fill: String,
    /// Stroke color as a CSS color string. Empty means no stroke.
    pub stroke: String,
    /// Stroke width in surface units.
    pub stroke_width: f64,
}

/// Interaction flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// Can become the active selection.
    pub selectable: bool,
    /// Participates in hit-testing.
    pub evented: bool,
    /// Horizontal scaling is disabled.
    pub lock_scaling_x: bool,
    /// Vertical scaling is disabled.
    pub lock_scaling_y: bool,
}

impl Flags {
    /// Selectable, hit-testable, freely scalable.
    #[must_use]
    pub fn interactive() -> Self {
        Self { selectable: true, evented: true, lock_scaling_x: false, lock_scaling_y: false }
    }

    /// Neither selectable nor hit-testable.
    #[must_use]
    pub fn inert() -> Self {
        Self { selectable: false, evented: false, lock_scaling_x: false, lock_scaling_y: false }
    }
}

/// A shape on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Desk, line or grid line.
    pub kind: ShapeKind,
    /// Position and extent.
    pub geometry: Geometry,
    /// Fill and stroke.
    pub style: Style,
    /// Selection and hit-testing behavior.
    pub flags: Flags,
    /// Stacking order; assigned by the store on insertion.
    pub z_index: i64,
}

impl Shape {
    /// A desk rectangle at `(x, y)`. Scaling is locked on both axes.
    #[must_use]
    pub fn desk(x: f64, y: f64, width: f64, height: f64, fill: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ShapeKind::Desk,
            geometry: Geometry::Rect { x, y, width, height },
            style: Style { fill: fill.to_owned(), stroke: String::new(), stroke_width: 0.0 },
            flags: Flags { lock_scaling_x: true, lock_scaling_y: true, ..Flags::interactive() },
            z_index: 0,
        }
    }

    /// A selectable user line from `a` to `b`.
    #[must_use]
    pub fn line(a: Point, b: Point, color: &str, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ShapeKind::Line,
            geometry: Geometry::Segment { a, b },
            style: Style { fill: color.to_owned(), stroke: color.to_owned(), stroke_width },
            flags: Flags::interactive(),
            z_index: 0,
        }
    }

    /// An inert background guide from `a` to `b`.
    #[must_use]
    pub fn grid_line(a: Point, b: Point, color: &str, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ShapeKind::GridLine,
            geometry: Geometry::Segment { a, b },
            style: Style { fill: String::new(), stroke: color.to_owned(), stroke_width },
            flags: Flags::inert(),
            z_index: 0,
        }
    }

    /// Top-left corner of the bounding box.
    #[must_use]
    pub fn position(&self) -> Point {
        self.geometry.position()
    }
}

/// In-memory store of shapes.
pub struct DocStore {
    shapes: HashMap<ShapeId, Shape>,
    next_z: i64,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: HashMap::new(), next_z: 0 }
    }

    /// Add a shape on top of everything else and return its id.
    pub fn add(&mut self, mut shape: Shape) -> ShapeId {
        shape.z_index = self.next_z;
        self.next_z += 1;
        let id = shape.id;
        self.shapes.insert(id, shape);
        id
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Return a mutable reference to a shape by id.
    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    /// Return all shapes sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        shapes
    }

    /// Number of shapes of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: ShapeKind) -> usize {
        self.shapes.values().filter(|s| s.kind == kind).count()
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
