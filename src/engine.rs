use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::config::SurfaceConfig;
use crate::doc::{DocStore, Geometry, Shape, ShapeId};
use crate::error::SurfaceError;
use crate::geom::{Point, snap_to_grid};
use crate::input::{Button, InputState, Key, PointerEvent, UiState};
use crate::{grid, hit, render};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShapeAdded(ShapeId),
    ShapeUpdated(ShapeId),
    ShapeRemoved(ShapeId),
    SelectionChanged(Option<ShapeId>),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: DocStore,
    pub ui: UiState,
    pub input: InputState,
    pub config: SurfaceConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(SurfaceConfig::default(), 0.0, 0.0)
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: SurfaceConfig, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            doc: DocStore::new(),
            ui: UiState::default(),
            input: InputState::default(),
            config,
            viewport_width,
            viewport_height,
        }
    }

    // --- Setup ---

    /// Add the background grid for the current viewport.
    pub fn add_grid(&mut self) {
        let lines = grid::grid_lines(
            self.viewport_width,
            self.viewport_height,
            self.config.grid_size,
            &self.config.grid_color,
            crate::consts::GRID_STROKE_WIDTH,
        );
        for line in lines {
            self.doc.add(line);
        }
    }

    /// Add the desk rectangle at the origin.
    pub fn add_desk(&mut self) -> ShapeId {
        let desk = Shape::desk(0.0, 0.0, self.config.desk_width, self.config.desk_height, &self.config.desk_fill);
        self.doc.add(desk)
    }

    /// Snap `pt` to the configured grid.
    #[must_use]
    pub fn snap(&self, pt: Point) -> Point {
        snap_to_grid(pt, self.config.grid_size)
    }

    // --- Selection ---

    /// The topmost hit-testable shape under `pt`.
    #[must_use]
    pub fn find_target(&self, pt: Point) -> Option<ShapeId> {
        hit::find_target(pt, &self.doc)
    }

    /// Make `id` the active selection. Returns false for unknown or
    /// non-selectable shapes, leaving the selection unchanged.
    pub fn set_active_object(&mut self, id: ShapeId) -> bool {
        match self.doc.get(&id) {
            Some(shape) if shape.flags.selectable => {
                self.ui.selected_id = Some(id);
                true
            }
            _ => false,
        }
    }

    /// The currently selected shape, if any.
    #[must_use]
    pub fn active_object(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    /// Remove the selected shape. Returns its id, or `None` if nothing was selected.
    pub fn delete_active(&mut self) -> Option<ShapeId> {
        let id = self.ui.selected_id.take()?;
        self.doc.remove(&id)?;
        let gesture_target = match self.input {
            InputState::Drawing { line_id } => Some(line_id),
            InputState::Dragging { id: dragged } => Some(dragged),
            InputState::Idle => None,
        };
        if gesture_target == Some(id) {
            self.input = InputState::Idle;
        }
        log::debug!("deleted shape {id}");
        Some(id)
    }

    /// Force a dragged shape onto the grid point nearest `pointer`.
    ///
    /// Returns false when the shape is unknown, not selectable, or excluded by
    /// the configured snap scope.
    pub fn object_moving(&mut self, id: ShapeId, pointer: Point) -> bool {
        let snapped = self.snap(pointer);
        let scope = self.config.snap_scope;
        let Some(shape) = self.doc.get_mut(&id) else {
            return false;
        };
        if !shape.flags.selectable || !scope.allows(shape.kind) {
            return false;
        }
        shape.geometry.set_position(snapped);
        true
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, ev: PointerEvent) -> Vec<Action> {
        if ev.button != Button::Primary || self.input.is_drawing() {
            return Vec::new();
        }

        if let Some(id) = self.find_target(ev.position) {
            if !self.set_active_object(id) {
                return Vec::new();
            }
            self.input = InputState::Dragging { id };
            log::debug!("selected shape {id}");
            return vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded];
        }

        let start = self.snap(ev.position);
        let line = Shape::line(start, start, &self.config.line_color, self.config.line_width);
        let line_id = self.doc.add(line);
        self.input = InputState::Drawing { line_id };
        self.ui.selected_id = Some(line_id);
        log::debug!("line {line_id} started at ({}, {})", start.x, start.y);
        vec![Action::ShapeAdded(line_id), Action::SelectionChanged(Some(line_id)), Action::RenderNeeded]
    }

    /// Extend the line or move the dragged shape.
    ///
    /// A move that reports no held buttons while a gesture is active means the
    /// release happened where no up event reached us; it ends the gesture.
    pub fn on_pointer_move(&mut self, ev: PointerEvent) -> Vec<Action> {
        if self.input != InputState::Idle && !ev.any_pressed() {
            return self.on_pointer_up(ev);
        }
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { line_id } => {
                let end = self.snap(ev.position);
                let Some(line) = self.doc.get_mut(&line_id) else {
                    return Vec::new();
                };
                let Geometry::Segment { b, .. } = &mut line.geometry else {
                    return Vec::new();
                };
                *b = end;
                vec![Action::ShapeUpdated(line_id), Action::RenderNeeded]
            }
            InputState::Dragging { id } => {
                if self.object_moving(id, ev.position) {
                    vec![Action::ShapeUpdated(id), Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn on_pointer_up(&mut self, _ev: PointerEvent) -> Vec<Action> {
        if let Some(line_id) = std::mem::take(&mut self.input).current_line() {
            log::debug!("line {line_id} finished");
        }
        Vec::new()
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_delete() {
            return Vec::new();
        }
        match self.delete_active() {
            Some(id) => vec![Action::ShapeRemoved(id), Action::SelectionChanged(None), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Queries ---

    /// Whether a line is currently being drawn.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    /// The in-progress line, if any.
    #[must_use]
    pub fn current_line(&self) -> Option<ShapeId> {
        self.input.current_line()
    }

    /// Look up a shape by ID.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.doc.get(id)
    }
}

/// The full surface engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to `canvas`, sized to its backing store.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NoContext`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: SurfaceConfig) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        Ok(Self { canvas, ctx, core: EngineCore::new(config, width, height) })
    }

    /// Translate a DOM mouse event into surface coordinates.
    ///
    /// `offsetX/offsetY` are in CSS pixels; they are scaled by the ratio of
    /// the canvas backing size to its displayed size.
    #[must_use]
    pub fn pointer_event(&self, ev: &MouseEvent) -> PointerEvent {
        let client_w = f64::from(self.canvas.client_width());
        let client_h = f64::from(self.canvas.client_height());
        let scale_x = if client_w > 0.0 { f64::from(self.canvas.width()) / client_w } else { 1.0 };
        let scale_y = if client_h > 0.0 { f64::from(self.canvas.height()) / client_h } else { 1.0 };
        PointerEvent {
            position: Point::new(f64::from(ev.offset_x()) * scale_x, f64::from(ev.offset_y()) * scale_y),
            button: Button::from_dom(ev.button()),
            buttons: ev.buttons(),
        }
    }

    /// Route all further events of pointer `pointer_id` to the canvas until released.
    pub fn capture_pointer(&self, pointer_id: i32) {
        if let Err(err) = self.canvas.set_pointer_capture(pointer_id) {
            log::warn!("pointer capture failed: {err:?}");
        }
    }

    pub fn release_pointer(&self, pointer_id: i32) {
        if self.canvas.has_pointer_capture(pointer_id) {
            if let Err(err) = self.canvas.release_pointer_capture(pointer_id) {
                log::warn!("pointer release failed: {err:?}");
            }
        }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, ev: PointerEvent) -> Vec<Action> {
        self.core.on_pointer_down(ev)
    }

    pub fn on_pointer_move(&mut self, ev: PointerEvent) -> Vec<Action> {
        self.core.on_pointer_move(ev)
    }

    pub fn on_pointer_up(&mut self, ev: PointerEvent) -> Vec<Action> {
        self.core.on_pointer_up(ev)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.doc, &self.core.ui, self.core.viewport_width, self.core.viewport_height)
    }
}
