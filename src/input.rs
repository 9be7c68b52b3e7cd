//! Input model: pointer and key events, and the gesture state machine.
//!
//! `PointerEvent` is the backend-neutral form of a mouse event: a position in
//! surface coordinates plus the button involved. Hit-testing happens in the
//! engine, so any canvas backend that can report positions can drive it.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ShapeId;
use crate::geom::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Any other code: back/forward buttons, or `-1` on a move with no button change.
    Other(i16),
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// A pointer event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the surface origin.
    pub position: Point,
    /// Button that changed state.
    pub button: Button,
    /// Bitmask of buttons held when the event fired (DOM `buttons`).
    pub buttons: u16,
}

impl PointerEvent {
    /// A primary-button event at `(x, y)` with the primary button held.
    #[must_use]
    pub fn primary(x: f64, y: f64) -> Self {
        Self { position: Point::new(x, y), button: Button::Primary, buttons: 1 }
    }

    /// A move at `(x, y)` with no button held.
    #[must_use]
    pub fn hover(x: f64, y: f64) -> Self {
        Self { position: Point::new(x, y), button: Button::Other(-1), buttons: 0 }
    }

    /// Whether any button is held.
    #[must_use]
    pub fn any_pressed(&self) -> bool {
        self.buttons != 0
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the Delete key.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete"
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected shape, if any.
    pub selected_id: Option<ShapeId>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is drawing a new line; its second endpoint follows the pointer.
    Drawing {
        /// Id of the in-progress line.
        line_id: ShapeId,
    },
    /// The user is dragging an existing shape; it snaps to the grid on every move.
    Dragging {
        /// Id of the shape being dragged.
        id: ShapeId,
    },
}

impl InputState {
    /// Whether a line is being drawn.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The in-progress line, if any.
    #[must_use]
    pub fn current_line(&self) -> Option<ShapeId> {
        match *self {
            Self::Drawing { line_id } => Some(line_id),
            _ => None,
        }
    }
}
