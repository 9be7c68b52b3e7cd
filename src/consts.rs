//! Shared numeric and style constants for the layout surface.

// ── Grid ────────────────────────────────────────────────────────

/// Default spacing between grid lines, in surface units.
pub const GRID_SIZE: f64 = 30.0;

/// Smallest accepted grid spacing.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Stroke color of background grid lines.
pub const GRID_COLOR: &str = "#ccc";

/// Stroke width of background grid lines.
pub const GRID_STROKE_WIDTH: f64 = 1.0;

// ── Desk ────────────────────────────────────────────────────────

/// Default desk width.
pub const DESK_WIDTH: f64 = 120.0;

/// Default desk height.
pub const DESK_HEIGHT: f64 = 60.0;

/// Default desk fill color.
pub const DESK_FILL: &str = "brown";

// ── Drawn lines ─────────────────────────────────────────────────

/// Default stroke (and fill) color of drawn lines.
pub const LINE_COLOR: &str = "red";

/// Default stroke width of drawn lines.
pub const LINE_STROKE_WIDTH: f64 = 3.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Minimum distance in pixels within which a thin segment counts as hit.
pub const LINE_HIT_SLOP: f64 = 4.0;

// ── Selection UI ────────────────────────────────────────────────

/// Selection outline color.
pub const SELECTION_COLOR: &str = "#1E90FF";

/// Selection dash segment length in pixels.
pub const SELECTION_DASH_PX: f64 = 4.0;

/// Gap between a shape's bounds and its selection outline, in pixels.
pub const SELECTION_PADDING_PX: f64 = 3.0;
