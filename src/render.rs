//! Rendering: draws the surface scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of document and selection state and produces
//! pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{SELECTION_COLOR, SELECTION_DASH_PX, SELECTION_PADDING_PX};
use crate::doc::{DocStore, Geometry, Shape};
use crate::input::UiState;

/// Draw the full scene: shapes in z-order, then the selection outline.
///
/// `viewport_w` and `viewport_h` are the canvas backing size in surface units.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    doc: &DocStore,
    ui: &UiState,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    // Bottom first.
    for shape in doc.sorted_shapes() {
        draw_shape(ctx, shape);
    }

    if let Some(shape) = ui.selected_id.and_then(|id| doc.get(&id)) {
        draw_selection(ctx, shape)?;
    }

    Ok(())
}

// =============================================================
// Shape renderers
// =============================================================

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) {
    match shape.geometry {
        Geometry::Rect { x, y, width, height } => {
            ctx.save();
            ctx.set_fill_style_str(&shape.style.fill);
            ctx.fill_rect(x, y, width, height);
            if !shape.style.stroke.is_empty() && shape.style.stroke_width > 0.0 {
                apply_stroke_style(ctx, shape);
                ctx.stroke_rect(x, y, width, height);
            }
            ctx.restore();
        }
        Geometry::Segment { a, b } => {
            ctx.save();
            apply_stroke_style(ctx, shape);
            ctx.set_line_cap("round");
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.stroke();
            ctx.restore();
        }
    }
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, shape: &Shape) {
    ctx.set_stroke_style_str(&shape.style.stroke);
    ctx.set_line_width(shape.style.stroke_width);
}

// =============================================================
// Selection UI
// =============================================================

/// Dashed outline around the selected shape's bounding box, padded by half
/// its stroke so thick lines stay inside the outline.
fn draw_selection(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    let (x, y, w, h) = shape.geometry.bounds();
    let pad = SELECTION_PADDING_PX + shape.style.stroke_width * 0.5;

    ctx.save();
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0);

    let dash_array = js_sys::Array::new();
    dash_array.push(&SELECTION_DASH_PX.into());
    dash_array.push(&SELECTION_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;

    ctx.stroke_rect(x - pad, y - pad, w + pad * 2.0, h + pad * 2.0);
    ctx.set_line_dash(&js_sys::Array::new())?;

    ctx.restore();
    Ok(())
}
