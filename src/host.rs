//! DOM wiring exported to JavaScript.
//!
//! [`SurfaceController`] binds an [`Engine`] to a `<canvas>` element, owns the
//! DOM listeners that feed it, and removes them again on [`SurfaceController::destroy`]
//! or drop. Listener closures share the engine through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, PointerEvent};

use crate::config::SurfaceConfig;
use crate::engine::{Action, Engine};
use crate::error::SurfaceError;
use crate::input::Key;
use crate::logging::{LoggingConfig, init_logging};

/// A DOM listener registered by the controller.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn register(
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, SurfaceError> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target, event, callback })
    }

    fn unregister(&self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if let Err(err) = removed {
            log::warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

/// A mounted desk layout surface.
#[wasm_bindgen]
pub struct SurfaceController {
    engine: Rc<RefCell<Engine>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl SurfaceController {
    /// Bind to the canvas with id `canvas_id`, place the desk and grid, and
    /// start listening for input.
    ///
    /// `config_json` is an optional JSON object; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns a JS `Error` if the config is invalid, the element is missing
    /// or not a canvas, or the canvas has no 2D context.
    pub fn mount(canvas_id: &str, config_json: Option<String>) -> Result<SurfaceController, JsValue> {
        let config = match SurfaceConfig::from_json(config_json.as_deref().unwrap_or_default()) {
            Ok(config) => config,
            Err(err) => {
                init_logging(LoggingConfig::default());
                log::error!("surface config rejected: {err}");
                return Err(SurfaceError::from(err).into());
            }
        };
        init_logging(LoggingConfig { level: config.log_level() });

        let (document, canvas) = find_canvas(canvas_id)?;

        let mut engine = Engine::new(canvas.clone(), config)?;
        engine.core.add_desk();
        engine.core.add_grid();
        log::info!(
            "surface '{canvas_id}' mounted: {}x{}, grid {}",
            engine.core.viewport_width,
            engine.core.viewport_height,
            engine.core.config.grid_size
        );

        let mut controller = Self { engine: Rc::new(RefCell::new(engine)), listeners: Vec::new() };
        // Capture on down so the matching up reaches the canvas even when the
        // button is released outside it.
        controller.listen(canvas.clone().into(), "pointerdown", |engine, ev| {
            let ev = ev.dyn_ref::<PointerEvent>()?;
            engine.capture_pointer(ev.pointer_id());
            let pointer = engine.pointer_event(ev);
            Some(engine.on_pointer_down(pointer))
        })?;
        controller.listen(canvas.clone().into(), "pointermove", |engine, ev| {
            let ev = ev.dyn_ref::<PointerEvent>()?;
            let pointer = engine.pointer_event(ev);
            Some(engine.on_pointer_move(pointer))
        })?;
        for event in ["pointerup", "pointercancel"] {
            controller.listen(canvas.clone().into(), event, |engine, ev| {
                let ev = ev.dyn_ref::<PointerEvent>()?;
                engine.release_pointer(ev.pointer_id());
                let pointer = engine.pointer_event(ev);
                Some(engine.on_pointer_up(pointer))
            })?;
        }
        controller.listen(document.into(), "keydown", |engine, ev| {
            let ev = ev.dyn_ref::<KeyboardEvent>()?;
            Some(engine.on_key_down(&Key(ev.key())))
        })?;

        render(&controller.engine.borrow());
        Ok(controller)
    }

    /// Remove every listener this controller registered. Calling it again is a no-op.
    pub fn destroy(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for listener in self.listeners.drain(..) {
            listener.unregister();
        }
        log::info!("surface destroyed");
    }

    /// Number of shapes on the surface, grid lines included.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.engine.try_borrow().map_or(0, |engine| engine.core.doc.len())
    }

    /// Whether a line is currently being drawn.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.engine.try_borrow().is_ok_and(|engine| engine.core.is_drawing())
    }

    /// Whether a shape is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.engine.try_borrow().is_ok_and(|engine| engine.core.active_object().is_some())
    }
}

impl SurfaceController {
    /// Register `handler` for `event` on `target`.
    ///
    /// The handler returns `None` when the event is not of the expected type.
    fn listen<F>(&mut self, target: EventTarget, event: &'static str, mut handler: F) -> Result<(), SurfaceError>
    where
        F: FnMut(&mut Engine, &Event) -> Option<Vec<Action>> + 'static,
    {
        let engine = Rc::clone(&self.engine);
        let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            let Ok(mut engine) = engine.try_borrow_mut() else {
                log::warn!("{event} dropped: surface busy");
                return;
            };
            if let Some(actions) = handler(&mut engine, &ev) {
                apply_actions(&engine, &actions);
            }
        });
        self.listeners.push(Listener::register(target, event, callback)?);
        Ok(())
    }
}

impl Drop for SurfaceController {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn find_canvas(canvas_id: &str) -> Result<(Document, HtmlCanvasElement), SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let document = window.document().ok_or(SurfaceError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| SurfaceError::CanvasNotFound(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SurfaceError::NotACanvas(canvas_id.to_owned()))?;
    Ok((document, canvas))
}

fn apply_actions(engine: &Engine, actions: &[Action]) {
    if actions.contains(&Action::RenderNeeded) {
        render(engine);
    }
}

fn render(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::warn!("render failed: {err:?}");
    }
}
