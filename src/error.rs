//! Error types for configuration and surface binding.

use wasm_bindgen::JsValue;

/// Errors from parsing or validating a [`crate::config::SurfaceConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config string is not valid JSON for the expected shape.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field is zero, negative or not finite.
    #[error("invalid {field}: {value} (must be a positive finite number)")]
    NonPositive { field: &'static str, value: f64 },

    /// A numeric field is positive but below its floor.
    #[error("invalid {field}: {value} (must be at least {min})")]
    BelowMinimum { field: &'static str, value: f64, min: f64 },

    /// The log level is not one of `error`, `warn`, `info`, `debug`, `trace`.
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Errors from binding the engine to a page.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,

    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,

    /// No element with the given id exists.
    #[error("canvas element '{0}' not found")]
    CanvasNotFound(String),

    /// The element with the given id is not a `<canvas>`.
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    /// The canvas refused to provide a 2D context.
    #[error("2d context unavailable")]
    NoContext,

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
