//! Surface configuration parsed from host-provided JSON.
//!
//! Every field is optional; missing fields take the defaults in
//! [`crate::consts`]. An empty or whitespace-only string yields
//! `SurfaceConfig::default()`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;
use serde::Deserialize;

use crate::consts::{
    DESK_FILL, DESK_HEIGHT, DESK_WIDTH, GRID_COLOR, GRID_SIZE, LINE_COLOR, LINE_STROKE_WIDTH, MIN_GRID_SIZE,
};
use crate::doc::ShapeKind;
use crate::error::ConfigError;

/// Which dragged shapes snap to the grid while moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapScope {
    /// Every selectable shape, drawn lines included.
    #[default]
    All,
    /// Desks only; other shapes stay put when dragged.
    Desk,
}

impl SnapScope {
    /// Whether a shape of `kind` may be moved by dragging under this scope.
    #[must_use]
    pub fn allows(self, kind: ShapeKind) -> bool {
        match self {
            Self::All => kind != ShapeKind::GridLine,
            Self::Desk => kind == ShapeKind::Desk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    pub grid_size: f64,
    pub desk_width: f64,
    pub desk_height: f64,
    pub desk_fill: String,
    pub line_color: String,
    pub line_width: f64,
    pub grid_color: String,
    pub snap_scope: SnapScope,
    pub log_level: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            desk_width: DESK_WIDTH,
            desk_height: DESK_HEIGHT,
            desk_fill: DESK_FILL.to_owned(),
            line_color: LINE_COLOR.to_owned(),
            line_width: LINE_STROKE_WIDTH,
            grid_color: GRID_COLOR.to_owned(),
            snap_scope: SnapScope::All,
            log_level: "info".to_owned(),
        }
    }
}

impl SurfaceConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, unknown fields, a
    /// non-positive size, a grid finer than [`MIN_GRID_SIZE`], or an unknown
    /// log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric ranges and the log level.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("grid_size", self.grid_size),
            ("desk_width", self.desk_width),
            ("desk_height", self.desk_height),
            ("line_width", self.line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::BelowMinimum { field: "grid_size", value: self.grid_size, min: MIN_GRID_SIZE });
        }
        parse_level(&self.log_level)?;
        Ok(())
    }

    /// The configured log level, falling back to `Info` if unparseable.
    #[must_use]
    pub fn log_level(&self) -> Level {
        parse_level(&self.log_level).unwrap_or(Level::Info)
    }
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    raw.parse::<Level>().map_err(|_| ConfigError::LogLevel(raw.to_owned()))
}
