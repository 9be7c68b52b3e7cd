//! Console logging for the browser build.
//!
//! Routes the `log` facade to the browser console through `console_log` and
//! installs the panic hook so Rust panics show up with a message instead of
//! `unreachable executed`.

use std::sync::Once;

use log::Level;

/// Logger configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig {
    /// Most verbose level that reaches the console.
    pub level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: Level::Info }
    }
}

static INIT: Once = Once::new();

/// Initializes the console logger and panic hook once per page.
///
/// Subsequent calls are ignored, so several surfaces on one page can each
/// call this during mount.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(config.level) {
            // Another logger was installed by the host bundle; keep it.
            web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
            return;
        }
        log::debug!("logging initialized at {}", config.level);
    });
}
