//! Error types.
//!
//! Nothing here is fatal to the page. Entry points log these and fall back to
//! defaults or no-ops.

use std::fmt::Display;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    LogLevel(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("browser global '{0}' is unavailable")]
    Missing(&'static str),
    #[error("javascript error during {op}: {message}")]
    Js { op: &'static str, message: String },
}

impl BrowserError {
    /// Wrap a thrown JS value for the named DOM operation.
    #[cfg(feature = "browser")]
    pub fn js(op: &'static str, value: &wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { op, message }
    }
}

/// Log a failed optional step under `target` and carry on without its value.
pub fn warn_on_err<T, E: Display>(target: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{target}: {e}");
            None
        }
    }
}
