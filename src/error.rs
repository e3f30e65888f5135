//! Error types for the browser bindings and configuration loading.
//!
//! User-input failures are modelled separately by
//! [`crate::state::forms::ValidationError`]; these variants cover faults the
//! user never sees.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A browser API call rejected or threw.
    #[error("dom call failed: {0}")]
    Dom(String),

    /// The inline configuration block could not be used.
    #[error("config rejected: {0}")]
    Config(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Log a failed DOM call at `warn` and carry on.
///
/// Handlers never propagate browser faults; the worst case is an inert widget.
pub fn report(context: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::warn!("fanzone: {context}: {err}");
    }
}
