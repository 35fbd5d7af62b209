//! Error taxonomy for page behaviors.
//!
//! Page behaviors degrade to a no-op when their trigger element is missing, so
//! absence is never an error here. These variants cover the cases where the
//! browser environment itself is unusable or a web API call throws.

use wasm_bindgen::{JsCast, JsValue};

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by page behaviors and payload parsing.
#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// The embedded page payload is not valid JSON for the payload schema.
    #[error("invalid page payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// A web API call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// `set_css_to_maximum` was asked for an axis other than width/height.
    #[error("unsupported property: {0} (expected width or height)")]
    UnsupportedProperty(String),
}

impl From<JsValue> for ChromeError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

impl From<ChromeError> for JsValue {
    fn from(err: ChromeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
