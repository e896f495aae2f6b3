//! Error type shared by every operation.
//!
//! Operations return [`MarkError`]; the export layer in [`crate::bindings`] turns
//! it into a thrown JS `Error` through the `From<MarkError> for JsValue` impl.

use wasm_bindgen::{JsCast, JsValue};

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum MarkError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    /// A DOM call threw; carries the exception message.
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid {field}: {value} is not a finite number")]
    InvalidCoordinate { field: &'static str, value: f64 },
    #[error("expected {expected} coordinates, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("invalid direction `{0}`; expected top, bottom, left or right")]
    InvalidDirection(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("malformed config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<JsValue> for MarkError {
    fn from(value: JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return Self::Dom(String::from(err.message()));
        }
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<MarkError> for JsValue {
    fn from(err: MarkError) -> Self {
        log::warn!("pagemark: {err}");
        js_sys::Error::new(&err.to_string()).into()
    }
}
