use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the DOM and storage boundary. The editor state itself never fails.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no global window")]
    NoWindow,

    /// A JS call threw, e.g. attaching an event listener.
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("localStorage is unavailable")]
    StorageUnavailable,

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for EditorError {
    fn from(value: JsValue) -> Self {
        EditorError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
