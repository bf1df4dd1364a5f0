//! Error Types
//!
//! Errors raised by the browser adapters (storage and fetch).

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },

    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no window object")]
    NoWindow,

    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("invalid list payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Best-effort text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
