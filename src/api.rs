//! List Endpoint
//!
//! Fetches the card list over HTTP and decodes the JSON payload.

use std::collections::HashSet;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{js_error_message, FetchError};
use crate::models::ListItem;

pub async fn fetch_list_items(url: &str) -> Result<Vec<ListItem>, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Network(js_error_message(&e)))?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().map_err(|e| FetchError::Body(js_error_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Body(js_error_message(&e)))?;
    let text = body
        .as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".to_string()))?;

    parse_list_payload(&text)
}

/// Decode a JSON array of items. Later duplicates of an id are dropped.
pub fn parse_list_payload(text: &str) -> Result<Vec<ListItem>, FetchError> {
    let items: Vec<ListItem> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.id.clone()) {
            unique.push(item);
        } else {
            log::warn!("[QUERY] Dropping duplicate card id {}", item.id);
        }
    }
    Ok(unique)
}
