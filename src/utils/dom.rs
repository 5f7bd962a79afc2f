//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use catalog_core::{CodecError, LocationReader, LocationWriter};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// =============================================================================
// Browser Location
// =============================================================================

/// The page's `location` and `history`.
///
/// Writes go through `history.replaceState`, so filter edits never add back
/// button entries or reload the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl LocationReader for BrowserLocation {
    fn query_string(&self) -> Result<String, CodecError> {
        let window = window().ok_or_else(|| {
            CodecError::LocationUnavailable("window not available".to_string())
        })?;
        window
            .location()
            .search()
            .map_err(|e| CodecError::LocationUnavailable(js_error(e)))
    }
}

impl LocationWriter for BrowserLocation {
    fn replace_location(&self, url: &str) -> Result<(), CodecError> {
        let window = window().ok_or_else(|| {
            CodecError::LocationUnavailable("window not available".to_string())
        })?;
        let history = window
            .history()
            .map_err(|e| CodecError::LocationUnavailable(js_error(e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|e| CodecError::LocationUnavailable(js_error(e)))
    }
}
