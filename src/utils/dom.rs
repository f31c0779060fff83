//! DOM and Web API utility functions.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Trigger a client-side save of raw bytes under the given file name.
///
/// Builds a Blob object URL, clicks a synthetic anchor, and revokes the
/// URL again. The error string is suitable for the error banner.
pub fn save_bytes(bytes: &[u8], file_name: &str) -> Result<(), String> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| "Document not available".to_string())?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let blob = Blob::new_with_u8_array_sequence(&parts)
        .map_err(|_| "Failed to build blob".to_string())?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create anchor".to_string())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

/// Log a warning to the browser console.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
