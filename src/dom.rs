//! DOM Helpers
//!
//! Thin wrappers over `web_sys` for the few places the app touches the page
//! outside its own view tree.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlDocument, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Attribute of the host `.club-dashboard` element
pub fn dashboard_attr(name: &str) -> Option<String> {
    document()?
        .query_selector(".club-dashboard")
        .ok()
        .flatten()?
        .get_attribute(name)
}

/// `window[name]`, unless undefined or null
pub fn global_value(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_location_hash(id: &str) {
    if let Some(window) = web_sys::window() {
        let target = format!("#{}", id);
        if window.location().hash().ok().as_deref() != Some(target.as_str()) {
            if let Err(e) = window.location().set_hash(id) {
                log::warn!("[DOM] Failed to set location hash: {:?}", e);
            }
        }
    }
}

pub fn location_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("[DOM] Redirect to {} failed: {:?}", path, e);
        }
    }
}

/// Select the input's text and copy it; false when the browser refused
pub fn copy_input(input: &HtmlInputElement) -> bool {
    input.select();
    document()
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false)
}
