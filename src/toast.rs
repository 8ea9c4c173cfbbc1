//! Toast Notifications
//!
//! Bridge to the host page's `showToast(kind, message, title)`.

use wasm_bindgen::prelude::*;

use crate::error::FormError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = showToast)]
    fn show_toast(kind: &str, message: &str, title: &str) -> Result<(), JsValue>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

pub fn show(kind: ToastKind, message: &str, title: &str) {
    if show_toast(kind.as_str(), message, title).is_err() {
        // No host toast widget on this page
        match kind {
            ToastKind::Error => log::error!("[TOAST] {}: {}", title, message),
            _ => log::info!("[TOAST] {}: {}", title, message),
        }
    }
}

pub fn success(message: &str, title: &str) {
    show(ToastKind::Success, message, title);
}

pub fn error(message: &str, title: &str) {
    show(ToastKind::Error, message, title);
}

pub fn form_error(err: &FormError) {
    error(&err.to_string(), err.title());
}
