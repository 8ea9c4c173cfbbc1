//! Join Code Component
//!
//! Displays the club join code with copy, QR and regenerate actions.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::Modal;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::api;
use crate::context::use_app_context;
use crate::dom;
use crate::error::FormError;
use crate::store::{store_set_join_code, use_dashboard_store, DashboardStateStoreFields};
use crate::toast;

#[wasm_bindgen]
extern "C" {
    /// Host QR library
    #[wasm_bindgen(catch, js_namespace = QRCode, js_name = toCanvas)]
    fn qr_to_canvas(canvas: &HtmlCanvasElement, text: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Characters `encodeURIComponent` leaves alone
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Serialize)]
struct QrColors {
    dark: &'static str,
    light: &'static str,
}

#[derive(Serialize)]
struct QrOptions {
    width: u32,
    margin: u32,
    color: QrColors,
}

const QR_OPTIONS: QrOptions = QrOptions {
    width: 200,
    margin: 2,
    color: QrColors {
        dark: "#ec3750",
        light: "#ffffff",
    },
};

/// Page a new member opens to join with `code`
pub fn join_url(origin: &str, code: &str) -> String {
    format!(
        "{}/join-club?code={}",
        origin.trim_end_matches('/'),
        utf8_percent_encode(code, QUERY_VALUE)
    )
}

fn render_qr(canvas: &HtmlCanvasElement, url: &str) -> bool {
    let options = match serde_wasm_bindgen::to_value(&QR_OPTIONS) {
        Ok(options) => options,
        Err(e) => {
            log::error!("[QR] Could not encode options: {}", e);
            return false;
        }
    };
    match qr_to_canvas(canvas, url, &options) {
        Ok(_) => true,
        Err(e) => {
            log::error!("[QR] QR Code generation failed: {:?}", e);
            false
        }
    }
}

#[component]
pub fn JoinCodeCard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let qr_open = RwSignal::new(false);
    let qr_failed = RwSignal::new(false);
    let url = RwSignal::new(String::new());
    let canvas = NodeRef::<html::Canvas>::new();
    let code_input = NodeRef::<html::Input>::new();
    let url_input = NodeRef::<html::Input>::new();

    let code = move || store.join_code().get();

    let show_qr = move |_| {
        let Some(code) = store.join_code().get_untracked().filter(|c| !c.is_empty()) else {
            log::error!("[QR] Join code is undefined, cannot generate QR code");
            toast::error("Join code is not available to generate QR code.", "Error");
            return;
        };
        let link = join_url(&dom::location_origin(), &code);
        let rendered = canvas
            .get_untracked()
            .map(|canvas| render_qr(&canvas, &link))
            .unwrap_or(false);
        qr_failed.set(!rendered);
        url.set(link);
        qr_open.set(true);
    };

    let copy = move |input: NodeRef<html::Input>| {
        let copied = input.get_untracked().map(|el| dom::copy_input(&el)).unwrap_or(false);
        if copied {
            toast::success("Join code copied to clipboard!", "Copied");
        } else {
            toast::error("Could not copy to clipboard", "Error");
        }
    };

    let regenerate = move |_| {
        ctx.confirm("Generate a new join code?", Some("The old code will stop working.".to_string()), move || {
            let Some(club_id) = ctx.club_id() else {
                toast::form_error(&FormError::MissingClub);
                return;
            };
            spawn_local(async move {
                match api::regenerate_join_code(&club_id).await {
                    Ok(reply) => match reply.join_code.filter(|c| !c.is_empty()) {
                        Some(new_code) => {
                            log::info!("[JOIN] New join code generated");
                            store_set_join_code(&store, new_code);
                            toast::success("New join code generated!", "Generated");
                        }
                        None => toast::error(
                            &reply.error.unwrap_or_else(|| "Failed to generate new join code".to_string()),
                            "Error",
                        ),
                    },
                    Err(e) => {
                        log::error!("[JOIN] Regenerate failed: {}", e);
                        toast::error(&e.user_message("Error generating join code"), "Error");
                    }
                }
            });
        });
    };

    view! {
        <div class="card join-code-card">
            <div class="card-header">
                <h3><i class="fas fa-key"></i>" Join Code"</h3>
            </div>
            <div class="card-body">
                <input
                    class="form-control join-code-display"
                    readonly=true
                    node_ref=code_input
                    prop:value=move || code().unwrap_or_default()
                />
                <div class="join-code-actions">
                    <button class="btn btn-secondary" on:click=move |_| copy(code_input)>
                        <i class="fas fa-copy"></i>" Copy"
                    </button>
                    <button class="btn btn-secondary" on:click=show_qr>
                        <i class="fas fa-qrcode"></i>" QR Code"
                    </button>
                    <button class="btn btn-secondary" on:click=regenerate>
                        <i class="fas fa-sync"></i>" New Code"
                    </button>
                </div>
            </div>
            <Modal
                id="qrModal"
                title="Join QR Code".to_string()
                open=qr_open
                on_close=move |_| qr_open.set(false)
            >
                <div class="modal-body qr-body">
                    <canvas id="qrcode" node_ref=canvas style:display=move || if qr_failed.get() { "none" } else { "block" }></canvas>
                    <Show when=move || qr_failed.get()>
                        <p class="qr-error">"Failed to generate QR code"</p>
                    </Show>
                    <div class="form-group">
                        <input id="joinUrl" class="form-control" readonly=true node_ref=url_input prop:value=move || url.get() />
                    </div>
                    <button class="btn btn-primary" on:click=move |_| copy(url_input)>
                        <i class="fas fa-copy"></i>" Copy Link"
                    </button>
                </div>
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_plain_code() {
        assert_eq!(
            join_url("https://hackclub.example", "ABC123"),
            "https://hackclub.example/join-club?code=ABC123"
        );
    }

    #[test]
    fn test_join_url_encodes_reserved_characters() {
        assert_eq!(
            join_url("https://hackclub.example/", "a b&c=d"),
            "https://hackclub.example/join-club?code=a%20b%26c%3Dd"
        );
        assert_eq!(join_url("http://localhost:5000", "x-y_z.~"), "http://localhost:5000/join-club?code=x-y_z.~");
    }
}
