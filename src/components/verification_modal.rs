//! Verification Modal Component
//!
//! Emailed-code prompt for step-up protected actions.

use leptos::prelude::*;
use leptos_modal::Modal;

use crate::actions::{cancel_verification, resend_code, verify_code};
use crate::context::use_app_context;
use crate::store::use_dashboard_store;
use crate::verification::{Notice, VERIFICATION_CODE_LEN};

#[component]
pub fn VerificationModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let flow = ctx.verification;
    let code = RwSignal::new(String::new());

    let is_open = Signal::derive(move || flow.with(|f| f.is_open()));
    let busy = move || flow.with(|f| f.busy);

    // Fresh input for every new prompt
    Effect::new(move |_| {
        if is_open.get() {
            code.set(String::new());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        verify_code(ctx, store, code.get_untracked());
    };

    view! {
        <Modal
            id="emailVerificationModal"
            title="Verify Your Email".to_string()
            open=is_open
            on_close=move |_| cancel_verification(ctx)
        >
            <form class="modal-body" on:submit=submit>
                <p>
                    "We sent a verification code to "
                    <strong id="verificationEmailDisplay">
                        {move || flow.with(|f| f.email().unwrap_or_default().to_string())}
                    </strong>
                </p>
                <input
                    id="verificationCodeInput"
                    type="text"
                    class="form-control verification-code"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength=VERIFICATION_CODE_LEN.to_string()
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                {move || flow.with(|f| f.notice.clone()).map(|notice| match notice {
                    Notice::Error(text) => view! { <div class="verification-notice error">{text}</div> }.into_any(),
                    Notice::Success(text) => view! { <div class="verification-notice success">{text}</div> }.into_any(),
                })}
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| cancel_verification(ctx)>
                        "Cancel"
                    </button>
                    <button type="button" class="btn btn-secondary" disabled=busy on:click=move |_| resend_code(ctx)>
                        "Resend Code"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=busy>
                        {move || if busy() { "Verifying..." } else { "Verify" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
