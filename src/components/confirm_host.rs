//! Confirm Host Component

use leptos::prelude::*;
use leptos_modal::ConfirmModal;

use crate::context::use_app_context;

/// Mounts the shared confirmation dialog on the context's request slot
#[component]
pub fn ConfirmHost() -> impl IntoView {
    let ctx = use_app_context();
    view! { <ConfirmModal pending=ctx.confirm /> }
}
