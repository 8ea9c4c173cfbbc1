//! Delete Button Component
//!
//! Trash icon for leader-only card actions. Confirmation happens in the
//! shared confirm modal, not inline.

use leptos::prelude::*;

/// Card delete button
///
/// # Arguments
/// * `title` - Tooltip, e.g. "Delete Meeting"
/// * `on_click` - Callback that raises the confirmation
#[component]
pub fn DeleteButton(
    #[prop(into)] title: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="btn-icon delete-btn"
            title=title
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            <i class="fas fa-trash"></i>
        </button>
    }
}
