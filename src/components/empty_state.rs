//! Empty State Component

use leptos::prelude::*;

/// Placeholder shown in place of cards when a collection is empty
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <i class=icon></i>
            <h3>{title}</h3>
            {description.map(|d| view! { <p>{d}</p> })}
        </div>
    }
}
