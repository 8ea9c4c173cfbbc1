//! Sidebar Component
//!
//! Section navigation links.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom;
use crate::navigation::Section;

/// Sidebar with one link per section
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="dashboard-sidebar">
            {Section::ALL.into_iter().map(|section| {
                let link_class = move || {
                    if ctx.active_section.get() == section { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <a
                        href=format!("#{}", section.id())
                        class=link_class
                        data-section=section.id()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.open_section(section.id());
                            dom::set_location_hash(section.id());
                        }
                    >
                        <i class=section.icon()></i>
                        " "
                        {section.label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
