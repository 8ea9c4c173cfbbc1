//! Resources Section

use leptos::prelude::*;
use leptos_modal::ModalState;

use crate::api;
use crate::components::forms::{add_resource, edit_resource, ResourceFields, ResourceForm};
use crate::components::mutation::{confirm_delete, Feedback};
use crate::components::{DeleteButton, EmptyState};
use crate::context::use_app_context;
use crate::loader::CardActions;
use crate::models::Resource;
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use super::{render_list, section_class, use_section_loader};

const DELETED: Feedback = Feedback {
    success: Some("Resource deleted successfully"),
    title: "Resource Deleted",
    rejected: "Failed to delete resource",
    failed: "Error deleting resource",
};

#[component]
pub fn ResourcesSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let resources = use_section_loader(Section::Resources, "resources", |club_id| async move {
        api::list_resources(&club_id).await
    });
    let modal = RwSignal::new(ModalState::<u32>::default());
    let fields = ResourceFields::new();

    let delete_resource = move |resource: Resource| {
        let id = resource.id;
        confirm_delete(
            ctx,
            Section::Resources,
            format!("Delete \"{}\"?", resource.title),
            Some("This action cannot be undone.".to_string()),
            DELETED,
            move |club_id| async move { api::delete_resource(&club_id, id).await },
        );
    };

    view! {
        <section id="resources" class=section_class(ctx, Section::Resources)>
            <div class="section-header">
                <h2>"Resources"</h2>
                <Show when=move || store.is_leader().get()>
                    <button class="btn btn-primary" on:click=move |_| add_resource(modal, fields)>
                        <i class="fas fa-plus"></i>
                        " Add Resource"
                    </button>
                </Show>
            </div>
            <div id="resourcesList" class="resources-grid">
                {move || render_list(
                    resources.get(),
                    "resources",
                    || view! {
                        <EmptyState
                            icon="fas fa-book"
                            title="No resources yet"
                            description="Add helpful links and materials for your club members."
                        />
                    }.into_any(),
                    |resource| {
                        let actions = CardActions::new(store.is_leader().get(), true);
                        let icon = format!("fas fa-{}", resource.icon);
                        let to_edit = resource.clone();
                        let to_delete = resource.clone();
                        view! {
                            <div class="card resource-card">
                                <div class="card-header">
                                    <h3><i class=icon></i>{format!(" {}", resource.title)}</h3>
                                    <div class="card-actions">
                                        {actions.can_edit.then(|| view! {
                                            <button
                                                class="btn-icon"
                                                title="Edit Resource"
                                                on:click=move |_| edit_resource(modal, fields, &to_edit)
                                            >
                                                <i class="fas fa-edit"></i>
                                            </button>
                                        })}
                                        {actions.can_delete.then(|| view! {
                                            <DeleteButton
                                                title="Delete Resource"
                                                on_click=move |_| delete_resource(to_delete.clone())
                                            />
                                        })}
                                    </div>
                                </div>
                                <div class="card-body">
                                    {resource.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p>{d}</p> })}
                                    <a href=resource.url.clone() target="_blank" rel="noopener" class="btn btn-secondary">
                                        <i class="fas fa-external-link-alt"></i>
                                        " Visit Resource"
                                    </a>
                                </div>
                            </div>
                        }
                    },
                )}
            </div>
            <ResourceForm modal=modal fields=fields />
        </section>
    }
}
