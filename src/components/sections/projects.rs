//! Projects Section
//!
//! Read-only list of member projects.

use leptos::prelude::*;

use crate::api;
use crate::components::EmptyState;
use crate::context::use_app_context;
use crate::format::short_date;
use crate::loader::LoadState;
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use super::{render_list, section_class, use_section_loader};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let projects = use_section_loader(Section::Projects, "projects", |club_id| async move {
        api::list_projects(&club_id).await
    });

    Effect::new(move |_| {
        projects.with(|state| {
            if let LoadState::Ready(items) = state {
                *store.project_count().write() = items.len();
            }
        });
    });

    view! {
        <section id="projects" class=section_class(ctx, Section::Projects)>
            <div class="section-header">
                <h2>"Projects"</h2>
            </div>
            <div id="projectsList" class="projects-grid">
                {move || render_list(
                    projects.get(),
                    "projects",
                    || view! {
                        <EmptyState
                            icon="fas fa-code"
                            title="No projects yet"
                            description="Club members' projects will appear here."
                        />
                    }.into_any(),
                    |project| view! {
                        <div class="card project-card">
                            <div class="card-header">
                                <h3>{project.name.clone()}</h3>
                                {project.featured.then(|| view! {
                                    <span class="status-badge featured"><i class="fas fa-star"></i>" Featured"</span>
                                })}
                            </div>
                            <div class="card-body">
                                <p>{project.description.clone().unwrap_or_else(|| "No description".to_string())}</p>
                                <div class="card-meta">
                                    <span><i class="fas fa-user"></i>{format!(" {}", project.owner.username)}</span>
                                    <span><i class="fas fa-clock"></i>{format!(" Updated {}", short_date(&project.updated_at))}</span>
                                </div>
                            </div>
                        </div>
                    },
                )}
            </div>
        </section>
    }
}
