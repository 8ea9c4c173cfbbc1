//! Hackatime Lookup
//!
//! Pick a member and list the coding projects Hackatime has recorded for them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::EmptyState;
use crate::error::ApiError;
use crate::format::grouped_seconds;
use crate::models::{HackatimeProject, HackatimeProjects, Member};
use crate::toast;

#[derive(Clone, Debug, PartialEq)]
enum Lookup {
    Idle,
    Loading,
    /// Backend answered with a reason, e.g. no linked Hackatime account
    Unavailable(String),
    Failed,
    Loaded(HackatimeProjects),
}

impl Lookup {
    fn from_result(result: Result<HackatimeProjects, ApiError>) -> Self {
        match result {
            Ok(projects) => Lookup::Loaded(projects),
            Err(ApiError::Server { message, .. }) => Lookup::Unavailable(message),
            Err(_) => Lookup::Failed,
        }
    }
}

fn panel_title(username: &str) -> String {
    format!("{}'s Hackatime Projects", username)
}

fn no_projects_text(username: &str) -> String {
    format!("{} hasn't logged any coding time yet on Hackatime", username)
}

fn time_line(project: &HackatimeProject) -> String {
    format!(
        " {} seconds ({})",
        grouped_seconds(project.total_seconds),
        project.formatted_time
    )
}

/// Share of the member's total time; hidden when absent or zero
fn percent_line(project: &HackatimeProject) -> Option<String> {
    project
        .percent
        .filter(|p| *p != 0.0)
        .map(|p| format!(" {:.1}% of total time", p))
}

fn project_card(project: HackatimeProject) -> impl IntoView {
    let time = time_line(&project);
    let percent = percent_line(&project);
    view! {
        <div class="card hackatime-project">
            <div class="card-header">
                <div>
                    <h3><i class="fas fa-code"></i>{format!(" {}", project.name)}</h3>
                    <span class="time-badge">{project.formatted_time.clone()}</span>
                </div>
            </div>
            <div class="card-body">
                <div class="card-meta">
                    <span><i class="fas fa-clock"></i>{time}</span>
                    {percent.map(|p| view! { <span><i class="fas fa-chart-pie"></i>{p}</span> })}
                </div>
            </div>
        </div>
    }
}

fn render_lookup(lookup: Lookup) -> AnyView {
    match lookup {
        Lookup::Idle => view! {
            <EmptyState
                icon="fas fa-clock"
                title="Select a member"
                description="Choose a member from the dropdown to view their Hackatime coding projects"
            />
        }
        .into_any(),
        Lookup::Loading => view! {
            <EmptyState icon="fas fa-spinner fa-spin" title="Loading projects..." description="Fetching Hackatime data" />
        }
        .into_any(),
        Lookup::Unavailable(reason) => view! {
            <div class="empty-state">
                <i class="fas fa-exclamation-triangle warning"></i>
                <h3>"Unable to load projects"</h3>
                <p>{reason}</p>
            </div>
        }
        .into_any(),
        Lookup::Failed => view! {
            <EmptyState
                icon="fas fa-exclamation-triangle"
                title="Error loading projects"
                description="Failed to fetch Hackatime data. Please try again."
            />
        }
        .into_any(),
        Lookup::Loaded(data) if data.projects.is_empty() => view! {
            <div class="empty-state">
                <i class="fas fa-clock"></i>
                <h3>"No projects found"</h3>
                <p>{no_projects_text(&data.username)}</p>
            </div>
        }
        .into_any(),
        Lookup::Loaded(data) => view! {
            <h4 class="hackatime-title">{panel_title(&data.username)}</h4>
            {data.projects.into_iter().map(project_card).collect_view()}
        }
        .into_any(),
    }
}

#[component]
pub fn HackatimeLookup(#[prop(into)] members: Signal<Vec<Member>>) -> impl IntoView {
    let selected = RwSignal::new(String::new());
    let lookup = RwSignal::new(Lookup::Idle);

    let on_select = move |ev: web_sys::Event| {
        let user_id = event_target_value(&ev);
        selected.set(user_id.clone());
        if user_id.is_empty() {
            lookup.set(Lookup::Idle);
            return;
        }
        lookup.set(Lookup::Loading);
        spawn_local(async move {
            let result = api::hackatime_projects(&user_id).await;
            // a later selection owns the panel
            if selected.try_get_untracked().as_deref() != Some(user_id.as_str()) {
                return;
            }
            if let Err(e) = &result {
                log::error!("[HACKATIME] Lookup for user {} failed: {}", user_id, e);
            }
            let next = Lookup::from_result(result);
            if next == Lookup::Failed {
                toast::error("Failed to load Hackatime projects", "Error");
            }
            lookup.try_set(next);
        });
    };

    view! {
        <div class="card hackatime-card">
            <div class="card-header">
                <h3><i class="fas fa-clock"></i>" Hackatime Projects"</h3>
            </div>
            <div class="card-body">
                <div class="form-group">
                    <select id="hackatimeMemberSelect" class="form-control"
                        prop:value=move || selected.get()
                        on:change=on_select>
                        <option value="">"Select a member"</option>
                        {move || members.get().into_iter()
                            .map(|m| view! { <option value=m.id.to_string()>{m.username}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div id="hackatimeProjectsList">
                    {move || render_lookup(lookup.get())}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn projects(value: serde_json::Value) -> HackatimeProjects {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_lookup_from_result() {
        let data = projects(json!({"username": "ada", "projects": []}));
        assert_eq!(Lookup::from_result(Ok(data.clone())), Lookup::Loaded(data));

        let err = ApiError::Server { status: 404, message: "User has no Hackatime account".into() };
        assert_eq!(
            Lookup::from_result(Err(err)),
            Lookup::Unavailable("User has no Hackatime account".into())
        );
        assert_eq!(Lookup::from_result(Err(ApiError::Network("offline".into()))), Lookup::Failed);
    }

    #[test]
    fn test_project_lines() {
        let data = projects(json!({
            "username": "ada",
            "projects": [
                {"name": "game", "total_seconds": 12345, "formatted_time": "3h 25m", "percent": 61.234},
                {"name": "site", "total_seconds": 90, "formatted_time": "1m", "percent": 0}
            ]
        }));
        assert_eq!(panel_title(&data.username), "ada's Hackatime Projects");
        assert_eq!(time_line(&data.projects[0]), " 12,345 seconds (3h 25m)");
        assert_eq!(percent_line(&data.projects[0]).as_deref(), Some(" 61.2% of total time"));
        assert_eq!(percent_line(&data.projects[1]), None);
    }

    #[test]
    fn test_no_projects_text() {
        assert_eq!(no_projects_text("ada"), "ada hasn't logged any coding time yet on Hackatime");
    }
}
