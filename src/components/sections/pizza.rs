//! Pizza Grants Section

use leptos::prelude::*;

use crate::api;
use crate::components::forms::GrantForm;
use crate::components::EmptyState;
use crate::context::use_app_context;
use crate::format::short_date;
use crate::models::GrantSubmission;
use crate::navigation::Section;
use super::{render_list, section_class, use_section_loader};

fn submission_card(submission: GrantSubmission) -> impl IntoView {
    let status = submission.review_status();
    let submitter = submission.submitter();
    let hours = submission.hours.clone().filter(|h| !h.is_empty());
    let amount = submission.grant_amount.clone().filter(|a| !a.is_empty());
    let submitted = submission.created_time.as_deref().map(short_date);
    view! {
        <div class="card submission-card">
            <div class="card-header">
                <h3>{submission.project_name.clone().unwrap_or_else(|| "Untitled project".to_string())}</h3>
                <span class=status.badge_class()>{status.label()}</span>
            </div>
            <div class="card-body">
                {submission.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p>{d}</p> })}
                <div class="card-meta">
                    <span><i class="fas fa-user"></i>{format!(" {}", submitter)}</span>
                    {hours.map(|h| view! { <span><i class="fas fa-clock"></i>{format!(" {} hours", h)}</span> })}
                    {amount.map(|a| view! { <span><i class="fas fa-dollar-sign"></i>{format!(" {}", a)}</span> })}
                    {submitted.map(|d| view! { <span><i class="fas fa-calendar"></i>{format!(" {}", d)}</span> })}
                </div>
                <div class="card-links">
                    {submission.code_url.clone().filter(|u| !u.is_empty()).map(|u| view! {
                        <a href=u target="_blank" rel="noopener"><i class="fab fa-github"></i>" Code"</a>
                    })}
                    {submission.playable_url.clone().filter(|u| !u.is_empty()).map(|u| view! {
                        <a href=u target="_blank" rel="noopener"><i class="fas fa-play"></i>" Live"</a>
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PizzaSection() -> impl IntoView {
    let ctx = use_app_context();
    let submissions = use_section_loader(Section::Pizza, "submissions", |club_id| async move {
        api::list_grant_submissions(&club_id).await
    });
    let form_open = RwSignal::new(false);

    view! {
        <section id="pizza" class=section_class(ctx, Section::Pizza)>
            <div class="section-header">
                <h2>"Pizza Grants"</h2>
                <button class="btn btn-primary" on:click=move |_| form_open.set(true)>
                    <i class="fas fa-pizza-slice"></i>
                    " Submit Grant"
                </button>
            </div>
            <div id="submissionsList" class="submissions-list">
                {move || render_list(
                    submissions.get(),
                    "submissions",
                    || view! {
                        <EmptyState
                            icon="fas fa-pizza-slice"
                            title="No submissions yet"
                            description="Submit a project to request a pizza grant."
                        />
                    }.into_any(),
                    submission_card,
                )}
            </div>
            <GrantForm open=form_open />
        </section>
    }
}
