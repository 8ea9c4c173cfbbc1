//! Stream Section
//!
//! Club posts with an inline composer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Ack};
use crate::components::mutation::{confirm_delete, report, Feedback};
use crate::components::{DeleteButton, EmptyState};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::format::{avatar_initial, preview, short_date, PREVIEW_CHARS};
use crate::loader::CardActions;
use crate::models::Post;
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::toast;
use crate::validation::require;
use super::{render_list, section_class, use_section_loader};

const CREATED: Feedback = Feedback {
    success: Some("Post created successfully"),
    title: "Post Created",
    rejected: "Failed to create post",
    failed: "Error creating post",
};

const DELETED: Feedback = Feedback {
    success: Some("Post deleted successfully"),
    title: "Post Deleted",
    rejected: "Failed to delete post",
    failed: "Error deleting post",
};

#[component]
pub fn StreamSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let posts = use_section_loader(Section::Stream, "posts", |club_id| async move {
        api::list_posts(&club_id).await
    });

    let content = RwSignal::new(String::new());
    let posting = RwSignal::new(false);

    let create_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(club_id) = ctx.club_id() else {
            toast::form_error(&FormError::MissingClub);
            return;
        };
        let text = content.get_untracked();
        if let Err(err) = require(&[("Content", &text)]) {
            toast::form_error(&err);
            return;
        }
        posting.set(true);
        spawn_local(async move {
            let result = api::create_post(&club_id, &text).await;
            if report(result, Ack::Message, &CREATED).is_some() {
                content.try_set(String::new());
                ctx.reload(Section::Stream);
            }
            posting.try_set(false);
        });
    };

    let delete_post = move |post: Post| {
        let details = format!("\"{}\"", preview(&post.content, PREVIEW_CHARS));
        let post_id = post.id;
        confirm_delete(ctx, Section::Stream, "Delete post?".to_string(), Some(details), DELETED, move |club_id| async move {
            api::delete_post(&club_id, post_id).await
        });
    };

    view! {
        <section id="stream" class=section_class(ctx, Section::Stream)>
            <div class="section-header">
                <h2>"Stream"</h2>
            </div>
            <form class="post-composer" on:submit=create_post>
                <textarea
                    id="postContent"
                    class="form-control"
                    placeholder="Share something with your club..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-primary" disabled=move || posting.get()>
                    <i class="fas fa-paper-plane"></i>
                    " Post"
                </button>
            </form>
            <div id="postsList" class="posts-list">
                {move || render_list(
                    posts.get(),
                    "posts",
                    || view! {
                        <EmptyState
                            icon="fas fa-stream"
                            title="No posts yet"
                            description="Be the first to share something with your club!"
                        />
                    }.into_any(),
                    |post| {
                        let actions = CardActions::new(store.is_leader().get(), false);
                        let on_delete = post.clone();
                        view! {
                            <div class="post-card">
                                <div class="post-header">
                                    <div class="post-avatar">{avatar_initial(&post.user.username)}</div>
                                    <div class="post-info">
                                        <h4>{post.user.username.clone()}</h4>
                                        <div class="post-date">{short_date(&post.created_at)}</div>
                                    </div>
                                    {actions.can_delete.then(|| view! {
                                        <DeleteButton title="Delete Post" on_click=move |_| delete_post(on_delete.clone()) />
                                    })}
                                </div>
                                <div class="post-content">
                                    <p>{post.content.clone()}</p>
                                </div>
                            </div>
                        }
                    },
                )}
            </div>
        </section>
    }
}
