//! Shop Section
//!
//! Club balance and purchase requests.

use leptos::prelude::*;

use crate::api;
use crate::components::forms::PurchaseRequestForm;
use crate::components::EmptyState;
use crate::context::use_app_context;
use crate::format::{money, short_date};
use crate::models::PurchaseRequest;
use crate::navigation::Section;
use crate::store::{store_set_balance, use_dashboard_store, DashboardStateStoreFields};
use super::{render_list, section_class, use_section_loader};

fn request_card(request: PurchaseRequest) -> impl IntoView {
    let status = request.review_status();
    let unknown = || "Unknown".to_string();
    view! {
        <div class="card purchase-card">
            <div class="card-header">
                <div>
                    <h3>{format!("{} Purchase", request.purchase_type)}</h3>
                    <span class=status.badge_class()>{status.label()}</span>
                </div>
                <div class="purchase-amount">
                    <div class="amount">{money(request.amount.unwrap_or(0.0))}</div>
                    <div class="amount-label">"Requested"</div>
                </div>
            </div>
            <div class="card-body">
                {request.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p>{d}</p> })}
                <div class="card-meta">
                    <span><i class="fas fa-store"></i>{format!(" {}", request.vendor.clone().unwrap_or_else(unknown))}</span>
                    <span><i class="fas fa-credit-card"></i>{format!(" {}", request.fulfillment_method.clone().unwrap_or_else(unknown))}</span>
                    {request.created_time.as_deref().map(short_date).map(|d| view! {
                        <span><i class="fas fa-calendar"></i>{format!(" {}", d)}</span>
                    })}
                </div>
                {request.reason.clone().filter(|r| !r.is_empty()).map(|r| view! {
                    <div class="purchase-reason"><strong>"Reason: "</strong><span>{r}</span></div>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn ShopSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let requests = use_section_loader(Section::Shop, "purchase requests", move |club_id| async move {
        match api::club_balance(&club_id).await {
            Ok(snapshot) => store_set_balance(&store, Some(snapshot.balance)),
            Err(e) => log::warn!("[SHOP] Balance refresh failed: {}", e),
        }
        api::list_purchase_requests(&club_id).await
    });
    let form_open = RwSignal::new(false);

    view! {
        <section id="shop" class=section_class(ctx, Section::Shop)>
            <div class="section-header">
                <h2>"Shop"</h2>
                <span class="balance-display">
                    "Balance: "
                    <span class="balance-amount">{move || money(store.balance().get())}</span>
                </span>
                <Show when=move || store.is_leader().get()>
                    <button class="btn btn-primary" on:click=move |_| form_open.set(true)>
                        <i class="fas fa-shopping-cart"></i>
                        " New Purchase Request"
                    </button>
                </Show>
            </div>
            <div id="purchaseRequestsList" class="purchase-list">
                {move || render_list(
                    requests.get(),
                    "purchase requests",
                    || view! {
                        <EmptyState
                            icon="fas fa-shopping-cart"
                            title="No purchase requests yet"
                            description="Submit your first purchase request to get started!"
                        />
                    }.into_any(),
                    request_card,
                )}
            </div>
            <PurchaseRequestForm open=form_open />
        </section>
    }
}
