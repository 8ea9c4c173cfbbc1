//! Purchase Request Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::Modal;

use crate::api::{self, Ack};
use crate::components::mutation::{report_with, Feedback};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::format::money;
use crate::navigation::Section;
use crate::store::{store_set_balance, use_dashboard_store, DashboardStateStoreFields};
use crate::toast;
use crate::validation::{validate_purchase, PurchaseForm};

const SUBMITTED: Feedback = Feedback {
    success: None,
    title: "Request Submitted",
    rejected: "Failed to submit purchase request",
    failed: "Error submitting purchase request",
};

fn submitted_text(new_balance: Option<f64>) -> String {
    match new_balance {
        Some(balance) => format!("Purchase request submitted! New balance: {}", money(balance)),
        None => "Purchase request submitted!".to_string(),
    }
}

#[component]
pub fn PurchaseRequestForm(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let form = RwSignal::new(PurchaseForm::default());

    let close = move || {
        open.set(false);
        form.set(PurchaseForm::default());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(club_id) = ctx.club_id() else {
            toast::form_error(&FormError::MissingClub);
            return;
        };
        let input = form.get_untracked();
        let amount = match validate_purchase(&input, store.balance().get_untracked()) {
            Ok(amount) => amount,
            Err(err) => {
                toast::form_error(&err);
                return;
            }
        };
        let args = input.into_args(amount, &store.club_name().get_untracked());
        spawn_local(async move {
            let result = api::create_purchase_request(&club_id, &args).await;
            let Some(reply) = report_with(result, Ack::Message, &SUBMITTED, |reply, _| {
                submitted_text(reply.new_balance)
            }) else {
                return;
            };
            open.try_set(false);
            form.try_set(PurchaseForm::default());
            store_set_balance(&store, reply.new_balance);
            ctx.reload(Section::Shop);
        });
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&PurchaseForm) -> String, set: fn(&mut PurchaseForm, String)| {
        view! {
            <div class="form-group">
                <label class="form-label">{label}</label>
                <input type=kind class="form-control"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    } />
            </div>
        }
    };

    view! {
        <Modal
            id="purchaseRequestModal"
            title="Purchase Request".to_string()
            open=open
            on_close=move |_| close()
        >
            <form id="purchaseRequestForm" on:submit=submit>
                <p class="balance-display">
                    "Available balance: "
                    <span class="balance-amount">{move || money(store.balance().get())}</span>
                </p>
                <div class="form-row">
                    {field("First Name", "text", |f| f.leader_first_name.clone(), |f, v| f.leader_first_name = v)}
                    {field("Last Name", "text", |f| f.leader_last_name.clone(), |f, v| f.leader_last_name = v)}
                </div>
                {field("Email", "email", |f| f.leader_email.clone(), |f, v| f.leader_email = v)}
                {field("Purchase Type", "text", |f| f.purchase_type.clone(), |f, v| f.purchase_type = v)}
                <div class="form-group">
                    <label class="form-label">"Description"</label>
                    <textarea class="form-control"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }></textarea>
                </div>
                <div class="form-group">
                    <label class="form-label">"Reason"</label>
                    <textarea class="form-control"
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.reason = value);
                        }></textarea>
                </div>
                {field("Fulfillment Method", "text", |f| f.fulfillment_method.clone(), |f, v| f.fulfillment_method = v)}
                {field("Amount", "number", |f| f.amount.clone(), |f, v| f.amount = v)}
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="btn btn-primary">
                        <i class="fas fa-paper-plane"></i>
                        " Submit Request"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_text_shows_new_balance() {
        assert_eq!(
            submitted_text(Some(17.5)),
            "Purchase request submitted! New balance: $17.50"
        );
        assert_eq!(submitted_text(None), "Purchase request submitted!");
    }
}
