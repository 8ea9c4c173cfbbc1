//! Leptos Modal Utilities
//!
//! Modal shell, create/edit mode tracking and a generic confirmation dialog.
//! A shared create/edit modal keeps its mode as an explicit value and derives
//! its header, submit label and icon from it, so the labels can never drift
//! away from the record being edited.

use leptos::prelude::*;

/// Which path a shared create/edit form submits to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode<Id> {
    /// Submitting creates a new record
    Create,
    /// Submitting updates the record with this id
    Edit(Id),
}

impl<Id> Default for ModalMode<Id> {
    fn default() -> Self {
        ModalMode::Create
    }
}

impl<Id> ModalMode<Id> {
    pub fn is_edit(&self) -> bool {
        matches!(self, ModalMode::Edit(_))
    }

    pub fn edit_id(&self) -> Option<&Id> {
        match self {
            ModalMode::Create => None,
            ModalMode::Edit(id) => Some(id),
        }
    }

    pub fn title(&self, labels: &ModalLabels) -> &'static str {
        match self {
            ModalMode::Create => labels.create_title,
            ModalMode::Edit(_) => labels.edit_title,
        }
    }

    pub fn action_label(&self, labels: &ModalLabels) -> &'static str {
        match self {
            ModalMode::Create => labels.create_action,
            ModalMode::Edit(_) => labels.edit_action,
        }
    }

    pub fn action_icon(&self, labels: &ModalLabels) -> &'static str {
        match self {
            ModalMode::Create => labels.create_icon,
            ModalMode::Edit(_) => labels.edit_icon,
        }
    }
}

/// Static text for both modes of a shared modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalLabels {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub create_action: &'static str,
    pub edit_action: &'static str,
    /// Icon class for the create button (e.g. "fas fa-plus")
    pub create_icon: &'static str,
    /// Icon class for the update button
    pub edit_icon: &'static str,
}

/// Visibility plus mode of a shared create/edit modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalState<Id> {
    pub open: bool,
    pub mode: ModalMode<Id>,
}

impl<Id> Default for ModalState<Id> {
    fn default() -> Self {
        Self {
            open: false,
            mode: ModalMode::Create,
        }
    }
}

impl<Id> ModalState<Id> {
    /// Open in create mode, dropping any previous edit target
    pub fn open_create(&mut self) {
        self.mode = ModalMode::Create;
        self.open = true;
    }

    /// Open in edit mode for `id`; a previous edit target is replaced
    pub fn enter_edit(&mut self, id: Id) {
        self.mode = ModalMode::Edit(id);
        self.open = true;
    }

    /// Hide the modal and return to create mode
    pub fn close(&mut self) {
        self.open = false;
        self.mode = ModalMode::Create;
    }
}

/// Modal shell
///
/// Always mounted so form inputs keep their values while hidden; visibility
/// follows `open`. Clicking the backdrop or the × calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] id: String,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="modal"
            style:display=move || if open.get() { "block" } else { "none" }
            on:click=move |_| on_close.run(())
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{move || title.get()}</h3>
                    <span class="close" on:click=move |_| on_close.run(())>"×"</span>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// A pending "are you sure?" question
#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub details: Option<String>,
    pub on_confirm: Callback<()>,
}

impl ConfirmRequest {
    pub fn new(message: impl Into<String>, details: Option<String>, on_confirm: Callback<()>) -> Self {
        Self {
            message: message.into(),
            details,
            on_confirm,
        }
    }
}

/// Confirmation dialog driven by a single request slot
///
/// Confirm clears the slot before running the callback, so a callback that
/// raises another confirmation is not hidden by its own close.
#[component]
pub fn ConfirmModal(pending: RwSignal<Option<ConfirmRequest>>) -> impl IntoView {
    let confirm = move |_| {
        if let Some(request) = pending.get_untracked() {
            log::debug!("[CONFIRM] {}", request.message);
            pending.set(None);
            request.on_confirm.run(());
        }
    };

    view! {
        <div
            id="confirmModal"
            class="modal"
            style:display=move || if pending.with(Option::is_some) { "block" } else { "none" }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Confirm"</h3>
                    <span class="close" on:click=move |_| pending.set(None)>"×"</span>
                </div>
                <div class="modal-body">
                    <p id="confirmMessage">
                        {move || pending.with(|p| p.as_ref().map(|r| r.message.clone()))}
                        {move || pending.with(|p| p.as_ref().and_then(|r| r.details.clone())).map(|details| view! {
                            <br />
                            <small>{details}</small>
                        })}
                    </p>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| pending.set(None)>
                        "Cancel"
                    </button>
                    <button type="button" id="confirmButton" class="btn btn-primary" on:click=confirm>
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: ModalLabels = ModalLabels {
        create_title: "Schedule Meeting",
        edit_title: "Edit Meeting",
        create_action: "Schedule Meeting",
        edit_action: "Update Meeting",
        create_icon: "fas fa-calendar-plus",
        edit_icon: "fas fa-save",
    };

    #[test]
    fn test_default_is_closed_create() {
        let state: ModalState<u32> = ModalState::default();
        assert!(!state.open);
        assert_eq!(state.mode, ModalMode::Create);
        assert_eq!(state.mode.title(&LABELS), "Schedule Meeting");
    }

    #[test]
    fn test_second_edit_replaces_first() {
        let mut state = ModalState::default();
        state.enter_edit(3u32);
        state.enter_edit(9u32);
        assert_eq!(state.mode, ModalMode::Edit(9));
        assert_eq!(state.mode.edit_id(), Some(&9));
        assert_eq!(state.mode.title(&LABELS), "Edit Meeting");
        assert_eq!(state.mode.action_label(&LABELS), "Update Meeting");
        assert_eq!(state.mode.action_icon(&LABELS), "fas fa-save");
    }

    #[test]
    fn test_close_restores_create_labels() {
        let mut state = ModalState::default();
        state.enter_edit(5u32);
        state.close();
        assert!(!state.open);
        assert!(!state.mode.is_edit());
        assert_eq!(state.mode.action_label(&LABELS), "Schedule Meeting");
        assert_eq!(state.mode.action_icon(&LABELS), "fas fa-calendar-plus");

        // Closing an already-closed create modal changes nothing
        state.close();
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn test_open_create_drops_edit_target() {
        let mut state = ModalState::default();
        state.enter_edit(1u32);
        state.open_create();
        assert!(state.open);
        assert_eq!(state.mode, ModalMode::Create);
    }
}
