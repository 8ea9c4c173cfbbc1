//! UI Components
//!
//! Dashboard sections, modal forms and the shared widgets they use.

pub(crate) mod mutation;
mod empty_state;
mod delete_button;
mod sidebar;
mod confirm_host;
mod verification_modal;
mod join_code;
mod leadership;
mod hackatime;
pub mod sections;
pub mod forms;

pub use empty_state::EmptyState;
pub use delete_button::DeleteButton;
pub use sidebar::Sidebar;
pub use confirm_host::ConfirmHost;
pub use verification_modal::VerificationModal;
pub use join_code::JoinCodeCard;
pub use leadership::LeadershipTransfer;
pub use hackatime::HackatimeLookup;
