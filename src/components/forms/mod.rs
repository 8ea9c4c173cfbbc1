//! Modal Forms
//!
//! Create/edit forms. Each reads its fields at submit time, validates
//! locally and only then issues a request.

mod assignment_form;
mod meeting_form;
mod resource_form;
mod purchase_form;
mod grant_form;

pub use assignment_form::AssignmentForm;
pub use meeting_form::{edit_meeting, schedule_meeting, MeetingFields, MeetingForm};
pub use resource_form::{add_resource, edit_resource, ResourceFields, ResourceForm};
pub use purchase_form::PurchaseRequestForm;
pub use grant_form::GrantForm;
