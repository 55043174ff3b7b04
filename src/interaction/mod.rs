mod contact;
mod navigation;
mod scroll;
mod skills;
mod submission;
mod validation;

pub use contact::{
    ContactForm, FormPhase, SubmissionTicket, SubmitOutcome, PENDING_LABEL, SUBMIT_LABEL,
};
pub use navigation::{MenuState, NavLink, NAV_LINKS};
pub use scroll::{
    href_targets, next_active_link, scroll_target, RevealTracker, ScrollState, SectionSpan,
};
pub use skills::{SkillLevel, SkillsAnimation};
pub use submission::{ContactPayload, ContactTransport, SimulatedTransport, TransportError};
pub use validation::{
    validate_email, validate_message, validate_name, validate_subject, Field, FieldError,
};
