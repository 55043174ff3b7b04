//! Contact form state machine.
//!
//! The controller owns the draft (four field values plus their errors) and the
//! submission phase. It never touches the DOM or the clock: callers feed it
//! events and schedule the timers it asks for, handing back the ticket when a
//! timer fires. A ticket that no longer matches the current phase is ignored,
//! so a cancelled or superseded timer cannot clear a newer draft.

use super::submission::ContactPayload;
use super::validation::{Field, FieldError};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "Sending...";

/// Identifies one accepted submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting(SubmissionTicket),
    Succeeded(SubmissionTicket),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; wait for the round trip, then call `complete`.
    Accepted {
        ticket: SubmissionTicket,
        payload: ContactPayload,
    },
    /// At least one field failed; the listed fields now show errors.
    Rejected(Vec<Field>),
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldDraft {
    value: String,
    error: Option<FieldError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: [FieldDraft; 4],
    phase: FormPhase,
    next_ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self, field: Field) -> &str {
        &self.fields[field.index()].value
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.fields[field.index()].error.as_ref()
    }

    /// Inline error text; empty when the field is valid or not yet checked.
    pub fn error_text(&self, field: Field) -> String {
        self.error(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_marked_invalid(&self, field: Field) -> bool {
        self.error(field).is_some()
    }

    #[cfg(test)]
    fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Store the new value and drop any displayed error. Validation waits for
    /// the next blur or submit.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let draft = &mut self.fields[field.index()];
        draft.value = value.into();
        draft.error = None;
    }

    /// Validate the field's current value and show or clear its error.
    pub fn blur(&mut self, field: Field) {
        let draft = &mut self.fields[field.index()];
        draft.error = field.validate(&draft.value).err();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if matches!(self.phase, FormPhase::Submitting(_)) {
            return SubmitOutcome::Busy;
        }

        let mut failed = Vec::new();
        for field in Field::ALL {
            let draft = &mut self.fields[field.index()];
            if let Err(err) = field.validate(&draft.value) {
                draft.error = Some(err);
                failed.push(field);
            }
        }
        if !failed.is_empty() {
            return SubmitOutcome::Rejected(failed);
        }

        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        self.phase = FormPhase::Submitting(ticket);
        SubmitOutcome::Accepted {
            ticket,
            payload: self.payload(),
        }
    }

    /// Finish the simulated round trip. Returns `false` for a stale ticket.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> bool {
        if self.phase != FormPhase::Submitting(ticket) {
            return false;
        }
        for draft in &mut self.fields {
            *draft = FieldDraft::default();
        }
        self.phase = FormPhase::Succeeded(ticket);
        true
    }

    /// Hide the success notice. Returns `false` for a stale ticket.
    pub fn dismiss_notice(&mut self, ticket: SubmissionTicket) -> bool {
        if self.phase != FormPhase::Succeeded(ticket) {
            return false;
        }
        self.phase = FormPhase::Idle;
        true
    }

    /// Abandon an in-flight submission, keeping the draft.
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        match self.phase {
            FormPhase::Submitting(ticket) => {
                self.phase = FormPhase::Idle;
                Some(ticket)
            }
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn success_visible(&self) -> bool {
        matches!(self.phase, FormPhase::Succeeded(_))
    }

    fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).to_string(),
            message: self.value(Field::Message).to_string(),
        }
    }
}
