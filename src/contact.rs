use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::relay::{SubmissionResult, SubmitError};
use crate::toast::{Severity, Toaster};

/// The four user-editable fields of the contact form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join_fields(.missing))]
    EmptyField { missing: Vec<Field> },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks every field and reports all that are blank after trimming.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    let missing = Field::ALL
        .into_iter()
        .filter(|f| fields.get(*f).trim().is_empty())
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EmptyField { missing })
    }
}

/// Payload handed to the email relay for one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

impl ContactRequest {
    /// Submission time as shown in the delivered email, e.g. `3/14/2025, 9:26:53 AM`.
    pub fn time_display(&self) -> String {
        self.submitted_at
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeginError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Refused(#[from] SubmitError),
}

pub const INCOMPLETE_TITLE: &str = "Incomplete form";
pub const INCOMPLETE_DESCRIPTION: &str = "Please fill out all fields before sending.";
pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thanks for reaching out. I\u{2019}ll get back to you soon.";
pub const FAILED_TITLE: &str = "Failed to send";
pub const FAILED_DESCRIPTION: &str = "Something went wrong. Please try again later.";

/// Form state plus the submitting guard. While a request is in flight
/// `begin_submit` refuses to build another one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    pub fn reset(&mut self) {
        self.fields = ContactFields::default();
    }

    /// Validates the current fields and, if nothing is in flight, marks the
    /// form as submitting and returns the request to send.
    pub fn begin_submit(&mut self, now: DateTime<Local>) -> Result<ContactRequest, BeginError> {
        if self.submitting {
            log::warn!("contact submission refused: one is already in flight");
            return Err(SubmitError::Busy.into());
        }
        if let Err(e) = validate(&self.fields) {
            log::debug!("contact submission rejected: {e}");
            return Err(e.into());
        }
        self.submitting = true;
        Ok(ContactRequest {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            subject: self.fields.subject.clone(),
            message: self.fields.message.clone(),
            submitted_at: now,
        })
    }

    /// Surfaces a failed `begin_submit` to the user. A busy refusal is silent
    /// since the in-flight attempt will report its own outcome.
    pub fn notify_rejected(&self, err: &BeginError, toaster: &impl Toaster) {
        if let BeginError::Invalid(_) = err {
            toaster.show(INCOMPLETE_TITLE, INCOMPLETE_DESCRIPTION, Severity::Destructive);
        }
    }

    /// Settles an in-flight submission: clears the guard, shows the outcome,
    /// and resets the fields only on success.
    pub fn notify(&mut self, result: &SubmissionResult, toaster: &impl Toaster) {
        self.submitting = false;
        match result {
            SubmissionResult::Success => {
                toaster.show(SENT_TITLE, SENT_DESCRIPTION, Severity::Default);
                self.reset();
            }
            SubmissionResult::Failure(e) => {
                log::warn!("contact submission failed: {e}");
                toaster.show(FAILED_TITLE, FAILED_DESCRIPTION, Severity::Destructive);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{submit, EmailRelay};
    use crate::toast::tests::RecordingToaster;

    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};

    struct FakeRelay {
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactRequest>>,
        fail: bool,
    }

    impl FakeRelay {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailRelay for FakeRelay {
        async fn send(&self, request: &ContactRequest) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(request.clone());
            if self.fail {
                Err(SubmitError::Network("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, name);
        form.update_field(Field::Email, email);
        form.update_field(Field::Subject, subject);
        form.update_field(Field::Message, message);
        form
    }

    fn now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_update_field_sets_only_named_field() {
        let mut form = ContactForm::new();
        form.update_field(Field::Subject, "Hello");
        assert_eq!(form.value(Field::Subject), "Hello");
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_validate_reports_every_blank_field() {
        let fields = filled("", "  ", "Hi", "\n\t").fields().clone();
        let err = validate(&fields).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                missing: vec![Field::Name, Field::Email, Field::Message]
            }
        );
        assert_eq!(
            err.to_string(),
            "Missing required fields: name, email, message"
        );
    }

    #[test]
    fn test_validate_any_single_blank_fails() {
        for blank in Field::ALL {
            let mut form = filled("Jo", "jo@x.com", "Hi", "Test");
            form.update_field(blank, "   ");
            assert!(
                matches!(
                    validate(form.fields()),
                    Err(ValidationError::EmptyField { ref missing }) if missing == &vec![blank]
                ),
                "blank {blank} should fail validation"
            );
        }
    }

    #[test]
    fn test_validate_accepts_padded_values() {
        let form = filled(" Jo ", "jo@x.com", " Hi", "Test ");
        assert!(validate(form.fields()).is_ok());
    }

    #[test]
    fn test_begin_submit_builds_request_and_sets_guard() {
        let mut form = filled("Jo", "jo@x.com", "Hi", "Test");
        let req = form.begin_submit(now()).expect("valid form should submit");
        assert!(form.is_submitting());
        assert_eq!(req.name, "Jo");
        assert_eq!(req.email, "jo@x.com");
        assert_eq!(req.subject, "Hi");
        assert_eq!(req.message, "Test");
        assert_eq!(req.time_display(), "3/14/2025, 9:26:53 AM");
    }

    #[test]
    fn test_begin_submit_refuses_while_in_flight() {
        let mut form = filled("Jo", "jo@x.com", "Hi", "Test");
        assert!(form.begin_submit(now()).is_ok());
        let second = form.begin_submit(now());
        assert_eq!(second, Err(BeginError::Refused(SubmitError::Busy)));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_incomplete_form_scenario() {
        let toaster = RecordingToaster::default();
        let relay = FakeRelay::new(false);
        let mut form = filled("", "jo@x.com", "Hi", "Test");

        let err = form.begin_submit(now()).unwrap_err();
        assert!(matches!(
            err,
            BeginError::Invalid(ValidationError::EmptyField { .. })
        ));
        form.notify_rejected(&err, &toaster);

        assert_eq!(relay.calls.get(), 0);
        assert!(!form.is_submitting());
        let shown = toaster.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, INCOMPLETE_TITLE);
        assert_eq!(shown[0].severity, Severity::Destructive);
    }

    #[test]
    fn test_busy_refusal_shows_nothing() {
        let toaster = RecordingToaster::default();
        let form = ContactForm::new();
        form.notify_rejected(&BeginError::Refused(SubmitError::Busy), &toaster);
        assert!(toaster.shown().is_empty());
    }

    #[tokio::test]
    async fn test_successful_submission_scenario() {
        let toaster = RecordingToaster::default();
        let relay = FakeRelay::new(false);
        let mut form = filled("Jo", "jo@x.com", "Hi", "Test");

        let req = form.begin_submit(now()).expect("valid form should submit");
        // a double click while in flight must not reach the relay
        assert!(form.begin_submit(now()).is_err());
        let result = submit(&relay, &req).await;
        form.notify(&result, &toaster);

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.sent.borrow()[0], req);
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &ContactFields::default());
        let shown = toaster.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Message sent!");
        assert_eq!(shown[0].severity, Severity::Default);
    }

    #[tokio::test]
    async fn test_failed_submission_preserves_input() {
        let toaster = RecordingToaster::default();
        let relay = FakeRelay::new(true);
        let mut form = filled("Jo", "jo@x.com", "Hi", "Test");
        let before = form.fields().clone();

        let req = form.begin_submit(now()).expect("valid form should submit");
        let result = submit(&relay, &req).await;
        assert!(matches!(result, SubmissionResult::Failure(_)));
        form.notify(&result, &toaster);

        assert_eq!(relay.calls.get(), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &before);
        assert_eq!(toaster.shown()[0].title, FAILED_TITLE);
        assert_eq!(toaster.shown()[0].severity, Severity::Destructive);

        // input was kept, so a retry goes straight through
        assert!(form.begin_submit(now()).is_ok());
    }
}
