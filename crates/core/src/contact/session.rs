//! # Contact Session
//!
//! State of one contact form instance: field values, the last validation
//! result, the submission status and whether a delivery is in flight.

use serde::Serialize;

use super::form::{validate, ContactForm, Field, FieldErrors};
use super::inflight::InFlight;
use super::transport::ContactTransport;

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully. I'll get back to you soon!";
pub const ERROR_MESSAGE: &str =
    "There was an error sending your message. Please try again later.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "idle",
            SubmitStatus::Success => "success",
            SubmitStatus::Error => "error",
        }
    }

    /// Text shown under the submit button
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Success => Some(SUCCESS_MESSAGE),
            SubmitStatus::Error => Some(ERROR_MESSAGE),
        }
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent
    Invalid,
    /// Delivered
    Sent,
    /// Sent but the delivery failed
    Failed,
    /// A delivery is already in flight
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmitStatus,
    submitting: bool,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-filled with submitted values (server-rendered forms)
    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// True while a delivery is in flight; the submit button is disabled
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update a field. A finished submission's status goes back to idle;
    /// validation errors stay until the next submit.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.status = SubmitStatus::Idle;
    }

    /// Validate and, if valid, mark the session in flight.
    ///
    /// Returns the payload to deliver, or the outcome that ends the attempt.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }

        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            tracing::debug!("Contact form failed validation");
            return Err(SubmitOutcome::Invalid);
        }

        self.submitting = true;
        Ok(self.form.clone())
    }

    /// Record the delivery result. Fields are cleared on success.
    pub fn finish_submit(&mut self, delivered: bool) -> SubmitOutcome {
        self.submitting = false;
        if delivered {
            self.status = SubmitStatus::Success;
            self.form.clear();
            SubmitOutcome::Sent
        } else {
            self.status = SubmitStatus::Error;
            SubmitOutcome::Failed
        }
    }

    /// One full attempt: validate, deliver once, record the status
    #[tracing::instrument(skip_all)]
    pub async fn submit(&mut self, transport: &dyn ContactTransport) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        let delivered = match transport.deliver(&payload).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Contact delivery failed: {}", e);
                false
            }
        };
        self.finish_submit(delivered)
    }

    /// [`submit`](Self::submit), unless an identical message from another
    /// session is still being delivered. That attempt ends as `Busy` with
    /// this session left in flight.
    pub async fn submit_once(
        &mut self,
        transport: &dyn ContactTransport,
        in_flight: &InFlight,
    ) -> SubmitOutcome {
        let Some(_claim) = in_flight.try_claim(&self.form) else {
            return match self.begin_submit() {
                Err(outcome) => outcome,
                Ok(_) => {
                    tracing::info!("Identical message already in flight");
                    SubmitOutcome::Busy
                }
            };
        };
        self.submit(transport).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{EMAIL_INVALID, MESSAGE_REQUIRED, NAME_REQUIRED};
    use crate::error::ContactError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and answers with a fixed result
    struct FakeTransport {
        calls: AtomicUsize,
        fail: Option<fn() -> ContactError>,
    }

    impl FakeTransport {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: None,
            }
        }

        fn failing(fail: fn() -> ContactError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: Some(fail),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContactTransport for FakeTransport {
        async fn deliver(&self, _form: &ContactForm) -> Result<(), ContactError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail {
                Some(make) => Err(make()),
                None => Ok(()),
            }
        }
    }

    fn filled() -> ContactSession {
        let mut session = ContactSession::new();
        session.edit(Field::Name, "Jane Doe");
        session.edit(Field::Email, "jane@example.com");
        session.edit(Field::Subject, "");
        session.edit(Field::Message, "Hello");
        session
    }

    #[tokio::test]
    async fn test_duplicate_in_flight_is_busy() {
        let transport = FakeTransport::ok();
        let in_flight = InFlight::new();
        let held = in_flight.try_claim(filled().form()).unwrap();

        let mut session = filled();
        assert_eq!(
            session.submit_once(&transport, &in_flight).await,
            SubmitOutcome::Busy
        );
        assert!(session.is_submitting());
        assert_eq!(transport.calls(), 0);

        drop(held);
        let mut session = filled();
        assert_eq!(
            session.submit_once(&transport, &in_flight).await,
            SubmitOutcome::Sent
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_duplicate_reports_errors_not_busy() {
        let transport = FakeTransport::ok();
        let in_flight = InFlight::new();
        let _held = in_flight.try_claim(&ContactForm::default()).unwrap();

        let mut session = ContactSession::new();
        assert_eq!(
            session.submit_once(&transport, &in_flight).await,
            SubmitOutcome::Invalid
        );
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_status_idle_before_submit() {
        let session = ContactSession::new();
        assert_eq!(session.status(), SubmitStatus::Idle);
        assert!(!session.is_submitting());
        assert_eq!(session.status().message(), None);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let transport = FakeTransport::ok();
        let mut session = ContactSession::new();
        session.edit(Field::Email, "not-an-email");

        assert_eq!(session.submit(&transport).await, SubmitOutcome::Invalid);
        assert_eq!(transport.calls(), 0);
        assert_eq!(session.errors().name, NAME_REQUIRED);
        assert_eq!(session.errors().email, EMAIL_INVALID);
        assert_eq!(session.errors().message, MESSAGE_REQUIRED);
        assert_eq!(session.status(), SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_valid_form_sends_exactly_once() {
        let transport = FakeTransport::ok();
        let mut session = filled();

        assert_eq!(session.submit(&transport).await, SubmitOutcome::Sent);
        assert_eq!(transport.calls(), 1);
        assert_eq!(session.status(), SubmitStatus::Success);
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let transport = FakeTransport::ok();
        let mut session = filled();
        session.submit(&transport).await;
        assert_eq!(session.form(), &ContactForm::default());
    }

    #[tokio::test]
    async fn test_rejected_response_sets_error() {
        let transport = FakeTransport::failing(|| ContactError::Rejected(503));
        let mut session = filled();

        assert_eq!(session.submit(&transport).await, SubmitOutcome::Failed);
        assert_eq!(session.status(), SubmitStatus::Error);
        assert_eq!(transport.calls(), 1);
        // fields kept so the user can resubmit
        assert_eq!(session.form().name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_transport_error_sets_error() {
        let transport =
            FakeTransport::failing(|| ContactError::Transport("connection refused".into()));
        let mut session = filled();
        session.submit(&transport).await;
        assert_eq!(session.status(), SubmitStatus::Error);
        assert_eq!(session.status().message(), Some(ERROR_MESSAGE));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_busy() {
        let mut session = filled();
        assert!(session.begin_submit().is_ok());
        assert!(session.is_submitting());
        assert_eq!(session.begin_submit(), Err(SubmitOutcome::Busy));

        assert_eq!(session.finish_submit(true), SubmitOutcome::Sent);
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_edit_after_success_resets_status() {
        let transport = FakeTransport::ok();
        let mut session = filled();
        session.submit(&transport).await;
        assert_eq!(session.status(), SubmitStatus::Success);

        session.edit(Field::Name, "J");
        assert_eq!(session.status(), SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_errors_recomputed_on_each_submit_not_on_edit() {
        let transport = FakeTransport::ok();
        let mut session = ContactSession::new();
        session.submit(&transport).await;
        assert_eq!(session.errors().name, NAME_REQUIRED);

        session.edit(Field::Name, "Jane Doe");
        assert_eq!(session.errors().name, NAME_REQUIRED);

        session.edit(Field::Email, "jane@example.com");
        session.edit(Field::Message, "Hello");
        assert_eq!(session.submit(&transport).await, SubmitOutcome::Sent);
        assert!(session.errors().is_empty());
    }
}
