use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use super::mailer::Mailer;
use super::{ContactFields, Notification};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in progress")]
    InFlight,

    #[error("{0}")]
    Invalid(String),
}

/// The `submitting` flag, shared by every request through `AppState`.
/// While a send is in flight further submits are rejected.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    submitting: Arc<AtomicBool>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag, or fails if it is already raised.
    pub fn try_claim(&self) -> Result<SubmitPermit, SubmitRejected> {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmitRejected::InFlight)?;
        Ok(SubmitPermit {
            submitting: self.submitting.clone(),
        })
    }

    #[cfg(test)]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }
}

/// Holds the raised flag; dropping it lowers the flag again.
#[derive(Debug)]
pub struct SubmitPermit {
    submitting: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.submitting.store(false, Ordering::Release);
    }
}

/// The contact form's state: current field values plus the gate that
/// suppresses duplicate submits while a send is in flight.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    gate: SubmitGate,
}

impl ContactForm {
    pub fn new(fields: ContactFields, gate: SubmitGate) -> Self {
        Self { fields, gate }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Validates and raises the `submitting` flag, returning the payload to
    /// send and the permit that keeps the flag raised.
    pub fn begin_submit(&self) -> Result<(ContactFields, SubmitPermit), SubmitRejected> {
        self.fields.validate().map_err(SubmitRejected::Invalid)?;
        let permit = self.gate.try_claim()?;
        Ok((self.fields.clone(), permit))
    }

    /// Lowers the flag. A successful send clears the form; a failed one keeps
    /// every field so the visitor can retry.
    pub fn finish_submit<E: fmt::Display>(
        &mut self,
        permit: SubmitPermit,
        outcome: Result<(), E>,
    ) -> Notification {
        drop(permit);
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                Notification::sent()
            }
            Err(e) => {
                warn!("Contact submission failed: {e}");
                Notification::failed()
            }
        }
    }

    pub async fn submit(&mut self, mailer: &dyn Mailer) -> Result<Notification, SubmitRejected> {
        let (payload, permit) = self.begin_submit()?;
        let submission_id = Uuid::new_v4();
        info!(%submission_id, "Forwarding contact submission from {}", payload.email.trim());
        let outcome = mailer.send(&payload).await;
        Ok(self.finish_submit(permit, outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::contact::mailer::MailError;
    use crate::contact::NotificationKind;

    struct CountingMailer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingMailer {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl Mailer for CountingMailer {
        async fn send(&self, _submission: &ContactFields) -> Result<(), MailError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(MailError::Api {
                    status: 503,
                    message: "unavailable".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Let's talk".into(),
        }
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let mailer = CountingMailer::new(false);
        let gate = SubmitGate::new();
        let mut form = ContactForm::new(filled(), gate.clone());
        let note = form.submit(&mailer).await.unwrap();

        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(!gate.is_submitting());
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let mailer = CountingMailer::new(true);
        let gate = SubmitGate::new();
        let mut form = ContactForm::new(filled(), gate.clone());
        let note = form.submit(&mailer).await.unwrap();

        assert_eq!(note, Notification::failed());
        assert_eq!(form.fields(), &filled());
        assert!(!gate.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_form_never_sends() {
        let mailer = CountingMailer::new(false);
        let gate = SubmitGate::new();
        let mut form = ContactForm::new(ContactFields::default(), gate.clone());
        let err = form.submit(&mailer).await.unwrap_err();

        assert!(matches!(err, SubmitRejected::Invalid(_)));
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
        assert!(!gate.is_submitting());
    }

    #[test]
    fn test_second_form_rejected_while_first_in_flight() {
        let gate = SubmitGate::new();
        let mut first = ContactForm::new(filled(), gate.clone());
        let second = ContactForm::new(filled(), gate.clone());

        let (_, permit) = first.begin_submit().unwrap();
        assert!(gate.is_submitting());
        assert!(matches!(second.begin_submit(), Err(SubmitRejected::InFlight)));

        first.finish_submit::<MailError>(permit, Ok(()));
        assert!(!gate.is_submitting());
        assert!(second.begin_submit().is_ok());
    }

    #[test]
    fn test_dropped_permit_lowers_flag() {
        let gate = SubmitGate::new();
        let permit = gate.try_claim().unwrap();
        assert_eq!(gate.try_claim().unwrap_err(), SubmitRejected::InFlight);
        drop(permit);
        assert!(gate.try_claim().is_ok());
    }
}
