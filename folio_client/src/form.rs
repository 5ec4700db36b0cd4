use std::time::Duration;

use folio_models::contact::ContactField;
use serde::Serialize;

use crate::{precheck, ContactClient, FieldErrors, SubmitOutcome};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";
pub const NETWORK_ERROR_MESSAGE: &str =
    "❌ Network error. Please check your connection and try again.";
pub const ACKNOWLEDGEMENT_PAGE: &str = "thank-you.html";
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Go to `url` once `delay` has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

/// State of a contact form while the visitor fills and submits it.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: ContactFormFields,
    errors: FieldErrors,
    submit: SubmitControl,
    original_label: String,
    message: Option<DisplayedMessage>,
    acknowledgement_url: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL, ACKNOWLEDGEMENT_PAGE)
    }
}

impl ContactForm {
    pub fn new(label: impl Into<String>, acknowledgement_url: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            fields: ContactFormFields::default(),
            errors: FieldErrors::default(),
            submit: SubmitControl {
                enabled: true,
                label: label.clone(),
            },
            original_label: label,
            message: None,
            acknowledgement_url: acknowledgement_url.into(),
        }
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn message(&self) -> Option<&DisplayedMessage> {
        self.message.as_ref()
    }

    /// Replaces the inline errors with the result of [`precheck`].
    pub fn check(&mut self) -> bool {
        self.errors = precheck(&self.fields).err().unwrap_or_default();
        self.errors.is_empty()
    }

    /// Returns `false` if a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if !self.submit.enabled {
            return false;
        }
        self.submit.enabled = false;
        self.submit.label = BUSY_LABEL.into();
        true
    }

    /// Shows the outcome of a submission and unlocks the form again. A
    /// successful submission clears the fields and leads to the
    /// acknowledgement page.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Option<Navigation> {
        self.submit.enabled = true;
        self.submit.label.clone_from(&self.original_label);

        let (kind, text) = match outcome {
            SubmitOutcome::Success(text) => (MessageKind::Success, text),
            SubmitOutcome::Failure(text) => (MessageKind::Error, text),
            SubmitOutcome::TransportError => (MessageKind::Error, NETWORK_ERROR_MESSAGE.into()),
        };
        self.message = Some(DisplayedMessage { kind, text });

        (kind == MessageKind::Success).then(|| {
            self.fields = ContactFormFields::default();
            Navigation {
                url: self.acknowledgement_url.clone(),
                delay: REDIRECT_DELAY,
            }
        })
    }

    /// Checks the fields and, if they pass, sends them with `client`.
    pub async fn submit(&mut self, client: &ContactClient) -> Option<Navigation> {
        if !self.check() || !self.begin_submit() {
            return None;
        }
        let outcome = client.submit(&self.fields).await;
        self.finish_submit(outcome)
    }
}
