//! Client side of the contact form: checks the fields before they are sent,
//! posts them to the form handler and tracks what the form shows meanwhile.

use std::sync::LazyLock;

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

pub use form::{ContactForm, ContactFormFields, DisplayedMessage, MessageKind, Navigation};
pub use precheck::{precheck, FieldErrors};

pub mod form;
pub mod precheck;

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("folio-client/{}", env!("CARGO_PKG_VERSION")));

/// What the form handler made of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success(String),
    Failure(String),
    /// No usable response was received.
    TransportError,
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    action: Url,
}

#[derive(Deserialize)]
struct OutcomeResponse {
    success: bool,
    message: String,
}

impl ContactClient {
    /// `action` is the url the form is posted to.
    pub fn new(action: Url) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()?;
        Ok(Self::with_http_client(http, action))
    }

    pub fn with_http_client(http: reqwest::Client, action: Url) -> Self {
        Self { http, action }
    }

    pub fn action(&self) -> &Url {
        &self.action
    }

    /// Posts the form fields once. The handler answers with a structured
    /// outcome for every status code, so the status itself is not inspected.
    #[tracing::instrument(level = "debug", skip_all, fields(action = %self.action))]
    pub async fn submit(&self, fields: &ContactFormFields) -> SubmitOutcome {
        let response = match self.http.post(self.action.clone()).form(fields).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("Failed to send contact form: {err}");
                return SubmitOutcome::TransportError;
            }
        };

        let status = response.status();
        match response.json::<OutcomeResponse>().await {
            Ok(OutcomeResponse {
                success: true,
                message,
            }) => SubmitOutcome::Success(message),
            Ok(OutcomeResponse {
                success: false,
                message,
            }) => {
                debug!(%status, "contact form was not accepted");
                SubmitOutcome::Failure(message)
            }
            Err(err) => {
                warn!(%status, "Failed to parse contact form response: {err}");
                SubmitOutcome::TransportError
            }
        }
    }
}
