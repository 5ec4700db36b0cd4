use std::{future::Future, net::IpAddr};

use folio_models::contact::{ContactSubmission, ContactValidationErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate a contact form submission and notify the site owner.
    ///
    /// Resolves once the owner notification has been handed to the mail
    /// server. The auto-reply to the author is sent in the background and its
    /// outcome does not affect the result.
    fn submit(
        &self,
        submission: ContactSubmission,
        client_ip: Option<IpAddr>,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Invalid contact form submission.")]
    Invalid(ContactValidationErrors),
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        client_ip: Option<IpAddr>,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(client_ip),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
