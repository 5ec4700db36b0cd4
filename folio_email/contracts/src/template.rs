use std::future::Future;

use folio_models::email_address::EmailAddressWithName;
use folio_templates_contracts::{ContactAutoReplyTemplate, ContactNotificationTemplate};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    /// Notify the site owner about a new contact form submission.
    fn send_contact_notification(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        subject: String,
        data: &ContactNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Acknowledge a submission to its author, sent on behalf of `sender`.
    fn send_contact_auto_reply(
        &self,
        recipient: EmailAddressWithName,
        sender: EmailAddressWithName,
        data: &ContactAutoReplyTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_contact_notification(
        mut self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        subject: String,
        data: ContactNotificationTemplate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_send_contact_notification()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(subject),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_send_contact_auto_reply(
        mut self,
        recipient: EmailAddressWithName,
        sender: EmailAddressWithName,
        data: ContactAutoReplyTemplate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_send_contact_auto_reply()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(sender),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
