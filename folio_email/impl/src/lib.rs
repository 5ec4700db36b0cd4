use anyhow::anyhow;
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_utils::Apply;
use lettre::{
    message::{header, MessageBuilder, SinglePart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

pub mod template;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    /// Creates the SMTP connection pool. No connection is opened until the
    /// first message is sent or [`EmailService::ping`] is called.
    pub fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

fn build_message(default_sender: &EmailAddressWithName, email: Email) -> anyhow::Result<Message> {
    Message::builder()
        .from(email.sender.unwrap_or_else(|| default_sender.clone()).0)
        .to(email.recipient.0)
        .apply_map(email.reply_to, |builder, reply_to| {
            MessageBuilder::reply_to(builder, reply_to.0)
        })
        .subject(email.subject)
        .singlepart(
            SinglePart::builder()
                .header(match email.content_type {
                    ContentType::Text => header::ContentType::TEXT_PLAIN,
                    ContentType::Html => header::ContentType::TEXT_HTML,
                })
                .body(email.body),
        )
        .map_err(Into::into)
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = build_message(&self.from, email)?;
        debug!(envelope = ?message.envelope(), "sending email");

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
