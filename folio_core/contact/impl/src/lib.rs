use std::{net::IpAddr, sync::Arc};

use folio_core_contact_contracts::{ContactSubmitError, ContactService};
use folio_email_contracts::template::TemplateEmailService;
use folio_models::{
    contact::{ContactMessage, ContactSubmission},
    contact_log::{ContactLogRecord, ContactLogStatus},
    email_address::EmailAddressWithName,
};
use folio_persistence_contracts::ContactLogRepository;
use folio_shared_contracts::time::TimeService;
use folio_templates_contracts::{ContactAutoReplyTemplate, ContactNotificationTemplate};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Instrument};

/// e.g. `October 19, 2026, 1:05 pm`
const RECEIVED_AT_FORMAT: &str = "%B %-d, %Y, %-I:%M %P";

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Time, TemplateEmail, ContactLog> {
    time: Time,
    template_email: Arc<TemplateEmail>,
    contact_log: ContactLog,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Recipient of the notifications and sender of the auto-replies.
    pub owner: Arc<EmailAddressWithName>,
    pub subject_prefix: Arc<str>,
}

impl<Time, TemplateEmail, ContactLog> ContactFeatureServiceImpl<Time, TemplateEmail, ContactLog> {
    pub fn new(
        time: Time,
        template_email: TemplateEmail,
        contact_log: ContactLog,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            time,
            template_email: Arc::new(template_email),
            contact_log,
            config,
        }
    }
}

impl<Time, TemplateEmail, ContactLog> ContactService
    for ContactFeatureServiceImpl<Time, TemplateEmail, ContactLog>
where
    Time: TimeService,
    TemplateEmail: TemplateEmailService,
    ContactLog: ContactLogRepository,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
        client_ip: Option<IpAddr>,
    ) -> Result<(), ContactSubmitError> {
        let message = submission.validate().map_err(|errors| {
            debug!(?errors, "rejected contact form submission");
            ContactSubmitError::Invalid(errors)
        })?;

        self.deliver(message, client_ip).await.map(drop)
    }
}

impl<Time, TemplateEmail, ContactLog> ContactFeatureServiceImpl<Time, TemplateEmail, ContactLog>
where
    Time: TimeService,
    TemplateEmail: TemplateEmailService,
    ContactLog: ContactLogRepository,
{
    /// Sends the owner notification and, if it was accepted, starts the
    /// auto-reply. Returns the handle of the auto-reply task.
    async fn deliver(
        &self,
        message: ContactMessage,
        client_ip: Option<IpAddr>,
    ) -> Result<JoinHandle<()>, ContactSubmitError> {
        let now = self.time.now();

        let notification = ContactNotificationTemplate {
            name: message.author.name.clone().into_inner(),
            email: message.author.email.to_string(),
            subject: message.subject.clone().into_inner(),
            message: message.content.clone().into_inner(),
            received_at: now.format(RECEIVED_AT_FORMAT).to_string(),
        };
        let subject = format!("{}{}", self.config.subject_prefix, *message.subject);

        let result = self
            .template_email
            .send_contact_notification(
                (*self.config.owner).clone(),
                message.author.mailbox(),
                subject,
                &notification,
            )
            .await;

        let status = match result {
            Ok(true) => ContactLogStatus::Sent,
            _ => ContactLogStatus::Failed,
        };
        let record = ContactLogRecord {
            timestamp: now,
            client_ip,
            message,
            status,
        };
        if let Err(err) = self.contact_log.append(&record).await {
            warn!("Failed to append to contact log: {err:#}");
        }

        match result {
            Ok(true) => {}
            Ok(false) => {
                warn!("contact notification was rejected by the smtp server");
                return Err(ContactSubmitError::Send);
            }
            Err(err) => return Err(err.context("Failed to send contact notification").into()),
        }

        info!(client_ip = ?record.client_ip, "forwarded contact form submission");

        Ok(self.spawn_auto_reply(&record.message))
    }

    fn spawn_auto_reply(&self, message: &ContactMessage) -> JoinHandle<()> {
        let template_email = Arc::clone(&self.template_email);
        let owner = (*self.config.owner).clone();
        let recipient = message.author.mailbox();
        let data = ContactAutoReplyTemplate {
            name: message.author.name.clone().into_inner(),
            subject: message.subject.clone().into_inner(),
            owner_name: owner.name().unwrap_or(owner.email()).into(),
            owner_email: owner.email().into(),
        };

        tokio::spawn(
            async move {
                match template_email
                    .send_contact_auto_reply(recipient, owner, &data)
                    .await
                {
                    Ok(true) => debug!("sent auto-reply"),
                    Ok(false) => warn!("auto-reply was rejected by the smtp server"),
                    Err(err) => warn!("Failed to send auto-reply: {err:#}"),
                }
            }
            .in_current_span(),
        )
    }
}
