use folio_email_contracts::{template::TemplateEmailService, ContentType, Email, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_templates_contracts::{
    ContactAutoReplyTemplate, ContactNotificationTemplate, Template, TemplateService,
};

#[derive(Debug, Clone)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<Email, Template> TemplateEmailServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template) -> Self {
        Self { email, template }
    }
}

impl<EmailS, Template> TemplateEmailService for TemplateEmailServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_contact_notification(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        subject: String,
        data: &ContactNotificationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(recipient, None, Some(reply_to), data, subject)
            .await
    }

    async fn send_contact_auto_reply(
        &self,
        recipient: EmailAddressWithName,
        sender: EmailAddressWithName,
        data: &ContactAutoReplyTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!(
            "Thank you for contacting {} (Re: {})",
            data.owner_name, data.subject
        );
        self.send_email(recipient, Some(sender.clone()), Some(sender), data, subject)
            .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        sender: Option<EmailAddressWithName>,
        reply_to: Option<EmailAddressWithName>,
        data: &T,
        subject: impl Into<String>,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: self.template.render(data)?,
                content_type: ContentType::Html,
                sender,
                reply_to,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use folio_email_contracts::MockEmailService;
    use folio_templates_contracts::MockTemplateService;

    use super::*;

    #[tokio::test]
    async fn contact_notification() {
        // Arrange
        let data = ContactNotificationTemplate {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            subject: "Hi!".into(),
            message: "This is a test message.".into(),
            received_at: "October 19, 2026, 1:05 pm".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "<p>Hi!</p>".into());

        let email = MockEmailService::new().with_send(
            Email {
                recipient: "owner@example.com".parse().unwrap(),
                subject: "Portfolio Contact: Hi!".into(),
                body: "<p>Hi!</p>".into(),
                content_type: ContentType::Html,
                sender: None,
                reply_to: Some("Jo <jo@x.com>".parse().unwrap()),
            },
            true,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_notification(
                "owner@example.com".parse().unwrap(),
                "Jo <jo@x.com>".parse().unwrap(),
                "Portfolio Contact: Hi!".into(),
                &data,
            )
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn contact_auto_reply() {
        // Arrange
        let data = ContactAutoReplyTemplate {
            name: "Jo".into(),
            subject: "Hi!".into(),
            owner_name: "Site Owner".into(),
            owner_email: "owner@example.com".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "<p>Thanks</p>".into());

        let owner: EmailAddressWithName = "Site Owner <owner@example.com>".parse().unwrap();
        let email = MockEmailService::new().with_send(
            Email {
                recipient: "jo@x.com".parse().unwrap(),
                subject: "Thank you for contacting Site Owner (Re: Hi!)".into(),
                body: "<p>Thanks</p>".into(),
                content_type: ContentType::Html,
                sender: Some(owner.clone()),
                reply_to: Some(owner.clone()),
            },
            false,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_auto_reply("jo@x.com".parse().unwrap(), owner, &data)
            .await;

        // Assert
        assert!(!result.unwrap());
    }
}
