use anyhow::{bail, Context};
use clap::Subcommand;
use folio_client::{ContactClient, ContactForm, ContactFormFields, MessageKind};
use folio_config::Config;
use url::Url;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit the contact form like a visitor of the site would
    Send {
        /// Url of the form handler [default: the configured http address]
        #[arg(long)]
        url: Option<Url>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                url,
                name,
                email,
                subject,
                message,
            } => {
                let fields = ContactFormFields {
                    name,
                    email,
                    subject,
                    message,
                };
                send(config, url, fields).await
            }
        }
    }
}

async fn send(config: Config, url: Option<Url>, fields: ContactFormFields) -> anyhow::Result<()> {
    let url = match url {
        Some(url) => url,
        None => format!("http://{}/contact", config.http.address)
            .parse()
            .context("Failed to build form handler url")?,
    };
    let client = ContactClient::new(url).context("Failed to create http client")?;

    let mut form = ContactForm::new(
        folio_client::form::SUBMIT_LABEL,
        config.contact.acknowledgement_url,
    );
    form.fields = fields;

    let navigation = form.submit(&client).await;

    if !form.errors().is_empty() {
        for (field, message) in form.errors().iter() {
            eprintln!("{}: {message}", field.as_str());
        }
        bail!("The contact form was not sent");
    }

    let Some(message) = form.message() else {
        bail!("The contact form was not sent");
    };
    println!("{}", message.text.replace("<br>", "\n"));

    if let Some(navigation) = navigation {
        println!(
            "Continue to {} in {}s",
            navigation.url,
            navigation.delay.as_secs()
        );
    }

    match message.kind {
        MessageKind::Success => Ok(()),
        MessageKind::Error => bail!("The contact form was rejected"),
    }
}
