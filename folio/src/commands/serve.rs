use folio_config::Config;
use folio_email_contracts::EmailService;
use tracing::info;

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    email.ping().await?;

    if let Some(log_file) = &config.contact.log_file {
        info!("Logging contact form submissions to {}", log_file.display());
    }

    let provider = Provider::new(ConfigProvider::new(&config), email);
    provider.rest_server()?.serve().await
}
