use std::{path::PathBuf, sync::Arc};

use folio_api_rest::{RestServerConfig, RestServerRealIpConfig};
use folio_config::Config;
use folio_core_contact_impl::ContactFeatureConfig;
use folio_core_health_impl::HealthFeatureConfig;
use folio_persistence_csv::CsvContactLogRepository;
use types::{
    ContactFeature, ContactLog, Email, HealthFeature, RestServer, Template, TemplateEmail, Time,
};

pub mod types;

/// Builds the services of the application from the configuration and the
/// external connections.
#[derive(Debug, Clone)]
pub struct Provider {
    config: ConfigProvider,
    email: Email,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self { config, email }
    }

    pub fn rest_server(&self) -> anyhow::Result<RestServer> {
        Ok(RestServer::new(
            self.health_feature(),
            self.contact_feature()?,
            self.config.rest_server_config.clone(),
        ))
    }

    pub fn contact_feature(&self) -> anyhow::Result<ContactFeature> {
        Ok(ContactFeature::new(
            self.time(),
            self.template_email()?,
            self.contact_log(),
            self.config.contact_feature_config.clone(),
        ))
    }

    pub fn health_feature(&self) -> HealthFeature {
        HealthFeature::new(
            self.time(),
            self.email.clone(),
            self.config.health_feature_config.clone(),
        )
    }

    fn template_email(&self) -> anyhow::Result<TemplateEmail> {
        Ok(TemplateEmail::new(self.email.clone(), Template::new()?))
    }

    fn contact_log(&self) -> ContactLog {
        self.config
            .contact_log_path
            .clone()
            .map(CsvContactLogRepository::new)
    }

    fn time(&self) -> Time {
        Time::default()
    }
}

/// The parts of the configuration the services are built from.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    rest_server_config: RestServerConfig,
    contact_feature_config: ContactFeatureConfig,
    health_feature_config: HealthFeatureConfig,
    contact_log_path: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
            home_url: config.contact.home_url.as_str().into(),
            contact_email: config.contact.email.clone(),
        };

        let contact_feature_config = ContactFeatureConfig {
            owner: config.contact.owner().into(),
            subject_prefix: config.contact.subject_prefix.as_str().into(),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Self {
            rest_server_config,
            contact_feature_config,
            health_feature_config,
            contact_log_path: config.contact.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use folio_config::DEFAULT_CONFIG_PATH;

    use super::*;

    #[tokio::test]
    async fn provide_rest_server() {
        let config = folio_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        let email = crate::email::connect(&config.email).unwrap();
        let provider = Provider::new(ConfigProvider::new(&config), email);

        provider.rest_server().unwrap();
    }
}
