use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::email_address::{EmailAddress, EmailAddressWithName};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable with additional config files, separated by `:`.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Merges the given toml files. Values in later files take precedence.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// The bundled default config followed by the files listed in
/// [`CONFIG_PATH_ENV`].
pub fn paths_from_env() -> Vec<PathBuf> {
    let extra = std::env::var_os(CONFIG_PATH_ENV).unwrap_or_default();
    std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(std::env::split_paths(&extra).filter(|path| !path.as_os_str().is_empty()))
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
    pub real_ip: Option<HttpRealIpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub email: EmailAddress,
    pub name: String,
    pub subject_prefix: String,
    pub home_url: String,
    pub acknowledgement_url: String,
    pub log_file: Option<PathBuf>,
}

impl ContactConfig {
    /// The site owner as `Name <email>`.
    pub fn owner(&self) -> EmailAddressWithName {
        self.email.clone().with_name(self.name.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(config.contact.subject_prefix, "Portfolio Contact: ");
        assert_eq!(config.contact.home_url, "index.html");
        assert_eq!(config.contact.acknowledgement_url, "thank-you.html");
        assert_eq!(config.contact.log_file, None);
        assert_eq!(*config.health.cache_ttl, std::time::Duration::from_secs(10));
        assert!(config.http.real_ip.is_none());
    }

    #[test]
    fn later_files_override() {
        // Arrange
        let path = std::env::temp_dir().join(format!("folio-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            [contact]
            name = "Jo Doe"
            log_file = "/var/log/folio/contact.csv"

            [http.real_ip]
            header = "X-Real-Ip"
            set_from = "127.0.0.1"
            "#,
        )
        .unwrap();

        // Act
        let result = load(&[Path::new(DEFAULT_CONFIG_PATH), path.as_path()]);
        std::fs::remove_file(&path).unwrap();

        // Assert
        let config = result.unwrap();
        assert_eq!(config.contact.name, "Jo Doe");
        assert_eq!(
            config.contact.log_file,
            Some(PathBuf::from("/var/log/folio/contact.csv"))
        );
        assert_eq!(config.contact.subject_prefix, "Portfolio Contact: ");
        let real_ip = config.http.real_ip.unwrap();
        assert_eq!(real_ip.header, "X-Real-Ip");
        assert_eq!(real_ip.set_from, IpAddr::from([127, 0, 0, 1]));
    }

    #[test]
    fn owner() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.contact.owner().email(), config.contact.email.as_str());
        assert_eq!(config.contact.owner().name(), Some(config.contact.name.as_str()));
    }

    #[test]
    fn missing_file() {
        let result = load(&[Path::new("/nonexistent/folio.toml")]);
        assert!(result.is_err());
    }
}
