use credentials::config::StoreBackend;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Deserialize, Debug)]
pub struct Listener {
    pub host: String,
    pub port: u16,
}

impl Default for Listener {
    fn default() -> Self {
        Listener {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct MetricsConfig {
    pub statsd_host: String,
    pub statsd_port: u16,
}

#[derive(Deserialize, Debug)]
pub struct LoggingConfig {
    pub sentry_dsn: String,
}

fn default_api_version() -> String {
    "2024-07".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    /// Admin API version used for the review create call.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Shared secret for application-proxy signature checks. Unset disables
    /// verification.
    pub proxy_shared_secret: Option<String>,
    /// Fixed admin API base for development against a stub endpoint.
    pub api_base: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_version: default_api_version(),
            proxy_shared_secret: None,
            api_base: None,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub listener: Listener,
    #[serde(default)]
    pub app: AppConfig,
    pub credentials: StoreBackend,
    pub metrics: Option<MetricsConfig>,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let data = serde_yaml::from_reader(file)?;

        Ok(data)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}
