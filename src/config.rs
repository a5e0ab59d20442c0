use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_log_filename")]
    pub filename: String,
}

/// How to talk to the portal. Credentials never live here.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// District portal used when the caller does not pass one.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Tenant selector posted as the `Database` login field.
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    #[serde(default = "default_marking_period")]
    pub marking_period: u32,
}

/// Result caching for long-lived embedders. Off unless asked for.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub portal: PortalConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LogConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            database: default_database(),
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
            max_redirects: default_max_redirects(),
            marking_period: default_marking_period(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
            filename: default_log_filename(),
        }
    }
}

impl PortalConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::FileRead)?;
        let config = Self::from_toml(&content)?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.portal.base_url {
            if base_url.is_empty() {
                return Err(ConfigError::MissingField("portal.base_url".to_string()).into());
            }
            if !base_url.starts_with("http") {
                return Err(ConfigError::InvalidValue(format!(
                    "portal.base_url must start with http(s): {}",
                    base_url
                ))
                .into());
            }
        }

        if self.portal.database.is_empty() {
            return Err(ConfigError::MissingField("portal.database".to_string()).into());
        }

        if self.portal.request_timeout == 0 {
            return Err(ConfigError::InvalidValue(
                "portal.request_timeout must be greater than 0".to_string(),
            )
            .into());
        }

        if self.portal.marking_period == 0 {
            return Err(ConfigError::InvalidValue(
                "portal.marking_period must be greater than 0".to_string(),
            )
            .into());
        }

        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "cache.ttl_secs must be greater than 0".to_string(),
            )
            .into());
        }

        crate::logging::parse_log_level(&self.logging.level)?;

        Ok(())
    }
}

fn default_database() -> String {
    "10".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    5
}

fn default_marking_period() -> u32 {
    1
}

fn default_cache_enabled() -> bool {
    false
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

fn default_log_filename() -> String {
    "hac-scraper.log".to_string()
}
