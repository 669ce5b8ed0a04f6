//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub webhooks: WebhooksConfig,
    #[serde(default)]
    pub github: GithubConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database client configuration.
///
/// Two credential naming surfaces exist across deployments:
/// `NEXT_PUBLIC_SUPABASE_URL`/`NEXT_PUBLIC_SUPABASE_KEY` and
/// `PUBLIC_SUPABASE_URL`/`PRIVATE_SUPABASE_KEY`. Both are read at load
/// time, with the `NEXT_PUBLIC_*` pair taking precedence.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_db_timeout")]
    pub timeout_ms: u64,
}

fn default_db_timeout() -> u64 {
    10000
}

/// Outbound webhook targets
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebhooksConfig {
    /// Discord webhook URL for beta submissions
    #[serde(default)]
    pub beta_url: String,
    /// Discord webhook URL for featured submissions
    #[serde(default)]
    pub featured_url: String,
    #[serde(default = "default_webhook_timeout")]
    pub timeout_ms: u64,
}

fn default_webhook_timeout() -> u64 {
    15000
}

/// Source-control integration, consumed by release-sync tooling
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GithubConfig {
    #[serde(default)]
    pub token: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "plain".to_string()
}

/// First non-empty value among the named environment variables
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
}

impl Settings {
    /// Load settings from the default configuration file and environment
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/service.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path(path: &str) -> Result<Self> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("database.timeout_ms", default_db_timeout() as i64)?
            .set_default("webhooks.timeout_ms", default_webhook_timeout() as i64)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("MODEL_HUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;
        settings.apply_env_credentials();
        Ok(settings)
    }

    /// Overlay the fixed-name credential and webhook environment variables.
    ///
    /// File and `MODEL_HUB__`-prefixed values win; the fixed names only
    /// fill fields that are still empty.
    fn apply_env_credentials(&mut self) {
        if self.database.url.is_empty() {
            if let Some(url) = first_env(&["NEXT_PUBLIC_SUPABASE_URL", "PUBLIC_SUPABASE_URL"]) {
                self.database.url = url;
            }
        }
        if self.database.key.is_empty() {
            if let Some(key) = first_env(&["NEXT_PUBLIC_SUPABASE_KEY", "PRIVATE_SUPABASE_KEY"]) {
                self.database.key = key;
            }
        }
        if self.webhooks.beta_url.is_empty() {
            if let Some(url) = first_env(&["DISCORD_BETA_WEBHOOK_URL"]) {
                self.webhooks.beta_url = url;
            }
        }
        if self.webhooks.featured_url.is_empty() {
            if let Some(url) = first_env(&["DISCORD_FEATURED_WEBHOOK_URL"]) {
                self.webhooks.featured_url = url;
            }
        }
        if self.github.token.is_empty() {
            if let Some(token) = first_env(&["GITHUB_TOKEN"]) {
                self.github.token = token;
            }
        }
    }

    /// Validate the configuration, failing fast before any traffic is served
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.database.url.is_empty() {
            return Err(AppError::MissingConfig(
                "database.url (set NEXT_PUBLIC_SUPABASE_URL or PUBLIC_SUPABASE_URL)".to_string(),
            ));
        }
        if self.database.key.is_empty() {
            return Err(AppError::MissingConfig(
                "database.key (set NEXT_PUBLIC_SUPABASE_KEY or PRIVATE_SUPABASE_KEY)".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            database: DatabaseConfig {
                url: String::new(),
                key: String::new(),
                timeout_ms: default_db_timeout(),
            },
            webhooks: WebhooksConfig {
                beta_url: String::new(),
                featured_url: String::new(),
                timeout_ms: default_webhook_timeout(),
            },
            github: GithubConfig::default(),
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
