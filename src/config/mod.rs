//! Configuration module

pub mod settings;

pub use settings::{
    DatabaseConfig, GithubConfig, LoggingConfig, ServerConfig, Settings, WebhooksConfig,
};
