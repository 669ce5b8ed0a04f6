//! Application error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or validation failure
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Required configuration value missing at startup
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// Outbound HTTP client failure
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The external webhook handler failed
    #[error("Upstream webhook error: {0}")]
    Upstream(String),

    /// Database client failure
    #[error("Database error: {0}")]
    Database(String),

    /// Bundled catalog data failed to load
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Config(_)
            | AppError::MissingConfig(_)
            | AppError::Catalog(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) | AppError::Upstream(_) | AppError::Database(_) => {
                StatusCode::BAD_GATEWAY
            }
        };

        error!(status = %status, error = %self, "Request failed");

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        let response = AppError::Upstream("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_config_maps_to_internal_error() {
        let response = AppError::MissingConfig("database.url".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
