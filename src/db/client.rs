//! Shared database REST client
//!
//! A thin wrapper over the hosted Postgres REST API (Supabase). The client
//! is constructed exactly once at startup from the resolved credentials and
//! shared read-only across all request handlers; it is never reconstructed
//! per call.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};

/// Process-wide database client handle
pub struct DbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DbClient {
    /// Create the client from validated configuration.
    ///
    /// Credentials are assumed present; `Settings::validate` rejects empty
    /// values before this runs. The key is never logged.
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!(url = %config.url, "Database client configured");

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.key.clone(),
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// REST endpoint URL for a table
    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Fetch all rows of a table as opaque JSON records
    pub async fn select_all(&self, table: &str) -> Result<Vec<Value>> {
        let url = self.rest_url(table);

        debug!(table = %table, "Querying database");

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .query(&[("select", "*")])
            .send()
            .await?;

        if response.status().is_success() {
            let rows = response
                .json::<Vec<Value>>()
                .await
                .map_err(|e| AppError::Database(format!("Failed to parse response: {}", e)))?;
            Ok(rows)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(AppError::Database(format!(
                "Database returned {}: {}",
                status, body
            )))
        }
    }

    /// Probe the REST endpoint; true if it answers at all
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/rest/v1/", self.base_url);
        match self.client.get(&url).headers(self.headers()).send().await {
            // 401 means the endpoint is up but the key is wrong; still reachable
            Ok(response) => response.status().is_success() || response.status().as_u16() == 401,
            Err(_) => false,
        }
    }

    /// Base URL the client is bound to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    fn test_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "https://example.supabase.co/".to_string(),
            key: "test-key".to_string(),
            timeout_ms: 1000,
        }
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = DbClient::new(&test_config()).unwrap();
        assert_eq!(client.base_url(), "https://example.supabase.co");
    }

    #[test]
    fn test_rest_url() {
        let client = DbClient::new(&test_config()).unwrap();
        assert_eq!(
            client.rest_url("models"),
            "https://example.supabase.co/rest/v1/models"
        );
    }

    #[test]
    fn test_headers_carry_api_key() {
        let client = DbClient::new(&test_config()).unwrap();
        let headers = client.headers();
        assert_eq!(headers.get("apikey").unwrap(), "test-key");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-key");
    }
}
