//! Webhook forwarding boundary
//!
//! The ingestion routes are thin glue: receive a request, hand it to a
//! [`WebhookHandler`], return the handler's response verbatim. The trait is
//! the seam that keeps the boundary mockable; `DiscordForwarder` is the
//! production implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{AppError, Result};

/// Inbound webhook request, transient to a single invocation.
///
/// Headers travel as string pairs so the trait stays independent of any
/// particular HTTP crate's header types.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl WebhookRequest {
    /// First header value matching the name, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response produced by a webhook handler, returned to the caller verbatim
#[derive(Debug, Clone)]
pub struct WebhookResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// External webhook handler the ingestion routes delegate to
#[async_trait]
pub trait WebhookHandler: Send + Sync {
    /// Process one inbound request. Called exactly once per route invocation.
    async fn handle(&self, request: WebhookRequest) -> Result<WebhookResponse>;
}

/// Forwards inbound requests unmodified to a Discord webhook URL
pub struct DiscordForwarder {
    client: Client,
    target_url: String,
}

impl DiscordForwarder {
    pub fn new(target_url: String, timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, target_url })
    }

    /// Target URL this forwarder posts to
    pub fn target_url(&self) -> &str {
        &self.target_url
    }
}

#[async_trait]
impl WebhookHandler for DiscordForwarder {
    async fn handle(&self, request: WebhookRequest) -> Result<WebhookResponse> {
        debug!(
            target = %self.target_url,
            bytes = request.body.len(),
            "Forwarding webhook"
        );

        let content_type = request.header("content-type").map(String::from);
        let mut outbound = self.client.post(&self.target_url).body(request.body);

        if let Some(content_type) = content_type {
            if let Ok(value) = HeaderValue::from_str(&content_type) {
                outbound = outbound.header(CONTENT_TYPE, value);
            }
        }

        let response = outbound
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Forwarding failed: {}", e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read upstream body: {}", e)))?
            .to_vec();

        Ok(WebhookResponse {
            status,
            content_type,
            body,
        })
    }
}
