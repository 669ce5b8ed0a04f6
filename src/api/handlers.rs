//! HTTP request handlers

use crate::api::models::{HealthResponse, ModelsListResponse};
use crate::error::{AppError, Result};
use crate::ui;
use crate::webhook::{WebhookHandler, WebhookRequest};
use crate::AppState;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::{Html, Response};
use axum::Json;
use std::sync::Arc;
use tracing::info;

/// Upper bound on inbound webhook payloads (1 MiB)
const MAX_WEBHOOK_BODY_BYTES: usize = 1024 * 1024;

/// List all models from the bundled catalog
#[utoipa::path(
    get,
    path = "/models",
    tag = "Models",
    responses(
        (status = 200, description = "Full static model list", body = ModelsListResponse)
    )
)]
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ModelsListResponse> {
    Json(ModelsListResponse {
        models: state.catalog.models().to_vec(),
    })
}

/// Accept a beta submission and forward it to the beta webhook handler
#[utoipa::path(
    post,
    path = "/api/beta",
    tag = "Webhooks",
    responses(
        (status = 200, description = "Handler response, returned verbatim"),
        (status = 502, description = "The external handler failed")
    )
)]
pub async fn submit_beta(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response> {
    info!("Received beta submission");
    forward(state.beta_webhook.as_ref(), request).await
}

/// Accept a featured submission and forward it to the featured webhook handler
#[utoipa::path(
    post,
    path = "/api/featured",
    tag = "Webhooks",
    responses(
        (status = 200, description = "Handler response, returned verbatim"),
        (status = 502, description = "The external handler failed")
    )
)]
pub async fn submit_featured(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response> {
    info!("Received featured submission");
    forward(state.featured_webhook.as_ref(), request).await
}

/// Pass the raw request to a webhook handler and return its response verbatim.
///
/// The boundary enforces nothing about the payload; failure semantics live
/// in the handler. A handler error surfaces as 502, never a crash.
async fn forward(handler: &dyn WebhookHandler, request: Request) -> Result<Response> {
    let (parts, body) = request.into_parts();

    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = axum::body::to_bytes(body, MAX_WEBHOOK_BODY_BYTES)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {}", e)))?
        .to_vec();

    let upstream = handler.handle(WebhookRequest { headers, body }).await?;

    let status = StatusCode::from_u16(upstream.status)
        .map_err(|_| AppError::Upstream(format!("Invalid upstream status {}", upstream.status)))?;

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = upstream.content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(upstream.body))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database_reachable = state.db.health_check().await;

    Json(HealthResponse {
        status: if database_reachable {
            "healthy"
        } else {
            "degraded"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database_reachable,
    })
}

/// Static footer fragment
#[utoipa::path(
    get,
    path = "/fragments/footer",
    tag = "Fragments",
    responses(
        (status = 200, description = "Footer markup", body = String, content_type = "text/html")
    )
)]
pub async fn footer_fragment() -> Html<&'static str> {
    Html(ui::FOOTER_HTML)
}
