//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::{HealthResponse, ModelsListResponse};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Model Hub API",
        version = "0.2.0",
        description = "Model directory backend: static model listing and webhook submission forwarding.",
        license(name = "MIT"),
    ),
    paths(
        handlers::list_models,
        handlers::submit_beta,
        handlers::submit_featured,
        handlers::health_check,
        handlers::footer_fragment,
    ),
    components(schemas(ModelsListResponse, HealthResponse)),
    tags(
        (name = "Models", description = "Model listing endpoints"),
        (name = "Webhooks", description = "Submission forwarding endpoints"),
        (name = "Health", description = "Health and monitoring endpoints"),
        (name = "Fragments", description = "Presentational UI fragments"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    Router::new()
        // Listing endpoint
        .route("/models", get(handlers::list_models))
        // Webhook ingestion endpoints
        .route("/api/beta", post(handlers::submit_beta))
        .route("/api/featured", post(handlers::submit_featured))
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Presentational fragments
        .route("/fragments/footer", get(handlers::footer_fragment))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add shared state
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
