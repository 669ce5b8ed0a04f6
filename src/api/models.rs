//! API response models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Model listing response: the bundled catalog, passed through unmodified
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ModelsListResponse {
    /// Opaque model descriptors in bundled order
    #[schema(value_type = Vec<Object>)]
    pub models: Vec<Value>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether the database REST endpoint answered the last probe
    pub database_reachable: bool,
}
