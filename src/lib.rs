//! Model Hub Service
//!
//! Backend for the model directory site: serves the bundled model listing,
//! forwards beta/featured submissions to external webhook handlers, and
//! holds the shared database client.

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod ui;
pub mod webhook;

pub use error::{AppError, Result};

use std::sync::Arc;

use catalog::ModelCatalog;
use db::DbClient;
use webhook::WebhookHandler;

/// Application state shared across all handlers.
///
/// Everything here is constructed once at startup and never mutated; the
/// database client in particular is a process-wide singleton.
pub struct AppState {
    pub settings: config::Settings,
    pub db: Arc<DbClient>,
    pub catalog: Arc<ModelCatalog>,
    pub beta_webhook: Arc<dyn WebhookHandler>,
    pub featured_webhook: Arc<dyn WebhookHandler>,
}
