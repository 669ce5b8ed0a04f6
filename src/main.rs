//! Main entry point for the Model Hub service

use model_hub::{
    api,
    catalog::ModelCatalog,
    config::Settings,
    db::DbClient,
    webhook::DiscordForwarder,
    AppState,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration first so logging can honor it
    let settings = Settings::load()?;
    settings.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    if settings.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    info!("Starting Model Hub service");

    // Singleton database client, constructed once for the process lifetime
    let db = Arc::new(DbClient::new(&settings.database)?);

    // Bundled model catalog, fatal if the data is bad
    let catalog = Arc::new(ModelCatalog::load()?);
    info!(models = catalog.len(), "Loaded model catalog");

    // Outbound webhook forwarders
    let beta_webhook = Arc::new(DiscordForwarder::new(
        settings.webhooks.beta_url.clone(),
        settings.webhooks.timeout_ms,
    )?);
    let featured_webhook = Arc::new(DiscordForwarder::new(
        settings.webhooks.featured_url.clone(),
        settings.webhooks.timeout_ms,
    )?);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let app_state = Arc::new(AppState {
        settings,
        db,
        catalog,
        beta_webhook,
        featured_webhook,
    });

    // Build the router
    let app = api::routes::create_router(app_state);

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
