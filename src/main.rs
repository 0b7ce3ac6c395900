use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use route_catalog_explorer::app_state::build_app_state;
use route_catalog_explorer::config::AppConfig;
use route_catalog_explorer::core::client::catalog_client::HttpCatalogSource;
use route_catalog_explorer::domain::catalog::service::catalog_bootstrap_service::spawn_catalog_bootstrap;
use route_catalog_explorer::{debug, logging, routes};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = logging::init_tracing(config.log_dir.as_deref());

    if config.debug_mode {
        debug::run_debug(&config).await;
        return Ok(());
    }

    let state = build_app_state();

    // The one upstream request for this process.
    let fetch = spawn_catalog_bootstrap(
        Arc::new(HttpCatalogSource::new(config.api_host.clone())),
        state.catalog_service.manager(),
    );

    let app = routes::app_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 API explorer listening on http://{}", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    fetch.abort();

    if let Err(e) = &served {
        error!(?e, "Server error");
    }
    served.map_err(Into::into)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
