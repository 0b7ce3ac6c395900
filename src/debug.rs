use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::client::catalog_client::{CatalogSource, HttpCatalogSource};
use crate::domain::catalog::service::catalog_bootstrap_service::summarize;
use crate::view::route_catalog_view::RouteCatalogView;

/// Runs only when in EXPLORER_DEBUG_MODE: one foreground fetch, then a
/// text dump of what the explorer would show.
pub async fn run_debug(config: &AppConfig) {
    info!("🔧 Debug mode: fetching route catalog from {}", config.api_host);

    let source = HttpCatalogSource::new(config.api_host.clone());
    match source.fetch().await {
        Ok(catalog) => {
            for line in summarize(&catalog) {
                info!("{}", line);
            }
            let view = RouteCatalogView::new(Some(Arc::new(catalog)));
            info!("Rendered explorer:\n{}", view.render_text());
        }
        Err(e) => warn!(error = %e, "Catalog fetch failed; explorer would stay in loading state"),
    }

    info!("Debug tasks completed. Exiting...");
}
