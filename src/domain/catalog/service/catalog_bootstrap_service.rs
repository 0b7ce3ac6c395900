use std::sync::{Arc, Weak};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::client::catalog_client::CatalogSource;
use crate::core::state::runtime::catalog::catalog_runtime_state_manager::CatalogRuntimeStateManager;
use crate::core::state::runtime::catalog::catalog_runtime_state_repository_trait::CatalogRuntimeStateRepositoryTrait;
use crate::domain::catalog::entity::RouteCatalog;
use crate::errors::FetchError;

/// Run the single catalog fetch and hand the outcome to the runtime state.
///
/// Only a weak handle to the state is held across the request; if the state
/// has been torn down by the time the response arrives, nothing is written.
pub async fn bootstrap_catalog<S, R>(
    source: &S,
    manager: Weak<CatalogRuntimeStateManager<R>>,
) -> Result<(), FetchError>
where
    S: CatalogSource + ?Sized,
    R: CatalogRuntimeStateRepositoryTrait,
{
    let outcome = source.fetch().await;

    let Some(manager) = manager.upgrade() else {
        debug!("Catalog state dropped before fetch completed; discarding result");
        return outcome.map(|_| ());
    };

    match outcome {
        Ok(catalog) => {
            info!(
                namespaces = catalog.namespace_count(),
                routes = catalog.route_count(),
                "Route catalog loaded"
            );
            manager.set_catalog(catalog).await;
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Route catalog unavailable; explorer stays in loading state");
            manager.mark_error(e.to_string()).await;
            Err(e)
        }
    }
}

/// Spawn the bootstrap fetch. Abort the returned handle to cancel it.
pub fn spawn_catalog_bootstrap<R>(
    source: Arc<dyn CatalogSource>,
    manager: &Arc<CatalogRuntimeStateManager<R>>,
) -> JoinHandle<()>
where
    R: CatalogRuntimeStateRepositoryTrait + 'static,
{
    let weak = Arc::downgrade(manager);
    tokio::spawn(async move {
        if let Err(e) = bootstrap_catalog(source.as_ref(), weak).await {
            debug!(error = %e, "Catalog bootstrap finished without a catalog");
        }
    })
}

/// One line per namespace: `<key>: <n> routes (<m> documented)`.
pub fn summarize(catalog: &RouteCatalog) -> Vec<String> {
    catalog
        .namespaces()
        .map(|(key, routes)| {
            let documented = routes.iter().filter(|r| r.is_documented()).count();
            format!("{}: {} routes ({} documented)", key, routes.len(), documented)
        })
        .collect()
}
