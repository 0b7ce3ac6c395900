use std::sync::Arc;
use tracing::warn;

use crate::core::state::runtime::catalog::catalog_runtime_state::CatalogRuntimeState;
use crate::core::state::runtime::catalog::catalog_runtime_state_repository_trait::CatalogRuntimeStateRepositoryTrait;
use crate::domain::catalog::entity::RouteCatalog;

pub struct CatalogRuntimeStateManager<R: CatalogRuntimeStateRepositoryTrait> {
    pub(crate) repo: Arc<R>,
}

impl<R: CatalogRuntimeStateRepositoryTrait> CatalogRuntimeStateManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Install the fetched catalog. The catalog is written once; later
    /// writes are dropped and reported as `false`.
    pub async fn set_catalog(&self, catalog: RouteCatalog) -> bool {
        let stored = self.repo.update(|state| state.set_catalog(catalog)).await;
        if !stored {
            warn!("Route catalog already loaded; ignoring second write");
        }
        stored
    }

    /// Record a fetch failure (catalog remains untouched).
    pub async fn mark_error(&self, message: String) {
        self.repo.update(|state| state.mark_error(message)).await;
    }

    pub async fn snapshot(&self) -> Arc<CatalogRuntimeState> {
        self.repo.get().await
    }

    pub async fn is_ready(&self) -> bool {
        self.repo.get().await.ready_catalog().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::runtime::catalog::catalog_runtime_state_repository::CatalogRuntimeStateRepository;
    use crate::domain::catalog::entity::RouteEntry;
    use crate::domain::catalog::entity::HttpMethod;
    use indexmap::IndexMap;

    fn catalog(ns: &str) -> RouteCatalog {
        let mut map = IndexMap::new();
        map.insert(
            ns.to_string(),
            vec![RouteEntry {
                method: HttpMethod::Get,
                path: "/".into(),
                description: None,
                docs: None,
            }],
        );
        RouteCatalog::new(map)
    }

    fn manager() -> CatalogRuntimeStateManager<CatalogRuntimeStateRepository> {
        CatalogRuntimeStateManager::new(CatalogRuntimeStateRepository::new().shared())
    }

    #[tokio::test]
    async fn starts_empty() {
        let m = manager();
        let snap = m.snapshot().await;
        assert!(snap.catalog.is_none());
        assert!(snap.fetched_at.is_none());
        assert!(!m.is_ready().await);
    }

    #[tokio::test]
    async fn catalog_is_written_once() {
        let m = manager();
        assert!(m.set_catalog(catalog("first")).await);
        assert!(!m.set_catalog(catalog("second")).await);

        let snap = m.snapshot().await;
        let held = snap.catalog.as_ref().unwrap();
        assert!(held.routes("first").is_some());
        assert!(held.routes("second").is_none());
        assert!(snap.fetched_at.is_some());
    }

    #[tokio::test]
    async fn mark_error_keeps_catalog_empty() {
        let m = manager();
        m.mark_error("documentation endpoint returned HTTP 500".into()).await;

        let snap = m.snapshot().await;
        assert!(snap.catalog.is_none());
        assert_eq!(
            snap.last_error_message.as_deref(),
            Some("documentation endpoint returned HTTP 500")
        );
        assert!(!m.is_ready().await);
    }

    #[tokio::test]
    async fn empty_catalog_is_not_ready() {
        let m = manager();
        assert!(m.set_catalog(RouteCatalog::default()).await);
        assert!(!m.is_ready().await);
    }
}
