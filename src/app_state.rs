use std::sync::Arc;

use crate::api::dto::catalog_dto::CatalogStatusDto;
use crate::core::state::runtime::catalog::catalog_runtime_state::CatalogRuntimeState;
use crate::core::state::runtime::catalog::catalog_runtime_state_manager::CatalogRuntimeStateManager;
use crate::core::state::runtime::catalog::catalog_runtime_state_repository::CatalogRuntimeStateRepository;
use crate::view::route_catalog_view::RouteCatalogView;

pub type CatalogStateManager = CatalogRuntimeStateManager<CatalogRuntimeStateRepository>;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
}

pub fn build_app_state() -> AppState {
    AppState {
        catalog_service: Arc::new(CatalogService::default()),
    }
}

/// Read side of the catalog runtime state.
pub struct CatalogService {
    manager: Arc<CatalogStateManager>,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self {
            manager: Arc::new(CatalogRuntimeStateManager::new(
                CatalogRuntimeStateRepository::new().shared(),
            )),
        }
    }
}

impl CatalogService {
    pub fn manager(&self) -> &Arc<CatalogStateManager> {
        &self.manager
    }

    pub async fn snapshot(&self) -> Arc<CatalogRuntimeState> {
        self.manager.snapshot().await
    }

    pub async fn status(&self) -> CatalogStatusDto {
        let state = self.manager.snapshot().await;
        CatalogStatusDto::from(state.as_ref())
    }

    pub async fn explorer_view(&self) -> RouteCatalogView {
        let state = self.manager.snapshot().await;
        RouteCatalogView::from_state(&state)
    }
}
