use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::state::runtime::catalog::catalog_runtime_state::CatalogRuntimeState;
use crate::core::state::runtime::catalog::catalog_runtime_state_repository_trait::CatalogRuntimeStateRepositoryTrait;

#[derive(Default)]
pub struct CatalogRuntimeStateRepository {
    state: RwLock<Arc<CatalogRuntimeState>>,
}

impl CatalogRuntimeStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait::async_trait]
impl CatalogRuntimeStateRepositoryTrait for CatalogRuntimeStateRepository {
    async fn get(&self) -> Arc<CatalogRuntimeState> {
        self.state.read().await.clone()
    }

    async fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut CatalogRuntimeState) -> T + Send,
        T: Send,
    {
        let mut guard = self.state.write().await;

        let mut new_state = (**guard).clone();
        let out = f(&mut new_state);

        *guard = Arc::new(new_state);
        out
    }
}
