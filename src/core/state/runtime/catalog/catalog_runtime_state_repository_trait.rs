use std::sync::Arc;
use async_trait::async_trait;

use crate::core::state::runtime::catalog::catalog_runtime_state::CatalogRuntimeState;

#[async_trait]
pub trait CatalogRuntimeStateRepositoryTrait: Send + Sync {
    /// Return the current state as an Arc snapshot.
    async fn get(&self) -> Arc<CatalogRuntimeState>;

    /// Mutate the internal state using a closure and return its result.
    async fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut CatalogRuntimeState) -> T + Send,
        T: Send;
}
