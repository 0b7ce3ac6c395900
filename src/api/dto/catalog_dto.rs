//! Catalog API DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::state::runtime::catalog::catalog_runtime_state::CatalogRuntimeState;

#[derive(Serialize, Debug)]
pub struct CatalogStatusDto {
    pub ready: bool,
    pub namespaces: usize,
    pub routes: usize,
    pub fetched_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub last_error_at: Option<DateTime<Utc>>,
}

impl From<&CatalogRuntimeState> for CatalogStatusDto {
    fn from(state: &CatalogRuntimeState) -> Self {
        let catalog = state.catalog.as_deref();
        Self {
            ready: state.ready_catalog().is_some(),
            namespaces: catalog.map(|c| c.namespace_count()).unwrap_or(0),
            routes: catalog.map(|c| c.route_count()).unwrap_or(0),
            fetched_at: state.fetched_at,
            last_error: state.last_error_message.clone(),
            last_error_at: state.last_error_at,
        }
    }
}
