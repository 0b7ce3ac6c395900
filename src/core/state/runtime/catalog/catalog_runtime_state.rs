use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::catalog::entity::RouteCatalog;

/// In-memory holder of the route catalog for one server lifetime.
///
/// This state:
/// - lives only in memory (NOT persisted)
/// - receives the catalog at most once
/// - keeps the last fetch failure for diagnostics only
#[derive(Debug, Clone, Default)]
pub struct CatalogRuntimeState {
    pub catalog: Option<Arc<RouteCatalog>>,
    pub fetched_at: Option<DateTime<Utc>>,

    pub last_error_at: Option<DateTime<Utc>>,
    pub last_error_message: Option<String>,
}

impl CatalogRuntimeState {
    /// Store the catalog. Returns `false` (and changes nothing) if one is
    /// already held.
    pub fn set_catalog(&mut self, catalog: RouteCatalog) -> bool {
        if self.catalog.is_some() {
            return false;
        }
        self.catalog = Some(Arc::new(catalog));
        self.fetched_at = Some(Utc::now());
        true
    }

    pub fn mark_error(&mut self, message: String) {
        self.last_error_at = Some(Utc::now());
        self.last_error_message = Some(message);
    }

    /// A catalog that has arrived and lists at least one namespace.
    pub fn ready_catalog(&self) -> Option<&Arc<RouteCatalog>> {
        self.catalog.as_ref().filter(|c| !c.is_empty())
    }
}
