use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::catalog::entity::{CatalogEnvelope, RouteCatalog};
use crate::errors::FetchError;

/// Where the route catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<RouteCatalog, FetchError>;
}

/// Fetches the catalog from the documentation endpoint with a single GET.
///
/// No query, no body, no retry and no client-side timeout.
pub struct HttpCatalogSource {
    client: Client,
    endpoint: String,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<RouteCatalog, FetchError> {
        debug!("Fetching route catalog from {}", self.endpoint);

        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let envelope: CatalogEnvelope = resp
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        envelope.into_catalog()
    }
}
