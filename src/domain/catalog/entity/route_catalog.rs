use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::http_method::HttpMethod;
use super::lenient::{items_or_default, or_default};
use super::route_documentation::RouteDocumentation;
use crate::errors::FetchError;

/// Success marker the upstream documentation endpoint sets on `state`.
pub const SUCCESS_STATE: &str = "success";

/// Namespace → routes, kept in the order the upstream document lists them.
///
/// The top level must be an object; below that, a namespace that is not a
/// list has no routes and a malformed route keeps its place with blanks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteCatalog(IndexMap<String, Vec<RouteEntry>>);

impl<'de> Deserialize<'de> for RouteCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(namespace, routes)| (namespace, items_or_default(routes)))
                .collect(),
        ))
    }
}

impl RouteCatalog {
    pub fn new(namespaces: IndexMap<String, Vec<RouteEntry>>) -> Self {
        Self(namespaces)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn namespace_count(&self) -> usize {
        self.0.len()
    }

    pub fn route_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &[RouteEntry])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn routes(&self, namespace: &str) -> Option<&[RouteEntry]> {
        self.0.get(namespace).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    #[serde(default, deserialize_with = "or_default")]
    pub method: HttpMethod,
    #[serde(default, deserialize_with = "or_default")]
    pub path: String,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `None` marks an undocumented route.
    #[serde(default, deserialize_with = "or_default")]
    pub docs: Option<RouteDocumentation>,
}

impl RouteEntry {
    pub fn is_documented(&self) -> bool {
        self.docs.is_some()
    }
}

/// Raw response of the documentation endpoint: `{ state, data }`.
#[derive(Debug, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl CatalogEnvelope {
    /// Accept the payload only when `state` is the success marker.
    pub fn into_catalog(self) -> Result<RouteCatalog, FetchError> {
        match self.state.as_deref() {
            Some(SUCCESS_STATE) => serde_json::from_value(self.data)
                .map_err(|e| FetchError::Decode(format!("invalid route catalog: {}", e))),
            _ => Err(FetchError::NotSuccess(self.state)),
        }
    }
}
