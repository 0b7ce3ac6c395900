pub mod access_level;
pub mod http_method;
pub mod lenient;
pub mod route_catalog;
pub mod route_documentation;

pub use access_level::AccessLevel;
pub use http_method::HttpMethod;
pub use route_catalog::{CatalogEnvelope, RouteCatalog, RouteEntry};
pub use route_documentation::{
    ParameterGroup, ParameterSpec, Requirement, ResponseSpec, RouteDocumentation,
};
