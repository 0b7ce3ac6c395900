use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Route catalog not available yet")]
    CatalogUnavailable,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Why the one catalog fetch did not produce a catalog.
///
/// Only used for logs and the status endpoint; every variant looks the same
/// to a page visitor (the loading indicator stays up).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("documentation endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("malformed payload: {0}")]
    Decode(String),

    #[error("payload state is {0:?}, expected \"success\"")]
    NotSuccess(Option<String>),
}
