//! Catalog routes (e.g., /api/v1/catalog/*)

use axum::{routing::get, Router};
use crate::api::controller::catalog::CatalogController;
use crate::app_state::AppState;

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(CatalogController::get_catalog))
        .route("/status", get(CatalogController::get_status))
}
