//! Catalog controller: connects routes to the catalog runtime state

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::api::dto::catalog_dto::CatalogStatusDto;
use crate::api::dto::ApiResponse;
use crate::app_state::AppState;
use crate::domain::catalog::entity::RouteCatalog;
use crate::errors::AppError;

pub struct CatalogController;

impl CatalogController {
    /// Explorer page; shows the loading indicator until the catalog arrives.
    pub async fn explorer(State(state): State<AppState>) -> Html<String> {
        Html(state.catalog_service.explorer_view().await.render())
    }

    pub async fn get_catalog(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Arc<RouteCatalog>>>, AppError> {
        let snapshot = state.catalog_service.snapshot().await;
        match snapshot.ready_catalog() {
            Some(catalog) => Ok(Json(ApiResponse::ok(catalog.clone()))),
            None => Err(AppError::CatalogUnavailable),
        }
    }

    pub async fn get_status(State(state): State<AppState>) -> Json<ApiResponse<CatalogStatusDto>> {
        Json(ApiResponse::ok(state.catalog_service.status().await))
    }
}
