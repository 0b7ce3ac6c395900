use axum::{http::Uri, routing::get, Router};
use tower_http::cors::CorsLayer;
use crate::api::controller::catalog::CatalogController;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let api_v1 = Router::new()
        .nest("/catalog", crate::api::routes::catalog_routes::catalog_routes());

    Router::new()
        // Explorer page
        .route("/", get(CatalogController::explorer))
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1)
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
