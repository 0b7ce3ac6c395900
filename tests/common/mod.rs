#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use route_catalog_explorer::app_state::{build_app_state, AppState};
use route_catalog_explorer::core::client::catalog_client::HttpCatalogSource;
use route_catalog_explorer::domain::catalog::service::catalog_bootstrap_service::spawn_catalog_bootstrap;
use route_catalog_explorer::routes::app_router;

/// Upstream payload with one documented login route.
pub fn login_payload() -> Value {
    json!({
        "state": "success",
        "data": {
            "user-auth": [{
                "method": "POST",
                "path": "/login",
                "docs": {
                    "summary": "Log in",
                    "description": "",
                    "access": "public",
                    "params": [],
                    "query": [],
                    "body": [{
                        "name": "email",
                        "type": "string",
                        "required": true,
                        "description": "User email"
                    }],
                    "response": { "status": 200, "description": "OK", "body": "Token" }
                }
            }]
        }
    })
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Stand-in documentation endpoint answering every GET with `status` and `body`.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/",
        get(move || async move {
            (status, [("content-type", "application/json")], body)
        }),
    );
    format!("{}/", serve(app).await)
}

pub async fn spawn_json_upstream(payload: Value) -> String {
    let body: &'static str = Box::leak(payload.to_string().into_boxed_str());
    spawn_upstream(StatusCode::OK, body).await
}

/// Explorer wired to `api_host`, with its bootstrap fetch already spawned.
pub async fn spawn_explorer(api_host: &str) -> (String, AppState) {
    let state = build_app_state();
    spawn_catalog_bootstrap(
        Arc::new(HttpCatalogSource::new(api_host)),
        state.catalog_service.manager(),
    );
    let base = serve(app_router().with_state(state.clone())).await;
    (base, state)
}

/// Wait until the bootstrap fetch has either stored a catalog or recorded an error.
pub async fn wait_for_fetch(state: &AppState) {
    for _ in 0..100 {
        let snap = state.catalog_service.snapshot().await;
        if snap.catalog.is_some() || snap.last_error_message.is_some() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("catalog fetch did not settle");
}
