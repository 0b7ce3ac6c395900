mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};

use route_catalog_explorer::domain::catalog::entity::CatalogEnvelope;
use route_catalog_explorer::view::route_catalog_view::RouteCatalogView;

#[tokio::test]
async fn renders_fetched_catalog() {
    let upstream = common::spawn_json_upstream(common::login_payload()).await;
    let (base, state) = common::spawn_explorer(&upstream).await;
    common::wait_for_fetch(&state).await;

    let html = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();

    assert!(html.contains("<h2>User Auth</h2>"));
    assert!(html.contains("<span class=\"route-path\">/login</span>"));
    assert!(html.contains("<span class=\"route-summary\">Log in</span>"));
    assert!(html.contains("<h3>Request Body</h3>"));
    assert!(html.contains(concat!(
        "<tr><td class=\"left\">email</td>",
        "<td><code>string</code></td>",
        "<td><span class=\"muted\">N/A</span></td>",
        "<td><span class=\"required\"><span class=\"glyph check\">✓</span></span></td>",
        "<td><span class=\"glyph dash\">–</span></td>",
        "<td class=\"left muted\">User email</td></tr>",
    )));
    assert!(!html.contains("<h3>Parameters</h3>"));
    assert!(!html.contains("<h3>Description</h3>"));
    assert!(html.contains("<code class=\"status\">200</code>"));
    assert!(html.contains("OK - <code>Token</code>"));
    assert!(!html.contains("class=\"loading\""));
}

#[test]
fn login_scenario_text_rows() {
    let envelope: CatalogEnvelope = serde_json::from_value(common::login_payload()).unwrap();
    let view = RouteCatalogView::new(Some(Arc::new(envelope.into_catalog().unwrap())));

    let text = view.render_text();
    assert!(text.starts_with("User Auth\nPOST /login  Log in"));
    assert!(text.contains("  Request Body\n"));
    assert!(text.contains("email | string | N/A | ✓ | – | User email"));
    assert!(text.contains("Response: 200 OK - Token"));
}

#[tokio::test]
async fn upstream_failure_keeps_loading() {
    let upstream = common::spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let (base, state) = common::spawn_explorer(&upstream).await;
    common::wait_for_fetch(&state).await;

    let html = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();
    assert!(html.contains("class=\"loading\""));
    assert!(!html.contains("500"));

    let resp = reqwest::get(format!("{}/api/v1/catalog", base)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 503);

    let status: Value = reqwest::get(format!("{}/api/v1/catalog/status", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["state"], "success");
    assert_eq!(status["data"]["ready"], false);
    assert!(status["data"]["last_error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn malformed_nested_fields_render_as_gaps() {
    let upstream = common::spawn_json_upstream(json!({
        "state": "success",
        "data": {
            "users": [
                {
                    "method": "GET",
                    "path": "/users/:id",
                    "docs": {
                        "summary": "Get user",
                        "params": [{
                            "name": "id",
                            "type": "string",
                            "required": true,
                            "must_exist": null,
                            "description": null
                        }]
                    }
                },
                { "method": "DELETE", "docs": null }
            ]
        }
    }))
    .await;
    let (base, state) = common::spawn_explorer(&upstream).await;
    common::wait_for_fetch(&state).await;

    let html = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();

    assert!(!html.contains("class=\"loading\""));
    assert!(html.contains("<h2>Users</h2>"));
    assert!(html.contains("<span class=\"route-summary\">Get user</span>"));
    assert!(html.contains(concat!(
        "<tr><td class=\"left\">id</td>",
        "<td><code>string</code></td>",
        "<td><span class=\"muted\">N/A</span></td>",
        "<td><span class=\"required\"><span class=\"glyph check\">✓</span></span></td>",
        "<td><span class=\"glyph dash\">–</span></td>",
        "<td class=\"left muted\"></td></tr>",
    )));
    assert!(html.contains("<span class=\"method accent-red\">DELETE</span><span class=\"route-path\"></span>"));
}

#[tokio::test]
async fn malformed_body_keeps_loading() {
    let upstream = common::spawn_upstream(StatusCode::OK, r#"{"data":{}}"#).await;
    let (base, state) = common::spawn_explorer(&upstream).await;
    common::wait_for_fetch(&state).await;

    let html = reqwest::get(format!("{}/", base)).await.unwrap().text().await.unwrap();
    assert!(html.contains("class=\"loading\""));
}

#[tokio::test]
async fn catalog_endpoint_echoes_envelope() {
    let upstream = common::spawn_json_upstream(common::login_payload()).await;
    let (base, state) = common::spawn_explorer(&upstream).await;
    common::wait_for_fetch(&state).await;

    let body: Value = reqwest::get(format!("{}/api/v1/catalog", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["state"], "success");
    assert_eq!(body["data"]["user-auth"][0]["path"], "/login");
    assert_eq!(body["data"]["user-auth"][0]["docs"]["body"][0]["required"], true);
}

#[tokio::test]
async fn health_and_fallback() {
    let upstream = common::spawn_json_upstream(common::login_payload()).await;
    let (base, _state) = common::spawn_explorer(&upstream).await;

    let health = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(health.text().await.unwrap(), "OK");

    let missing = reqwest::get(format!("{}/nope", base)).await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}
