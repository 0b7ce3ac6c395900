mod common;

use axum::http::StatusCode;

use route_catalog_explorer::core::client::catalog_client::{CatalogSource, HttpCatalogSource};
use route_catalog_explorer::domain::catalog::entity::{HttpMethod, Requirement};
use route_catalog_explorer::errors::FetchError;

#[tokio::test]
async fn fetches_and_decodes_catalog() {
    let url = common::spawn_json_upstream(common::login_payload()).await;

    let catalog = HttpCatalogSource::new(url).fetch().await.unwrap();

    let routes = catalog.routes("user-auth").unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].method, HttpMethod::Post);
    let docs = routes[0].docs.as_ref().unwrap();
    assert_eq!(docs.body[0].required, Requirement::Flag(true));
    assert_eq!(docs.response.as_ref().unwrap().status, 200);
}

#[tokio::test]
async fn server_error_is_http_status() {
    let url = common::spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;

    let err = HttpCatalogSource::new(url).fetch().await.unwrap_err();
    assert_eq!(err, FetchError::HttpStatus(500));
}

#[tokio::test]
async fn missing_state_is_not_success() {
    let url = common::spawn_upstream(StatusCode::OK, r#"{"data":{"a":[]}}"#).await;

    let err = HttpCatalogSource::new(url).fetch().await.unwrap_err();
    assert_eq!(err, FetchError::NotSuccess(None));
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let url = common::spawn_upstream(StatusCode::OK, "not json").await;

    let err = HttpCatalogSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpCatalogSource::new(format!("http://{}/", addr))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
