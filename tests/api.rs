//! Integration tests for the public HTTP surface.
//!
//! These tests drive the router directly via `tower::ServiceExt::oneshot`;
//! no listener is bound and no network access is required.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use nabla_site::api::{create_router, create_router_with_metrics};
use nabla_site::metrics;

/// Issue a GET against a fresh router and collect status + body bytes.
async fn get(path: &str) -> (StatusCode, Vec<u8>) {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

#[tokio::test]
async fn root_returns_hello_world() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({"message": "Hello World"})
    );
}

#[tokio::test]
async fn health_returns_healthy() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({"status": "healthy"})
    );
}

#[tokio::test]
async fn info_returns_service_metadata() {
    let (status, body) = get("/api/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({
            "name": "nabla-site-python",
            "version": "1.0.0",
            "description": "Sample FastAPI Hello World for Vercel and Cloudflare deployment"
        })
    );
}

#[tokio::test]
async fn responses_are_json_content_type() {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type: {}",
        content_type
    );
}

#[tokio::test]
async fn repeated_requests_return_identical_bytes() {
    for path in ["/", "/health", "/api/info"] {
        let (_, first) = get(path).await;
        let (_, second) = get(path).await;
        let (_, third) = get(path).await;

        assert_eq!(first, second, "body drifted for {}", path);
        assert_eq!(second, third, "body drifted for {}", path);
    }
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let (status, _) = get("/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_returns_405() {
    let app = create_router();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn openapi_document_lists_all_routes() {
    let (status, body) = get("/openapi.json").await;

    assert_eq!(status, StatusCode::OK);

    let doc: Value = serde_json::from_slice(&body).unwrap();
    let paths = doc["paths"].as_object().unwrap();

    for path in ["/", "/health", "/api/info"] {
        assert!(paths.contains_key(path), "missing path {} in document", path);
    }
}

#[tokio::test]
async fn metrics_endpoint_renders_exposition_text() {
    // Installs the process-global recorder; keep this the only test doing so.
    let handle = metrics::install_recorder().unwrap();
    let app = create_router_with_metrics(handle);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
