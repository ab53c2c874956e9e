//! HTTP API route definitions.

use axum::{http::Method, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{health, info, root};
use crate::metrics::track_http_metrics;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Greeting endpoint
        .route("/", get(root))
        // Health endpoint
        .route("/health", get(health))
        // Info endpoint
        .route("/api/info", get(info))
        // Interactive docs + OpenAPI document
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_methods([Method::GET]).allow_origin(Any))
}

/// Create the API router with a `/metrics` endpoint rendering Prometheus text.
pub fn create_router_with_metrics(handle: PrometheusHandle) -> Router {
    create_router().route("/metrics", get(move || std::future::ready(handle.render())))
}
