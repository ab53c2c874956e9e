//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Service name reported by `GET /api/info`.
pub const SERVICE_NAME: &str = "nabla-site-python";
/// Service version reported by `GET /api/info`.
pub const SERVICE_VERSION: &str = "1.0.0";
/// Service description reported by `GET /api/info`.
pub const SERVICE_DESCRIPTION: &str =
    "Sample FastAPI Hello World for Vercel and Cloudflare deployment";

/// Greeting response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Greeting message.
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
}

/// Service metadata response.
#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    /// Service name.
    pub name: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Service description.
    pub description: &'static str,
}

/// Root handler - returns the hello world greeting.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Hello world greeting", body = RootResponse))
)]
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "Hello World",
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// Info handler - returns static service metadata.
#[utoipa::path(
    get,
    path = "/api/info",
    responses((status = 200, description = "Service metadata", body = InfoResponse))
)]
pub async fn info() -> impl IntoResponse {
    Json(InfoResponse {
        name: SERVICE_NAME,
        version: SERVICE_VERSION,
        description: SERVICE_DESCRIPTION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_response_serializes_exactly() {
        let body = serde_json::to_string(&RootResponse {
            message: "Hello World",
        })
        .unwrap();

        assert_eq!(body, r#"{"message":"Hello World"}"#);
    }

    #[test]
    fn health_response_serializes_exactly() {
        let body = serde_json::to_string(&HealthResponse { status: "healthy" }).unwrap();

        assert_eq!(body, r#"{"status":"healthy"}"#);
    }

    #[test]
    fn info_response_serializes_exactly() {
        let body = serde_json::to_string(&InfoResponse {
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            description: SERVICE_DESCRIPTION,
        })
        .unwrap();

        assert_eq!(
            body,
            r#"{"name":"nabla-site-python","version":"1.0.0","description":"Sample FastAPI Hello World for Vercel and Cloudflare deployment"}"#
        );
    }
}
