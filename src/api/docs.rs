//! OpenAPI documentation for the HTTP surface.

use utoipa::OpenApi;

use super::handlers::{HealthResponse, InfoResponse, RootResponse};

/// OpenAPI document covering the three public endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "nabla-site-python",
        version = "1.0.0",
        description = "Sample FastAPI Hello World for Vercel and Cloudflare deployment"
    ),
    paths(
        crate::api::handlers::root,
        crate::api::handlers::health,
        crate::api::handlers::info,
    ),
    components(schemas(RootResponse, HealthResponse, InfoResponse))
)]
pub struct ApiDoc;
