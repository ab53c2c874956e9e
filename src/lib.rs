//! Sample Hello World HTTP service for Vercel and Cloudflare deployment.
//!
//! Three stateless endpoints over an axum router:
//!
//! ```text
//! GET /         -> {"message": "Hello World"}
//! GET /health   -> {"status": "healthy"}
//! GET /api/info -> service name/version/description
//! ```
//!
//! Interactive docs are served at `/docs` and the OpenAPI document at
//! `/openapi.json`. Prometheus exposition text is available at `/metrics`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes, handlers, and OpenAPI docs
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
