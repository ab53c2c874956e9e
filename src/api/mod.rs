//! HTTP API module for the greeting, health, and info endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use routes::{create_router, create_router_with_metrics};
