//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Invalid bind address.
    #[error("invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
