use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Failure modes of a page request.
///
/// Everything except `RenderFailure` is absorbed by the services and only
/// logged; the page still renders with defaults.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Kubernetes cluster unavailable: {0}")]
    ConnectionUnavailable(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("K8s API list failed: {0}")]
    ListFailure(String),

    #[error("Template rendering failed: {0}")]
    RenderFailure(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{}", self);

        // Only RenderFailure reaches a handler; the others are log-only.
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}
