//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use comet_site::SiteError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No document for the requested slug.
    #[error("Document not found: {0}")]
    DocNotFound(String),

    /// Storage failure while loading a document.
    #[error("Site error: {0}")]
    Site(#[from] SiteError),

    /// Response body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Blocking task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::DocNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Document not found", "slug": slug}),
            ),
            Self::Site(e) => {
                tracing::error!(error = %e, "Failed to load document");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::Serialize(e) => {
                tracing::error!(error = %e, "Failed to serialize response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
            Self::Task(e) => {
                tracing::error!(error = %e, "Request task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
