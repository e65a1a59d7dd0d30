use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use briefing_export::error::ExportError;
use briefing_export::format::Format;

use crate::routes::page;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// The export backend for `format` is not compiled into this build.
    BackendUnavailable {
        format: Format,
        remediation: Vec<String>,
    },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BackendUnavailable {
                format,
                remediation,
            } => {
                tracing::warn!(%format, "export requested but backend is missing");
                match page::missing_backend(format, &remediation) {
                    Ok(html) => return (StatusCode::SERVICE_UNAVAILABLE, Html(html)).into_response(),
                    Err(e) => {
                        tracing::error!("failed to render remediation page: {e}");
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            format!("{format} export backend is not available in this build"),
                        )
                    }
                }
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::MissingBackend {
                format,
                remediation,
            } => ApiError::BackendUnavailable {
                format,
                remediation,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<tera::Error> for ApiError {
    fn from(e: tera::Error) -> Self {
        ApiError::Internal(format!("template rendering failed: {e}"))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("render task failed: {e}"))
    }
}
