use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;

use briefing_export::artifact::{Download, materialize};
use briefing_export::format::Format;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the number of non-fatal render warnings.
pub const RENDER_WARNINGS_HEADER: &str = "x-render-warnings";

/// Render the deck as `format` and answer with it as an attachment.
pub async fn generate(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Response, ApiError> {
    let format: Format = format.parse().map_err(ApiError::NotFound)?;

    let AppState {
        deck,
        theme,
        scratch_dir,
    } = state;
    let download =
        tokio::task::spawn_blocking(move || materialize(format, &deck, &theme, &scratch_dir))
            .await??;

    for warning in &download.warnings {
        tracing::warn!(%format, "{warning}");
    }
    tracing::info!(
        %format,
        bytes = download.bytes.len(),
        warnings = download.warnings.len(),
        "export ready"
    );

    attachment(download)
}

fn attachment(download: Download) -> Result<Response, ApiError> {
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        download.file_name
    ))
    .map_err(|e| ApiError::Internal(format!("invalid file name header: {e}")))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.mime)
        .header(header::CONTENT_DISPOSITION, disposition)
        .header(RENDER_WARNINGS_HEADER, download.warnings.len())
        .body(Body::from(download.bytes))
        .map_err(|e| ApiError::Internal(format!("failed to build response: {e}")))
}
