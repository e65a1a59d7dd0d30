use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Access logging middleware.
///
/// Emits one structured event per request once the response is ready.
/// Downloads are rendered before the handler returns, so `elapsed_ms`
/// covers the whole render.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %path,
        status = status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http_request"
    );

    response
}
