//! briefing-web
//!
//! Small axum shell around the export backends: an index page with one
//! trigger per artifact type, the download endpoints, and a read-only view
//! of the content model.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index::index))
        .route("/health", get(routes::health::health_check))
        .route("/api/deck", get(routes::deck::get_deck))
        .route("/generate/{format}", post(routes::generate::generate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_mw::from_fn(middleware::access_log::access_log)),
        )
        .with_state(state)
}
