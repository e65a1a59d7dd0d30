use axum::extract::State;
use axum::response::Html;

use briefing_export::preflight::missing_backends;

use crate::error::ApiError;
use crate::routes::page;
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(page::index(&state.deck.title, &missing_backends())?))
}
