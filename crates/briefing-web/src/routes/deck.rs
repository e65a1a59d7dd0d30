use axum::Json;
use axum::extract::State;

use briefing_core::models::slide::Deck;

use crate::state::AppState;

/// The content model both exports render from.
pub async fn get_deck(State(state): State<AppState>) -> Json<Deck> {
    Json(state.deck.as_ref().clone())
}
