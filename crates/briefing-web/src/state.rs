use std::path::PathBuf;
use std::sync::Arc;

use briefing_core::models::slide::Deck;
use briefing_core::theme::Theme;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The deck and theme are built once and only ever read.
#[derive(Debug, Clone)]
pub struct AppState {
    pub deck: Arc<Deck>,
    pub theme: Arc<Theme>,
    pub scratch_dir: PathBuf,
}

impl AppState {
    pub fn new(deck: Deck, theme: Theme, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            deck: Arc::new(deck),
            theme: Arc::new(theme),
            scratch_dir: scratch_dir.into(),
        }
    }
}
