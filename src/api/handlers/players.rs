use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;

/// Full list of guessable names, used by the client for autocomplete.
pub async fn get_player_names(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.player_names())
}
