use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    game::{get_game, reset_round, submit_guess},
    players::get_player_names,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/game", get(get_game))
        .route("/api/guess", post(submit_guess))
        .route("/api/reset", post(reset_round))
        .route("/api/players", get(get_player_names))
        .with_state(state)
}
