use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use rusqlite::TransactionBehavior;
use std::sync::Arc;

use crate::api::models::{
    build_game_state, ErrorResponse, GameParams, GuessRequest, ResetRequest,
};
use crate::database::{self, rounds};
use crate::domain::GuessRecord;
use crate::game::{comparator, selector, GameRound, SubmitOutcome};
use super::AppState;

pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GameParams>,
) -> impl IntoResponse {
    let session_id = params.session_id.trim().to_string();
    if session_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing session id")),
        )
            .into_response();
    }

    let mut conn = match database::get_connection(&state.pool) {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let tx = match conn.transaction_with_behavior(TransactionBehavior::Immediate) {
        Ok(tx) => tx,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Transaction Error: {}", e))
                .into_response()
        }
    };

    let round = match rounds::load_or_create_round(&tx, &session_id, selector::today()) {
        Ok(round) => round,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    if let Err(e) = tx.commit() {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("Commit Error: {}", e))
            .into_response();
    }

    Json(build_game_state(&round, state.config.game.max_guesses)).into_response()
}

pub async fn submit_guess(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GuessRequest>,
) -> impl IntoResponse {
    let session_id = request.session_id.trim().to_string();
    if session_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing session id")),
        )
            .into_response();
    }

    // Resolve before touching the round: an unknown name must not consume
    // an attempt or mutate any state.
    let Some(guessed) = state.catalog.find_by_normalized_name(&request.guess) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Player not found! Please check spelling.")),
        )
            .into_response();
    };

    let today = selector::today();
    let target = selector::target_for_date(&state.catalog, today);
    let verdicts = comparator::compare(guessed, target, &state.config.game);
    let is_win = comparator::is_winning_guess(guessed, target);
    let record = GuessRecord {
        player_name: guessed.name.clone(),
        verdicts,
    };

    let mut conn = match database::get_connection(&state.pool) {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let tx = match conn.transaction_with_behavior(TransactionBehavior::Immediate) {
        Ok(tx) => tx,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Transaction Error: {}", e))
                .into_response()
        }
    };

    let mut round = match rounds::load_or_create_round(&tx, &session_id, today) {
        Ok(round) => round,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    match round.submit(record, is_win, state.config.game.max_guesses) {
        SubmitOutcome::RejectedRoundOver => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("Round is already over for today")),
        )
            .into_response(),
        SubmitOutcome::Accepted { .. } => {
            if let Err(e) = rounds::store_round(&tx, &session_id, &round) {
                return (StatusCode::INTERNAL_SERVER_ERROR, format!("Store Error: {}", e))
                    .into_response();
            }
            if let Err(e) = tx.commit() {
                return (StatusCode::INTERNAL_SERVER_ERROR, format!("Commit Error: {}", e))
                    .into_response();
            }
            log::info!(
                "Session {} guessed {} ({} left, status {})",
                session_id,
                round.guesses.last().map(|g| g.player_name.as_str()).unwrap_or(""),
                round.guesses_remaining(state.config.game.max_guesses),
                round.status.as_str()
            );
            Json(build_game_state(&round, state.config.game.max_guesses)).into_response()
        }
    }
}

pub async fn reset_round(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResetRequest>,
) -> impl IntoResponse {
    let session_id = request.session_id.trim().to_string();
    if session_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing session id")),
        )
            .into_response();
    }

    let mut conn = match database::get_connection(&state.pool) {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let tx = match conn.transaction_with_behavior(TransactionBehavior::Immediate) {
        Ok(tx) => tx,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Transaction Error: {}", e))
                .into_response()
        }
    };

    if let Err(e) = rounds::delete_session_rounds(&tx, &session_id) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("Reset Error: {}", e)).into_response();
    }
    if let Err(e) = tx.commit() {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("Commit Error: {}", e))
            .into_response();
    }

    // Same day, same target: the index policy is a pure function of the date.
    let fresh = GameRound::new(selector::today());
    Json(build_game_state(&fresh, state.config.game.max_guesses)).into_response()
}
