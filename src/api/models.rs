use serde::{Deserialize, Serialize};

use crate::domain::{Attribute, GuessRecord, RoundStatus};
use crate::game::{grid, GameRound};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameParams {
    pub session_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub session_id: String,
    pub guess: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub session_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictView {
    pub attribute: &'static str,
    pub status: &'static str,
    pub value: String,
    pub arrow: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessView {
    pub name: String,
    pub verdicts: Vec<VerdictView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub game_date: String,
    pub status: &'static str,
    pub attributes: Vec<&'static str>,
    pub guesses: Vec<GuessView>,
    pub emoji_grid: Vec<String>,
    pub guesses_remaining: usize,
    pub max_guesses: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub fn build_game_state(round: &GameRound, max_guesses: usize) -> GameStateResponse {
    GameStateResponse {
        game_date: round.game_date.format("%Y-%m-%d").to_string(),
        status: status_label(round.status),
        attributes: Attribute::ALL.iter().map(|a| a.as_str()).collect(),
        guesses: round.guesses.iter().map(build_guess_view).collect(),
        emoji_grid: grid::emoji_grid(&round.guesses),
        guesses_remaining: round.guesses_remaining(max_guesses),
        max_guesses,
    }
}

fn status_label(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::NotStarted => "notStarted",
        RoundStatus::InProgress => "inProgress",
        RoundStatus::Won => "won",
        RoundStatus::Lost => "lost",
    }
}

fn build_guess_view(guess: &GuessRecord) -> GuessView {
    GuessView {
        name: guess.player_name.clone(),
        verdicts: guess
            .verdicts
            .iter()
            .map(|(attr, verdict)| VerdictView {
                attribute: attr.as_str(),
                status: verdict.status.as_str(),
                value: verdict.value.clone(),
                arrow: verdict.arrow.as_str(),
            })
            .collect(),
    }
}
