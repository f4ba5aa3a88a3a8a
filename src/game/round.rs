use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{GuessRecord, RoundStatus};

/// One session's attempt sequence for a single calendar day.
///
/// `NotStarted → InProgress` on the first accepted guess,
/// `InProgress → Won` when the guessed identity equals the target,
/// `InProgress → Lost` when the guess limit is exhausted without a win.
/// `Won` and `Lost` are terminal until reset or day rollover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRound {
    pub game_date: NaiveDate,
    pub status: RoundStatus,
    pub guesses: Vec<GuessRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { status: RoundStatus },
    RejectedRoundOver,
}

impl GameRound {
    pub fn new(game_date: NaiveDate) -> Self {
        Self {
            game_date,
            status: RoundStatus::NotStarted,
            guesses: Vec::new(),
        }
    }

    pub fn guesses_remaining(&self, max_guesses: usize) -> usize {
        max_guesses.saturating_sub(self.guesses.len())
    }

    /// Append an accepted guess and advance the state machine. A terminal
    /// round rejects the submission without consuming an attempt.
    pub fn submit(&mut self, record: GuessRecord, is_win: bool, max_guesses: usize) -> SubmitOutcome {
        if self.status.is_terminal() {
            return SubmitOutcome::RejectedRoundOver;
        }

        if self.status == RoundStatus::NotStarted {
            self.status = RoundStatus::InProgress;
        }

        self.guesses.push(record);

        if is_win {
            self.status = RoundStatus::Won;
        } else if self.guesses.len() >= max_guesses {
            self.status = RoundStatus::Lost;
        }

        SubmitOutcome::Accepted {
            status: self.status,
        }
    }
}
