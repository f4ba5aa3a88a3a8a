use crate::domain::{GuessRecord, VerdictStatus};

/// Shareable summary: one row per guess, one colored cell per attribute.
pub fn emoji_grid(guesses: &[GuessRecord]) -> Vec<String> {
    guesses.iter().map(emoji_row).collect()
}

fn emoji_row(guess: &GuessRecord) -> String {
    guess
        .verdicts
        .iter()
        .map(|(_, verdict)| cell(verdict.status))
        .collect()
}

fn cell(status: VerdictStatus) -> &'static str {
    match status {
        VerdictStatus::Correct => "🟩",
        VerdictStatus::Close => "🟨",
        VerdictStatus::Off => "⬜",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attribute, TrendArrow, Verdict};

    fn verdict(status: VerdictStatus) -> Verdict {
        Verdict {
            status,
            value: String::new(),
            arrow: TrendArrow::None,
        }
    }

    #[test]
    fn test_grid_maps_statuses_to_cells() {
        let guesses = vec![GuessRecord {
            player_name: "Alpha One".to_string(),
            verdicts: vec![
                (Attribute::Jersey, verdict(VerdictStatus::Correct)),
                (Attribute::Team, verdict(VerdictStatus::Close)),
                (Attribute::Position, verdict(VerdictStatus::Off)),
            ],
        }];
        assert_eq!(emoji_grid(&guesses), vec!["🟩🟨⬜".to_string()]);
    }

    #[test]
    fn test_grid_has_one_row_per_guess() {
        let guess = GuessRecord {
            player_name: "Alpha One".to_string(),
            verdicts: vec![(Attribute::Jersey, verdict(VerdictStatus::Off))],
        };
        assert_eq!(emoji_grid(&[guess.clone(), guess]).len(), 2);
    }
}
