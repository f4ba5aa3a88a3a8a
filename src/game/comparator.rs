use crate::config::settings::GameSettings;
use crate::domain::{Attribute, Player, TrendArrow, Verdict, VerdictStatus};

/// Compare a guessed player to the target, one verdict per attribute in the
/// fixed [`Attribute::ALL`] order. Each attribute is judged independently:
/// exact string match first, then numeric closeness when both sides parse
/// as numbers, otherwise a plain miss.
pub fn compare(guess: &Player, target: &Player, settings: &GameSettings) -> Vec<(Attribute, Verdict)> {
    Attribute::ALL
        .iter()
        .map(|attr| (*attr, compare_attribute(attr, guess, target, settings)))
        .collect()
}

/// A guess wins only by identity with the target, never by happening to
/// match every attribute value of some other player.
pub fn is_winning_guess(guess: &Player, target: &Player) -> bool {
    guess.name == target.name
}

fn compare_attribute(
    attr: &Attribute,
    guess: &Player,
    target: &Player,
    settings: &GameSettings,
) -> Verdict {
    let g_val = attr.value_of(guess);
    let t_val = attr.value_of(target);

    if g_val == t_val {
        return Verdict {
            status: VerdictStatus::Correct,
            value: g_val.to_string(),
            arrow: TrendArrow::None,
        };
    }

    match (parse_numeric(g_val), parse_numeric(t_val)) {
        (Some(g), Some(t)) => {
            let status = if is_close(g, t, settings) {
                VerdictStatus::Close
            } else {
                VerdictStatus::Off
            };
            Verdict {
                status,
                value: g_val.to_string(),
                arrow: trend_arrow(g, t),
            }
        }
        _ => Verdict {
            status: VerdictStatus::Off,
            value: g_val.to_string(),
            arrow: TrendArrow::None,
        },
    }
}

/// A value is numeric iff its trimmed form is a valid floating-point
/// literal. "$51,415,938" is not numeric; "29" and " 7.5 " are.
fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Close means within 1 in absolute terms, or within 10% of the target.
/// A zero target never grants the relative branch.
fn is_close(guess: f64, target: f64, settings: &GameSettings) -> bool {
    if (guess - target).abs() <= settings.close_absolute {
        return true;
    }
    if target == 0.0 {
        return false;
    }
    ((guess - target) / target).abs() <= settings.close_relative
}

fn trend_arrow(guess: f64, target: f64) -> TrendArrow {
    if guess < target {
        TrendArrow::Up
    } else if guess > target {
        TrendArrow::Down
    } else {
        TrendArrow::None
    }
}
