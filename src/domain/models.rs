use serde::{Deserialize, Serialize};

/// One eligible player. Every attribute is kept as the string it had in the
/// source dataset; numeric comparison happens by opportunistic parsing at
/// guess time, so "29" and "$33,616,770" both live here unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub jersey: String,
    pub team: String,
    pub position: String,
    pub age: String,
    pub salary: String,
}

/// Guessable attributes, in the fixed order they are compared and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Jersey,
    Team,
    Position,
    Age,
    Salary,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Jersey,
        Attribute::Team,
        Attribute::Position,
        Attribute::Age,
        Attribute::Salary,
    ];

    pub fn value_of<'a>(&self, player: &'a Player) -> &'a str {
        match self {
            Attribute::Jersey => &player.jersey,
            Attribute::Team => &player.team,
            Attribute::Position => &player.position,
            Attribute::Age => &player.age,
            Attribute::Salary => &player.salary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Jersey => "jersey",
            Attribute::Team => "team",
            Attribute::Position => "position",
            Attribute::Age => "age",
            Attribute::Salary => "salary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Correct,
    Close,
    Off,
}

impl VerdictStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Correct => "correct",
            VerdictStatus::Close => "close",
            VerdictStatus::Off => "off",
        }
    }
}

/// Direction hint for numeric attributes: `Up` means the target is higher
/// than the guess. Non-numeric comparisons always carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendArrow {
    Up,
    Down,
    None,
}

impl TrendArrow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendArrow::Up => "up",
            TrendArrow::Down => "down",
            TrendArrow::None => "none",
        }
    }
}

/// Per-attribute comparison outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub value: String,
    pub arrow: TrendArrow,
}

/// One resolved guess with its ordered attribute verdicts
/// (same order as [`Attribute::ALL`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub player_name: String,
    pub verdicts: Vec<(Attribute, Verdict)>,
}

/// Round lifecycle for one session and one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::NotStarted => "not_started",
            RoundStatus::InProgress => "in_progress",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        }
    }

    pub fn parse(value: &str) -> Option<RoundStatus> {
        match value {
            "not_started" => Some(RoundStatus::NotStarted),
            "in_progress" => Some(RoundStatus::InProgress),
            "won" => Some(RoundStatus::Won),
            "lost" => Some(RoundStatus::Lost),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost)
    }
}
