use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Attribute, GuessRecord, RoundStatus, Verdict};
use crate::game::GameRound;

/// Round persistence keyed by (session id, game date). All callers that
/// mutate a round do so inside a single transaction, so two requests for
/// the same session cannot interleave their read-modify-write cycles.
pub fn load_round(
    conn: &Connection,
    session_id: &str,
    game_date: NaiveDate,
) -> Result<Option<GameRound>> {
    let date_key = date_key(game_date);
    let sql = "SELECT status FROM rounds WHERE session_id = ?1 AND game_date = ?2";

    let status: Option<String> = conn
        .query_row(sql, params![session_id, date_key], |row| row.get(0))
        .optional()
        .context("Failed to query round")?;

    let Some(status) = status else {
        return Ok(None);
    };

    let status = RoundStatus::parse(&status)
        .with_context(|| format!("Unknown round status in store: {}", status))?;
    let guesses = load_guesses(conn, session_id, &date_key)?;

    Ok(Some(GameRound {
        game_date,
        status,
        guesses,
    }))
}

/// Fetch the session's round for the day, starting a fresh one on first
/// contact or day rollover. Rounds from previous days are dropped here,
/// which keeps one row per active session.
pub fn load_or_create_round(
    conn: &Connection,
    session_id: &str,
    game_date: NaiveDate,
) -> Result<GameRound> {
    if let Some(round) = load_round(conn, session_id, game_date)? {
        return Ok(round);
    }

    delete_session_rounds(conn, session_id)?;

    let round = GameRound::new(game_date);
    conn.execute(
        "INSERT INTO rounds (session_id, game_date, status) VALUES (?1, ?2, ?3)",
        params![session_id, date_key(game_date), round.status.as_str()],
    )
    .context("Failed to insert new round")?;

    Ok(round)
}

pub fn store_round(conn: &Connection, session_id: &str, round: &GameRound) -> Result<()> {
    let date_key = date_key(round.game_date);

    conn.execute(
        "UPDATE rounds SET status = ?1 WHERE session_id = ?2 AND game_date = ?3",
        params![round.status.as_str(), session_id, date_key],
    )
    .context("Failed to update round status")?;

    conn.execute(
        "DELETE FROM guesses WHERE session_id = ?1 AND game_date = ?2",
        params![session_id, date_key],
    )
    .context("Failed to clear stored guesses")?;

    for (seq, guess) in round.guesses.iter().enumerate() {
        insert_guess(conn, session_id, &date_key, seq, guess)?;
    }

    Ok(())
}

pub fn delete_session_rounds(conn: &Connection, session_id: &str) -> Result<()> {
    conn.execute(
        "DELETE FROM guesses WHERE session_id = ?1",
        params![session_id],
    )
    .context("Failed to delete session guesses")?;
    conn.execute(
        "DELETE FROM rounds WHERE session_id = ?1",
        params![session_id],
    )
    .context("Failed to delete session rounds")?;
    Ok(())
}

fn load_guesses(conn: &Connection, session_id: &str, date_key: &str) -> Result<Vec<GuessRecord>> {
    let sql = "SELECT player_name, verdicts FROM guesses \
               WHERE session_id = ?1 AND game_date = ?2 ORDER BY seq";
    let mut stmt = conn.prepare(sql).context("Failed to prepare guess query")?;

    let rows = stmt
        .query_map(params![session_id, date_key], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .context("Failed to query guesses")?;

    let mut guesses = Vec::new();
    for row in rows {
        let (player_name, verdicts_json) = row.context("Failed to read guess row")?;
        let verdicts: Vec<(Attribute, Verdict)> = serde_json::from_str(&verdicts_json)
            .context("Failed to decode stored verdicts")?;
        guesses.push(GuessRecord {
            player_name,
            verdicts,
        });
    }
    Ok(guesses)
}

fn insert_guess(
    conn: &Connection,
    session_id: &str,
    date_key: &str,
    seq: usize,
    guess: &GuessRecord,
) -> Result<()> {
    let verdicts_json =
        serde_json::to_string(&guess.verdicts).context("Failed to encode verdicts")?;
    conn.execute(
        "INSERT INTO guesses (session_id, game_date, seq, player_name, verdicts) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![session_id, date_key, seq as i64, guess.player_name, verdicts_json],
    )
    .context("Failed to insert guess")?;
    Ok(())
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::init_database;
    use crate::domain::{TrendArrow, VerdictStatus};

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_database(&conn).unwrap();
        conn
    }

    fn sample_guess(name: &str) -> GuessRecord {
        GuessRecord {
            player_name: name.to_string(),
            verdicts: vec![(
                Attribute::Age,
                Verdict {
                    status: VerdictStatus::Close,
                    value: "26".to_string(),
                    arrow: TrendArrow::Down,
                },
            )],
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_missing_round_loads_as_none() {
        let conn = test_conn();
        assert!(load_round(&conn, "sess-1", day()).unwrap().is_none());
    }

    #[test]
    fn test_round_roundtrip_preserves_guess_order_and_verdicts() {
        let conn = test_conn();
        let mut round = load_or_create_round(&conn, "sess-1", day()).unwrap();
        round.submit(sample_guess("Alpha One"), false, 8);
        round.submit(sample_guess("Beta Two"), false, 8);
        store_round(&conn, "sess-1", &round).unwrap();

        let loaded = load_round(&conn, "sess-1", day()).unwrap().unwrap();
        assert_eq!(loaded, round);
        assert_eq!(loaded.guesses[0].player_name, "Alpha One");
        assert_eq!(loaded.guesses[1].player_name, "Beta Two");
        assert_eq!(loaded.guesses[1].verdicts[0].1.arrow, TrendArrow::Down);
    }

    #[test]
    fn test_day_rollover_starts_fresh_and_drops_stale_rows() {
        let conn = test_conn();
        let mut round = load_or_create_round(&conn, "sess-1", day()).unwrap();
        round.submit(sample_guess("Alpha One"), false, 8);
        store_round(&conn, "sess-1", &round).unwrap();

        let tomorrow = day() + chrono::Days::new(1);
        let fresh = load_or_create_round(&conn, "sess-1", tomorrow).unwrap();
        assert_eq!(fresh.status, RoundStatus::NotStarted);
        assert!(fresh.guesses.is_empty());

        // Yesterday's round is gone, not merely shadowed.
        assert!(load_round(&conn, "sess-1", day()).unwrap().is_none());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let conn = test_conn();
        let mut round = load_or_create_round(&conn, "sess-1", day()).unwrap();
        round.submit(sample_guess("Alpha One"), false, 8);
        store_round(&conn, "sess-1", &round).unwrap();

        let other = load_or_create_round(&conn, "sess-2", day()).unwrap();
        assert!(other.guesses.is_empty());
    }

    #[test]
    fn test_delete_session_rounds_clears_everything() {
        let conn = test_conn();
        let mut round = load_or_create_round(&conn, "sess-1", day()).unwrap();
        round.submit(sample_guess("Alpha One"), true, 8);
        store_round(&conn, "sess-1", &round).unwrap();

        delete_session_rounds(&conn, "sess-1").unwrap();
        assert!(load_round(&conn, "sess-1", day()).unwrap().is_none());
    }
}
