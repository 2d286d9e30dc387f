use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use super::columns::decimal_at;
use crate::domain::{MatchId, Prediction, PredictionId, PredictionScore, TournamentId, UserId};

const COLUMNS: &str = "p.id, p.match_id, p.user_id, p.predicted_home, p.predicted_away, p.correct_winner, p.exact_score, p.one_goal_miss, p.sole_correct_winner, p.rarity_share, p.points";

/// Inserts the user's pick or replaces the scores of an existing one.
/// Derived fields are left for the next recompute.
pub fn upsert_prediction(
    conn: &Connection,
    match_id: MatchId,
    user_id: UserId,
    predicted_home: i32,
    predicted_away: i32,
) -> Result<Prediction> {
    let sql = format!(
        "INSERT INTO predictions (match_id, user_id, predicted_home, predicted_away) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (match_id, user_id) DO UPDATE SET
            predicted_home = excluded.predicted_home,
            predicted_away = excluded.predicted_away
         RETURNING {}",
        COLUMNS.replace("p.", "")
    );

    conn.query_row(
        &sql,
        params![match_id, user_id, predicted_home, predicted_away],
        parse_prediction_row,
    )
    .context("Failed to upsert prediction")
}

fn parse_prediction_row(row: &rusqlite::Row) -> rusqlite::Result<Prediction> {
    Ok(Prediction {
        id: row.get(0)?,
        match_id: row.get(1)?,
        user_id: row.get(2)?,
        predicted_home: row.get(3)?,
        predicted_away: row.get(4)?,
        score: PredictionScore {
            correct_winner: row.get(5)?,
            exact_score: row.get(6)?,
            one_goal_miss: row.get(7)?,
            sole_correct_winner: row.get(8)?,
            rarity_share: decimal_at(row, 9)?,
            points: row.get(10)?,
        },
    })
}

pub fn find(conn: &Connection, match_id: MatchId, user_id: UserId) -> Result<Option<Prediction>> {
    let sql = format!("SELECT {COLUMNS} FROM predictions p WHERE p.match_id = ?1 AND p.user_id = ?2");

    conn.query_row(&sql, params![match_id, user_id], parse_prediction_row)
        .optional()
        .context("Failed to query prediction")
}

pub fn list_by_match(conn: &Connection, match_id: MatchId) -> Result<Vec<Prediction>> {
    let sql = format!("SELECT {COLUMNS} FROM predictions p WHERE p.match_id = ?1 ORDER BY p.id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![match_id], parse_prediction_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<Prediction>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM predictions p JOIN matches m ON p.match_id = m.id WHERE m.tournament_id = ?1 ORDER BY p.id"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_prediction_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_all(conn: &Connection) -> Result<Vec<Prediction>> {
    let sql = format!("SELECT {COLUMNS} FROM predictions p ORDER BY p.id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_prediction_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_score(conn: &Connection, id: PredictionId, score: &PredictionScore) -> Result<()> {
    let sql = "UPDATE predictions SET correct_winner = ?1, exact_score = ?2, one_goal_miss = ?3, sole_correct_winner = ?4, rarity_share = ?5, points = ?6 WHERE id = ?7";

    conn.execute(
        sql,
        params![
            score.correct_winner,
            score.exact_score,
            score.one_goal_miss,
            score.sole_correct_winner,
            score.rarity_share.to_string(),
            score.points,
            id,
        ],
    )
    .with_context(|| format!("Failed to store score of prediction {}", id))?;

    Ok(())
}
