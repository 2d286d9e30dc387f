use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use crate::domain::{TournamentId, UserId, WinnerPrediction};

const COLUMNS: &str = "id, tournament_id, user_id, team_name, points_awarded, created_at";

/// One pick per user and tournament; a repeated pick replaces the team and clears any award
pub fn upsert_winner_prediction(
    conn: &Connection,
    tournament_id: TournamentId,
    user_id: UserId,
    team_name: &str,
    created_at: DateTime<Utc>,
) -> Result<WinnerPrediction> {
    let sql = format!(
        "INSERT INTO winner_predictions (tournament_id, user_id, team_name, created_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (user_id, tournament_id) DO UPDATE SET
            team_name = excluded.team_name,
            points_awarded = NULL,
            created_at = excluded.created_at
         RETURNING {COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![tournament_id, user_id, team_name, created_at],
        parse_winner_prediction_row,
    )
    .context("Failed to upsert winner prediction")
}

fn parse_winner_prediction_row(row: &rusqlite::Row) -> rusqlite::Result<WinnerPrediction> {
    Ok(WinnerPrediction {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        user_id: row.get(2)?,
        team_name: row.get(3)?,
        points_awarded: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<WinnerPrediction>> {
    let sql = format!("SELECT {COLUMNS} FROM winner_predictions WHERE tournament_id = ?1 ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_winner_prediction_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_all(conn: &Connection) -> Result<Vec<WinnerPrediction>> {
    let sql = format!("SELECT {COLUMNS} FROM winner_predictions ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_winner_prediction_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn set_points(conn: &Connection, id: i64, points: Option<i32>) -> Result<()> {
    conn.execute(
        "UPDATE winner_predictions SET points_awarded = ?1 WHERE id = ?2",
        params![points, id],
    )
    .with_context(|| format!("Failed to award winner prediction {}", id))?;
    Ok(())
}
