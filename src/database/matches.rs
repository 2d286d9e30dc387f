use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::domain::{Match, MatchId, TournamentId};

const COLUMNS: &str = "id, tournament_id, home_team, away_team, start_time_utc, home_score, away_score";

pub fn insert_match(
    conn: &Connection,
    tournament_id: TournamentId,
    home_team: &str,
    away_team: &str,
    start_time_utc: DateTime<Utc>,
) -> Result<Match> {
    let sql = format!(
        "INSERT INTO matches (tournament_id, home_team, away_team, start_time_utc) VALUES (?1, ?2, ?3, ?4) RETURNING {COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![tournament_id, home_team, away_team, start_time_utc],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        home_team: row.get(2)?,
        away_team: row.get(3)?,
        start_time_utc: row.get(4)?,
        home_score: row.get(5)?,
        away_score: row.get(6)?,
    })
}

pub fn find_by_id(conn: &Connection, id: MatchId) -> Result<Option<Match>> {
    let sql = format!("SELECT {COLUMNS} FROM matches WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<Match>> {
    let sql = format!("SELECT {COLUMNS} FROM matches WHERE tournament_id = ?1 ORDER BY start_time_utc, id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_all(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("SELECT {COLUMNS} FROM matches ORDER BY start_time_utc, id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_result(conn: &Connection, id: MatchId, home_score: i32, away_score: i32) -> Result<()> {
    let sql = "UPDATE matches SET home_score = ?1, away_score = ?2 WHERE id = ?3";

    conn.execute(sql, params![home_score, away_score, id])
        .with_context(|| format!("Failed to update result of match {}", id))?;
    Ok(())
}
