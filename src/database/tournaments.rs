use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use super::columns::tournament_type_at;
use crate::domain::{Tournament, TournamentId, TournamentType};

/// Fields supplied when a tournament is created
#[derive(Debug, Clone)]
pub struct NewTournament {
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub tournament_type: TournamentType,
    pub is_test: bool,
    pub supports_winner_prediction: bool,
}

const COLUMNS: &str = "id, name, year, description, tournament_type, is_test, supports_winner_prediction, is_ended, created_at";

pub fn insert_tournament(conn: &Connection, tournament: &NewTournament) -> Result<Tournament> {
    let sql = format!(
        "INSERT INTO tournaments (name, year, description, tournament_type, is_test, supports_winner_prediction, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING {COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            tournament.name,
            tournament.year,
            tournament.description,
            tournament.tournament_type.code(),
            tournament.is_test,
            tournament.supports_winner_prediction,
            Utc::now(),
        ],
        parse_tournament_row,
    )
    .context("Failed to insert tournament")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        year: row.get(2)?,
        description: row.get(3)?,
        tournament_type: tournament_type_at(row, 4)?,
        is_test: row.get(5)?,
        supports_winner_prediction: row.get(6)?,
        is_ended: row.get(7)?,
        created_at: row.get(8)?,
    })
}

pub fn find_by_id(conn: &Connection, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {COLUMNS} FROM tournaments WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Tournament>> {
    let sql = format!("SELECT {COLUMNS} FROM tournaments ORDER BY year DESC, created_at DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Flips the ended flag; returns whether this call did the transition
pub fn mark_ended(conn: &Connection, id: TournamentId) -> Result<bool> {
    let sql = "UPDATE tournaments SET is_ended = 1 WHERE id = ?1 AND is_ended = 0";

    let changed = conn
        .execute(sql, params![id])
        .context("Failed to mark tournament as ended")?;
    Ok(changed == 1)
}
