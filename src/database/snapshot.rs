use anyhow::Result;
use rusqlite::Connection;

use super::{matches, predictions, tournaments, users, winner_predictions};
use crate::domain::{PoolSnapshot, TournamentId};

/// Whole pool, for global standings, records and medals
pub fn load_snapshot(conn: &Connection) -> Result<PoolSnapshot> {
    Ok(PoolSnapshot {
        users: users::name_map(conn)?,
        tournaments: tournaments::list_all(conn)?,
        matches: matches::list_all(conn)?,
        predictions: predictions::list_all(conn)?,
        winner_predictions: winner_predictions::list_all(conn)?,
    })
}

/// Just the rows of one tournament. The tournament list is empty when the id is unknown.
pub fn load_tournament_snapshot(conn: &Connection, tournament_id: TournamentId) -> Result<PoolSnapshot> {
    Ok(PoolSnapshot {
        users: users::name_map(conn)?,
        tournaments: tournaments::find_by_id(conn, tournament_id)?.into_iter().collect(),
        matches: matches::list_by_tournament(conn, tournament_id)?,
        predictions: predictions::list_by_tournament(conn, tournament_id)?,
        winner_predictions: winner_predictions::list_by_tournament(conn, tournament_id)?,
    })
}
