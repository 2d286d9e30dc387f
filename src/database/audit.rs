use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::domain::{MatchId, PredictionAuditEntry};

pub fn insert_entry(conn: &Connection, entry: &PredictionAuditEntry) -> Result<()> {
    let sql = "
        INSERT INTO prediction_audit_log (match_id, actor_id, target_user_id, old_home, old_away, new_home, new_away, is_admin_update, match_summary, timestamp_utc)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    ";

    conn.execute(
        sql,
        params![
            entry.match_id,
            entry.actor_id,
            entry.target_user_id,
            entry.old_home,
            entry.old_away,
            entry.new_home,
            entry.new_away,
            entry.is_admin_update,
            entry.match_summary,
            entry.timestamp_utc,
        ],
    )
    .context("Failed to write prediction audit entry")?;

    Ok(())
}

fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<PredictionAuditEntry> {
    Ok(PredictionAuditEntry {
        match_id: row.get(0)?,
        actor_id: row.get(1)?,
        target_user_id: row.get(2)?,
        old_home: row.get(3)?,
        old_away: row.get(4)?,
        new_home: row.get(5)?,
        new_away: row.get(6)?,
        is_admin_update: row.get(7)?,
        match_summary: row.get(8)?,
        timestamp_utc: row.get(9)?,
    })
}

/// Audit trail of one match, oldest first
pub fn list_by_match(conn: &Connection, match_id: MatchId) -> Result<Vec<PredictionAuditEntry>> {
    let sql = "SELECT match_id, actor_id, target_user_id, old_home, old_away, new_home, new_away, is_admin_update, match_summary, timestamp_utc FROM prediction_audit_log WHERE match_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![match_id], parse_entry_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
