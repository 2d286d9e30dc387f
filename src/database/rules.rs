use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use super::columns::decimal_at;
use crate::domain::{ScoringRules, TournamentId};

pub fn upsert_rules(conn: &Connection, tournament_id: TournamentId, rules: &ScoringRules) -> Result<()> {
    let sql = "
        INSERT INTO scoring_rules (tournament_id, points_for_correct_winner, points_for_exact_score, points_for_sole_correct_winner, rarity_pool, points_for_winner, points_for_runner_up, points_for_third)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        ON CONFLICT (tournament_id) DO UPDATE SET
            points_for_correct_winner = excluded.points_for_correct_winner,
            points_for_exact_score = excluded.points_for_exact_score,
            points_for_sole_correct_winner = excluded.points_for_sole_correct_winner,
            rarity_pool = excluded.rarity_pool,
            points_for_winner = excluded.points_for_winner,
            points_for_runner_up = excluded.points_for_runner_up,
            points_for_third = excluded.points_for_third
    ";

    conn.execute(
        sql,
        params![
            tournament_id,
            rules.points_for_correct_winner,
            rules.points_for_exact_score,
            rules.points_for_sole_correct_winner,
            rules.rarity_pool.to_string(),
            rules.points_for_winner,
            rules.points_for_runner_up,
            rules.points_for_third,
        ],
    )
    .with_context(|| format!("Failed to store scoring rules for tournament {}", tournament_id))?;

    Ok(())
}

fn parse_rules_row(row: &rusqlite::Row) -> rusqlite::Result<ScoringRules> {
    Ok(ScoringRules {
        points_for_correct_winner: row.get(0)?,
        points_for_exact_score: row.get(1)?,
        points_for_sole_correct_winner: row.get(2)?,
        rarity_pool: decimal_at(row, 3)?,
        points_for_winner: row.get(4)?,
        points_for_runner_up: row.get(5)?,
        points_for_third: row.get(6)?,
    })
}

pub fn find_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Option<ScoringRules>> {
    let sql = "SELECT points_for_correct_winner, points_for_exact_score, points_for_sole_correct_winner, rarity_pool, points_for_winner, points_for_runner_up, points_for_third FROM scoring_rules WHERE tournament_id = ?1";

    conn.query_row(sql, params![tournament_id], parse_rules_row)
        .optional()
        .context("Failed to query scoring rules")
}
