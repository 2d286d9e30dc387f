pub mod leaderboard;
pub mod prediction;
pub mod scoring;
pub mod tournament;

pub use leaderboard::LeaderboardService;
pub use prediction::PredictionService;
pub use scoring::ScoringService;
pub use tournament::TournamentService;

use anyhow::Result;
use rusqlite::Connection;

use crate::config::DefaultRules;
use crate::database::rules;
use crate::domain::{ScoringRules, TournamentId};

/// Stored rules of a tournament, or the configured defaults when none were saved
fn load_rules(conn: &Connection, tournament_id: TournamentId, defaults: &DefaultRules) -> Result<ScoringRules> {
    Ok(rules::find_by_tournament(conn, tournament_id)?.unwrap_or_else(|| defaults.to_rules()))
}
