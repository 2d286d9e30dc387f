use anyhow::Context;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rusqlite::{Connection, TransactionBehavior};

use super::load_rules;
use super::tournament::award_podium;
use crate::config::AppConfig;
use crate::database::{self, DbPool, matches, predictions, tournaments};
use crate::domain::{MatchId, TournamentId};
use crate::errors::{EngineError, Result};
use crate::scoring::score_match;

/// Writes the derived fields of predictions whenever results or picks change
#[derive(Clone)]
pub struct ScoringService {
    pool: DbPool,
    config: AppConfig,
}

impl ScoringService {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    /// Rescores every prediction of one match as a single unit. Unscored matches are left alone.
    pub fn recalculate_for_match(&self, match_id: MatchId) -> Result<()> {
        info!("Recalculating match {}", match_id);

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to start recalculation transaction")?;

        rescore_match(&tx, match_id, &self.config)?;

        tx.commit().context("Failed to commit recalculation")?;
        Ok(())
    }

    /// Rescores every match of a tournament and re-awards the podium if it already ended
    pub fn recalculate_for_tournament(&self, tournament_id: TournamentId) -> Result<()> {
        info!("Recalculating tournament {}", tournament_id);

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to start recalculation transaction")?;

        let tournament = tournaments::find_by_id(&tx, tournament_id)?
            .ok_or_else(|| EngineError::not_found("tournament", tournament_id))?;

        let mut rescored = 0;
        for m in matches::list_by_tournament(&tx, tournament_id)? {
            if rescore_match(&tx, m.id, &self.config)? {
                rescored += 1;
            }
        }
        info!("  → Rescored {} matches of {}", rescored, tournament.name);

        if tournament.is_ended {
            let rules = load_rules(&tx, tournament_id, &self.config.default_rules)?;
            match award_podium(&tx, tournament_id, &rules)? {
                Some(podium) => info!(
                    "  → Re-awarded podium {} / {} / {}",
                    podium.gold, podium.silver, podium.bronze
                ),
                None => warn!(
                    "Tournament {} is ended but has fewer than two scored matches, awards kept",
                    tournament_id
                ),
            }
        }

        tx.commit().context("Failed to commit recalculation")?;
        Ok(())
    }

    /// Stores a final score and rescores the match in the same transaction
    pub fn update_match_result(
        &self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
        now: DateTime<Utc>,
    ) -> Result<()> {
        info!("Setting result of match {} to {}:{}", match_id, home_score, away_score);

        if home_score < 0 || away_score < 0 {
            return Err(EngineError::invalid_state("scores cannot be negative"));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to start result transaction")?;

        let m = matches::find_by_id(&tx, match_id)?
            .ok_or_else(|| EngineError::not_found("match", match_id))?;
        if now < m.start_time_utc {
            return Err(EngineError::invalid_state(format!(
                "match {} has not started yet",
                match_id
            )));
        }

        matches::update_result(&tx, match_id, home_score, away_score)?;
        rescore_match(&tx, match_id, &self.config)?;

        tx.commit().context("Failed to commit match result")?;
        Ok(())
    }
}

/// Reads the match, its rules and predictions, then overwrites every derived field.
/// Returns whether the match was scored.
pub(crate) fn rescore_match(conn: &Connection, match_id: MatchId, config: &AppConfig) -> Result<bool> {
    let m = matches::find_by_id(conn, match_id)?
        .ok_or_else(|| EngineError::not_found("match", match_id))?;

    let rules = load_rules(conn, m.tournament_id, &config.default_rules)?;
    let mut match_predictions = predictions::list_by_match(conn, match_id)?;

    if !score_match(&m, &mut match_predictions, &rules) {
        debug!("Match {} has no result yet, nothing to score", match_id);
        return Ok(false);
    }

    for prediction in &match_predictions {
        predictions::update_score(conn, prediction.id, &prediction.score)?;
    }

    debug!("Stored scores of {} predictions for match {}", match_predictions.len(), match_id);
    Ok(true)
}
