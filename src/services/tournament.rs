use anyhow::Context;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rusqlite::{Connection, TransactionBehavior};

use super::load_rules;
use crate::config::AppConfig;
use crate::database::{self, DbPool, NewTournament, matches, rules, tournaments, winner_predictions};
use crate::domain::{Match, Podium, ScoringRules, Tournament, TournamentId};
use crate::errors::{EngineError, Result};
use crate::podium::{award_winner_predictions, resolve_podium};

pub struct TournamentService {
    pool: DbPool,
    config: AppConfig,
}

impl TournamentService {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    /// Creates a tournament with the given rules, or the configured defaults
    pub fn create_tournament(
        &self,
        tournament: &NewTournament,
        scoring_rules: Option<ScoringRules>,
    ) -> Result<Tournament> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start transaction")?;

        let created = tournaments::insert_tournament(&tx, tournament)?;
        let scoring_rules = scoring_rules.unwrap_or_else(|| self.config.default_rules.to_rules());
        rules::upsert_rules(&tx, created.id, &scoring_rules)?;

        tx.commit().context("Failed to commit tournament")?;
        info!("Created tournament {} ({} {})", created.id, created.name, created.year);
        Ok(created)
    }

    pub fn add_match(
        &self,
        tournament_id: TournamentId,
        home_team: &str,
        away_team: &str,
        start_time_utc: DateTime<Utc>,
    ) -> Result<Match> {
        let conn = database::get_connection(&self.pool)?;
        tournaments::find_by_id(&conn, tournament_id)?
            .ok_or_else(|| EngineError::not_found("tournament", tournament_id))?;

        let m = matches::insert_match(&conn, tournament_id, home_team, away_team, start_time_utc)?;
        debug!("Added match {} ({}) to tournament {}", m.id, m.summary(), tournament_id);
        Ok(m)
    }

    /// Resolves the podium, awards overall winner picks and marks the tournament ended.
    /// Nothing is written when a precondition fails.
    pub fn end_tournament(&self, tournament_id: TournamentId) -> Result<Podium> {
        info!("Ending tournament {}", tournament_id);

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to start end-of-tournament transaction")?;

        let tournament = tournaments::find_by_id(&tx, tournament_id)?
            .ok_or_else(|| EngineError::not_found("tournament", tournament_id))?;
        if tournament.is_ended {
            return Err(EngineError::invalid_state(format!(
                "tournament {} has already ended",
                tournament_id
            )));
        }
        if !tournament.supports_winner_prediction {
            return Err(EngineError::invalid_state(format!(
                "tournament {} does not support winner predictions",
                tournament_id
            )));
        }

        let scoring_rules = load_rules(&tx, tournament_id, &self.config.default_rules)?;
        let podium = award_podium(&tx, tournament_id, &scoring_rules)?.ok_or_else(|| {
            EngineError::insufficient_data(format!(
                "tournament {} needs at least two scored matches",
                tournament_id
            ))
        })?;

        if !tournaments::mark_ended(&tx, tournament_id)? {
            return Err(EngineError::invalid_state(format!(
                "tournament {} has already ended",
                tournament_id
            )));
        }

        tx.commit().context("Failed to commit end of tournament")?;
        info!(
            "  → {} ended: gold {}, silver {}, bronze {}",
            tournament.name, podium.gold, podium.silver, podium.bronze
        );
        Ok(podium)
    }

    /// Re-derives the podium of an ended tournament after result corrections.
    /// Returns `None` when fewer than two matches are scored; awards are then left as they were.
    pub fn reaward_podium(&self, tournament_id: TournamentId) -> Result<Option<Podium>> {
        info!("Re-awarding podium of tournament {}", tournament_id);

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to start podium transaction")?;

        tournaments::find_by_id(&tx, tournament_id)?
            .ok_or_else(|| EngineError::not_found("tournament", tournament_id))?;

        let scoring_rules = load_rules(&tx, tournament_id, &self.config.default_rules)?;
        let podium = award_podium(&tx, tournament_id, &scoring_rules)?;

        tx.commit().context("Failed to commit podium")?;
        Ok(podium)
    }
}

/// Resolves the podium from stored results and writes points to every winner pick
pub(crate) fn award_podium(
    conn: &Connection,
    tournament_id: TournamentId,
    scoring_rules: &ScoringRules,
) -> Result<Option<Podium>> {
    let tournament_matches = matches::list_by_tournament(conn, tournament_id)?;
    let Some(podium) = resolve_podium(&tournament_matches) else {
        return Ok(None);
    };

    let mut picks = winner_predictions::list_by_tournament(conn, tournament_id)?;
    award_winner_predictions(&mut picks, &podium, scoring_rules);
    for pick in &picks {
        winner_predictions::set_points(conn, pick.id, pick.points_awarded)?;
    }

    debug!("Awarded {} winner picks for tournament {}", picks.len(), tournament_id);
    Ok(Some(podium))
}
