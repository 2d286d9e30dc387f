use anyhow::Context;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rusqlite::{Connection, TransactionBehavior};

use super::scoring::rescore_match;
use crate::config::AppConfig;
use crate::database::{
    self, DbPool, audit, matches, predictions, snapshot, tournaments, users, winner_predictions,
};
use crate::domain::{
    Match, MatchId, Prediction, PredictionAuditEntry, TournamentId, UserId, WinnerPrediction,
};
use crate::errors::{EngineError, Result};
use crate::lock_time::{is_early_match, prediction_lock_time};
use crate::ranking::{Scope, aggregate};

/// Prediction writes and their deadlines
pub struct PredictionService {
    pool: DbPool,
    config: AppConfig,
}

/// Who is writing a prediction, for the audit trail
#[derive(Clone, Copy)]
struct Writer {
    actor_id: UserId,
    is_admin_update: bool,
}

impl PredictionService {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self { pool, config }
    }

    /// Submission deadline for one user on one match, against the leaderboard as it is right now
    pub fn get_prediction_lock_time(
        &self,
        tournament_id: TournamentId,
        match_id: MatchId,
        user_id: UserId,
    ) -> Result<DateTime<Utc>> {
        info!(
            "Lock time for user {} on match {} of tournament {}",
            user_id, match_id, tournament_id
        );

        let conn = database::get_connection(&self.pool)?;
        tournaments::find_by_id(&conn, tournament_id)?
            .ok_or_else(|| EngineError::not_found("tournament", tournament_id))?;

        let m = matches::find_by_id(&conn, match_id)?
            .filter(|m| m.tournament_id == tournament_id)
            .ok_or_else(|| EngineError::not_found("match", match_id))?;

        self.lock_time_for(&conn, &m, user_id)
    }

    /// A user's own pick. Rejected once the user's deadline has passed.
    pub fn submit_prediction(
        &self,
        match_id: MatchId,
        user_id: UserId,
        home: i32,
        away: i32,
        now: DateTime<Utc>,
    ) -> Result<Prediction> {
        info!("User {} predicts {}:{} for match {}", user_id, home, away, match_id);
        let writer = Writer {
            actor_id: user_id,
            is_admin_update: false,
        };
        self.write_prediction(writer, match_id, user_id, home, away, now)
    }

    /// Admin override on behalf of a user, bypassing the deadline
    pub fn set_prediction(
        &self,
        actor_id: UserId,
        match_id: MatchId,
        user_id: UserId,
        home: i32,
        away: i32,
        now: DateTime<Utc>,
    ) -> Result<Prediction> {
        info!(
            "Admin {} sets {}:{} for user {} on match {}",
            actor_id, home, away, user_id, match_id
        );
        let writer = Writer {
            actor_id,
            is_admin_update: true,
        };
        self.write_prediction(writer, match_id, user_id, home, away, now)
    }

    pub fn submit_winner_prediction(
        &self,
        tournament_id: TournamentId,
        user_id: UserId,
        team_name: &str,
        now: DateTime<Utc>,
    ) -> Result<WinnerPrediction> {
        info!("User {} picks {} to win tournament {}", user_id, team_name, tournament_id);

        let conn = database::get_connection(&self.pool)?;
        let tournament = tournaments::find_by_id(&conn, tournament_id)?
            .ok_or_else(|| EngineError::not_found("tournament", tournament_id))?;
        users::find_by_id(&conn, user_id)?.ok_or_else(|| EngineError::not_found("user", user_id))?;

        if !tournament.supports_winner_prediction {
            return Err(EngineError::invalid_state(format!(
                "tournament {} does not support winner predictions",
                tournament_id
            )));
        }
        if tournament.is_ended {
            return Err(EngineError::invalid_state(format!(
                "tournament {} has already ended",
                tournament_id
            )));
        }

        Ok(winner_predictions::upsert_winner_prediction(
            &conn,
            tournament_id,
            user_id,
            team_name,
            now,
        )?)
    }

    fn write_prediction(
        &self,
        writer: Writer,
        match_id: MatchId,
        user_id: UserId,
        home: i32,
        away: i32,
        now: DateTime<Utc>,
    ) -> Result<Prediction> {
        if home < 0 || away < 0 {
            return Err(EngineError::invalid_state("scores cannot be negative"));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to start prediction transaction")?;

        let m = matches::find_by_id(&tx, match_id)?
            .ok_or_else(|| EngineError::not_found("match", match_id))?;
        users::find_by_id(&tx, user_id)?.ok_or_else(|| EngineError::not_found("user", user_id))?;
        if writer.is_admin_update {
            users::find_by_id(&tx, writer.actor_id)?
                .ok_or_else(|| EngineError::not_found("user", writer.actor_id))?;
        } else {
            let lock_time = self.lock_time_for(&tx, &m, user_id)?;
            if now >= lock_time {
                return Err(EngineError::PredictionLocked {
                    match_id,
                    user_id,
                    lock_time,
                });
            }
        }

        let previous = predictions::find(&tx, match_id, user_id)?;
        predictions::upsert_prediction(&tx, match_id, user_id, home, away)?;

        audit::insert_entry(
            &tx,
            &PredictionAuditEntry {
                match_id,
                actor_id: writer.actor_id,
                target_user_id: user_id,
                old_home: previous.as_ref().map(|p| p.predicted_home),
                old_away: previous.as_ref().map(|p| p.predicted_away),
                new_home: home,
                new_away: away,
                is_admin_update: writer.is_admin_update,
                match_summary: m.summary(),
                timestamp_utc: now,
            },
        )?;

        if m.is_scored() {
            rescore_match(&tx, match_id, &self.config)?;
        }

        let stored = predictions::find(&tx, match_id, user_id)?
            .ok_or_else(|| EngineError::not_found("prediction", match_id))?;
        tx.commit().context("Failed to commit prediction")?;
        Ok(stored)
    }

    fn lock_time_for(&self, conn: &Connection, m: &Match, user_id: UserId) -> Result<DateTime<Utc>> {
        let settings = &self.config.lock_time;
        let tournament_matches = matches::list_by_tournament(conn, m.tournament_id)?;

        if is_early_match(&tournament_matches, m.id, settings) {
            debug!("Match {} is an opening match, no rank adjustment", m.id);
            return Ok(m.start_time_utc);
        }

        let snapshot = snapshot::load_tournament_snapshot(conn, m.tournament_id)?;
        let ranking = aggregate(&snapshot, Scope::Tournament(m.tournament_id));
        Ok(prediction_lock_time(m.start_time_utc, false, user_id, &ranking, settings))
    }
}
