use std::collections::BTreeMap;

use log::info;

use crate::database::{self, DbPool, snapshot};
use crate::domain::{
    LeaderboardEntry, LeaderboardProgress, MedalCounts, PoolSnapshot, TournamentId,
    TournamentRecords, TournamentType,
};
use crate::errors::{EngineError, Result};
use crate::ranking::{self, Scope};

/// Read-side queries. Every call loads current state and computes from scratch.
pub struct LeaderboardService {
    pool: DbPool,
}

impl LeaderboardService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_leaderboard(&self, tournament_id: TournamentId) -> Result<Vec<LeaderboardEntry>> {
        info!("Leaderboard of tournament {}", tournament_id);
        let snapshot = self.tournament_snapshot(tournament_id)?;
        Ok(ranking::aggregate(&snapshot, Scope::Tournament(tournament_id)))
    }

    pub fn get_global_leaderboard(&self, type_filter: Option<TournamentType>) -> Result<Vec<LeaderboardEntry>> {
        info!("Global leaderboard (type filter: {:?})", type_filter);
        let snapshot = self.full_snapshot()?;
        Ok(ranking::aggregate(&snapshot, Scope::Global { type_filter }))
    }

    pub fn get_tournament_records(&self, type_filter: Option<TournamentType>) -> Result<TournamentRecords> {
        info!("Tournament records (type filter: {:?})", type_filter);
        let snapshot = self.full_snapshot()?;
        Ok(ranking::tournament_records(&snapshot, type_filter))
    }

    pub fn get_medal_counts(&self, type_filter: Option<TournamentType>) -> Result<MedalCounts> {
        info!("Medal counts (type filter: {:?})", type_filter);
        let snapshot = self.full_snapshot()?;
        Ok(ranking::medal_counts(&snapshot, type_filter))
    }

    /// Top scorer per tournament; unknown ids and tournaments without predictions are left out
    pub fn get_tournament_winners(&self, tournament_ids: &[TournamentId]) -> Result<BTreeMap<TournamentId, String>> {
        info!("Winners of tournaments {:?}", tournament_ids);
        let snapshot = self.full_snapshot()?;
        Ok(ranking::tournament_winners(&snapshot, tournament_ids))
    }

    pub fn get_leaderboard_progress(&self, tournament_id: TournamentId) -> Result<LeaderboardProgress> {
        info!("Leaderboard progress of tournament {}", tournament_id);
        let snapshot = self.tournament_snapshot(tournament_id)?;
        Ok(ranking::leaderboard_progress(&snapshot, tournament_id))
    }

    fn full_snapshot(&self) -> Result<PoolSnapshot> {
        let conn = database::get_connection(&self.pool)?;
        Ok(snapshot::load_snapshot(&conn)?)
    }

    fn tournament_snapshot(&self, tournament_id: TournamentId) -> Result<PoolSnapshot> {
        let conn = database::get_connection(&self.pool)?;
        let snapshot = snapshot::load_tournament_snapshot(&conn, tournament_id)?;
        if snapshot.tournament(tournament_id).is_none() {
            return Err(EngineError::not_found("tournament", tournament_id));
        }
        Ok(snapshot)
    }
}
