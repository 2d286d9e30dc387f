use std::collections::HashMap;

use super::models::{
    Match, MatchId, Prediction, Tournament, TournamentId, UserId, WinnerPrediction,
};

const UNKNOWN_USER: &str = "Unknown";

/// Everything the read-side computations need, loaded in one pass from storage
#[derive(Debug, Clone, Default)]
pub struct PoolSnapshot {
    pub users: HashMap<UserId, String>,
    pub tournaments: Vec<Tournament>,
    pub matches: Vec<Match>,
    pub predictions: Vec<Prediction>,
    pub winner_predictions: Vec<WinnerPrediction>,
}

impl PoolSnapshot {
    pub fn user_name(&self, user_id: UserId) -> String {
        self.users
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_USER.to_string())
    }

    pub fn tournament(&self, tournament_id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == tournament_id)
    }

    pub fn matches_by_id(&self) -> HashMap<MatchId, &Match> {
        self.matches.iter().map(|m| (m.id, m)).collect()
    }

    /// Matches of one tournament ordered by start time
    pub fn tournament_matches(&self, tournament_id: TournamentId) -> Vec<&Match> {
        let mut matches: Vec<&Match> = self
            .matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .collect();
        matches.sort_by_key(|m| m.start_time_utc);
        matches
    }

    pub fn predictions_for_match(&self, match_id: MatchId) -> Vec<&Prediction> {
        self.predictions
            .iter()
            .filter(|p| p.match_id == match_id)
            .collect()
    }
}
