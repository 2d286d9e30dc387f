//! In-memory pool fixtures shared by the ranking tests

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    Match, MatchId, PoolSnapshot, Prediction, PredictionScore, ScoringRules, Tournament,
    TournamentId, TournamentType, UserId,
};
use crate::scoring::score_match;

pub fn rules(rarity_pool: Decimal) -> ScoringRules {
    ScoringRules {
        points_for_correct_winner: 3,
        points_for_exact_score: 2,
        points_for_sole_correct_winner: 2,
        rarity_pool,
        points_for_winner: 10,
        points_for_runner_up: 6,
        points_for_third: 3,
    }
}

#[derive(Default)]
pub struct SnapshotBuilder {
    snapshot: PoolSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tournament(&mut self, name: &str, year: i32, tournament_type: TournamentType) -> TournamentId {
        let id = self.snapshot.tournaments.len() as i64 + 1;
        self.snapshot.tournaments.push(Tournament {
            id,
            name: name.to_string(),
            year,
            description: None,
            tournament_type,
            is_test: false,
            supports_winner_prediction: true,
            is_ended: false,
            created_at: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        });
        id
    }

    pub fn mark_test(&mut self, tournament_id: TournamentId) {
        if let Some(t) = self.snapshot.tournaments.iter_mut().find(|t| t.id == tournament_id) {
            t.is_test = true;
        }
    }

    pub fn mark_ended(&mut self, tournament_id: TournamentId) {
        if let Some(t) = self.snapshot.tournaments.iter_mut().find(|t| t.id == tournament_id) {
            t.is_ended = true;
        }
    }

    /// Matches start `offset_hours` after a fixed base time
    pub fn scored_match(
        &mut self,
        tournament_id: TournamentId,
        home: &str,
        away: &str,
        home_score: i32,
        away_score: i32,
        offset_hours: i64,
    ) -> MatchId {
        let id = self.add_match(tournament_id, home, away, offset_hours);
        if let Some(m) = self.snapshot.matches.iter_mut().find(|m| m.id == id) {
            m.home_score = Some(home_score);
            m.away_score = Some(away_score);
        }
        id
    }

    pub fn open_match(&mut self, tournament_id: TournamentId, home: &str, away: &str, offset_hours: i64) -> MatchId {
        self.add_match(tournament_id, home, away, offset_hours)
    }

    fn add_match(&mut self, tournament_id: TournamentId, home: &str, away: &str, offset_hours: i64) -> MatchId {
        let id = self.snapshot.matches.len() as i64 + 1;
        let base = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        self.snapshot.matches.push(Match {
            id,
            tournament_id,
            home_team: home.to_string(),
            away_team: away.to_string(),
            start_time_utc: base + Duration::hours(offset_hours),
            home_score: None,
            away_score: None,
        });
        id
    }

    pub fn users(&mut self, users: &[(UserId, &str)]) {
        for (id, name) in users {
            self.snapshot.users.insert(*id, name.to_string());
        }
    }

    /// Replaces an earlier pick of the same user for the same match
    pub fn predict(&mut self, match_id: MatchId, user_id: UserId, home: i32, away: i32) {
        self.snapshot
            .predictions
            .retain(|p| !(p.match_id == match_id && p.user_id == user_id));
        let id = self.snapshot.predictions.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.snapshot.predictions.push(Prediction {
            id,
            match_id,
            user_id,
            predicted_home: home,
            predicted_away: away,
            score: PredictionScore::default(),
        });
    }

    pub fn score_all(&mut self, scoring: &ScoringRules) {
        for m in &self.snapshot.matches {
            let mut predictions: Vec<Prediction> = self
                .snapshot
                .predictions
                .iter()
                .filter(|p| p.match_id == m.id)
                .cloned()
                .collect();
            if score_match(m, &mut predictions, scoring) {
                for scored in predictions {
                    if let Some(p) = self.snapshot.predictions.iter_mut().find(|p| p.id == scored.id) {
                        p.score = scored.score;
                    }
                }
            }
        }
    }

    pub fn build(self) -> PoolSnapshot {
        self.snapshot
    }
}
