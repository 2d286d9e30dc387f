#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use tempfile::TempDir;

use prediction_pool::config::AppConfig;
use prediction_pool::database::{self, DbPool, NewTournament, users};
use prediction_pool::domain::{MatchId, ScoringRules, TournamentId, TournamentType, UserId};
use prediction_pool::open_pool;
use prediction_pool::services::{
    LeaderboardService, PredictionService, ScoringService, TournamentService,
};

/// A fresh database file plus every service wired to it
pub struct TestPool {
    _dir: TempDir,
    pub pool: DbPool,
    pub config: AppConfig,
}

impl TestPool {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::new();
        config.database.path = dir.path().join("pool.db").to_string_lossy().to_string();
        let pool = open_pool(&config).unwrap();
        Self {
            _dir: dir,
            pool,
            config,
        }
    }

    pub fn scoring(&self) -> ScoringService {
        ScoringService::new(self.pool.clone(), self.config.clone())
    }

    pub fn predictions(&self) -> PredictionService {
        PredictionService::new(self.pool.clone(), self.config.clone())
    }

    pub fn tournaments(&self) -> TournamentService {
        TournamentService::new(self.pool.clone(), self.config.clone())
    }

    pub fn leaderboards(&self) -> LeaderboardService {
        LeaderboardService::new(self.pool.clone())
    }

    pub fn user(&self, name: &str) -> UserId {
        let conn = database::get_connection(&self.pool).unwrap();
        users::insert_user(&conn, name, false).unwrap().id
    }

    pub fn tournament(&self, name: &str, sport: TournamentType, winner_prediction: bool) -> TournamentId {
        self.tournaments()
            .create_tournament(
                &NewTournament {
                    name: name.to_string(),
                    year: 2026,
                    description: None,
                    tournament_type: sport,
                    is_test: false,
                    supports_winner_prediction: winner_prediction,
                },
                Some(rules()),
            )
            .unwrap()
            .id
    }

    pub fn test_tournament(&self, name: &str) -> TournamentId {
        self.tournaments()
            .create_tournament(
                &NewTournament {
                    name: name.to_string(),
                    year: 2026,
                    description: Some("sandbox".to_string()),
                    tournament_type: TournamentType::IceHockey,
                    is_test: true,
                    supports_winner_prediction: false,
                },
                Some(rules()),
            )
            .unwrap()
            .id
    }

    pub fn game(&self, tournament_id: TournamentId, home: &str, away: &str, hour: i64) -> MatchId {
        self.tournaments()
            .add_match(tournament_id, home, away, kickoff(hour))
            .unwrap()
            .id
    }

    /// Admin write, so the deadline never gets in the way
    pub fn pick(&self, match_id: MatchId, user_id: UserId, home: i32, away: i32) {
        self.predictions()
            .set_prediction(user_id, match_id, user_id, home, away, kickoff(0))
            .unwrap();
    }

    pub fn result(&self, match_id: MatchId, home: i32, away: i32) {
        self.scoring()
            .update_match_result(match_id, home, away, kickoff(1000))
            .unwrap();
    }
}

pub fn kickoff(hour: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 8, 16, 0, 0).unwrap() + Duration::hours(hour)
}

pub fn rules() -> ScoringRules {
    ScoringRules {
        points_for_correct_winner: 3,
        points_for_exact_score: 2,
        points_for_sole_correct_winner: 2,
        rarity_pool: dec!(6),
        points_for_winner: 10,
        points_for_runner_up: 6,
        points_for_third: 3,
    }
}
