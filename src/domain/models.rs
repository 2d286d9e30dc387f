use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type TournamentId = i64;
pub type MatchId = i64;
pub type PredictionId = i64;

/// Sport the tournament belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TournamentType {
    IceHockey,
    Football,
}

impl TournamentType {
    pub fn code(&self) -> i64 {
        match self {
            TournamentType::IceHockey => 0,
            TournamentType::Football => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TournamentType::IceHockey),
            1 => Some(TournamentType::Football),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TournamentType::IceHockey => "ice-hockey",
            TournamentType::Football => "football",
        }
    }
}

/// Pool participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub tournament_type: TournamentType,
    /// Test tournaments never count towards global standings, records or medals
    pub is_test: bool,
    pub supports_winner_prediction: bool,
    pub is_ended: bool,
    pub created_at: DateTime<Utc>,
}

/// Point values of one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub points_for_correct_winner: i32,
    pub points_for_exact_score: i32,
    pub points_for_sole_correct_winner: i32,
    pub rarity_pool: Decimal,
    pub points_for_winner: i32,
    pub points_for_runner_up: i32,
    pub points_for_third: i32,
}

/// Outcome category of a score pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Home,
    Away,
    Draw,
}

impl Outcome {
    pub fn of(home: i32, away: i32) -> Self {
        if home > away {
            Outcome::Home
        } else if home < away {
            Outcome::Away
        } else {
            Outcome::Draw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub home: i32,
    pub away: i32,
}

impl FinalScore {
    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.home, self.away)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub home_team: String,
    pub away_team: String,
    pub start_time_utc: DateTime<Utc>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl Match {
    /// Both scores, or nothing if the match has not been scored yet
    pub fn final_score(&self) -> Option<FinalScore> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some(FinalScore { home, away }),
            _ => None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.final_score().is_some()
    }

    pub fn summary(&self) -> String {
        format!("{} - {}", self.home_team, self.away_team)
    }
}

/// Fields derived from a scored match. All zero until the match is scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionScore {
    pub correct_winner: bool,
    pub exact_score: bool,
    pub one_goal_miss: bool,
    pub sole_correct_winner: bool,
    pub rarity_share: Decimal,
    pub points: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: PredictionId,
    pub match_id: MatchId,
    pub user_id: UserId,
    pub predicted_home: i32,
    pub predicted_away: i32,
    pub score: PredictionScore,
}

impl Prediction {
    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.predicted_home, self.predicted_away)
    }
}

/// A user's pick for the overall tournament champion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerPrediction {
    pub id: i64,
    pub tournament_id: TournamentId,
    pub user_id: UserId,
    pub team_name: String,
    pub points_awarded: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Audit trail entry for a prediction write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionAuditEntry {
    pub match_id: MatchId,
    pub actor_id: UserId,
    pub target_user_id: UserId,
    pub old_home: Option<i32>,
    pub old_away: Option<i32>,
    pub new_home: i32,
    pub new_away: i32,
    pub is_admin_update: bool,
    pub match_summary: String,
    pub timestamp_utc: DateTime<Utc>,
}
