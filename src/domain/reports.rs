use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::{TournamentId, UserId};

/// Per-user rollup within a scope. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub user_name: String,
    pub total_points: i32,
    pub correct_winners: i32,
    pub one_goal_misses: i32,
    pub only_correct: i32,
    pub only_one_tries: i32,
    pub exact_scores: i32,
    pub rarity_points: Decimal,
    pub winner_prediction_points: i32,
    pub tournament_count: i32,
    pub total_scored_predictions: i32,
}

/// One holder of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub user_id: UserId,
    pub user_name: String,
    pub value: i32,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub tournament_year: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecords {
    pub most_points: Vec<RecordEntry>,
    pub most_winners: Vec<RecordEntry>,
    pub most_one_goal_misses: Vec<RecordEntry>,
    pub most_luckers: Vec<RecordEntry>,
    pub most_only_ones: Vec<RecordEntry>,
    pub highest_point_gap: Vec<RecordEntry>,
    pub longest_positive_streak: Vec<RecordEntry>,
    pub longest_negative_streak: Vec<RecordEntry>,
}

/// Top-3 finish in one tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medal {
    pub position: u8,
    pub tournament_name: String,
    pub year: i32,
}

pub type MedalCounts = BTreeMap<UserId, Vec<Medal>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podium {
    pub gold: String,
    pub silver: String,
    pub bronze: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSeries {
    pub user_id: UserId,
    pub name: String,
    pub data: Vec<i32>,
}

/// Cumulative points after each scored match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardProgress {
    pub labels: Vec<String>,
    pub series: Vec<ProgressSeries>,
}
