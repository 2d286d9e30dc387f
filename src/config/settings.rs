use rust_decimal::Decimal;

use crate::domain::ScoringRules;

#[derive(Debug, Clone)]
pub struct LockTimeSettings {
    /// Opening matches get the plain start time for everyone
    pub early_match_count: usize,
    pub leader_advance_minutes: i64,
    pub last_place_grace_minutes: i64,
}

impl Default for LockTimeSettings {
    fn default() -> Self {
        Self {
            early_match_count: 2,
            leader_advance_minutes: 10,
            last_place_grace_minutes: 5,
        }
    }
}

/// Rules applied when a tournament is created without explicit values
#[derive(Debug, Clone)]
pub struct DefaultRules {
    pub points_for_correct_winner: i32,
    pub points_for_exact_score: i32,
    pub points_for_sole_correct_winner: i32,
    pub rarity_pool: Decimal,
}

impl Default for DefaultRules {
    fn default() -> Self {
        Self {
            points_for_correct_winner: 3,
            points_for_exact_score: 2,
            points_for_sole_correct_winner: 2,
            rarity_pool: Decimal::ZERO,
        }
    }
}

impl DefaultRules {
    pub fn to_rules(&self) -> ScoringRules {
        ScoringRules {
            points_for_correct_winner: self.points_for_correct_winner,
            points_for_exact_score: self.points_for_exact_score,
            points_for_sole_correct_winner: self.points_for_sole_correct_winner,
            rarity_pool: self.rarity_pool,
            points_for_winner: 0,
            points_for_runner_up: 0,
            points_for_third: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "prediction_pool.db".to_string()),
            max_connections: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub lock_time: LockTimeSettings,
    pub default_rules: DefaultRules,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            lock_time: LockTimeSettings::default(),
            default_rules: DefaultRules::default(),
            database: DatabaseSettings::default(),
        }
    }
}
