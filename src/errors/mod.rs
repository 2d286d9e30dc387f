use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{MatchId, UserId};

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the exposed operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Predictions for match {match_id} locked for user {user_id} at {lock_time}")]
    PredictionLocked {
        match_id: MatchId,
        user_id: UserId,
        lock_time: DateTime<Utc>,
    },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl EngineError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }
}
