use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::TournamentType;

#[derive(Parser, Debug)]
#[command(author, version, about = "prediction pool scoring and leaderboards")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

/// Sport filter accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportArg {
    IceHockey,
    Football,
}

impl From<SportArg> for TournamentType {
    fn from(arg: SportArg) -> Self {
        match arg {
            SportArg::IceHockey => TournamentType::IceHockey,
            SportArg::Football => TournamentType::Football,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the database schema
    Init,
    /// Register a pool participant
    AddUser {
        name: String,
        #[arg(long)]
        admin: bool,
    },
    /// Create a tournament with the default scoring rules
    AddTournament {
        name: String,
        year: i32,
        #[arg(long, value_enum, default_value_t = SportArg::IceHockey)]
        sport: SportArg,
        /// Enable overall winner predictions
        #[arg(long)]
        winner_prediction: bool,
        /// Keep it out of global standings, records and medals
        #[arg(long)]
        test: bool,
    },
    /// Schedule a match (start time in RFC 3339, UTC)
    AddMatch {
        tournament: i64,
        home_team: String,
        away_team: String,
        start: DateTime<Utc>,
    },
    /// Submit a prediction as the given user
    Predict {
        match_id: i64,
        user: i64,
        home: i32,
        away: i32,
    },
    /// Rescore one match or a whole tournament
    Recalculate {
        #[arg(long, conflicts_with = "match_id", required_unless_present = "match_id")]
        tournament: Option<i64>,
        #[arg(long = "match")]
        match_id: Option<i64>,
    },
    /// Enter the final score of a match and rescore it
    SetResult { match_id: i64, home: i32, away: i32 },
    /// Show a tournament leaderboard, or the global one without a tournament
    Leaderboard {
        #[arg(short, long)]
        tournament: Option<i64>,
        #[arg(long, value_enum)]
        sport: Option<SportArg>,
    },
    /// Cross-tournament records
    Records {
        #[arg(long, value_enum)]
        sport: Option<SportArg>,
    },
    /// Top-3 finishes per user
    Medals {
        #[arg(long, value_enum)]
        sport: Option<SportArg>,
    },
    /// Top scorer of each tournament
    Winners {
        #[arg(required = true)]
        tournaments: Vec<i64>,
    },
    /// Prediction deadline of a user for a match
    LockTime { tournament: i64, match_id: i64, user: i64 },
    /// Resolve the podium and close a tournament
    EndTournament { tournament: i64 },
    /// Cumulative points after each scored match
    Progress { tournament: i64 },
    /// Print shell completions
    Completions { shell: Shell },
}
