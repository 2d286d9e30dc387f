pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod lock_time;
pub mod podium;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod services;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;
use serde::Serialize;

use crate::cli::{Cli, Command, SportArg};
use crate::config::AppConfig;
use crate::database::{DbPool, NewTournament};
use crate::domain::{MatchId, TournamentId, TournamentType, UserId};
use crate::services::{LeaderboardService, PredictionService, ScoringService, TournamentService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// Opens the configured database and makes sure the schema exists
pub fn open_pool(config: &AppConfig) -> Result<DbPool> {
    let pool = database::create_pool(&config.database)?;
    let conn = database::get_connection(&pool)?;
    database::setup::initialize_database(&conn)?;
    Ok(pool)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    open_pool(&config)?;
    info!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_add_user(name: &str, is_admin: bool) -> Result<()> {
    let pool = open_pool(&AppConfig::new())?;
    let conn = database::get_connection(&pool)?;
    let user = database::users::insert_user(&conn, name, is_admin)?;
    print_json(&user)
}

pub fn handle_add_tournament(
    name: &str,
    year: i32,
    sport: SportArg,
    supports_winner_prediction: bool,
    is_test: bool,
) -> Result<()> {
    let config = AppConfig::new();
    let service = TournamentService::new(open_pool(&config)?, config);
    let tournament = service.create_tournament(
        &NewTournament {
            name: name.to_string(),
            year,
            description: None,
            tournament_type: sport.into(),
            is_test,
            supports_winner_prediction,
        },
        None,
    )?;
    print_json(&tournament)
}

pub fn handle_add_match(
    tournament_id: TournamentId,
    home_team: &str,
    away_team: &str,
    start: DateTime<Utc>,
) -> Result<()> {
    let config = AppConfig::new();
    let service = TournamentService::new(open_pool(&config)?, config);
    let m = service.add_match(tournament_id, home_team, away_team, start)?;
    print_json(&m)
}

pub fn handle_predict(match_id: MatchId, user_id: UserId, home: i32, away: i32) -> Result<()> {
    let config = AppConfig::new();
    let service = PredictionService::new(open_pool(&config)?, config);
    let prediction = service.submit_prediction(match_id, user_id, home, away, Utc::now())?;
    print_json(&prediction)
}

pub fn handle_recalculate(tournament_id: Option<TournamentId>, match_id: Option<MatchId>) -> Result<()> {
    let config = AppConfig::new();
    let service = ScoringService::new(open_pool(&config)?, config);
    match (tournament_id, match_id) {
        (Some(tournament_id), _) => service.recalculate_for_tournament(tournament_id)?,
        (None, Some(match_id)) => service.recalculate_for_match(match_id)?,
        (None, None) => anyhow::bail!("either a tournament or a match is required"),
    }
    Ok(())
}

pub fn handle_set_result(match_id: MatchId, home: i32, away: i32) -> Result<()> {
    let config = AppConfig::new();
    let service = ScoringService::new(open_pool(&config)?, config);
    service.update_match_result(match_id, home, away, Utc::now())?;
    Ok(())
}

pub fn handle_leaderboard(tournament_id: Option<TournamentId>, sport: Option<SportArg>) -> Result<()> {
    let service = LeaderboardService::new(open_pool(&AppConfig::new())?);
    let (title, entries) = match tournament_id {
        Some(id) => (format!("Tournament {}", id), service.get_leaderboard(id)?),
        None => {
            let type_filter = sport.map(TournamentType::from);
            let title = match type_filter {
                Some(t) => format!("Global ({})", t.as_str()),
                None => "Global".to_string(),
            };
            (title, service.get_global_leaderboard(type_filter)?)
        }
    };
    report::print_leaderboard(&title, &entries);
    Ok(())
}

pub fn handle_records(sport: Option<SportArg>) -> Result<()> {
    let service = LeaderboardService::new(open_pool(&AppConfig::new())?);
    print_json(&service.get_tournament_records(sport.map(TournamentType::from))?)
}

pub fn handle_medals(sport: Option<SportArg>) -> Result<()> {
    let service = LeaderboardService::new(open_pool(&AppConfig::new())?);
    print_json(&service.get_medal_counts(sport.map(TournamentType::from))?)
}

pub fn handle_winners(tournament_ids: &[TournamentId]) -> Result<()> {
    let service = LeaderboardService::new(open_pool(&AppConfig::new())?);
    print_json(&service.get_tournament_winners(tournament_ids)?)
}

pub fn handle_lock_time(tournament_id: TournamentId, match_id: MatchId, user_id: UserId) -> Result<()> {
    let config = AppConfig::new();
    let service = PredictionService::new(open_pool(&config)?, config);
    print_json(&service.get_prediction_lock_time(tournament_id, match_id, user_id)?)
}

pub fn handle_end_tournament(tournament_id: TournamentId) -> Result<()> {
    let config = AppConfig::new();
    let service = TournamentService::new(open_pool(&config)?, config);
    print_json(&service.end_tournament(tournament_id)?)
}

pub fn handle_progress(tournament_id: TournamentId) -> Result<()> {
    let service = LeaderboardService::new(open_pool(&AppConfig::new())?);
    print_json(&service.get_leaderboard_progress(tournament_id)?)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
