use anyhow::Result;

use prediction_pool::cli::Command;
use prediction_pool::{
    handle_add_match, handle_add_tournament, handle_add_user, handle_completions,
    handle_end_tournament, handle_init, handle_leaderboard, handle_lock_time, handle_medals,
    handle_predict, handle_progress, handle_recalculate, handle_records, handle_set_result,
    handle_winners, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(),
        Command::AddUser { name, admin } => handle_add_user(name, *admin),
        Command::AddTournament {
            name,
            year,
            sport,
            winner_prediction,
            test,
        } => handle_add_tournament(name, *year, *sport, *winner_prediction, *test),
        Command::AddMatch {
            tournament,
            home_team,
            away_team,
            start,
        } => handle_add_match(*tournament, home_team, away_team, *start),
        Command::Predict {
            match_id,
            user,
            home,
            away,
        } => handle_predict(*match_id, *user, *home, *away),
        Command::Recalculate {
            tournament,
            match_id,
        } => handle_recalculate(*tournament, *match_id),
        Command::SetResult {
            match_id,
            home,
            away,
        } => handle_set_result(*match_id, *home, *away),
        Command::Leaderboard { tournament, sport } => handle_leaderboard(*tournament, *sport),
        Command::Records { sport } => handle_records(*sport),
        Command::Medals { sport } => handle_medals(*sport),
        Command::Winners { tournaments } => handle_winners(tournaments),
        Command::LockTime {
            tournament,
            match_id,
            user,
        } => handle_lock_time(*tournament, *match_id, *user),
        Command::EndTournament { tournament } => handle_end_tournament(*tournament),
        Command::Progress { tournament } => handle_progress(*tournament),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
