use colored::Colorize;

use crate::domain::LeaderboardEntry;

fn header_line() -> String {
    format!(
        "{:>4}  {:<20} {:>6} {:>4} {:>4} {:>4} {:>4} {:>4} {:>8} {:>4}",
        "#", "Name", "Pts", "W", "1G", "OC", "OOT", "EX", "Rarity", "WP"
    )
}

fn entry_line(position: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "{:>4}  {:<20} {:>6} {:>4} {:>4} {:>4} {:>4} {:>4} {:>8} {:>4}",
        position,
        entry.user_name,
        entry.total_points,
        entry.correct_winners,
        entry.one_goal_misses,
        entry.only_correct,
        entry.only_one_tries,
        entry.exact_scores,
        format!("{:.2}", entry.rarity_points),
        entry.winner_prediction_points,
    )
}

/// Renders a ranked leaderboard; the podium places are highlighted
pub fn print_leaderboard(title: &str, entries: &[LeaderboardEntry]) {
    println!("{}", title.cyan().bold());
    if entries.is_empty() {
        println!("{}", "No predictions yet".dimmed());
        return;
    }

    println!("{}", header_line().bold());
    for (idx, entry) in entries.iter().enumerate() {
        let line = entry_line(idx + 1, entry);
        match idx {
            0 => println!("{}", line.yellow().bold()),
            1 => println!("{}", line.white().bold()),
            2 => println!("{}", line.red()),
            _ => println!("{}", line),
        }
    }
}
