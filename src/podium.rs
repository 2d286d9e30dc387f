use crate::domain::{Match, Podium, ScoringRules, WinnerPrediction};

/// Winner and loser team names; a drawn match resolves to the away side
fn winner_and_loser(m: &Match) -> Option<(&str, &str)> {
    let score = m.final_score()?;
    if score.home > score.away {
        Some((m.home_team.as_str(), m.away_team.as_str()))
    } else {
        Some((m.away_team.as_str(), m.home_team.as_str()))
    }
}

/// Gold and silver from the most recently started scored match (the final), bronze from
/// the one before it (the third-place match). `None` with fewer than two scored matches.
pub fn resolve_podium(matches: &[Match]) -> Option<Podium> {
    let mut scored: Vec<&Match> = matches.iter().filter(|m| m.is_scored()).collect();
    scored.sort_by(|a, b| b.start_time_utc.cmp(&a.start_time_utc));

    let [final_match, third_place, ..] = scored.as_slice() else {
        return None;
    };

    let (gold, silver) = winner_and_loser(final_match)?;
    let (bronze, _) = winner_and_loser(third_place)?;

    Some(Podium {
        gold: gold.to_string(),
        silver: silver.to_string(),
        bronze: bronze.to_string(),
    })
}

pub fn points_for_pick(team_name: &str, podium: &Podium, rules: &ScoringRules) -> i32 {
    if team_name == podium.gold {
        rules.points_for_winner
    } else if team_name == podium.silver {
        rules.points_for_runner_up
    } else if team_name == podium.bronze {
        rules.points_for_third
    } else {
        0
    }
}

/// Overwrites `points_awarded` on every pick
pub fn award_winner_predictions(
    predictions: &mut [WinnerPrediction],
    podium: &Podium,
    rules: &ScoringRules,
) {
    for prediction in predictions.iter_mut() {
        prediction.points_awarded = Some(points_for_pick(&prediction.team_name, podium, rules));
    }
}
