use std::collections::{BTreeSet, HashMap};

use crate::domain::{
    LeaderboardProgress, MatchId, PoolSnapshot, ProgressSeries, TournamentId, UserId,
};

const START_LABEL: &str = "Start";

/// Cumulative points of every participant after each scored match, in start order
pub fn leaderboard_progress(snapshot: &PoolSnapshot, tournament_id: TournamentId) -> LeaderboardProgress {
    let matches = snapshot.tournament_matches(tournament_id);
    let scored: Vec<_> = matches.iter().filter(|m| m.is_scored()).collect();

    let mut labels = vec![START_LABEL.to_string()];
    labels.extend(scored.iter().map(|m| format!("{}-{}", m.home_team, m.away_team)));

    let mut points: HashMap<(MatchId, UserId), i32> = HashMap::new();
    let mut participants: BTreeSet<UserId> = BTreeSet::new();
    for m in &matches {
        for prediction in snapshot.predictions_for_match(m.id) {
            participants.insert(prediction.user_id);
            points.insert((m.id, prediction.user_id), prediction.score.points);
        }
    }

    let series = participants
        .into_iter()
        .map(|user_id| {
            let mut cumulative = 0;
            let mut data = vec![0];
            for m in &scored {
                cumulative += points.get(&(m.id, user_id)).copied().unwrap_or(0);
                data.push(cumulative);
            }
            ProgressSeries {
                user_id,
                name: snapshot.user_name(user_id),
                data,
            }
        })
        .collect();

    LeaderboardProgress { labels, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TournamentType;
    use crate::ranking::testing::{SnapshotBuilder, rules};
    use rust_decimal::Decimal;

    #[test]
    fn test_progress_accumulates_points_per_match() {
        let mut builder = SnapshotBuilder::new();
        builder.users(&[(1, "anna"), (2, "boris")]);
        let t = builder.tournament("Cup", 2026, TournamentType::IceHockey);
        let m2 = builder.scored_match(t, "SWE", "FIN", 0, 1, 2);
        let m1 = builder.scored_match(t, "CAN", "USA", 2, 1, 1);
        let open = builder.open_match(t, "SUI", "GER", 3);
        builder.predict(m1, 1, 2, 1);
        builder.predict(m1, 2, 1, 0);
        builder.predict(m2, 1, 1, 0);
        builder.predict(open, 2, 3, 3);
        builder.score_all(&rules(Decimal::ZERO));
        let snapshot = builder.build();

        let progress = leaderboard_progress(&snapshot, t);
        assert_eq!(progress.labels, vec!["Start", "CAN-USA", "SWE-FIN"]);
        assert_eq!(progress.series.len(), 2);
        assert_eq!(progress.series[0].name, "anna");
        assert_eq!(progress.series[0].data, vec![0, 5, 5]);
        assert_eq!(progress.series[1].data, vec![0, 3, 3]);
    }

    #[test]
    fn test_progress_of_empty_tournament() {
        let progress = leaderboard_progress(&PoolSnapshot::default(), 1);
        assert_eq!(progress.labels, vec!["Start"]);
        assert!(progress.series.is_empty());
    }
}
