use std::collections::BTreeMap;

use crate::domain::{PoolSnapshot, TournamentId, UserId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub longest_positive: i32,
    pub longest_negative: i32,
}

/// Longest runs of correct and incorrect winner picks in a chronological sequence
pub fn longest_streaks<I>(results: I) -> Streaks
where
    I: IntoIterator<Item = bool>,
{
    let mut streaks = Streaks::default();
    let mut positive = 0;
    let mut negative = 0;

    for correct in results {
        if correct {
            positive += 1;
            negative = 0;
            streaks.longest_positive = streaks.longest_positive.max(positive);
        } else {
            negative += 1;
            positive = 0;
            streaks.longest_negative = streaks.longest_negative.max(negative);
        }
    }

    streaks
}

/// Streaks of every user in one tournament, over scored matches in start order
pub fn tournament_streaks(snapshot: &PoolSnapshot, tournament_id: TournamentId) -> BTreeMap<UserId, Streaks> {
    let matches = snapshot.tournament_matches(tournament_id);
    let mut sequences: BTreeMap<UserId, Vec<bool>> = BTreeMap::new();

    for m in matches.iter().filter(|m| m.is_scored()) {
        for prediction in snapshot.predictions_for_match(m.id) {
            sequences
                .entry(prediction.user_id)
                .or_default()
                .push(prediction.score.correct_winner);
        }
    }

    sequences
        .into_iter()
        .map(|(user_id, results)| (user_id, longest_streaks(results)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TournamentType;
    use crate::ranking::testing::{SnapshotBuilder, rules};
    use rust_decimal::Decimal;

    #[test]
    fn test_win_win_loss_win_win_win() {
        let streaks = longest_streaks([true, true, false, true, true, true]);
        assert_eq!(streaks.longest_positive, 3);
        assert_eq!(streaks.longest_negative, 1);
    }

    #[test]
    fn test_empty_sequence_has_no_streaks() {
        assert_eq!(longest_streaks(Vec::new()), Streaks::default());
    }

    #[test]
    fn test_all_losses() {
        let streaks = longest_streaks([false; 4]);
        assert_eq!(streaks.longest_positive, 0);
        assert_eq!(streaks.longest_negative, 4);
    }

    #[test]
    fn test_streaks_follow_start_time_not_insertion_order() {
        let mut builder = SnapshotBuilder::new();
        let t = builder.tournament("Cup", 2026, TournamentType::Football);
        // inserted out of order; chronological results are W W L W
        let late = builder.scored_match(t, "A", "B", 1, 0, 4);
        let early = builder.scored_match(t, "C", "D", 1, 0, 1);
        let third = builder.scored_match(t, "E", "F", 0, 1, 3);
        let second = builder.scored_match(t, "G", "H", 2, 0, 2);
        builder.predict(late, 1, 1, 0);
        builder.predict(early, 1, 2, 0);
        builder.predict(third, 1, 1, 0);
        builder.predict(second, 1, 3, 1);
        builder.score_all(&rules(Decimal::ZERO));
        let snapshot = builder.build();

        let streaks = tournament_streaks(&snapshot, t);
        assert_eq!(streaks[&1], Streaks { longest_positive: 2, longest_negative: 1 });
    }

    #[test]
    fn test_unscored_matches_do_not_break_streaks() {
        let mut builder = SnapshotBuilder::new();
        let t = builder.tournament("Cup", 2026, TournamentType::Football);
        let first = builder.scored_match(t, "A", "B", 1, 0, 1);
        let open = builder.open_match(t, "C", "D", 2);
        let last = builder.scored_match(t, "E", "F", 2, 1, 3);
        builder.predict(first, 1, 1, 0);
        builder.predict(open, 1, 0, 5);
        builder.predict(last, 1, 4, 0);
        builder.score_all(&rules(Decimal::ZERO));
        let snapshot = builder.build();

        let streaks = tournament_streaks(&snapshot, t);
        assert_eq!(streaks[&1].longest_positive, 2);
    }
}
