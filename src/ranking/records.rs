use log::debug;

use super::aggregation::{Scope, aggregate};
use super::streaks::tournament_streaks;
use crate::domain::{
    LeaderboardEntry, PoolSnapshot, RecordEntry, Tournament, TournamentRecords, TournamentType,
    UserId,
};

/// Best value seen so far and everyone holding it
#[derive(Default)]
struct RecordTracker {
    best: i32,
    holders: Vec<RecordEntry>,
}

impl RecordTracker {
    fn offer(&mut self, value: i32, user_id: UserId, user_name: &str, tournament: &Tournament) {
        if value <= 0 || value < self.best {
            return;
        }
        if value > self.best {
            self.best = value;
            self.holders.clear();
        }
        self.holders.push(RecordEntry {
            user_id,
            user_name: user_name.to_string(),
            value,
            tournament_id: tournament.id,
            tournament_name: tournament.name.clone(),
            tournament_year: tournament.year,
        });
    }

    fn offer_entry<F>(&mut self, entry: &LeaderboardEntry, tournament: &Tournament, value: F)
    where
        F: Fn(&LeaderboardEntry) -> i32,
    {
        self.offer(value(entry), entry.user_id, &entry.user_name, tournament);
    }

    fn into_holders(self) -> Vec<RecordEntry> {
        self.holders
    }
}

/// Cross-tournament superlatives over every non-test tournament.
///
/// Every (user, tournament) pair reaching a category's maximum is reported; categories
/// whose maximum is zero stay empty.
pub fn tournament_records(
    snapshot: &PoolSnapshot,
    type_filter: Option<TournamentType>,
) -> TournamentRecords {
    let scope = Scope::Global { type_filter };

    let mut most_points = RecordTracker::default();
    let mut most_winners = RecordTracker::default();
    let mut most_misses = RecordTracker::default();
    let mut most_luckers = RecordTracker::default();
    let mut most_only_ones = RecordTracker::default();
    let mut point_gap = RecordTracker::default();
    let mut positive_streak = RecordTracker::default();
    let mut negative_streak = RecordTracker::default();

    for tournament in snapshot.tournaments.iter().filter(|t| scope.includes(t)) {
        let board = aggregate(snapshot, Scope::Tournament(tournament.id));

        for entry in &board {
            most_points.offer_entry(entry, tournament, |e| e.total_points);
            most_winners.offer_entry(entry, tournament, |e| e.correct_winners);
            most_misses.offer_entry(entry, tournament, |e| e.one_goal_misses);
            most_luckers.offer_entry(entry, tournament, |e| e.exact_scores);
            most_only_ones.offer_entry(entry, tournament, |e| e.only_correct);
        }

        if let [leader, runner_up, ..] = board.as_slice() {
            let gap = leader.total_points - runner_up.total_points;
            point_gap.offer(gap, leader.user_id, &leader.user_name, tournament);
        }

        for (user_id, streaks) in tournament_streaks(snapshot, tournament.id) {
            let name = snapshot.user_name(user_id);
            positive_streak.offer(streaks.longest_positive, user_id, &name, tournament);
            negative_streak.offer(streaks.longest_negative, user_id, &name, tournament);
        }
    }

    debug!(
        "Records: {} point holders, best gap {}",
        most_points.holders.len(),
        point_gap.best
    );

    TournamentRecords {
        most_points: most_points.into_holders(),
        most_winners: most_winners.into_holders(),
        most_one_goal_misses: most_misses.into_holders(),
        most_luckers: most_luckers.into_holders(),
        most_only_ones: most_only_ones.into_holders(),
        highest_point_gap: point_gap.into_holders(),
        longest_positive_streak: positive_streak.into_holders(),
        longest_negative_streak: negative_streak.into_holders(),
    }
}
