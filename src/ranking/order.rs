use std::cmp::Ordering;

use crate::domain::LeaderboardEntry;

/// Descending on points, correct winners, one-goal misses, only-correct picks, then
/// rarity points. Entries equal on all five keys keep their incoming order.
pub fn compare_entries(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| b.correct_winners.cmp(&a.correct_winners))
        .then_with(|| b.one_goal_misses.cmp(&a.one_goal_misses))
        .then_with(|| b.only_correct.cmp(&a.only_correct))
        .then_with(|| b.rarity_points.cmp(&a.rarity_points))
}

pub fn rank_entries(entries: &mut [LeaderboardEntry]) {
    // sort_by is stable
    entries.sort_by(compare_entries);
}
