use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;

use super::order::rank_entries;
use crate::domain::{
    LeaderboardEntry, Match, MatchId, Outcome, PoolSnapshot, Tournament, TournamentId,
    TournamentType, UserId,
};

/// Which tournaments a leaderboard covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Tournament(TournamentId),
    /// Every non-test tournament, optionally of one type only
    Global { type_filter: Option<TournamentType> },
}

impl Scope {
    pub fn includes(&self, tournament: &Tournament) -> bool {
        match self {
            Scope::Tournament(id) => tournament.id == *id,
            Scope::Global { type_filter } => {
                !tournament.is_test
                    && type_filter.is_none_or(|t| t == tournament.tournament_type)
            }
        }
    }

    fn adds_winner_points_to_total(&self) -> bool {
        matches!(self, Scope::Global { .. })
    }
}

#[derive(Default)]
struct Accumulator {
    entry: LeaderboardEntry,
    tournaments: HashSet<TournamentId>,
}

/// Aggregates scored predictions into ranked per-user totals for one scope.
///
/// Users appear once they hold at least one match prediction in scope. Predictions on
/// unscored matches contribute membership but no counters.
pub fn aggregate(snapshot: &PoolSnapshot, scope: Scope) -> Vec<LeaderboardEntry> {
    let tournaments: HashSet<TournamentId> = snapshot
        .tournaments
        .iter()
        .filter(|t| scope.includes(t))
        .map(|t| t.id)
        .collect();

    let matches: HashMap<MatchId, &Match> = snapshot
        .matches
        .iter()
        .filter(|m| tournaments.contains(&m.tournament_id))
        .map(|m| (m.id, m))
        .collect();

    let pick_counts = count_picks(snapshot, &matches);
    let mut by_user: BTreeMap<UserId, Accumulator> = BTreeMap::new();

    for prediction in &snapshot.predictions {
        let Some(m) = matches.get(&prediction.match_id) else {
            continue;
        };

        let acc = by_user.entry(prediction.user_id).or_default();
        acc.tournaments.insert(m.tournament_id);

        if !m.is_scored() {
            continue;
        }

        let entry = &mut acc.entry;
        let score = &prediction.score;
        entry.total_points += score.points;
        entry.rarity_points += score.rarity_share;
        entry.total_scored_predictions += 1;
        if score.correct_winner {
            entry.correct_winners += 1;
        }
        if score.one_goal_miss {
            entry.one_goal_misses += 1;
        }
        if score.sole_correct_winner {
            entry.only_correct += 1;
        }
        if score.exact_score {
            entry.exact_scores += 1;
        }

        let same_pick = pick_counts
            .get(&(m.id, prediction.outcome()))
            .copied()
            .unwrap_or(0);
        if same_pick == 1 {
            entry.only_one_tries += 1;
        }
    }

    for winner_prediction in &snapshot.winner_predictions {
        if !tournaments.contains(&winner_prediction.tournament_id) {
            continue;
        }
        if let (Some(acc), Some(points)) = (
            by_user.get_mut(&winner_prediction.user_id),
            winner_prediction.points_awarded,
        ) {
            acc.entry.winner_prediction_points += points;
        }
    }

    let mut entries: Vec<LeaderboardEntry> = by_user
        .into_iter()
        .map(|(user_id, acc)| {
            let mut entry = acc.entry;
            entry.user_id = user_id;
            entry.user_name = snapshot.user_name(user_id);
            entry.tournament_count = acc.tournaments.len() as i32;
            if scope.adds_winner_points_to_total() {
                entry.total_points += entry.winner_prediction_points;
            }
            entry
        })
        .collect();

    rank_entries(&mut entries);
    debug!("Aggregated {} leaderboard entries for {:?}", entries.len(), scope);
    entries
}

/// How many predictors chose each outcome, per scored match
fn count_picks(
    snapshot: &PoolSnapshot,
    matches: &HashMap<MatchId, &Match>,
) -> HashMap<(MatchId, Outcome), usize> {
    let mut counts = HashMap::new();
    for prediction in &snapshot.predictions {
        if matches.get(&prediction.match_id).is_some_and(|m| m.is_scored()) {
            *counts
                .entry((prediction.match_id, prediction.outcome()))
                .or_insert(0) += 1;
        }
    }
    counts
}
