use std::collections::BTreeMap;

use super::aggregation::{Scope, aggregate};
use crate::domain::{
    Medal, MedalCounts, PoolSnapshot, Tournament, TournamentId, TournamentType,
};

const PODIUM_SIZE: usize = 3;

/// A tournament hands out medals once it is ended or every one of its matches is scored
fn is_complete(snapshot: &PoolSnapshot, tournament: &Tournament) -> bool {
    if tournament.is_ended {
        return true;
    }
    let matches = snapshot.tournament_matches(tournament.id);
    !matches.is_empty() && matches.iter().all(|m| m.is_scored())
}

/// Top-3 leaderboard finishes per user across every eligible tournament
pub fn medal_counts(snapshot: &PoolSnapshot, type_filter: Option<TournamentType>) -> MedalCounts {
    let scope = Scope::Global { type_filter };
    let mut medals: MedalCounts = BTreeMap::new();

    for tournament in snapshot
        .tournaments
        .iter()
        .filter(|t| scope.includes(t) && is_complete(snapshot, t))
    {
        let board = aggregate(snapshot, Scope::Tournament(tournament.id));
        for (idx, entry) in board.iter().take(PODIUM_SIZE).enumerate() {
            medals.entry(entry.user_id).or_default().push(Medal {
                position: idx as u8 + 1,
                tournament_name: tournament.name.clone(),
                year: tournament.year,
            });
        }
    }

    medals
}

/// Display name of the top scorer of each requested tournament that has one
pub fn tournament_winners(
    snapshot: &PoolSnapshot,
    tournament_ids: &[TournamentId],
) -> BTreeMap<TournamentId, String> {
    tournament_ids
        .iter()
        .filter_map(|&id| {
            aggregate(snapshot, Scope::Tournament(id))
                .into_iter()
                .next()
                .map(|leader| (id, leader.user_name))
        })
        .collect()
}
