use chrono::{DateTime, Duration, Utc};

use crate::config::LockTimeSettings;
use crate::domain::{LeaderboardEntry, Match, MatchId, UserId};

/// Whether a match is among the first `early_match_count` of its tournament by start time
pub fn is_early_match(tournament_matches: &[Match], match_id: MatchId, settings: &LockTimeSettings) -> bool {
    let mut ordered: Vec<&Match> = tournament_matches.iter().collect();
    ordered.sort_by_key(|m| m.start_time_utc);
    ordered
        .iter()
        .take(settings.early_match_count)
        .any(|m| m.id == match_id)
}

/// Submission deadline of one user for one match.
///
/// `ranking` is the tournament leaderboard as seen at call time. The leader locks
/// early, the last-placed user gets a grace period, everyone else locks at kick-off.
pub fn prediction_lock_time(
    start_time: DateTime<Utc>,
    is_early: bool,
    user_id: UserId,
    ranking: &[LeaderboardEntry],
    settings: &LockTimeSettings,
) -> DateTime<Utc> {
    if is_early {
        return start_time;
    }

    let (Some(first), Some(last)) = (ranking.first(), ranking.last()) else {
        return start_time;
    };

    if user_id == first.user_id {
        start_time - Duration::minutes(settings.leader_advance_minutes)
    } else if user_id == last.user_id {
        start_time + Duration::minutes(settings.last_place_grace_minutes)
    } else {
        start_time
    }
}
