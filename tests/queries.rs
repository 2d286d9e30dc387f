mod common;

use chrono::Duration;

use common::{TestPool, kickoff};
use prediction_pool::domain::{Medal, TournamentType};
use prediction_pool::errors::EngineError;

#[test]
fn test_lock_time_follows_live_ranking() {
    let pool = TestPool::new();
    let t = pool.tournament("World Championship", TournamentType::IceHockey, false);
    let opener = pool.game(t, "Canada", "Sweden", 1);
    let second = pool.game(t, "Finland", "Czechia", 2);
    let later = pool.game(t, "Slovakia", "Latvia", 26);
    let (anna, boris, cyril) = (pool.user("anna"), pool.user("boris"), pool.user("cyril"));
    pool.pick(opener, anna, 3, 1);
    pool.pick(opener, boris, 2, 1);
    pool.pick(opener, cyril, 0, 2);
    pool.result(opener, 3, 1);

    let service = pool.predictions();
    let start = kickoff(26);
    assert_eq!(service.get_prediction_lock_time(t, later, anna).unwrap(), start - Duration::minutes(10));
    assert_eq!(service.get_prediction_lock_time(t, later, boris).unwrap(), start);
    assert_eq!(service.get_prediction_lock_time(t, later, cyril).unwrap(), start + Duration::minutes(5));

    // opening matches ignore the ranking
    assert_eq!(service.get_prediction_lock_time(t, second, anna).unwrap(), kickoff(2));
    assert_eq!(service.get_prediction_lock_time(t, second, cyril).unwrap(), kickoff(2));

    // boris overtakes anna on the second match and the deadlines move with him
    pool.pick(second, boris, 1, 0);
    pool.pick(second, anna, 0, 1);
    pool.result(second, 1, 0);
    assert_eq!(service.get_prediction_lock_time(t, later, boris).unwrap(), start - Duration::minutes(10));
    assert_eq!(service.get_prediction_lock_time(t, later, anna).unwrap(), start);
}

#[test]
fn test_lock_time_with_empty_leaderboard() {
    let pool = TestPool::new();
    let t = pool.tournament("Cup", TournamentType::Football, false);
    pool.game(t, "A", "B", 1);
    pool.game(t, "C", "D", 2);
    let later = pool.game(t, "E", "F", 30);
    let anna = pool.user("anna");

    assert_eq!(pool.predictions().get_prediction_lock_time(t, later, anna).unwrap(), kickoff(30));
}

#[test]
fn test_lock_time_unknown_ids() {
    let pool = TestPool::new();
    let t = pool.tournament("Cup", TournamentType::Football, false);
    let other = pool.tournament("Other Cup", TournamentType::Football, false);
    let m = pool.game(other, "A", "B", 1);
    let service = pool.predictions();

    assert!(matches!(
        service.get_prediction_lock_time(42, m, 1),
        Err(EngineError::NotFound { entity: "tournament", .. })
    ));
    assert!(matches!(
        service.get_prediction_lock_time(t, 42, 1),
        Err(EngineError::NotFound { entity: "match", .. })
    ));
    assert!(matches!(
        service.get_prediction_lock_time(t, m, 1),
        Err(EngineError::NotFound { entity: "match", .. })
    ));
}

#[test]
fn test_leader_is_locked_out_first() {
    let pool = TestPool::new();
    let t = pool.tournament("Cup", TournamentType::IceHockey, false);
    let opener = pool.game(t, "A", "B", 1);
    pool.game(t, "C", "D", 2);
    let later = pool.game(t, "E", "F", 26);
    let (anna, boris) = (pool.user("anna"), pool.user("boris"));
    pool.pick(opener, anna, 1, 0);
    pool.pick(opener, boris, 0, 1);
    pool.result(opener, 1, 0);

    let service = pool.predictions();
    let start = kickoff(26);
    service.submit_prediction(later, anna, 2, 2, start - Duration::minutes(11)).unwrap();

    let err = service
        .submit_prediction(later, anna, 3, 2, start - Duration::minutes(10))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::PredictionLocked { match_id, user_id, .. } if match_id == later && user_id == anna
    ));

    // last place still has a grace period after kick-off
    service.submit_prediction(later, boris, 1, 1, start + Duration::minutes(4)).unwrap();
    assert!(service.submit_prediction(later, boris, 1, 1, start + Duration::minutes(5)).is_err());
}

#[test]
fn test_leaderboard_of_unknown_tournament() {
    let pool = TestPool::new();
    let leaderboards = pool.leaderboards();

    assert!(matches!(
        leaderboards.get_leaderboard(3),
        Err(EngineError::NotFound { entity: "tournament", id: 3 })
    ));
    assert!(matches!(
        leaderboards.get_leaderboard_progress(3),
        Err(EngineError::NotFound { .. })
    ));
    assert!(leaderboards.get_global_leaderboard(None).unwrap().is_empty());
}

#[test]
fn test_global_scope_skips_test_tournaments_and_filters_type() {
    let pool = TestPool::new();
    let hockey = pool.tournament("Hockey", TournamentType::IceHockey, false);
    let football = pool.tournament("Football", TournamentType::Football, false);
    let sandbox = pool.test_tournament("Sandbox");
    let m1 = pool.game(hockey, "A", "B", 1);
    let m2 = pool.game(football, "C", "D", 2);
    let m3 = pool.game(sandbox, "E", "F", 3);
    let (anna, boris) = (pool.user("anna"), pool.user("boris"));
    for m in [m1, m2, m3] {
        pool.pick(m, anna, 1, 0);
        pool.pick(m, boris, 0, 1);
        pool.result(m, 1, 0);
    }

    let leaderboards = pool.leaderboards();
    let global = leaderboards.get_global_leaderboard(None).unwrap();
    assert_eq!(global[0].user_name, "anna");
    assert_eq!(global[0].total_points, 14);
    assert_eq!(global[0].tournament_count, 2);
    assert_eq!(global[1].total_scored_predictions, 2);

    let only_football = leaderboards
        .get_global_leaderboard(Some(TournamentType::Football))
        .unwrap();
    assert_eq!(only_football[0].total_points, 7);
    assert_eq!(only_football[0].tournament_count, 1);

    // the sandbox still has its own leaderboard
    assert_eq!(leaderboards.get_leaderboard(sandbox).unwrap().len(), 2);
}

#[test]
fn test_records_medals_and_winners() {
    let pool = TestPool::new();
    let spring = pool.tournament("Spring Cup", TournamentType::Football, false);
    let summer = pool.tournament("Summer Cup", TournamentType::Football, false);
    let m1 = pool.game(spring, "A", "B", 1);
    let m2 = pool.game(spring, "C", "D", 2);
    let m3 = pool.game(summer, "E", "F", 3);
    pool.game(summer, "G", "H", 4);
    let (anna, boris, cyril, dora) = (pool.user("anna"), pool.user("boris"), pool.user("cyril"), pool.user("dora"));

    pool.pick(m1, anna, 2, 0);
    pool.pick(m1, boris, 1, 0);
    pool.pick(m1, cyril, 0, 0);
    pool.pick(m1, dora, 0, 3);
    pool.pick(m2, anna, 1, 1);
    pool.pick(m2, boris, 2, 2);
    pool.pick(m2, cyril, 1, 0);
    pool.pick(m2, dora, 0, 1);
    pool.pick(m3, cyril, 3, 0);
    pool.result(m1, 2, 0);
    pool.result(m2, 1, 1);
    pool.result(m3, 3, 0);

    let leaderboards = pool.leaderboards();

    let records = leaderboards.get_tournament_records(None).unwrap();
    let best: Vec<_> = records
        .most_points
        .iter()
        .map(|r| (r.user_name.as_str(), r.tournament_name.as_str(), r.value))
        .collect();
    // anna: 5 + 5, boris 3 + 3, cyril alone on the summer opener: 3 + 2 + 2
    assert_eq!(best, vec![("anna", "Spring Cup", 10)]);
    assert_eq!(records.highest_point_gap[0].value, 4);
    assert_eq!(records.longest_positive_streak[0].value, 2);
    assert_eq!(records.longest_negative_streak.len(), 2);

    // the summer cup still has an open match, so only spring hands out medals
    let medals = leaderboards.get_medal_counts(None).unwrap();
    assert_eq!(
        medals[&anna],
        vec![Medal {
            position: 1,
            tournament_name: "Spring Cup".to_string(),
            year: 2026,
        }]
    );
    assert_eq!(medals[&boris][0].position, 2);
    assert!(medals.contains_key(&cyril) || medals.contains_key(&dora));
    assert_eq!(medals.values().map(Vec::len).sum::<usize>(), 3);

    let winners = leaderboards.get_tournament_winners(&[spring, summer, 77]).unwrap();
    assert_eq!(winners.len(), 2);
    assert_eq!(winners[&spring], "anna");
    assert_eq!(winners[&summer], "cyril");

    let progress = leaderboards.get_leaderboard_progress(spring).unwrap();
    assert_eq!(progress.labels, vec!["Start", "A-B", "C-D"]);
    assert_eq!(progress.series[0].data, vec![0, 5, 10]);
}
