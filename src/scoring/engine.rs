use log::debug;
use rust_decimal::Decimal;

use crate::domain::{FinalScore, Match, Prediction, PredictionScore, ScoringRules};

/// Recomputes the derived fields of every prediction of a scored match.
///
/// Each prediction's `score` is replaced wholesale, so calling this twice with the same
/// inputs leaves identical values. Returns `false` and leaves the predictions untouched
/// when the match has no final score yet.
pub fn score_match(m: &Match, predictions: &mut [Prediction], rules: &ScoringRules) -> bool {
    let Some(result) = m.final_score() else {
        return false;
    };

    let actual = result.outcome();
    let correct_count = predictions
        .iter()
        .filter(|p| p.outcome() == actual)
        .count();
    let rarity_share = split_rarity_pool(rules.rarity_pool, correct_count);

    debug!(
        "Scoring match {}: {} predictions, {} correct winners",
        m.id,
        predictions.len(),
        correct_count
    );

    for prediction in predictions.iter_mut() {
        prediction.score = score_prediction(prediction, &result, correct_count, rarity_share, rules);
    }

    true
}

fn score_prediction(
    prediction: &Prediction,
    result: &FinalScore,
    correct_count: usize,
    rarity_share: Decimal,
    rules: &ScoringRules,
) -> PredictionScore {
    let correct_winner = prediction.outcome() == result.outcome();
    let exact_score =
        prediction.predicted_home == result.home && prediction.predicted_away == result.away;
    let sole_correct_winner = correct_winner && correct_count == 1;

    let mut points = 0;
    if correct_winner {
        points += rules.points_for_correct_winner;
    }
    if exact_score {
        points += rules.points_for_exact_score;
    }
    if sole_correct_winner {
        points += rules.points_for_sole_correct_winner;
    }

    PredictionScore {
        correct_winner,
        exact_score,
        one_goal_miss: is_one_goal_miss(prediction, result),
        sole_correct_winner,
        rarity_share: if correct_winner { rarity_share } else { Decimal::ZERO },
        points,
    }
}

/// Exactly one side off by a single goal, the other side exact
pub fn is_one_goal_miss(prediction: &Prediction, result: &FinalScore) -> bool {
    let home_diff = (prediction.predicted_home - result.home).abs();
    let away_diff = (prediction.predicted_away - result.away).abs();

    (home_diff == 1 && away_diff == 0) || (home_diff == 0 && away_diff == 1)
}

fn split_rarity_pool(pool: Decimal, correct_count: usize) -> Decimal {
    if correct_count == 0 {
        return Decimal::ZERO;
    }
    (pool / Decimal::from(correct_count as u64)).round_dp(2)
}
