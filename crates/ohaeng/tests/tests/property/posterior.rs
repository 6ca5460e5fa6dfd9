//! Property tests: posterior update laws.
//!
//! - skipped answers never move a pole
//! - swapping confirmed and denied negates every log-odds shift
//! - the 16-way ranking always sums to 1.0 with five entries exposed

use ohaeng_engine::posterior::log_odds_shift;
use ohaeng_engine::update;
use ohaeng_types::{Answer, AxisScores, ResponseLog, Topic};
use proptest::prelude::*;

fn arb_scores() -> impl Strategy<Value = AxisScores> {
    prop::array::uniform4(-3.0f64..3.0).prop_map(AxisScores::from_array)
}

fn arb_answer() -> impl Strategy<Value = Answer> {
    prop_oneof![
        Just(Answer::Confirmed),
        Just(Answer::Denied),
        Just(Answer::Skipped),
    ]
}

fn arb_log(answers: BoxedStrategy<Answer>) -> impl Strategy<Value = ResponseLog> {
    prop::collection::vec(
        (2000i32..2030, prop::sample::select(Topic::CATALOGUE.to_vec()), answers),
        0..25,
    )
    .prop_map(|entries| {
        let mut log = ResponseLog::new();
        for (year, topic, answer) in entries {
            log.record(year, topic, answer, "");
        }
        log
    })
}

proptest! {
    /// All-skipped logs leave the posterior equal to the prior.
    #[test]
    fn skipped_responses_are_no_ops(
        scores in arb_scores(),
        log in arb_log(Just(Answer::Skipped).boxed()),
    ) {
        let post = update(&scores, &log);
        prop_assert_eq!(post.axis_probabilities, post.prior);
    }

    /// Inverting every answer negates every pole's shift.
    #[test]
    fn inversion_mirrors_shifts(log in arb_log(arb_answer().boxed())) {
        let forward = log_odds_shift(&log);
        let backward = log_odds_shift(&log.inverted());
        for (a, b) in forward.iter().zip(backward.iter()) {
            prop_assert!((a + b).abs() < 1e-9);
        }
    }

    /// The ranking covers all 16 codes, sums to 1.0, and exposes the top 5.
    #[test]
    fn ranking_is_a_distribution(scores in arb_scores(), log in arb_log(arb_answer().boxed())) {
        let post = update(&scores, &log);
        prop_assert_eq!(post.ranking.len(), 16);
        prop_assert_eq!(post.top.len(), 5);
        let total: f64 = post.ranking.iter().map(|c| c.probability).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
        for pair in post.ranking.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
        for (_, p) in post.axis_probabilities.iter() {
            prop_assert!(p > 0.0 && p < 1.0);
        }
    }

    /// Before any update each complementary pair sums to 1.0.
    #[test]
    fn prior_pairs_are_complementary(scores in arb_scores()) {
        let post = update(&scores, &ResponseLog::new());
        let p = post.prior;
        prop_assert!((p.e + p.i - 1.0).abs() < 1e-12);
        prop_assert!((p.n + p.s - 1.0).abs() < 1e-12);
        prop_assert!((p.t + p.f - 1.0).abs() < 1e-12);
        prop_assert!((p.j + p.p - 1.0).abs() < 1e-12);
    }
}
