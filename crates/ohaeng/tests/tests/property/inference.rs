//! Property tests: prior candidates are valid, sorted, and led by the sign code.

use ohaeng_engine::{axis_scores, infer, map_year, project};
use ohaeng_types::{Axis, ElementDistribution, ElementVector, Polarity};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_distribution() -> impl Strategy<Value = ElementDistribution> {
    (1900i32..2100, prop::array::uniform5(-2.0f64..2.0))
        .prop_map(|(year, adj)| project(&map_year(year), &ElementVector::from_array(adj)))
}

fn arb_polarity() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::Yang), Just(Polarity::Yin)]
}

proptest! {
    /// 1..=5 distinct candidates with non-increasing scores.
    #[test]
    fn candidates_are_bounded_distinct_sorted(d in arb_distribution(), polarity in arb_polarity()) {
        let candidates = infer(&d, polarity);
        prop_assert!(!candidates.is_empty() && candidates.len() <= 5);
        let codes: HashSet<String> = candidates.iter().map(|c| c.code.to_string()).collect();
        prop_assert_eq!(codes.len(), candidates.len());
        for pair in candidates.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// The leading candidate is the sign code of the axis scores.
    #[test]
    fn primary_code_leads(d in arb_distribution(), polarity in arb_polarity()) {
        let scores = axis_scores(&d, polarity);
        let candidates = infer(&d, polarity);
        prop_assert_eq!(candidates[0].code, scores.code());
        for c in &candidates {
            prop_assert_eq!(c.source_axis_scores, scores);
        }
    }

    /// Alternates differ from the primary on exactly one near-zero axis.
    #[test]
    fn alternates_flip_one_weak_axis(d in arb_distribution(), polarity in arb_polarity()) {
        let scores = axis_scores(&d, polarity);
        let primary = scores.code();
        for c in infer(&d, polarity).iter().filter(|c| c.code != primary) {
            let flipped: Vec<Axis> = Axis::ALL
                .into_iter()
                .filter(|a| c.code.pole(*a) != primary.pole(*a))
                .collect();
            prop_assert_eq!(flipped.len(), 1);
            prop_assert!(scores.get(flipped[0]).abs() < 0.15);
        }
    }
}
