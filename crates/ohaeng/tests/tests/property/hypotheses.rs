//! Property tests: hypothesis draws are distinct, sized, and reproducible.

use ohaeng_engine::generate;
use ohaeng_types::Topic;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// A draw has min(k, 7) topics and never repeats one.
    #[test]
    fn draws_are_distinct_and_sized(
        seed in "[a-z0-9-]{1,16}",
        year in 1900i32..2100,
        k in 0usize..12,
    ) {
        let topics = generate(&seed, year, k);
        prop_assert_eq!(topics.len(), k.min(Topic::CATALOGUE.len()));
        let unique: HashSet<_> = topics.iter().collect();
        prop_assert_eq!(unique.len(), topics.len());
    }

    /// The same inputs always produce the same draw.
    #[test]
    fn draws_are_reproducible(seed in "\\PC{0,24}", year in any::<i32>(), k in 0usize..8) {
        prop_assert_eq!(generate(&seed, year, k), generate(&seed, year, k));
    }

    /// A smaller k is a prefix of a larger one.
    #[test]
    fn smaller_draw_is_prefix(seed in "[a-z]{1,8}", year in 1950i32..2050, k in 0usize..7) {
        let full = generate(&seed, year, 7);
        let part = generate(&seed, year, k);
        prop_assert_eq!(&full[..k], part.as_slice());
    }

    /// A full draw is a permutation of the catalogue.
    #[test]
    fn full_draw_is_permutation(seed in "[0-9]{4}-(wood|fire|earth|metal|water)", year in 1900i32..2100) {
        let mut topics = generate(&seed, year, 7);
        topics.sort();
        prop_assert_eq!(topics, Topic::CATALOGUE.to_vec());
    }
}
