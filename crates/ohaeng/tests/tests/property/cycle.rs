//! Property tests: the year mapping is periodic and anchored at 1984.

use ohaeng_engine::{map_year, ANCHOR_YEAR};
use proptest::prelude::*;

proptest! {
    /// Stems repeat every 10 years, branches every 12.
    #[test]
    fn stem_and_branch_periods(year in -100_000i32..100_000) {
        let base = map_year(year);
        prop_assert_eq!(base.stem, map_year(year + 10).stem);
        prop_assert_eq!(base.branch, map_year(year + 12).branch);
        let cycle = map_year(year + 60);
        prop_assert_eq!((base.stem, base.branch), (cycle.stem, cycle.branch));
        prop_assert_eq!(base.polarity, cycle.polarity);
    }

    /// Indices are the floored offset from the anchor year.
    #[test]
    fn indices_follow_floored_offset(year in any::<i32>()) {
        let s = map_year(year);
        let offset = i64::from(year) - i64::from(ANCHOR_YEAR);
        prop_assert_eq!(s.stem.index() as i64, offset.rem_euclid(10));
        prop_assert_eq!(s.branch.index() as i64, offset.rem_euclid(12));
        prop_assert_eq!(s.stem_element, s.stem.element());
        prop_assert_eq!(s.branch_element, s.branch.element());
    }

    /// Stem and branch parity always agree, so only 60 of the 120 pairs occur.
    #[test]
    fn stem_and_branch_parity_agree(year in any::<i32>()) {
        let s = map_year(year);
        prop_assert_eq!(s.stem.index() % 2, s.branch.index() % 2);
    }
}

#[test]
fn anchor_year_maps_to_first_entries() {
    let s = map_year(ANCHOR_YEAR);
    assert_eq!(s.stem.index(), 0);
    assert_eq!(s.branch.index(), 0);
}
