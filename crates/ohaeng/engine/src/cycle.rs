//! Year → stem/branch mapping.
//!
//! Deliberately simplified: the cycle turns on the Gregorian year number,
//! not on the solar-term boundary.

use ohaeng_types::{Branch, Stem, YearSymbol};

/// Year mapped to index 0 of both cycles (Gap-Ja).
pub const ANCHOR_YEAR: i32 = 1984;

/// Map a year onto the 10- and 12-cycles. Total over all `i32`.
pub fn map_year(year: i32) -> YearSymbol {
    let offset = i64::from(year) - i64::from(ANCHOR_YEAR);
    let stem = Stem::CYCLE[offset.rem_euclid(10) as usize];
    let branch = Branch::CYCLE[offset.rem_euclid(12) as usize];
    YearSymbol {
        year,
        stem,
        branch,
        stem_element: stem.element(),
        branch_element: branch.element(),
        polarity: stem.polarity(),
    }
}
