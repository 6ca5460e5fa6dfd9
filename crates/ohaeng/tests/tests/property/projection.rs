//! Property tests: projected distributions are non-negative and normalized.

use ohaeng_engine::{map_year, project};
use ohaeng_types::{Element, ElementVector};
use proptest::prelude::*;

fn arb_adjustments() -> impl Strategy<Value = ElementVector> {
    prop::array::uniform5(-5.0f64..5.0).prop_map(ElementVector::from_array)
}

/// Any f64 at all, including NaN, infinities and values near `f64::MAX`.
fn arb_any_adjustments() -> impl Strategy<Value = ElementVector> {
    prop::array::uniform5(any::<f64>()).prop_map(ElementVector::from_array)
}

proptest! {
    /// Every weight is non-negative; the sum is 1.0 unless all are zero.
    #[test]
    fn distribution_is_normalized(year in 1900i32..2100, adj in arb_adjustments()) {
        let d = project(&map_year(year), &adj);
        for (_, v) in d.iter() {
            prop_assert!(v >= 0.0);
            prop_assert!(v.is_finite());
        }
        if d.is_degenerate() {
            prop_assert_eq!(d.total(), 0.0);
        } else {
            prop_assert!((d.total() - 1.0).abs() < 1e-9);
        }
    }

    /// Arbitrary adjustments never break the distribution invariant.
    #[test]
    fn arbitrary_adjustments_stay_normalized(year in any::<i32>(), adj in arb_any_adjustments()) {
        let d = project(&map_year(year), &adj);
        for (_, v) in d.iter() {
            prop_assert!(v.is_finite() && v >= 0.0);
        }
        if d.is_degenerate() {
            prop_assert_eq!(d.total(), 0.0);
        } else {
            prop_assert!((d.total() - 1.0).abs() < 1e-9);
        }
    }

    /// The dominant element carries the largest weight and wins ties by order.
    #[test]
    fn dominant_is_first_argmax(year in 1900i32..2100, adj in arb_adjustments()) {
        let d = project(&map_year(year), &adj);
        let dominant = d.dominant();
        for element in Element::ALL {
            prop_assert!(d.get(element) <= d.get(dominant));
            if element.index() < dominant.index() {
                prop_assert!(d.get(element) < d.get(dominant));
            }
        }
    }

    /// Without adjustments only the stem and branch elements carry weight.
    #[test]
    fn zero_adjustments_touch_two_elements_at_most(year in any::<i32>()) {
        let symbol = map_year(year);
        let d = project(&symbol, &ElementVector::zero());
        for (element, v) in d.iter() {
            if element != symbol.stem_element && element != symbol.branch_element {
                prop_assert_eq!(v, 0.0);
            }
        }
        prop_assert!((d.get(symbol.stem_element) - 0.5).abs() < 1e-12
            || symbol.stem_element == symbol.branch_element);
    }

    /// Adding the same amount to every element changes nothing once the
    /// minimum is negative (the shift absorbs it).
    #[test]
    fn uniform_negative_offset_is_absorbed(year in 1900i32..2100, offset in -3.0f64..-0.01) {
        let symbol = map_year(year);
        let base = project(&symbol, &ElementVector::zero());
        let shifted = project(&symbol, &ElementVector::from_array([offset; 5]));
        for element in Element::ALL {
            prop_assert!((base.get(element) - shifted.get(element)).abs() < 1e-9);
        }
    }
}
