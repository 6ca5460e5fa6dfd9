use ohaeng_types::{Element, ElementDistribution, ElementVector, YearSymbol};
use tracing::{debug, warn};

/// Weight contributed by each of the stem and branch elements.
pub const BASE_WEIGHT: f64 = 0.5;

/// Recommended adjustment range per element. Not enforced.
pub const RECOMMENDED_ADJUSTMENT: (f64, f64) = (-2.0, 2.0);

/// Hard bound on a single adjustment's magnitude. Larger finite values are
/// clamped so the shift and the sum stay finite.
pub const MAX_ADJUSTMENT: f64 = 1e6;

/// Project a year symbol plus user adjustments onto a normalized element
/// distribution.
///
/// Negative totals are shifted up so the minimum becomes exactly zero; a zero
/// sum divides by 1.0 and yields the all-zero distribution. Adjustments beyond
/// [`MAX_ADJUSTMENT`] are clamped and non-finite ones are ignored.
pub fn project(symbol: &YearSymbol, adjustments: &ElementVector) -> ElementDistribution {
    let mut raw = ElementVector::zero();
    raw.add(symbol.stem_element, BASE_WEIGHT);
    raw.add(symbol.branch_element, BASE_WEIGHT);

    for (element, value) in adjustments.iter() {
        if value.is_finite() {
            if value.abs() > MAX_ADJUSTMENT {
                warn!(element = %element, value, "Clamping oversized element adjustment");
            }
            raw.add(element, value.clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT));
        } else {
            warn!(element = %element, "Ignoring non-finite element adjustment");
        }
    }

    let min = raw.min();
    if min < 0.0 {
        let shift = -min;
        for element in Element::ALL {
            raw.add(element, shift);
        }
    }

    let total = raw.sum();
    let divisor = if total > 0.0 && total.is_finite() {
        total
    } else {
        1.0
    };
    let weights = ElementVector::from_array(raw.to_array().map(|v| v / divisor));

    let distribution = ElementDistribution { weights };
    debug!(
        year = symbol.year,
        dominant = %distribution.dominant(),
        raw_total = total,
        "Element distribution projected"
    );
    distribution
}

/// True if every adjustment lies within [`RECOMMENDED_ADJUSTMENT`].
pub fn adjustments_in_recommended_range(adjustments: &ElementVector) -> bool {
    let (lo, hi) = RECOMMENDED_ADJUSTMENT;
    adjustments.iter().all(|(_, v)| (lo..=hi).contains(&v))
}
