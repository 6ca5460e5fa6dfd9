//! Display-side analysis: reference element profiles, birth-month season,
//! element balance, and how well confirmed life events agree with the
//! dominant element.

use ohaeng_types::{Answer, Element, ElementVector, ResponseLog, TypeCode};
use serde::{Deserialize, Serialize};

/// Bonus the birth-month season adds to its element.
pub const SEASON_BONUS: f64 = 2.0;

/// Balance above this is reported as balanced.
pub const BALANCED_THRESHOLD: u32 = 60;

/// Upper bound of the consistency rate.
pub const CONSISTENCY_CAP: u32 = 95;

// wood, fire, earth, metal, water
const REFERENCE_PROFILES: [(&str, [f64; 5]); 14] = [
    ("INTP", [3.0, 1.0, 2.0, 5.0, 2.0]),
    ("INTJ", [2.0, 1.0, 2.0, 4.0, 4.0]),
    ("ENTP", [5.0, 2.0, 1.0, 3.0, 1.0]),
    ("ENFP", [5.0, 4.0, 1.0, 1.0, 2.0]),
    ("INFJ", [2.0, 3.0, 1.0, 2.0, 5.0]),
    ("INFP", [3.0, 4.0, 1.0, 1.0, 4.0]),
    ("ISTJ", [1.0, 1.0, 5.0, 4.0, 1.0]),
    ("ISFP", [3.0, 3.0, 2.0, 1.0, 4.0]),
    ("ESTJ", [1.0, 2.0, 5.0, 4.0, 1.0]),
    ("ESFJ", [2.0, 5.0, 4.0, 1.0, 1.0]),
    ("ISTP", [2.0, 1.0, 3.0, 5.0, 1.0]),
    ("ESTP", [4.0, 2.0, 3.0, 3.0, 1.0]),
    ("ESFP", [5.0, 4.0, 2.0, 1.0, 1.0]),
    ("ENFJ", [3.0, 4.0, 2.0, 1.0, 3.0]),
];

/// Reference element scores (1–5) for a known label. Two codes have no
/// entry and yield `None`.
pub fn reference_profile(code: &TypeCode) -> Option<ElementVector> {
    let key = code.to_string();
    REFERENCE_PROFILES
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, values)| ElementVector::from_array(*values))
}

/// Element of the season a birth month falls in. `None` outside 1..=12.
pub fn seasonal_element(month: u32) -> Option<Element> {
    match month {
        1 | 11 | 12 => Some(Element::Water),
        2..=4 => Some(Element::Wood),
        5 | 6 => Some(Element::Fire),
        7 => Some(Element::Earth),
        8..=10 => Some(Element::Metal),
        _ => None,
    }
}

/// Reference profile with the birth-month season bonus applied.
pub fn seasonal_profile(code: &TypeCode, birth_month: Option<u32>) -> Option<ElementVector> {
    let mut profile = reference_profile(code)?;
    if let Some(element) = birth_month.and_then(seasonal_element) {
        profile.add(element, SEASON_BONUS);
    }
    Some(profile)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// 0..=100; 100 means perfectly even.
    pub balance: u32,
    pub strongest: Element,
    pub weakest: Element,
    pub balanced: bool,
}

/// `100 - trunc((max - min) / max * 100)`, or 100 when `max <= 0`.
pub fn balance(vector: &ElementVector) -> BalanceReport {
    let max = vector.max();
    let min = vector.min();
    let balance = if max > 0.0 && max.is_finite() {
        let spread = ((max - min) / max * 100.0).trunc().clamp(0.0, 100.0);
        100 - spread as u32
    } else {
        100
    };
    BalanceReport {
        balance,
        strongest: vector.strongest(),
        weakest: vector.weakest(),
        balanced: balance > BALANCED_THRESHOLD,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consistency {
    /// Most frequent element among confirmed events.
    pub event_element: Element,
    /// Element the events were compared against.
    pub reference_element: Element,
    /// Confirmed events per element, canonical order.
    pub counts: [u32; 5],
    /// Percentage, capped at [`CONSISTENCY_CAP`].
    pub rate: u32,
}

/// Agreement between confirmed life events and a reference element.
///
/// When the most frequent event element is the reference one the rate is
/// `85 + 3·count`, otherwise `65 + 5·count(reference)`. `None` when nothing
/// has been confirmed.
pub fn consistency(responses: &ResponseLog, reference: Element) -> Option<Consistency> {
    let mut counts = [0u32; 5];
    for (_, topic, record) in responses.iter() {
        if record.answer == Answer::Confirmed {
            counts[topic.element().index()] += 1;
        }
    }
    if counts.iter().all(|c| *c == 0) {
        return None;
    }

    let mut event_element = Element::Wood;
    for element in Element::ALL {
        if counts[element.index()] > counts[event_element.index()] {
            event_element = element;
        }
    }

    let rate = if event_element == reference {
        85 + 3 * counts[event_element.index()]
    } else {
        65 + 5 * counts[reference.index()]
    };

    Some(Consistency {
        event_element,
        reference_element: reference,
        counts,
        rate: rate.min(CONSISTENCY_CAP),
    })
}

/// Display-side summary attached to an assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub seasonal_element: Option<Element>,
    pub reference_profile: Option<ElementVector>,
    pub reference_balance: Option<BalanceReport>,
    pub distribution_balance: BalanceReport,
    pub consistency: Option<Consistency>,
}
