use crate::config::EngineConfig;
use ohaeng_types::{
    Axis, AxisScores, Element, ElementDistribution, LabelCandidate, Polarity, TypeCode,
};
use tracing::debug;

/// Candidate weight of the primary code.
pub const PRIMARY_WEIGHT: f64 = 1.0;

/// Linear projection of the element weights (plus polarity) onto the four axes.
///
/// - attitude   = 0.9·(wood+fire) − 0.9·(metal+water) + 0.2·polarity
/// - perception = 0.8·(wood+water) − 0.8·(metal+earth) + 0.2·fire
/// - judgment   = 0.9·(metal+water) − 0.9·(wood+fire)
/// - lifestyle  = 0.9·(metal+earth) − 0.9·(wood+fire+water)
pub fn axis_scores(distribution: &ElementDistribution, polarity: Polarity) -> AxisScores {
    let wood = distribution.get(Element::Wood);
    let fire = distribution.get(Element::Fire);
    let earth = distribution.get(Element::Earth);
    let metal = distribution.get(Element::Metal);
    let water = distribution.get(Element::Water);

    AxisScores {
        attitude: 0.9 * (wood + fire) - 0.9 * (metal + water) + 0.2 * polarity.sign(),
        perception: 0.8 * (wood + water) - 0.8 * (metal + earth) + 0.2 * fire,
        judgment: 0.9 * (metal + water) - 0.9 * (wood + fire),
        lifestyle: 0.9 * (metal + earth) - 0.9 * (wood + fire + water),
    }
}

/// Ranked prior candidates using the reference constants.
pub fn infer(distribution: &ElementDistribution, polarity: Polarity) -> Vec<LabelCandidate> {
    infer_with(distribution, polarity, &EngineConfig::default())
}

/// Ranked prior candidates: the primary code plus one alternate per
/// near-boundary axis, scored `0.5·weight + 0.25·Σ|axis|`, at most
/// `config.max_candidates` entries.
pub fn infer_with(
    distribution: &ElementDistribution,
    polarity: Polarity,
    config: &EngineConfig,
) -> Vec<LabelCandidate> {
    let scores = axis_scores(distribution, polarity);
    let primary = scores.code();

    let mut weighted: Vec<(TypeCode, f64)> = vec![(primary, PRIMARY_WEIGHT)];
    for axis in Axis::ALL {
        if scores.get(axis).abs() < config.alternate_threshold {
            let alternate = primary.flipped(axis);
            match weighted.iter_mut().find(|(code, _)| *code == alternate) {
                Some((_, weight)) => *weight = weight.max(config.alternate_weight),
                None => weighted.push((alternate, config.alternate_weight)),
            }
        }
    }

    let signal = 0.25 * scores.magnitude();
    let mut candidates: Vec<LabelCandidate> = weighted
        .into_iter()
        .map(|(code, weight)| LabelCandidate {
            code,
            score: 0.5 * weight + signal,
            source_axis_scores: scores,
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(config.max_candidates.max(1));

    debug!(
        primary = %primary,
        attitude = scores.attitude,
        perception = scores.perception,
        judgment = scores.judgment,
        lifestyle = scores.lifestyle,
        candidates = candidates.len(),
        "Axis inference complete"
    );

    candidates
}
