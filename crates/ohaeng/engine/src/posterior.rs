//! Log-odds posterior update over the eight axis poles.
//!
//! Each pole carries its own log-odds. A confirmed response adds the topic's
//! pole weights, a denied response subtracts them, a skipped response does
//! nothing. Poles are converted back independently, so the two poles of an
//! axis need not sum to 1.0 after an update; the 16-way joint is normalized.

use crate::config::EngineConfig;
use ohaeng_types::{
    Answer, Axis, AxisProbabilities, AxisScores, Pole, PosteriorCandidate, ResponseLog, Topic,
    TypeCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Signed log-odds contributions of a confirmed response, per topic.
pub fn topic_weights(topic: Topic) -> &'static [(Pole, f64)] {
    match topic {
        Topic::Career => &[(Pole::J, 0.40), (Pole::E, 0.20), (Pole::P, -0.20)],
        Topic::Relationship => &[(Pole::F, 0.40), (Pole::E, 0.20), (Pole::T, -0.20)],
        Topic::Relocation => &[(Pole::P, 0.35), (Pole::N, 0.20), (Pole::J, -0.15)],
        Topic::Health => &[(Pole::S, 0.30), (Pole::I, 0.20)],
        Topic::Finance => &[(Pole::T, 0.35), (Pole::J, 0.20), (Pole::N, -0.15)],
        Topic::Family => &[(Pole::F, 0.30), (Pole::S, 0.20), (Pole::I, -0.10)],
        Topic::Creativity => &[(Pole::N, 0.40), (Pole::P, 0.20), (Pole::S, -0.20)],
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

pub fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// Pole probabilities from signed axis scores: `sigmoid(score / temperature)`
/// for the positive pole, the complement for the negative pole.
pub fn axis_probabilities(scores: &AxisScores, temperature: f64) -> AxisProbabilities {
    AxisProbabilities::from_fn(|pole| {
        let p = sigmoid(scores.get(pole.axis()) / temperature);
        if pole.is_positive() {
            p
        } else {
            1.0 - p
        }
    })
}

/// Result of a posterior update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    /// Pole probabilities before any response was applied.
    pub prior: AxisProbabilities,
    /// Pole probabilities after the update.
    pub axis_probabilities: AxisProbabilities,
    /// All sixteen codes, normalized and sorted descending.
    pub ranking: Vec<PosteriorCandidate>,
    /// Leading entries of `ranking` exposed to callers.
    pub top: Vec<PosteriorCandidate>,
}

impl Posterior {
    pub fn best(&self) -> Option<&PosteriorCandidate> {
        self.ranking.first()
    }

    pub fn probability_of(&self, code: &TypeCode) -> f64 {
        self.ranking
            .iter()
            .find(|c| c.code == *code)
            .map(|c| c.probability)
            .unwrap_or(0.0)
    }
}

/// Posterior update with the reference constants.
pub fn update(prior_scores: &AxisScores, responses: &ResponseLog) -> Posterior {
    update_with(prior_scores, responses, &EngineConfig::default())
}

/// Accumulated log-odds shift per pole from a response log.
pub fn log_odds_shift(responses: &ResponseLog) -> [f64; 8] {
    let mut shift = [0.0f64; 8];
    for (_, topic, record) in responses.iter() {
        let direction = match record.answer {
            Answer::Confirmed => 1.0,
            Answer::Denied => -1.0,
            Answer::Skipped => continue,
        };
        for (pole, weight) in topic_weights(topic) {
            shift[pole.index()] += direction * weight;
        }
    }
    shift
}

pub fn update_with(
    prior_scores: &AxisScores,
    responses: &ResponseLog,
    config: &EngineConfig,
) -> Posterior {
    let prior = axis_probabilities(prior_scores, config.temperature);
    let shift = log_odds_shift(responses);
    let floor = config.probability_floor;

    let axis_probabilities = AxisProbabilities::from_fn(|pole| {
        let p = prior.get(pole);
        let delta = shift[pole.index()];
        if delta == 0.0 {
            p
        } else {
            sigmoid(logit(p.clamp(floor, 1.0 - floor)) + delta)
        }
    });

    let ranking = rank_codes(&axis_probabilities);
    let top: Vec<PosteriorCandidate> = ranking
        .iter()
        .take(config.max_candidates)
        .copied()
        .collect();

    if let Some(best) = ranking.first() {
        debug!(
            responses = responses.len(),
            best = %best.code,
            probability = best.probability,
            "Posterior updated"
        );
    }

    Posterior {
        prior,
        axis_probabilities,
        ranking,
        top,
    }
}

/// Normalized joint probability for all sixteen codes, sorted descending.
/// Ties keep enumeration order.
pub fn rank_codes(probabilities: &AxisProbabilities) -> Vec<PosteriorCandidate> {
    let codes = TypeCode::all();
    let joints: Vec<f64> = codes.iter().map(|c| probabilities.joint(c)).collect();
    let total: f64 = joints.iter().sum();

    let mut ranking: Vec<PosteriorCandidate> = codes
        .iter()
        .zip(joints)
        .map(|(code, joint)| PosteriorCandidate {
            code: *code,
            probability: if total > 0.0 && total.is_finite() {
                joint / total
            } else {
                1.0 / codes.len() as f64
            },
        })
        .collect();

    ranking.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    ranking
}

/// Probability mass of one pole under the normalized joint (marginal).
pub fn marginal(ranking: &[PosteriorCandidate], pole: Pole) -> f64 {
    ranking
        .iter()
        .filter(|c| c.code.pole(pole.axis()) == pole)
        .map(|c| c.probability)
        .sum()
}

/// Marginal of each axis's positive pole, in axis order.
pub fn positive_marginals(ranking: &[PosteriorCandidate]) -> [f64; 4] {
    Axis::ALL.map(|axis| marginal(ranking, axis.positive()))
}
