use serde::{Deserialize, Serialize};

/// Tunables for the inference pipeline. Defaults are the reference constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Axes with |score| below this produce a flipped alternate candidate.
    #[serde(default = "default_alternate_threshold")]
    pub alternate_threshold: f64,

    /// Candidate weight of a flipped alternate (the primary has 1.0).
    #[serde(default = "default_alternate_weight")]
    pub alternate_weight: f64,

    /// Logistic temperature when turning axis scores into probabilities.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Probabilities are clamped to `[floor, 1 - floor]` before log-odds.
    #[serde(default = "default_probability_floor")]
    pub probability_floor: f64,

    /// Length of the prior and posterior candidate lists.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Topics drawn per year by the hypothesis generator.
    #[serde(default = "default_hypotheses_per_year")]
    pub hypotheses_per_year: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alternate_threshold: default_alternate_threshold(),
            alternate_weight: default_alternate_weight(),
            temperature: default_temperature(),
            probability_floor: default_probability_floor(),
            max_candidates: default_max_candidates(),
            hypotheses_per_year: default_hypotheses_per_year(),
        }
    }
}

impl EngineConfig {
    /// Replace out-of-domain values with the defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.alternate_threshold.is_finite() || self.alternate_threshold < 0.0 {
            self.alternate_threshold = defaults.alternate_threshold;
        }
        if !self.alternate_weight.is_finite() {
            self.alternate_weight = defaults.alternate_weight;
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            self.temperature = defaults.temperature;
        }
        if !(self.probability_floor > 0.0 && self.probability_floor < 0.5) {
            self.probability_floor = defaults.probability_floor;
        }
        if self.max_candidates == 0 {
            self.max_candidates = defaults.max_candidates;
        }
        self
    }
}

fn default_alternate_threshold() -> f64 {
    0.15
}

fn default_alternate_weight() -> f64 {
    0.7
}

fn default_temperature() -> f64 {
    1.2
}

fn default_probability_floor() -> f64 {
    1e-6
}

fn default_max_candidates() -> usize {
    5
}

fn default_hypotheses_per_year() -> usize {
    3
}
