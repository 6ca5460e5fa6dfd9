use crate::axis::{AxisScores, TypeCode};
use serde::{Deserialize, Serialize};

/// A prior label candidate produced by axis inference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelCandidate {
    pub code: TypeCode,
    /// Heuristic confidence: `0.5·weight + 0.25·Σ|axis|`.
    pub score: f64,
    /// Axis scores the candidate was derived from (shared by all candidates of one run).
    pub source_axis_scores: AxisScores,
}

/// A code with its normalized joint posterior probability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PosteriorCandidate {
    pub code: TypeCode,
    pub probability: f64,
}

impl PosteriorCandidate {
    /// Probability as a one-decimal percentage, e.g. `41.7%`.
    pub fn percent(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}
