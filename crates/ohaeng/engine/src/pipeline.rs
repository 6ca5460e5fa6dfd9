//! End-to-end pipeline bound to one [`EngineConfig`].

use crate::config::EngineConfig;
use crate::hypothesis::{self, YearHypotheses};
use crate::posterior::{self, Posterior};
use crate::{cycle, inference, projector};
use ohaeng_types::{
    AxisScores, Element, ElementDistribution, ElementVector, LabelCandidate, Polarity, ResponseLog,
    Topic, YearSymbol,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the pipeline consumes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineInput {
    pub birth_year: i32,
    #[serde(default)]
    pub adjustments: ElementVector,
    #[serde(default)]
    pub responses: ResponseLog,
}

/// Everything the pipeline produces for one input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub symbol: YearSymbol,
    pub distribution: ElementDistribution,
    pub dominant: Element,
    pub prior_candidates: Vec<LabelCandidate>,
    pub posterior: Posterior,
}

impl PipelineOutput {
    /// Axis scores shared by every prior candidate.
    pub fn axis_scores(&self) -> AxisScores {
        self.prior_candidates
            .first()
            .map(|c| c.source_axis_scores)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn map_year(&self, year: i32) -> YearSymbol {
        cycle::map_year(year)
    }

    pub fn project(&self, symbol: &YearSymbol, adjustments: &ElementVector) -> ElementDistribution {
        projector::project(symbol, adjustments)
    }

    pub fn infer(
        &self,
        distribution: &ElementDistribution,
        polarity: Polarity,
    ) -> Vec<LabelCandidate> {
        inference::infer_with(distribution, polarity, &self.config)
    }

    /// Topics for one year, `hypotheses_per_year` of them.
    pub fn hypotheses(&self, seed: &str, year: i32) -> Vec<Topic> {
        hypothesis::generate(seed, year, self.config.hypotheses_per_year)
    }

    pub fn hypotheses_for_range(&self, seed: &str, start: i32, end: i32) -> Vec<YearHypotheses> {
        hypothesis::generate_range(seed, start, end, self.config.hypotheses_per_year)
    }

    pub fn update(&self, prior_scores: &AxisScores, responses: &ResponseLog) -> Posterior {
        posterior::update_with(prior_scores, responses, &self.config)
    }

    /// Run every stage. The posterior starts from the top prior candidate's
    /// axis scores.
    pub fn assess(&self, input: &PipelineInput) -> PipelineOutput {
        let symbol = self.map_year(input.birth_year);
        let distribution = self.project(&symbol, &input.adjustments);
        let dominant = distribution.dominant();
        let prior_candidates = self.infer(&distribution, symbol.polarity);

        let prior_scores = prior_candidates
            .first()
            .map(|c| c.source_axis_scores)
            .unwrap_or_else(|| inference::axis_scores(&distribution, symbol.polarity));
        let posterior = self.update(&prior_scores, &input.responses);

        debug!(
            birth_year = input.birth_year,
            dominant = %dominant,
            prior_top = ?prior_candidates.first().map(|c| c.code.to_string()),
            posterior_top = ?posterior.best().map(|c| c.code.to_string()),
            "Pipeline assessed"
        );

        PipelineOutput {
            symbol,
            distribution,
            dominant,
            prior_candidates,
            posterior,
        }
    }
}
