//! Element profile and prior label candidates for a birth year

use crate::commands::{percent, AdjustmentArgs};
use crate::error::CliResult;
use crate::output::{self, print_header, print_info, print_warning, OutputFormat};
use ohaeng_engine::{projector, Engine};
use ohaeng_types::{ElementDistribution, LabelCandidate};
use serde::Serialize;
use tabled::Tabled;

/// Table row for one element weight
#[derive(Debug, Serialize, Tabled)]
pub struct ElementRow {
    pub element: String,
    pub korean: String,
    pub weight: String,
}

pub fn element_rows(distribution: &ElementDistribution) -> Vec<ElementRow> {
    distribution
        .iter()
        .map(|(element, weight)| ElementRow {
            element: element.to_string(),
            korean: element.korean().to_string(),
            weight: percent(weight),
        })
        .collect()
}

/// Table row for one prior candidate
#[derive(Debug, Serialize, Tabled)]
pub struct CandidateRow {
    pub rank: usize,
    pub code: String,
    pub score: String,
}

pub fn candidate_rows(candidates: &[LabelCandidate]) -> Vec<CandidateRow> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| CandidateRow {
            rank: i + 1,
            code: c.code.to_string(),
            score: format!("{:.3}", c.score),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ProfileView<'a> {
    year: i32,
    name: String,
    distribution: &'a ElementDistribution,
    dominant: ohaeng_types::Element,
    candidates: &'a [LabelCandidate],
}

pub fn execute(
    year: i32,
    adjustments: &AdjustmentArgs,
    engine: &Engine,
    format: OutputFormat,
) -> CliResult<()> {
    let adjustments = adjustments.to_vector();
    if !projector::adjustments_in_recommended_range(&adjustments) {
        tracing::warn!("Adjustments outside the recommended -2..=2 range");
    }

    let symbol = engine.map_year(year);
    let distribution = engine.project(&symbol, &adjustments);
    let candidates = engine.infer(&distribution, symbol.polarity);

    match format {
        OutputFormat::Table => {
            print_header(&format!("{} · {}", year, symbol.name()));
            if distribution.is_degenerate() {
                print_warning("Adjustments cancel every element; distribution is all zero");
            }
            output::print_output(element_rows(&distribution), format)?;
            print_info(&format!(
                "Dominant element: {} ({})",
                distribution.dominant(),
                distribution.dominant().korean()
            ));
            print_header("Prior candidates");
            output::print_output(candidate_rows(&candidates), format)
        }
        _ => output::print_single(
            &ProfileView {
                year,
                name: symbol.name(),
                distribution: &distribution,
                dominant: distribution.dominant(),
                candidates: &candidates,
            },
            format,
        ),
    }
}
