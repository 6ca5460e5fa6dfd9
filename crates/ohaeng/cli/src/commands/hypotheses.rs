//! Deterministic yearly hypotheses

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use ohaeng_engine::{generate_range, YearHypotheses};
use ohaeng_session::YearRange;
use serde::Serialize;
use tabled::Tabled;

/// Table row for one year's topics
#[derive(Debug, Serialize, Tabled)]
pub struct HypothesisRow {
    pub year: i32,
    pub topics: String,
}

impl From<&YearHypotheses> for HypothesisRow {
    fn from(h: &YearHypotheses) -> Self {
        Self {
            year: h.year,
            topics: h
                .topics
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub fn execute(seed: &str, from: i32, to: i32, k: usize, format: OutputFormat) -> CliResult<()> {
    if from > to {
        return Err(CliError::InvalidArgument(format!(
            "--from {} is after --to {}",
            from, to
        )));
    }
    let range = YearRange::new(from, to)?;
    let draws = generate_range(seed, range.start(), range.end(), k);
    match format {
        OutputFormat::Table => {
            output::print_output(draws.iter().map(HypothesisRow::from).collect(), format)
        }
        _ => output::print_single(&draws, format),
    }
}
