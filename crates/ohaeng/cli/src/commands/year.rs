//! Year symbol lookup

use crate::error::CliResult;
use crate::output::{self, print_header, FieldRow, OutputFormat};
use ohaeng_engine::Engine;
use ohaeng_types::YearSymbol;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct YearView {
    name: String,
    #[serde(flatten)]
    symbol: YearSymbol,
}

fn rows(symbol: &YearSymbol) -> Vec<FieldRow> {
    vec![
        FieldRow::new("year", symbol.year),
        FieldRow::new("name", symbol.name()),
        FieldRow::new("stem", format!("{:?} (#{})", symbol.stem, symbol.stem.index())),
        FieldRow::new(
            "branch",
            format!("{:?} (#{})", symbol.branch, symbol.branch.index()),
        ),
        FieldRow::new(
            "stem element",
            format!("{} {}", symbol.stem_element, symbol.stem_element.korean()),
        ),
        FieldRow::new(
            "branch element",
            format!("{} {}", symbol.branch_element, symbol.branch_element.korean()),
        ),
        FieldRow::new("polarity", symbol.polarity),
    ]
}

pub fn execute(year: i32, engine: &Engine, format: OutputFormat) -> CliResult<()> {
    let symbol = engine.map_year(year);
    match format {
        OutputFormat::Table => {
            print_header(&format!("Year {}", year));
            output::print_output(rows(&symbol), format)
        }
        _ => output::print_single(
            &YearView {
                name: symbol.name(),
                symbol,
            },
            format,
        ),
    }
}
