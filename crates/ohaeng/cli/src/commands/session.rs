//! File-backed session commands

use crate::commands::profile::{candidate_rows, element_rows};
use crate::commands::{percent, AdjustmentArgs};
use crate::error::{CliError, CliResult};
use crate::output::{
    self, print_header, print_info, print_success, print_warning, FieldRow, OutputFormat,
};
use chrono::Local;
use clap::{Subcommand, ValueEnum};
use ohaeng_engine::Engine;
use ohaeng_session::{
    birth, export_rows, to_csv, to_json, Assessment, Profile, Session, YearRange,
};
use ohaeng_types::{Answer, RawResponse, Topic, TypeCode};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::Tabled;

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Create a new session file
    Init {
        /// Display name stored with exports
        #[arg(short, long, default_value = "")]
        name: String,

        /// Birth year
        #[arg(long, conflicts_with = "birth_date", required_unless_present = "birth_date")]
        year: Option<i32>,

        /// Birth date as YYYYMMDD (sets year and month)
        #[arg(long)]
        birth_date: Option<String>,

        /// First year to ask about
        #[arg(long)]
        from: i32,

        /// Last year to ask about
        #[arg(long)]
        to: i32,

        /// Self-reported type code (display only)
        #[arg(long)]
        label: Option<String>,

        #[command(flatten)]
        adjustments: AdjustmentArgs,

        /// Overwrite an existing session file
        #[arg(long)]
        force: bool,
    },

    /// Record an answer for one year and topic
    Answer {
        #[arg(long)]
        year: i32,

        /// career, relationship, relocation, health, finance, family, creativity
        #[arg(long)]
        topic: String,

        /// yes / no / skip (anything unrecognized counts as skip)
        #[arg(long)]
        answer: String,

        #[arg(long, default_value = "")]
        note: String,
    },

    /// Import answers from a JSON list of {year, topic, answer, note}
    Import {
        file: PathBuf,
    },

    /// Show the profile and the questions still open
    Show,

    /// Run the full assessment
    Assess,

    /// Export responses with the current assessment
    Export {
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Drop every recorded answer
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Table row for a pending question
#[derive(Debug, Serialize, Tabled)]
struct QuestionRow {
    year: i32,
    topic: String,
    question: String,
}

/// Table row for a posterior candidate
#[derive(Debug, Serialize, Tabled)]
struct PosteriorRow {
    rank: usize,
    code: String,
    probability: String,
}

/// Table row for a pole probability
#[derive(Debug, Serialize, Tabled)]
struct PoleRow {
    pole: char,
    prior: String,
    posterior: String,
}

pub fn execute(
    command: SessionCommands,
    path: &Path,
    engine: &Engine,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        SessionCommands::Init {
            name,
            year,
            birth_date,
            from,
            to,
            label,
            adjustments,
            force,
        } => {
            if path.exists() && !force {
                return Err(CliError::InvalidArgument(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            let (birth_year, birth_month) = match (birth_date, year) {
                (Some(input), _) => {
                    let date = birth::parse_birth_date(&input, Local::now().date_naive())?;
                    let (y, m) = birth::year_month(date);
                    (y, Some(m))
                }
                (None, Some(y)) => (y, None),
                (None, None) => {
                    return Err(CliError::InvalidArgument(
                        "either --year or --birth-date is required".into(),
                    ))
                }
            };
            let known_label = label.map(|l| l.parse::<TypeCode>()).transpose()?;

            let session = Session::new(
                Profile {
                    name,
                    birth_year,
                    birth_month,
                    adjustments: adjustments.to_vector(),
                    known_label,
                },
                YearRange::new(from, to)?,
            );
            session.save(path)?;
            print_success(&format!(
                "Session created at {} (seed {})",
                path.display(),
                session.seed()
            ));
            Ok(())
        }

        SessionCommands::Answer {
            year,
            topic,
            answer,
            note,
        } => {
            let mut session = Session::load(path)?;
            let topic: Topic = topic.parse()?;
            if !session.range.contains(year) {
                print_warning(&format!("{} is outside the session range", year));
            }
            let answer = Answer::parse_lenient(&answer);
            let replaced = session.record(year, topic, answer, note).is_some();
            session.save(path)?;
            let verb = if replaced { "Updated" } else { "Recorded" };
            print_success(&format!("{} {} {}: {}", verb, year, topic, answer));
            Ok(())
        }

        SessionCommands::Import { file } => {
            let mut session = Session::load(path)?;
            let contents = std::fs::read_to_string(&file)?;
            let raw: Vec<RawResponse> = serde_json::from_str(&contents)?;
            let offered = raw.len();
            let accepted = session.import_raw(raw);
            session.save(path)?;
            print_success(&format!("Imported {} of {} responses", accepted, offered));
            if accepted < offered {
                print_warning(&format!(
                    "{} responses had unknown topics and were skipped",
                    offered - accepted
                ));
            }
            Ok(())
        }

        SessionCommands::Show => {
            let session = Session::load(path)?;
            show(&session, engine, format)
        }

        SessionCommands::Assess => {
            let session = Session::load(path)?;
            let assessment = session.assess(engine);
            print_assessment(&assessment, format)
        }

        SessionCommands::Export { format: kind, out } => {
            let session = Session::load(path)?;
            let assessment = session.assess(engine);
            let rows = export_rows(&session, &assessment);
            let text = match kind {
                ExportFormat::Csv => to_csv(&rows),
                ExportFormat::Json => to_json(&rows)?,
            };
            match out {
                Some(file) => {
                    std::fs::write(&file, text)?;
                    print_success(&format!("Exported {} rows to {}", rows.len(), file.display()));
                }
                None => print!("{}", text),
            }
            Ok(())
        }

        SessionCommands::Reset => {
            let mut session = Session::load(path)?;
            session.reset();
            session.save(path)?;
            print_success("Responses cleared");
            Ok(())
        }
    }
}

fn profile_rows(session: &Session) -> Vec<FieldRow> {
    let p = &session.profile;
    vec![
        FieldRow::new("name", &p.name),
        FieldRow::new("birth year", p.birth_year),
        FieldRow::new(
            "birth month",
            p.birth_month.map(|m| m.to_string()).unwrap_or_else(|| "-".into()),
        ),
        FieldRow::new(
            "known label",
            p.known_label.map(|c| c.to_string()).unwrap_or_else(|| "-".into()),
        ),
        FieldRow::new(
            "range",
            format!("{}..={}", session.range.start(), session.range.end()),
        ),
        FieldRow::new("seed", session.seed()),
        FieldRow::new("responses", session.responses.len()),
    ]
}

fn show(session: &Session, engine: &Engine, format: OutputFormat) -> CliResult<()> {
    let pending = session.pending_hypotheses(engine);
    match format {
        OutputFormat::Table => {
            print_header("Session");
            output::print_output(profile_rows(session), format)?;
            print_header("Open questions");
            let rows: Vec<QuestionRow> = pending
                .iter()
                .flat_map(|h| {
                    h.topics.iter().map(move |t| QuestionRow {
                        year: h.year,
                        topic: t.to_string(),
                        question: t.prompt(h.year),
                    })
                })
                .collect();
            output::print_output(rows, format)
        }
        _ => {
            #[derive(Serialize)]
            struct ShowView<'a> {
                session: &'a Session,
                seed: String,
                pending: Vec<ohaeng_engine::YearHypotheses>,
            }
            output::print_single(
                &ShowView {
                    session,
                    seed: session.seed(),
                    pending,
                },
                format,
            )
        }
    }
}

fn print_assessment(assessment: &Assessment, format: OutputFormat) -> CliResult<()> {
    if format != OutputFormat::Table {
        return output::print_single(assessment, format);
    }

    print_header(&format!("Birth year {}", assessment.symbol.name()));
    output::print_output(element_rows(&assessment.distribution), format)?;
    print_info(&format!(
        "Dominant element: {} ({})",
        assessment.dominant,
        assessment.dominant.korean()
    ));

    print_header("Prior candidates");
    output::print_output(candidate_rows(&assessment.prior_candidates), format)?;

    let posterior = &assessment.posterior;
    print_header("Axis probabilities");
    let poles: Vec<PoleRow> = posterior
        .axis_probabilities
        .iter()
        .map(|(pole, p)| PoleRow {
            pole: pole.letter(),
            prior: percent(posterior.prior.get(pole)),
            posterior: percent(p),
        })
        .collect();
    output::print_output(poles, format)?;

    print_header("Posterior candidates");
    let rows: Vec<PosteriorRow> = posterior
        .top
        .iter()
        .enumerate()
        .map(|(i, c)| PosteriorRow {
            rank: i + 1,
            code: c.code.to_string(),
            probability: c.percent(),
        })
        .collect();
    output::print_output(rows, format)?;

    let report = &assessment.report;
    print_header("Report");
    let mut rows = vec![FieldRow::new(
        "distribution balance",
        format!("{}%", report.distribution_balance.balance),
    )];
    if let Some(season) = report.seasonal_element {
        rows.push(FieldRow::new("season element", format!("{} ({})", season, season.korean())));
    }
    if let Some(balance) = report.reference_balance {
        rows.push(FieldRow::new(
            "reference balance",
            format!(
                "{}% ({}; strongest {}, weakest {})",
                balance.balance,
                if balance.balanced { "balanced" } else { "unbalanced" },
                balance.strongest,
                balance.weakest
            ),
        ));
    }
    match report.consistency {
        Some(c) => rows.push(FieldRow::new(
            "event consistency",
            format!(
                "{}% (events lean {}, compared with {})",
                c.rate, c.event_element, c.reference_element
            ),
        )),
        None => rows.push(FieldRow::new("event consistency", "no confirmed events")),
    }
    output::print_output(rows, format)
}
