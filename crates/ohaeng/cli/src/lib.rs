//! Ohaeng CLI - birth-year element profiling and type-label inference
//!
//! This CLI provides a terminal interface to:
//! - Map a year onto the stem/branch cycles
//! - Project element weights and list prior label candidates
//! - Draw the deterministic yearly hypotheses
//! - Keep a file-backed session of answers, assess it, and export it

use clap::{Parser, Subcommand};
use ohaeng_engine::Engine;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::{hypotheses, profile, session, year, AdjustmentArgs};
pub use crate::config::CliConfig;
pub use crate::error::{CliError, CliResult};
pub use crate::output::print_error;

/// Ohaeng CLI application
#[derive(Parser, Debug)]
#[command(name = "ohaeng")]
#[command(about = "Ohaeng - five-element profiles and Bayesian type-label inference", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML, YAML, or JSON)
    #[arg(short, long, env = "OHAENG_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the stem/branch symbol of a year
    Year {
        year: i32,
    },

    /// Element distribution and prior candidates for a birth year
    Profile {
        /// Birth year
        #[arg(long)]
        year: i32,

        #[command(flatten)]
        adjustments: AdjustmentArgs,
    },

    /// Deterministic topic draws for a range of years
    Hypotheses {
        /// Seed, usually "{birth_year}-{dominant element}"
        #[arg(long)]
        seed: String,

        #[arg(long)]
        from: i32,

        #[arg(long)]
        to: i32,

        /// Topics per year (defaults to the configured value)
        #[arg(short)]
        k: Option<usize>,
    },

    /// Manage a file-backed assessment session
    Session {
        /// Session file (defaults to the configured path)
        #[arg(long)]
        session: Option<PathBuf>,

        #[command(subcommand)]
        command: session::SessionCommands,
    },

    /// Show the effective configuration
    Config,
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    // A subscriber may already be installed when running inside tests.
    let _ = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let config = CliConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_tracing(level, cli.log_json || config.logging.json);

    let engine = Engine::new(config.engine.clone());
    let format = cli.output;

    match cli.command {
        Commands::Year { year: y } => year::execute(y, &engine, format),
        Commands::Profile {
            year: y,
            adjustments,
        } => profile::execute(y, &adjustments, &engine, format),
        Commands::Hypotheses { seed, from, to, k } => {
            let k = k.unwrap_or(engine.config().hypotheses_per_year);
            hypotheses::execute(&seed, from, to, k, format)
        }
        Commands::Session {
            session: path,
            command,
        } => {
            let path = path.unwrap_or_else(|| config.session.path.clone());
            session::execute(command, &path, &engine, format)
        }
        Commands::Config => output::print_single(&config, format),
    }
}
