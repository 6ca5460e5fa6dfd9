//! CLI configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional file
//! (format by extension), then `OHAENG_*` environment variables with `__`
//! between sections, e.g. `OHAENG_ENGINE__TEMPERATURE=1.5`.

use crate::error::CliResult;
use ohaeng_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "OHAENG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Inference tunables
    #[serde(default)]
    pub engine: EngineConfig,

    /// Session file settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file used when `--session` is not given
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from("ohaeng-session.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CliConfig {
    /// Load configuration. An explicitly named file must exist.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&CliConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let loaded: CliConfig = builder.build()?.try_deserialize()?;
        Ok(Self {
            engine: loaded.engine.sanitized(),
            ..loaded
        })
    }
}
