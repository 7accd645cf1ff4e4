//! CLI configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Statement CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// Path to the play catalog JSON
    pub plays_path: PathBuf,
    /// Path to the invoices JSON
    pub invoices_path: PathBuf,
    /// Log level
    pub log_level: String,
    /// Log format
    pub log_format: LogFormat,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            plays_path: PathBuf::from("data/plays.json"),
            invoices_path: PathBuf::from("data/invoices.json"),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl StatementConfig {
    /// Loads configuration from an optional `theater.toml` and the environment
    ///
    /// Environment variables use the `STATEMENT_` prefix and override the
    /// file, e.g. `STATEMENT_PLAYS_PATH=/srv/plays.json`.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("theater").required(false))
            .add_source(config::Environment::with_prefix("STATEMENT"))
            .build()?
            .try_deserialize()
    }
}
