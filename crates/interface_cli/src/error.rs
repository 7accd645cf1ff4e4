//! CLI error handling

use std::path::PathBuf;

use domain_theater::TheaterError;
use thiserror::Error;

/// Errors surfaced by the statement CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Theater(#[from] TheaterError),
}
