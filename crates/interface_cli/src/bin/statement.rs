//! Theater Statement - CLI Binary
//!
//! Prints a statement for every invoice in the configured invoices file.
//!
//! # Usage
//!
//! ```bash
//! # Run against the sample data in ./data
//! cargo run --bin theater-statement
//!
//! # Point at other files
//! STATEMENT_PLAYS_PATH=plays.json STATEMENT_INVOICES_PATH=invoices.json cargo run --bin theater-statement
//! ```
//!
//! # Environment Variables
//!
//! * `STATEMENT_PLAYS_PATH` - Play catalog JSON (default: data/plays.json)
//! * `STATEMENT_INVOICES_PATH` - Invoices JSON (default: data/invoices.json)
//! * `STATEMENT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `STATEMENT_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//!
//! Logs go to stderr so stdout carries only statement text.

use anyhow::Context;
use interface_cli::config::{LogFormat, StatementConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = StatementConfig::load().context("loading configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        plays = %config.plays_path.display(),
        invoices = %config.invoices_path.display(),
        "Rendering statements"
    );

    let statements = interface_cli::run(&config).map_err(|err| {
        tracing::error!(%err, "Statement generation failed");
        err
    })?;

    for statement in statements {
        print!("{statement}");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
