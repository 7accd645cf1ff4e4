//! Theater Statement CLI
//!
//! Loads a play catalog and a list of invoices from JSON files, renders a
//! statement for every invoice, and hands the text back to the binary for
//! printing.
//!
//! # Input Files
//!
//! `plays.json` maps play ids to raw play records:
//!
//! ```json
//! { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
//! ```
//!
//! `invoices.json` is an array of invoices:
//!
//! ```json
//! [ { "customer": "BigCo", "performances": [ { "playID": "hamlet", "audience": 55 } ] } ]
//! ```

pub mod config;
pub mod error;
pub mod loader;

use domain_theater::StatementRenderer;
use tracing::info;

use crate::config::StatementConfig;
use crate::error::CliError;

/// Renders a statement for every invoice in the configured files
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, if the catalog
/// contains an unknown genre, or if any invoice references a missing play.
/// Nothing is returned for earlier invoices when a later one fails.
pub fn run(config: &StatementConfig) -> Result<Vec<String>, CliError> {
    let catalog = loader::load_catalog(&config.plays_path)?;
    let invoices = loader::load_invoices(&config.invoices_path)?;

    info!(
        plays = catalog.len(),
        invoices = invoices.len(),
        "Loaded catalog and invoices"
    );

    let renderer = StatementRenderer::default();
    let statements = invoices
        .iter()
        .map(|invoice| renderer.render(invoice, &catalog))
        .collect::<Result<Vec<_>, _>>()?;

    info!(statements = statements.len(), "Statements rendered");
    Ok(statements)
}
