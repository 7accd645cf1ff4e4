//! JSON loading of play catalogs and invoices
//!
//! Catalog records are parsed as raw strings first and validated through
//! [`PlayCatalog::from_records`], so an unknown genre surfaces as a
//! [`TheaterError::UnknownGenre`](domain_theater::TheaterError) rather than
//! as a generic JSON error.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

use domain_theater::{Invoice, PlayCatalog, PlayRecord};

use crate::error::CliError;

/// Loads and validates a play catalog
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> Result<PlayCatalog, CliError> {
    let records: BTreeMap<String, PlayRecord> = read_json(path)?;
    debug!(records = records.len(), "Parsed play records");
    Ok(PlayCatalog::from_records(records)?)
}

/// Loads a list of invoices
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>, CliError> {
    let invoices: Vec<Invoice> = read_json(path)?;
    debug!(invoices = invoices.len(), "Parsed invoices");
    Ok(invoices)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text, path)
}

fn parse_json<T: DeserializeOwned>(text: &str, path: &Path) -> Result<T, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_theater::TheaterError;

    #[test]
    fn test_parse_json_reports_path() {
        let err = parse_json::<Vec<Invoice>>("not json", Path::new("invoices.json")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON in invoices.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog(Path::new("/nonexistent/plays.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_unknown_genre_keeps_domain_error() {
        let records: BTreeMap<String, PlayRecord> =
            parse_json(r#"{"henry-v": {"name": "Henry V", "type": "history"}}"#, Path::new("plays.json"))
                .unwrap();
        let err: CliError = PlayCatalog::from_records(records).unwrap_err().into();
        assert!(matches!(
            err,
            CliError::Theater(TheaterError::UnknownGenre { ref genre }) if genre == "history"
        ));
    }
}
