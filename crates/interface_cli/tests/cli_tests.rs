//! Integration tests for the statement CLI
//!
//! These tests write catalog and invoice files to a scratch directory and
//! drive `interface_cli::run` end to end.

use std::fs;
use std::path::PathBuf;

use domain_theater::TheaterError;
use interface_cli::config::StatementConfig;
use interface_cli::error::CliError;
use interface_cli::loader::{load_catalog, load_invoices};
use test_utils::{assert_rendered_total_matches_lines, CatalogFixtures, InvoiceFixtures};

/// Creates a scratch directory unique to one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "theater-statement-{}-{}",
        name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_inputs(name: &str, plays: &str, invoices: &str) -> StatementConfig {
    let dir = scratch_dir(name);
    let plays_path = dir.join("plays.json");
    let invoices_path = dir.join("invoices.json");
    fs::write(&plays_path, plays).unwrap();
    fs::write(&invoices_path, invoices).unwrap();

    StatementConfig {
        plays_path,
        invoices_path,
        ..StatementConfig::default()
    }
}

mod run_tests {
    use super::*;

    #[test]
    fn test_renders_classic_invoice() {
        let config = write_inputs(
            "classic",
            CatalogFixtures::standard_json(),
            InvoiceFixtures::big_co_json(),
        );

        let statements = interface_cli::run(&config).unwrap();

        assert_eq!(statements, vec![InvoiceFixtures::big_co_statement().to_string()]);
        assert_rendered_total_matches_lines(&statements[0]);
    }

    #[test]
    fn test_renders_every_invoice_in_order() {
        let invoices = r#"[
            {"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 30}]},
            {"customer": "SmallCo", "performances": [{"playID": "as-like", "audience": 20}]}
        ]"#;
        let config = write_inputs("multiple", CatalogFixtures::standard_json(), invoices);

        let statements = interface_cli::run(&config).unwrap();

        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("Statement for BigCo\n"));
        assert!(statements[1].starts_with("Statement for SmallCo\n"));
        assert!(statements[1].contains("  As You Like It: $360.00 (20 seats)\n"));
    }

    #[test]
    fn test_unknown_genre_fails_whole_run() {
        let plays = r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "henry-v": {"name": "Henry V", "type": "history"}
        }"#;
        let config = write_inputs("history", plays, InvoiceFixtures::big_co_json());

        let err = interface_cli::run(&config).unwrap_err();

        assert!(matches!(
            err,
            CliError::Theater(TheaterError::UnknownGenre { ref genre }) if genre == "history"
        ));
        assert_eq!(err.to_string(), "unknown type: history");
    }

    #[test]
    fn test_unknown_play_fails_whole_run() {
        let invoices = r#"[
            {"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 30}]},
            {"customer": "SmallCo", "performances": [{"playID": "macbeth", "audience": 20}]}
        ]"#;
        let config = write_inputs("missing-play", CatalogFixtures::standard_json(), invoices);

        let err = interface_cli::run(&config).unwrap_err();

        assert!(matches!(
            err,
            CliError::Theater(TheaterError::PlayNotFound { ref play_id }) if play_id == "macbeth"
        ));
    }

    #[test]
    fn test_malformed_invoices_reports_json_error() {
        let config = write_inputs("malformed", CatalogFixtures::standard_json(), "[{");

        let err = interface_cli::run(&config).unwrap_err();

        assert!(matches!(err, CliError::Json { .. }));
    }
}

mod loader_tests {
    use super::*;

    #[test]
    fn test_load_catalog() {
        let config = write_inputs("load-catalog", CatalogFixtures::standard_json(), "[]");

        let catalog = load_catalog(&config.plays_path).unwrap();

        assert_eq!(catalog, CatalogFixtures::standard());
    }

    #[test]
    fn test_load_invoices() {
        let config = write_inputs(
            "load-invoices",
            CatalogFixtures::standard_json(),
            InvoiceFixtures::big_co_json(),
        );

        let invoices = load_invoices(&config.invoices_path).unwrap();

        assert_eq!(invoices, vec![InvoiceFixtures::big_co()]);
    }

    #[test]
    fn test_missing_invoices_file() {
        let config = StatementConfig {
            invoices_path: scratch_dir("absent").join("does-not-exist.json"),
            ..StatementConfig::default()
        };

        let err = load_invoices(&config.invoices_path).unwrap_err();

        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
