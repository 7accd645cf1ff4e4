//! Pre-built Test Fixtures
//!
//! Provides ready-to-use catalogs and invoices. Amounts quoted in the doc
//! comments are what the pricing rules produce for each fixture.

use core_kernel::{Currency, Money};
use domain_theater::{Invoice, Performance, Play, PlayCatalog, PlayRecord};
use fake::faker::company::en::CompanyName;
use fake::Fake;

/// Fixture for play catalogs
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Hamlet and Othello (tragedies), As You Like It (comedy)
    pub fn standard() -> PlayCatalog {
        PlayCatalog::from_records(Self::standard_records())
            .expect("standard catalog records are valid")
    }

    /// Raw records behind [`CatalogFixtures::standard`]
    pub fn standard_records() -> Vec<(&'static str, PlayRecord)> {
        vec![
            ("hamlet", PlayRecord::new("Hamlet", "tragedy")),
            ("as-like", PlayRecord::new("As You Like It", "comedy")),
            ("othello", PlayRecord::new("Othello", "tragedy")),
        ]
    }

    /// Standard records plus a history play, which no pricing rule covers
    pub fn records_with_history() -> Vec<(&'static str, PlayRecord)> {
        let mut records = Self::standard_records();
        records.push(("henry-v", PlayRecord::new("Henry V", "history")));
        records
    }

    /// The standard catalog as JSON, keyed by play id
    pub fn standard_json() -> &'static str {
        r#"{
  "hamlet": {"name": "Hamlet", "type": "tragedy"},
  "as-like": {"name": "As You Like It", "type": "comedy"},
  "othello": {"name": "Othello", "type": "tragedy"}
}"#
    }

    /// Ids present in the standard catalog
    pub fn standard_ids() -> Vec<&'static str> {
        vec!["hamlet", "as-like", "othello"]
    }

    /// A catalog with only Hamlet
    pub fn hamlet_only() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", Play::tragedy("Hamlet"))
            .expect("single play catalog is valid")
    }
}

/// Fixture for invoices
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// BigCo: hamlet 55, as-like 35, othello 40
    ///
    /// $650.00 + $580.00 + $500.00 = $1,730.00, 25 + 12 + 10 = 47 credits
    pub fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        )
    }

    /// BigCo: hamlet 30, as-like 20
    ///
    /// $400.00 + $360.00 = $760.00, 0 + 4 = 4 credits
    pub fn big_co_at_thresholds() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 30), Performance::new("as-like", 20)],
        )
    }

    /// An invoice referencing a play that is not in any fixture catalog
    pub fn with_unknown_play() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 30), Performance::new("macbeth", 25)],
        )
    }

    /// The classic BigCo invoice as a JSON array
    pub fn big_co_json() -> &'static str {
        r#"[
  {
    "customer": "BigCo",
    "performances": [
      {"playID": "hamlet", "audience": 55},
      {"playID": "as-like", "audience": 35},
      {"playID": "othello", "audience": 40}
    ]
  }
]"#
    }

    /// The statement text for [`InvoiceFixtures::big_co`]
    pub fn big_co_statement() -> &'static str {
        "Statement for BigCo\n  Hamlet: $650.00 (55 seats)\n  As You Like It: $580.00 (35 seats)\n  Othello: $500.00 (40 seats)\nAmount owed is $1,730.00\nYou earned 47 credits\n"
    }
}

/// Fixture for money values
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a USD amount from cents
    pub fn usd_cents(cents: i64) -> Money {
        Money::from_minor(cents, Currency::USD)
    }
}

/// Fixture for string data
pub struct StringFixtures;

impl StringFixtures {
    /// A random company name to use as a customer
    pub fn customer_name() -> String {
        CompanyName().fake()
    }
}
