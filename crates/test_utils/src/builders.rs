//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::PlayId;
use domain_theater::{Invoice, Performance, PlayCatalog, PlayRecord, TheaterError};

use crate::fixtures::StringFixtures;

/// Builder for constructing test invoices
pub struct InvoiceBuilder {
    customer: String,
    performances: Vec<Performance>,
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceBuilder {
    /// Creates a new builder with a random customer and no performances
    pub fn new() -> Self {
        Self {
            customer: StringFixtures::customer_name(),
            performances: Vec::new(),
        }
    }

    /// Sets the customer name
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    /// Appends a performance
    pub fn with_performance(mut self, play_id: impl Into<PlayId>, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        Invoice::new(self.customer, self.performances)
    }
}

/// Builder for play catalogs from raw records
///
/// Validation happens in [`PlayCatalogBuilder::build`], exactly as it would
/// for externally loaded data.
#[derive(Default)]
pub struct PlayCatalogBuilder {
    records: Vec<(String, PlayRecord)>,
}

impl PlayCatalogBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tragedy
    pub fn with_tragedy(self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.with_record(id, name, "tragedy")
    }

    /// Adds a comedy
    pub fn with_comedy(self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.with_record(id, name, "comedy")
    }

    /// Adds a record with an arbitrary genre string
    pub fn with_record(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        self.records.push((id.into(), PlayRecord::new(name, kind)));
        self
    }

    /// Validates the records into a catalog
    pub fn build(self) -> Result<PlayCatalog, TheaterError> {
        PlayCatalog::from_records(self.records)
    }
}
