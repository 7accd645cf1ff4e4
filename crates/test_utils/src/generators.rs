//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_theater::{Genre, Invoice, Performance};
use proptest::prelude::*;

use crate::fixtures::CatalogFixtures;

/// Strategy for generating genres
pub fn genre_strategy() -> impl Strategy<Value = Genre> {
    prop_oneof![Just(Genre::Tragedy), Just(Genre::Comedy)]
}

/// Strategy for realistic audience sizes
pub fn audience_strategy() -> impl Strategy<Value = u32> {
    0u32..2_000u32
}

/// Strategy for customer names
pub fn customer_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}( Co| Ltd)?"
}

/// Strategy for a performance of one of the standard catalog plays
pub fn standard_performance_strategy() -> impl Strategy<Value = Performance> {
    (
        prop::sample::select(CatalogFixtures::standard_ids()),
        audience_strategy(),
    )
        .prop_map(|(play_id, audience)| Performance::new(play_id, audience))
}

/// Strategy for invoices whose plays all resolve in the standard catalog
pub fn standard_invoice_strategy() -> impl Strategy<Value = Invoice> {
    (
        customer_strategy(),
        prop::collection::vec(standard_performance_strategy(), 0..12),
    )
        .prop_map(|(customer, performances)| Invoice::new(customer, performances))
}
