//! Customer invoices
//!
//! An invoice lists the performances a customer is billed for. Performance
//! order is preserved and determines statement line order.

use serde::{Deserialize, Serialize};

use crate::performance::Performance;

/// A customer's invoice for one or more performances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer name printed in the statement header
    pub customer: String,
    /// Performances in billing order
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Creates a new invoice
    ///
    /// # Arguments
    ///
    /// * `customer` - The customer being billed
    /// * `performances` - Performances in the order they should appear on the statement
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    /// Returns the customer name
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Returns the performances in billing order
    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }

    /// Returns true if nothing is billed on this invoice
    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }
}
