//! Customer statements
//!
//! A statement is computed in two steps. [`Statement::compute`] resolves
//! every performance against the catalog and prices it, failing before
//! anything is rendered. [`StatementRenderer`] then turns the computed
//! statement into text using an injected money format.

use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use core_kernel::{Currency, LocaleFormat, Money, MoneyFormat};

use crate::catalog::PlayCatalog;
use crate::error::TheaterError;
use crate::invoice::Invoice;
use crate::pricing::{self, PerformanceCharge, CURRENCY_CONVERSION_FACTOR};

/// Converts an amount in cents to US dollars
pub fn usd(cents: i64) -> Money {
    Money::new(
        Decimal::from(cents) / Decimal::from(CURRENCY_CONVERSION_FACTOR),
        Currency::USD,
    )
}

/// One priced performance on a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    /// Name of the performed play
    pub play_name: String,
    /// Number of attendees
    pub audience: u32,
    /// Computed charge and credits
    pub charge: PerformanceCharge,
}

impl StatementLine {
    /// Returns the line amount in cents
    pub fn amount(&self) -> i64 {
        self.charge.amount
    }

    /// Returns the line amount in dollars
    pub fn amount_money(&self) -> Money {
        usd(self.charge.amount)
    }

    /// Returns the credits earned by this line
    pub fn volume_credits(&self) -> u32 {
        self.charge.volume_credits
    }
}

/// A fully priced invoice, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Customer the statement is addressed to
    pub customer: String,
    /// Priced performances, in invoice order
    pub lines: Vec<StatementLine>,
    /// Sum of all line amounts, in cents
    pub total_amount: i64,
    /// Sum of all line credits
    pub total_volume_credits: u64,
}

impl Statement {
    /// Prices every performance on the invoice and accumulates the totals
    ///
    /// # Arguments
    ///
    /// * `invoice` - The invoice to price
    /// * `catalog` - Catalog every performance's play id must resolve in
    ///
    /// # Errors
    ///
    /// Returns `PlayNotFound` for the first performance whose play is missing
    /// from the catalog. No partial statement is produced.
    #[instrument(
        skip_all,
        fields(customer = %invoice.customer(), performances = invoice.performances().len())
    )]
    pub fn compute(invoice: &Invoice, catalog: &PlayCatalog) -> Result<Self, TheaterError> {
        let lines = invoice
            .performances()
            .iter()
            .map(|performance| -> Result<StatementLine, TheaterError> {
                let play = catalog.resolve(performance).map_err(|err| {
                    warn!(%err, "Cannot resolve play for performance");
                    err
                })?;
                let charge = pricing::price(play, performance);

                debug!(
                    play_id = %performance.play_id(),
                    genre = %play.genre(),
                    audience = performance.audience(),
                    amount = charge.amount,
                    volume_credits = charge.volume_credits,
                    "Priced performance"
                );

                Ok(StatementLine {
                    play_name: play.name().to_string(),
                    audience: performance.audience(),
                    charge,
                })
            })
            .collect::<Result<Vec<_>, TheaterError>>()?;

        let total_amount: i64 = lines.iter().map(StatementLine::amount).sum();
        let total_volume_credits: u64 = lines
            .iter()
            .map(|line| u64::from(line.volume_credits()))
            .sum();

        debug!(total_amount, total_volume_credits, "Statement computed");

        Ok(Self {
            customer: invoice.customer().to_string(),
            lines,
            total_amount,
            total_volume_credits,
        })
    }

    /// Returns the total amount owed in dollars
    pub fn total_amount_money(&self) -> Money {
        usd(self.total_amount)
    }
}

/// Renders statements as plain text
///
/// Output has one `\n`-terminated line per entry:
///
/// ```text
/// Statement for BigCo
///   Hamlet: $650.00 (55 seats)
/// Amount owed is $650.00
/// You earned 25 credits
/// ```
#[derive(Debug, Clone)]
pub struct StatementRenderer<F = LocaleFormat> {
    format: F,
}

impl<F: MoneyFormat> StatementRenderer<F> {
    /// Creates a renderer that formats amounts with `format`
    pub fn new(format: F) -> Self {
        Self { format }
    }

    /// Returns the money format in use
    pub fn format(&self) -> &F {
        &self.format
    }

    /// Computes and renders the statement for an invoice
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Statement::compute`]; nothing is rendered
    /// in that case.
    pub fn render(&self, invoice: &Invoice, catalog: &PlayCatalog) -> Result<String, TheaterError> {
        let statement = Statement::compute(invoice, catalog)?;
        Ok(self.render_statement(&statement))
    }

    /// Renders an already computed statement
    pub fn render_statement(&self, statement: &Statement) -> String {
        let mut result = format!("Statement for {}\n", statement.customer);

        for line in &statement.lines {
            result.push_str(&format!(
                "  {}: {} ({} seats)\n",
                line.play_name,
                self.format.format(&line.amount_money()),
                line.audience
            ));
        }

        result.push_str(&format!(
            "Amount owed is {}\n",
            self.format.format(&statement.total_amount_money())
        ));
        result.push_str(&format!(
            "You earned {} credits\n",
            statement.total_volume_credits
        ));

        result
    }
}

impl Default for StatementRenderer<LocaleFormat> {
    fn default() -> Self {
        Self::new(LocaleFormat::en_us())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::Performance;
    use crate::play::Play;
    use rust_decimal_macros::dec;

    fn catalog() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", Play::tragedy("Hamlet"))
            .and_then(|c| c.with_play("as-like", Play::comedy("As You Like It")))
            .unwrap()
    }

    /// Formats amounts as bare cents so tests do not depend on locale output
    struct CentsFormat;

    impl MoneyFormat for CentsFormat {
        fn format(&self, money: &Money) -> String {
            format!("{}c", money.to_minor().unwrap())
        }
    }

    #[test]
    fn test_usd_conversion() {
        assert_eq!(usd(40_000).amount(), dec!(400));
        assert_eq!(usd(40_050).amount(), dec!(400.50));
        assert_eq!(usd(40_000).currency(), Currency::USD);
    }

    #[test]
    fn test_compute_totals() {
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 30), Performance::new("as-like", 20)],
        );

        let statement = Statement::compute(&invoice, &catalog()).unwrap();

        assert_eq!(statement.lines.len(), 2);
        assert_eq!(statement.lines[0].amount(), 40_000);
        assert_eq!(statement.lines[1].amount(), 36_000);
        assert_eq!(statement.total_amount, 76_000);
        assert_eq!(statement.total_volume_credits, 4);
    }

    #[test]
    fn test_render_with_injected_format() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 31)]);
        let text = StatementRenderer::new(CentsFormat).render(&invoice, &catalog()).unwrap();

        assert_eq!(
            text,
            "Statement for BigCo\n  Hamlet: 41000c (31 seats)\nAmount owed is 41000c\nYou earned 1 credits\n"
        );
    }

    #[test]
    fn test_missing_play_aborts() {
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 30), Performance::new("macbeth", 10)],
        );

        let result = StatementRenderer::default().render(&invoice, &catalog());
        assert_eq!(result, Err(TheaterError::play_not_found("macbeth")));
    }

    #[test]
    fn test_empty_invoice() {
        let invoice = Invoice::new("Nobody", vec![]);
        let text = StatementRenderer::default().render(&invoice, &catalog()).unwrap();
        assert_eq!(text, "Statement for Nobody\nAmount owed is $0.00\nYou earned 0 credits\n");
    }
}
