//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for statements that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Currency, Money};
use domain_theater::Statement;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Asserts that a Money value is exactly the given number of cents
pub fn assert_money_eq_cents(actual: &Money, expected_cents: i64) {
    assert_eq!(
        actual.currency(),
        Currency::USD,
        "Expected USD, got {}",
        actual.currency()
    );
    assert_eq!(
        actual.to_minor(),
        Ok(expected_cents),
        "Money amount mismatch: actual={}, expected={} cents",
        actual.amount(),
        expected_cents
    );
}

/// Asserts that a computed statement's totals equal the sum of its lines
///
/// The amount is checked twice: in cents, and by adding the per-line
/// [`Money`] values that the renderer formats.
pub fn assert_statement_totals_consistent(statement: &Statement) {
    let line_cents: i64 = statement.lines.iter().map(|line| line.amount()).sum();
    assert_eq!(
        statement.total_amount, line_cents,
        "Total amount {} does not match sum of lines {}",
        statement.total_amount, line_cents
    );

    let line_money = statement
        .lines
        .iter()
        .fold(Money::zero(Currency::USD), |acc, line| acc + line.amount_money());
    assert_eq!(
        statement.total_amount_money(),
        line_money,
        "Total money does not match sum of line money"
    );

    let line_credits: u64 = statement
        .lines
        .iter()
        .map(|line| u64::from(line.volume_credits()))
        .sum();
    assert_eq!(
        statement.total_volume_credits, line_credits,
        "Total credits {} do not match sum of lines {}",
        statement.total_volume_credits, line_credits
    );
}

/// Parses a `$1,234.56` amount into cents
///
/// # Panics
///
/// Panics if the text is not a dollar amount
pub fn parse_usd_cents(text: &str) -> i64 {
    let digits: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let dollars = Decimal::from_str(&digits)
        .unwrap_or_else(|_| panic!("Not a dollar amount: {:?}", text));
    (dollars * Decimal::from(100))
        .to_i64()
        .unwrap_or_else(|| panic!("Dollar amount out of range: {:?}", text))
}

/// Asserts that the "Amount owed" line of rendered text equals the sum of
/// the amounts shown on the performance lines
pub fn assert_rendered_total_matches_lines(text: &str) {
    let mut line_total = 0i64;
    let mut owed = None;

    for line in text.lines() {
        if let Some(amount) = line.strip_prefix("Amount owed is ") {
            owed = Some(parse_usd_cents(amount));
        } else if line.starts_with("  ") {
            let (_, rest) = line
                .rsplit_once(": ")
                .unwrap_or_else(|| panic!("Malformed performance line: {:?}", line));
            let (amount, _) = rest
                .split_once(" (")
                .unwrap_or_else(|| panic!("Malformed performance line: {:?}", line));
            line_total += parse_usd_cents(amount);
        }
    }

    let owed = owed.unwrap_or_else(|| panic!("No 'Amount owed' line in:\n{}", text));
    assert_eq!(
        owed, line_total,
        "Amount owed {} does not equal sum of performance lines {}",
        owed, line_total
    );
}
