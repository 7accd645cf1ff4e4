//! Locale-aware money formatting
//!
//! Rendering code depends on the [`MoneyFormat`] capability rather than on a
//! concrete locale, so statements can be produced with any formatter and
//! tested without locale data.

use rust_decimal::RoundingStrategy;

use crate::money::Money;

/// Capability to render a monetary value as display text
pub trait MoneyFormat {
    /// Formats the money value, including its currency symbol
    fn format(&self, money: &Money) -> String;
}

impl<F: MoneyFormat + ?Sized> MoneyFormat for &F {
    fn format(&self, money: &Money) -> String {
        (**self).format(money)
    }
}

/// Symbol-prefixed formatting with digit grouping
///
/// The fraction is always padded to the currency's decimal places, and
/// midpoints round away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    group_separator: char,
    decimal_separator: char,
}

impl LocaleFormat {
    /// Creates a format with custom separators
    pub const fn new(group_separator: char, decimal_separator: char) -> Self {
        Self {
            group_separator,
            decimal_separator,
        }
    }

    /// US English conventions: `$1,234.56`
    pub const fn en_us() -> Self {
        Self::new(',', '.')
    }

    /// Returns the thousands separator
    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Returns the decimal separator
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

impl MoneyFormat for LocaleFormat {
    fn format(&self, money: &Money) -> String {
        let currency = money.currency();
        let dp = currency.decimal_places();
        let rounded = money
            .amount()
            .abs()
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.dp$}", rounded, dp = dp as usize);
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + 8);
        if money.is_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(currency.symbol());
        out.push_str(&group_digits(whole, self.group_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Inserts `separator` between every group of three digits, from the right
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
