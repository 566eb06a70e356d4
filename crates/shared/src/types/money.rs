//! Money amounts with their display label.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::Serialize;

use super::number::format_amount;

/// Label printed next to amounts on statutory statements.
pub const DEFAULT_CURRENCY_LABEL: &str = "FCFA";

/// Represents a monetary amount with the label it is displayed with.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Money<'a> {
    /// The amount in currency units (FCFA has no minor unit in practice).
    pub amount: Decimal,
    /// Currency label, e.g. "FCFA".
    pub label: &'a str,
}

impl<'a> Money<'a> {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, label: &'a str) -> Self {
        Self { amount, label }
    }
}

impl std::fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_amount(self.amount), self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(
            Money::new(dec!(1250000), DEFAULT_CURRENCY_LABEL).to_string(),
            "1 250 000 FCFA"
        );
    }

    #[test]
    fn test_money_display_uses_label() {
        assert_eq!(Money::new(dec!(-1500.5), "XOF").to_string(), "-1 501 XOF");
        assert_eq!(Money::new(Decimal::ZERO, "F").to_string(), "0 F");
    }
}
