//! Trial balance entry types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest magnitude (10^18) an amount or aggregate carries; beyond it values
/// saturate, keeping every derived balance far from `Decimal::MAX`.
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

/// Clamps `value` to `[-AMOUNT_LIMIT, AMOUNT_LIMIT]`.
#[must_use]
pub fn bounded(value: Decimal) -> Decimal {
    value.clamp(-AMOUNT_LIMIT, AMOUNT_LIMIT)
}

/// One line of a trial balance.
///
/// Accepts the French column names used by OHADA exports
/// (`compte`, `libelle`, `solde_debit`, `solde_credit`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Hierarchical account code (e.g. "701", "4452").
    #[serde(alias = "compte")]
    pub account: String,
    /// Account label.
    #[serde(alias = "libelle", default)]
    pub label: String,
    /// Debit movements of the period.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit movements of the period.
    #[serde(default)]
    pub credit: Decimal,
    /// Closing debit balance.
    #[serde(alias = "solde_debit", default)]
    pub debit_balance: Decimal,
    /// Closing credit balance.
    #[serde(alias = "solde_credit", default)]
    pub credit_balance: Decimal,
}

impl BalanceEntry {
    /// Creates an entry from its closing balances, with movements equal to them.
    #[must_use]
    pub fn new(
        account: impl Into<String>,
        label: impl Into<String>,
        debit_balance: Decimal,
        credit_balance: Decimal,
    ) -> Self {
        Self {
            account: account.into(),
            label: label.into(),
            debit: debit_balance,
            credit: credit_balance,
            debit_balance,
            credit_balance,
        }
    }

    /// Overrides the period movements.
    #[must_use]
    pub fn with_movements(mut self, debit: Decimal, credit: Decimal) -> Self {
        self.debit = debit;
        self.credit = credit;
        self
    }

    /// Debit balance minus credit balance.
    #[must_use]
    pub fn signed_balance(&self) -> Decimal {
        bounded(self.debit_balance.saturating_sub(self.credit_balance))
    }

    /// Returns true if the account code starts with any of the prefixes.
    #[must_use]
    pub fn matches_any(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|p| self.account.starts_with(p))
    }
}

/// Field of an entry that an aggregate sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceField {
    /// Debit movements.
    Debit,
    /// Credit movements.
    Credit,
    /// Closing debit balance.
    DebitBalance,
    /// Closing credit balance.
    CreditBalance,
    /// Debit balance minus credit balance.
    Signed,
    /// Absolute value of the signed balance, line by line.
    Magnitude,
    /// Positive part of the signed balance, line by line.
    DebitExcess,
    /// Negative part of the signed balance as a magnitude, line by line.
    CreditExcess,
}

impl BalanceField {
    /// Reads this field from an entry.
    #[must_use]
    pub fn value(self, entry: &BalanceEntry) -> Decimal {
        match self {
            Self::Debit => bounded(entry.debit),
            Self::Credit => bounded(entry.credit),
            Self::DebitBalance => bounded(entry.debit_balance),
            Self::CreditBalance => bounded(entry.credit_balance),
            Self::Signed => entry.signed_balance(),
            Self::Magnitude => entry.signed_balance().abs(),
            Self::DebitExcess => entry.signed_balance().max(Decimal::ZERO),
            Self::CreditExcess => (-entry.signed_balance()).max(Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_french_keys() {
        let json = r#"{"compte":"701","libelle":"Ventes","debit":0,"credit":1000,"solde_debit":0,"solde_credit":1000}"#;
        let entry: BalanceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.account, "701");
        assert_eq!(entry.label, "Ventes");
        assert_eq!(entry.credit_balance, dec!(1000));
    }

    #[test]
    fn test_deserialize_english_keys_with_defaults() {
        let json = r#"{"account":"601","debit_balance":"250.5"}"#;
        let entry: BalanceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.account, "601");
        assert_eq!(entry.label, "");
        assert_eq!(entry.debit_balance, dec!(250.5));
        assert_eq!(entry.credit_balance, Decimal::ZERO);
    }

    #[test]
    fn test_field_values() {
        let entry = BalanceEntry::new("401", "Fournisseurs", dec!(100), dec!(350))
            .with_movements(dec!(900), dec!(1150));

        assert_eq!(BalanceField::Debit.value(&entry), dec!(900));
        assert_eq!(BalanceField::Credit.value(&entry), dec!(1150));
        assert_eq!(BalanceField::Signed.value(&entry), dec!(-250));
        assert_eq!(BalanceField::Magnitude.value(&entry), dec!(250));
        assert_eq!(BalanceField::DebitExcess.value(&entry), Decimal::ZERO);
        assert_eq!(BalanceField::CreditExcess.value(&entry), dec!(250));
    }

    #[test]
    fn test_matches_any_is_string_prefix() {
        let entry = BalanceEntry::new("6031", "", dec!(1), Decimal::ZERO);
        assert!(entry.matches_any(&["603"]));
        assert!(entry.matches_any(&["70", "60"]));
        assert!(!entry.matches_any(&["6032"]));
        assert!(!entry.matches_any(&[]));
    }
}
