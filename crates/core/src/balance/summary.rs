//! Trial balance totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregator::total;
use super::types::{BalanceEntry, BalanceField};

/// Column totals of a trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Total debit movements.
    pub total_debit: Decimal,
    /// Total credit movements.
    pub total_credit: Decimal,
    /// Total debit balances.
    pub total_debit_balance: Decimal,
    /// Total credit balances.
    pub total_credit_balance: Decimal,
    /// Number of lines.
    pub entry_count: usize,
    /// Whether both the movement and the balance columns are equal.
    pub is_balanced: bool,
}

impl BalanceSummary {
    /// Totals every column of `entries`.
    #[must_use]
    pub fn from_entries(entries: &[BalanceEntry]) -> Self {
        let total_debit = total(entries, BalanceField::Debit);
        let total_credit = total(entries, BalanceField::Credit);
        let total_debit_balance = total(entries, BalanceField::DebitBalance);
        let total_credit_balance = total(entries, BalanceField::CreditBalance);

        Self {
            total_debit,
            total_credit,
            total_debit_balance,
            total_credit_balance,
            entry_count: entries.len(),
            is_balanced: total_debit == total_credit
                && total_debit_balance == total_credit_balance,
        }
    }
}
