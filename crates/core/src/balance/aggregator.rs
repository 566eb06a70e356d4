//! Prefix aggregation over trial balance entries.
//!
//! Matching is plain string-prefix matching on the account code. Overlapping
//! prefix sets are summed as given; callers pick disjoint sets.

use std::cell::RefCell;
use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::{BalanceEntry, BalanceField, bounded};

/// Adds values, saturating at the amount limit.
fn saturating_sum<'a>(
    entries: impl Iterator<Item = &'a BalanceEntry>,
    field: BalanceField,
) -> Decimal {
    entries.fold(Decimal::ZERO, |acc, e| bounded(acc + field.value(e)))
}

/// Sums `field` over every entry.
#[must_use]
pub fn total(entries: &[BalanceEntry], field: BalanceField) -> Decimal {
    saturating_sum(entries.iter(), field)
}

/// Sums `field` over every entry whose code starts with one of `prefixes`.
#[must_use]
pub fn sum(entries: &[BalanceEntry], prefixes: &[&str], field: BalanceField) -> Decimal {
    saturating_sum(entries.iter().filter(|e| e.matches_any(prefixes)), field)
}

/// Same as [`sum`], skipping entries that match one of `excluded`.
#[must_use]
pub fn sum_excluding(
    entries: &[BalanceEntry],
    prefixes: &[&str],
    excluded: &[&str],
    field: BalanceField,
) -> Decimal {
    saturating_sum(
        entries
            .iter()
            .filter(|e| e.matches_any(prefixes) && !e.matches_any(excluded)),
        field,
    )
}

/// Expense magnitude: debit balances of the matching accounts.
#[must_use]
pub fn charges(entries: &[BalanceEntry], prefixes: &[&str]) -> Decimal {
    sum(entries, prefixes, BalanceField::DebitBalance)
}

/// Revenue magnitude: credit balances of the matching accounts.
#[must_use]
pub fn produits(entries: &[BalanceEntry], prefixes: &[&str]) -> Decimal {
    sum(entries, prefixes, BalanceField::CreditBalance)
}

/// Debit balance minus credit balance of the matching accounts.
#[must_use]
pub fn signed_balance(entries: &[BalanceEntry], prefixes: &[&str]) -> Decimal {
    sum(entries, prefixes, BalanceField::Signed)
}

type MemoKey = (String, BalanceField);

/// Memoizing view over one period's entries.
///
/// Meant to live for a single cascade evaluation. Results are identical to
/// the free functions in this module.
pub struct PrefixAggregator<'a> {
    entries: &'a [BalanceEntry],
    memo: RefCell<HashMap<MemoKey, Decimal>>,
}

impl<'a> PrefixAggregator<'a> {
    /// Creates an aggregator over `entries`.
    #[must_use]
    pub fn new(entries: &'a [BalanceEntry]) -> Self {
        Self {
            entries,
            memo: RefCell::new(HashMap::new()),
        }
    }

    /// The underlying entries.
    #[must_use]
    pub fn entries(&self) -> &'a [BalanceEntry] {
        self.entries
    }

    /// Memoized [`sum`].
    #[must_use]
    pub fn sum(&self, prefixes: &[&str], field: BalanceField) -> Decimal {
        let key = (prefixes.join("|"), field);
        if let Some(value) = self.memo.borrow().get(&key) {
            return *value;
        }
        let value = sum(self.entries, prefixes, field);
        self.memo.borrow_mut().insert(key, value);
        value
    }

    /// Memoized [`charges`].
    #[must_use]
    pub fn charges(&self, prefixes: &[&str]) -> Decimal {
        self.sum(prefixes, BalanceField::DebitBalance)
    }

    /// Memoized [`produits`].
    #[must_use]
    pub fn produits(&self, prefixes: &[&str]) -> Decimal {
        self.sum(prefixes, BalanceField::CreditBalance)
    }

    /// Memoized [`signed_balance`].
    #[must_use]
    pub fn signed(&self, prefixes: &[&str]) -> Decimal {
        self.sum(prefixes, BalanceField::Signed)
    }

    /// Number of distinct aggregates computed so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.memo.borrow().len()
    }
}
