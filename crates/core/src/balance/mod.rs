//! Trial balance input.
//!
//! This module provides:
//! - Balance entries as exported by OHADA accounting packages
//! - Prefix aggregation (charges, produits, signed balance)
//! - A memoizing aggregator for a single cascade evaluation
//! - Trial balance column totals

pub mod aggregator;
pub mod summary;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{
    PrefixAggregator, charges, produits, signed_balance, sum, sum_excluding, total,
};
pub use summary::BalanceSummary;
pub use types::{AMOUNT_LIMIT, BalanceEntry, BalanceField, bounded};
