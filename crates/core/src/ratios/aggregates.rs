//! Balance sheet and income statement aggregates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::{BalanceEntry, BalanceField, PrefixAggregator, sum_excluding};
use crate::sig::SigEngine;

/// Totals the ratio classifier and the diagnostic cards work from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinancialAggregates {
    /// Equity (10 to 14, credit-normal) including the period result.
    pub equity: Decimal,
    /// Share capital (10).
    pub share_capital: Decimal,
    /// Reserves and retained earnings (11, 12).
    pub reserves: Decimal,
    /// Net result of the period (SIG cascade).
    pub net_result: Decimal,
    /// Gross fixed assets (20 to 27).
    pub gross_fixed_assets: Decimal,
    /// Accumulated depreciation and impairment (28, 29).
    pub depreciation: Decimal,
    /// Net fixed assets.
    pub net_fixed_assets: Decimal,
    /// Net inventory (3).
    pub inventory: Decimal,
    /// Net trade receivables (41).
    pub receivables: Decimal,
    /// Trade payables (40 except 409 advances).
    pub suppliers: Decimal,
    /// VAT collected (4431).
    pub vat_collected: Decimal,
    /// Deductible VAT (4452).
    pub vat_deductible: Decimal,
    /// Treasury (5).
    pub treasury: Decimal,
    /// Current assets: debit balances of classes 3 and 4.
    pub current_assets: Decimal,
    /// Current liabilities: credit balances of classes 3 and 4.
    pub current_liabilities: Decimal,
    /// Financial debt (16 to 19).
    pub financial_debt: Decimal,
    /// Revenue (70 to 75).
    pub revenue: Decimal,
    /// Staff costs (66).
    pub staff_costs: Decimal,
    /// Financial expense (67).
    pub financial_expense: Decimal,
}

const EQUITY: &[&str] = &["10", "11", "12", "13", "14"];
const FIXED_ASSETS: &[&str] = &["20", "21", "22", "23", "24", "25", "26", "27"];
const FINANCIAL_DEBT: &[&str] = &["16", "17", "18", "19"];
const REVENUE: &[&str] = &["70", "71", "72", "73", "74", "75"];

impl FinancialAggregates {
    /// Builds the aggregates of one period.
    #[must_use]
    pub fn from_entries(entries: &[BalanceEntry]) -> Self {
        let agg = PrefixAggregator::new(entries);
        let net_result = SigEngine::compute(entries).net_result;

        let gross_fixed_assets = agg.charges(FIXED_ASSETS);
        let depreciation = agg.produits(&["28", "29"]);

        Self {
            equity: -agg.signed(EQUITY) + net_result,
            share_capital: -agg.signed(&["10"]),
            reserves: -agg.signed(&["11", "12"]),
            net_result,
            gross_fixed_assets,
            depreciation,
            net_fixed_assets: gross_fixed_assets - depreciation,
            inventory: agg.signed(&["3"]),
            receivables: agg.signed(&["41"]),
            suppliers: sum_excluding(entries, &["40"], &["409"], BalanceField::Magnitude),
            vat_collected: agg.sum(&["4431"], BalanceField::Credit),
            vat_deductible: agg.sum(&["4452"], BalanceField::Debit),
            treasury: agg.signed(&["5"]),
            current_assets: agg.sum(&["3", "4"], BalanceField::DebitExcess),
            current_liabilities: agg.sum(&["3", "4"], BalanceField::CreditExcess),
            financial_debt: agg.sum(FINANCIAL_DEBT, BalanceField::Magnitude),
            revenue: agg.produits(REVENUE),
            staff_costs: agg.charges(&["66"]),
            financial_expense: agg.charges(&["67"]),
        }
    }

    /// Working capital: equity minus net fixed assets.
    #[must_use]
    pub fn working_capital(&self) -> Decimal {
        self.equity - self.net_fixed_assets
    }

    /// Working-capital need: current assets minus current liabilities.
    #[must_use]
    pub fn working_capital_need(&self) -> Decimal {
        self.current_assets - self.current_liabilities
    }

    /// Net treasury position: working capital minus working-capital need.
    #[must_use]
    pub fn net_treasury_position(&self) -> Decimal {
        self.working_capital() - self.working_capital_need()
    }

    /// VAT collected minus deductible VAT; negative means a VAT credit.
    #[must_use]
    pub fn vat_balance(&self) -> Decimal {
        self.vat_collected - self.vat_deductible
    }
}
