//! SIG cascade evaluation.

use tracing::debug;

use super::types::{SigComparison, SigStatement};
use crate::balance::{BalanceEntry, PrefixAggregator};

/// Engine computing intermediate management balances.
pub struct SigEngine;

impl SigEngine {
    /// Computes the SIG cascade of one period.
    ///
    /// Pure: the same entries always give the same statement, and an empty
    /// balance gives all zeros.
    #[must_use]
    pub fn compute(entries: &[BalanceEntry]) -> SigStatement {
        let agg = PrefixAggregator::new(entries);

        let goods_sales = agg.produits(&["701"]);
        let goods_purchases = agg.charges(&["601"]) + agg.signed(&["6031"]);
        let trading_margin = goods_sales - goods_purchases;

        let sold_production = agg.produits(&["702", "703", "704", "705", "706"]);
        let stocked_production = -agg.signed(&["73"]);
        let capitalized_production = agg.produits(&["72"]);
        let production = sold_production + stocked_production + capitalized_production;

        let raw_material_purchases = agg.charges(&["602"]) + agg.signed(&["6032"]);
        let other_purchases = agg.charges(&["604", "605", "608"]) + agg.signed(&["6033"]);
        let transport = agg.charges(&["61"]);
        let external_services = agg.charges(&["62", "63"]);
        let consumption = raw_material_purchases + other_purchases + transport + external_services;

        let value_added = trading_margin + production - consumption;

        let operating_subsidies = agg.produits(&["71"]);
        let taxes_and_duties = agg.charges(&["64"]);
        let staff_costs = agg.charges(&["66"]);
        let gross_operating_surplus =
            value_added + operating_subsidies - taxes_and_duties - staff_costs;

        let other_income = agg.produits(&["75"]);
        let other_expenses = agg.charges(&["65"]);
        let depreciation_charges = agg.charges(&["681", "691"]);
        let reversals = agg.produits(&["791", "798", "799"]);
        let operating_result = gross_operating_surplus + other_income - other_expenses
            - depreciation_charges
            + reversals;

        let financial_income = agg.produits(&["77"]);
        let financial_expenses = agg.charges(&["67", "697"]);
        let financial_result = financial_income - financial_expenses;

        let ordinary_result = operating_result + financial_result;

        let hao_income = agg.produits(&["82", "84", "86", "88"]);
        let hao_expenses = agg.charges(&["81", "83", "85"]);
        let hao_result = hao_income - hao_expenses;

        let income_tax = agg.charges(&["89"]);
        let net_result = ordinary_result + hao_result - income_tax;

        debug!(
            entries = entries.len(),
            aggregates = agg.cached(),
            %value_added,
            %net_result,
            "SIG cascade evaluated"
        );

        SigStatement {
            goods_sales,
            goods_purchases,
            trading_margin,
            sold_production,
            stocked_production,
            capitalized_production,
            production,
            raw_material_purchases,
            other_purchases,
            transport,
            external_services,
            consumption,
            value_added,
            operating_subsidies,
            taxes_and_duties,
            staff_costs,
            gross_operating_surplus,
            other_income,
            other_expenses,
            depreciation_charges,
            reversals,
            operating_result,
            financial_income,
            financial_expenses,
            financial_result,
            ordinary_result,
            hao_income,
            hao_expenses,
            hao_result,
            income_tax,
            net_result,
        }
    }

    /// Computes the current and prior cascades in parallel.
    #[must_use]
    pub fn compare(current: &[BalanceEntry], prior: &[BalanceEntry]) -> SigComparison {
        let (current_sig, prior_sig) =
            rayon::join(|| Self::compute(current), || Self::compute(prior));

        SigComparison {
            current: current_sig,
            prior: prior_sig,
            has_prior: !prior.is_empty(),
        }
    }
}
