//! Intermediate management balance types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Intermediate management balances (SIG) of one period.
///
/// Charge components are magnitudes; totals carry their natural sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SigStatement {
    /// Sales of goods (701).
    pub goods_sales: Decimal,
    /// Purchases of goods (601) plus stock variation (6031).
    pub goods_purchases: Decimal,
    /// Trading margin.
    pub trading_margin: Decimal,
    /// Sold production (702 to 706).
    pub sold_production: Decimal,
    /// Stocked production (negated 73 signed balance).
    pub stocked_production: Decimal,
    /// Capitalized production (72).
    pub capitalized_production: Decimal,
    /// Production of the period.
    pub production: Decimal,
    /// Raw-material purchases (602) plus stock variation (6032).
    pub raw_material_purchases: Decimal,
    /// Other purchases (604, 605, 608) plus stock variation (6033).
    pub other_purchases: Decimal,
    /// Transport (61).
    pub transport: Decimal,
    /// External services (62, 63).
    pub external_services: Decimal,
    /// Consumption of the period.
    pub consumption: Decimal,
    /// Value added.
    pub value_added: Decimal,
    /// Operating subsidies (71).
    pub operating_subsidies: Decimal,
    /// Taxes and duties (64).
    pub taxes_and_duties: Decimal,
    /// Staff costs (66).
    pub staff_costs: Decimal,
    /// Gross operating surplus (EBE).
    pub gross_operating_surplus: Decimal,
    /// Other operating income (75).
    pub other_income: Decimal,
    /// Other operating expenses (65).
    pub other_expenses: Decimal,
    /// Depreciation and provision charges (681, 691).
    pub depreciation_charges: Decimal,
    /// Depreciation and provision reversals (791, 798, 799).
    pub reversals: Decimal,
    /// Operating result.
    pub operating_result: Decimal,
    /// Financial income (77).
    pub financial_income: Decimal,
    /// Financial expenses (67, 697).
    pub financial_expenses: Decimal,
    /// Financial result.
    pub financial_result: Decimal,
    /// Result of ordinary activities.
    pub ordinary_result: Decimal,
    /// Extraordinary (HAO) income (82, 84, 86, 88).
    pub hao_income: Decimal,
    /// Extraordinary (HAO) expenses (81, 83, 85).
    pub hao_expenses: Decimal,
    /// Extraordinary (HAO) result.
    pub hao_result: Decimal,
    /// Income tax (89).
    pub income_tax: Decimal,
    /// Net result.
    pub net_result: Decimal,
}

/// SIG of the current period alongside the prior one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SigComparison {
    /// Current period.
    pub current: SigStatement,
    /// Prior period, all zeros when no prior balance was supplied.
    pub prior: SigStatement,
    /// Whether a prior balance was supplied.
    pub has_prior: bool,
}

/// Kind of row in the SIG table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigRowKind {
    /// Section header without amounts.
    SectionHeader,
    /// Detail line, indented.
    Detail,
    /// Subtotal or total line.
    Total,
}

/// One row of the SIG table (note 37).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigRow {
    /// Row label.
    pub label: String,
    /// Row kind.
    pub kind: SigRowKind,
    /// Current period amount, `None` when zero or not applicable.
    pub current: Option<Decimal>,
    /// Prior period amount, `None` when zero or no prior balance.
    pub prior: Option<Decimal>,
}
