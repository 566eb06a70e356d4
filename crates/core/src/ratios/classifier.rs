//! Ratio computation and status classification.
//!
//! Every division is checked: a zero denominator yields no value ("N/A",
//! status acceptable) unless the ratio defines its own fallback.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregates::FinancialAggregates;
use super::types::{Indicator, Status, ValueKind};
use liasse_shared::types::{format_days, format_multiple, format_percent};

const DAYS_PER_YEAR: Decimal = Decimal::from_parts(360, 0, 0, false, 0);

/// Placeholder shown when a ratio cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Financial ratios known to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    /// Staff costs over revenue.
    StaffCostRatio,
    /// Accumulated depreciation over gross fixed assets.
    AmortizationRate,
    /// 100 minus the amortization rate.
    ObsolescenceIndex,
    /// Gross fixed assets over gross fixed plus current assets.
    FixedAssetWeight,
    /// Equity over equity plus financial debt.
    FinancialAutonomy,
    /// Net result over revenue.
    NetMargin,
    /// Financial expense over revenue.
    FinancialExpenseRatio,
    /// Receivables in days of revenue.
    ReceivableDays,
    /// Inventory in days of revenue.
    InventoryDays,
    /// Net result over absolute equity.
    ReturnOnEquity,
    /// Financial debt over absolute equity.
    Gearing,
    /// Current assets over current liabilities.
    CurrentRatio,
    /// Revenue over staff costs.
    Productivity,
    /// Inventory over revenue.
    InventoryToRevenue,
    /// Receivables over revenue.
    ReceivablesToRevenue,
}

impl RatioKind {
    /// Every ratio, in presentation order.
    pub const ALL: [Self; 15] = [
        Self::StaffCostRatio,
        Self::AmortizationRate,
        Self::ObsolescenceIndex,
        Self::FixedAssetWeight,
        Self::FinancialAutonomy,
        Self::NetMargin,
        Self::FinancialExpenseRatio,
        Self::ReceivableDays,
        Self::InventoryDays,
        Self::ReturnOnEquity,
        Self::Gearing,
        Self::CurrentRatio,
        Self::Productivity,
        Self::InventoryToRevenue,
        Self::ReceivablesToRevenue,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StaffCostRatio => "Personnel / CA",
            Self::AmortizationRate => "Taux d'amortissement",
            Self::ObsolescenceIndex => "Indice de vetuste",
            Self::FixedAssetWeight => "Poids immos / Actif",
            Self::FinancialAutonomy => "Autonomie financiere",
            Self::NetMargin => "Marge nette",
            Self::FinancialExpenseRatio => "Charges fin. / CA",
            Self::ReceivableDays => "Delai clients",
            Self::InventoryDays => "Rotation stocks",
            Self::ReturnOnEquity => "Rentabilite CP",
            Self::Gearing => "Ratio endettement",
            Self::CurrentRatio => "Liquidite generale",
            Self::Productivity => "CA / Charges pers.",
            Self::InventoryToRevenue => "Poids stocks / CA",
            Self::ReceivablesToRevenue => "Poids clients / CA",
        }
    }

    /// Display kind of the value.
    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::ReceivableDays | Self::InventoryDays => ValueKind::Days,
            Self::Gearing | Self::CurrentRatio => ValueKind::Multiple,
            Self::Productivity => ValueKind::Times,
            _ => ValueKind::Percent,
        }
    }

    /// Computes the raw value, `None` on a zero denominator.
    #[must_use]
    pub fn compute(self, agg: &FinancialAggregates) -> Option<Decimal> {
        match self {
            Self::StaffCostRatio => percent(agg.staff_costs, agg.revenue),
            Self::AmortizationRate => Some(amortization_rate(agg)),
            Self::ObsolescenceIndex => percent(agg.depreciation, agg.gross_fixed_assets)
                .map(|rate| Decimal::ONE_HUNDRED - rate),
            Self::FixedAssetWeight => percent(
                agg.gross_fixed_assets,
                agg.gross_fixed_assets + agg.current_assets,
            ),
            Self::FinancialAutonomy => percent(agg.equity, agg.equity + agg.financial_debt),
            Self::NetMargin => percent(agg.net_result, agg.revenue),
            Self::FinancialExpenseRatio => percent(agg.financial_expense, agg.revenue),
            Self::ReceivableDays => days(agg.receivables, agg.revenue),
            Self::InventoryDays => days(agg.inventory, agg.revenue),
            Self::ReturnOnEquity => percent(agg.net_result, agg.equity.abs()),
            Self::Gearing => agg.financial_debt.checked_div(agg.equity.abs()),
            Self::CurrentRatio => agg.current_assets.checked_div(agg.current_liabilities),
            Self::Productivity => agg.revenue.checked_div(agg.staff_costs),
            Self::InventoryToRevenue => percent(agg.inventory, agg.revenue),
            Self::ReceivablesToRevenue => percent(agg.receivables, agg.revenue),
        }
    }

    /// Classifies a computed value.
    #[must_use]
    pub fn classify(self, value: Decimal) -> Status {
        match self {
            Self::StaffCostRatio => above(value, dec(50), dec(40)),
            Self::AmortizationRate => above(value, dec(80), dec(60)),
            Self::ObsolescenceIndex => {
                if value < dec(20) {
                    Status::Critique
                } else if value < dec(40) {
                    Status::Acceptable
                } else {
                    Status::Bon
                }
            }
            Self::FinancialAutonomy => {
                if value >= dec(50) {
                    Status::Bon
                } else if value >= dec(30) {
                    Status::Acceptable
                } else {
                    Status::Critique
                }
            }
            Self::NetMargin => {
                if value > dec(10) {
                    Status::Excellent
                } else if value > dec(3) {
                    Status::Bon
                } else if value > Decimal::ZERO {
                    Status::Acceptable
                } else {
                    Status::Critique
                }
            }
            Self::FinancialExpenseRatio => {
                if value > dec(5) {
                    Status::Critique
                } else {
                    Status::Bon
                }
            }
            Self::ReceivableDays => above(value, dec(90), dec(60)),
            Self::InventoryDays => above(value, dec(120), dec(60)),
            Self::ReturnOnEquity => at_least(value, dec(15), dec(8), dec(3)),
            Self::Gearing => {
                if value <= Decimal::new(5, 1) {
                    Status::Excellent
                } else if value <= Decimal::ONE {
                    Status::Bon
                } else if value <= dec(2) {
                    Status::Acceptable
                } else {
                    Status::Critique
                }
            }
            Self::CurrentRatio => at_least(value, Decimal::new(15, 1), Decimal::ONE, Decimal::new(7, 1)),
            Self::Productivity => {
                if value >= dec(3) {
                    Status::Bon
                } else {
                    Status::Acceptable
                }
            }
            Self::FixedAssetWeight | Self::InventoryToRevenue | Self::ReceivablesToRevenue => {
                Status::Bon
            }
        }
    }

    /// Formats a computed value for display.
    #[must_use]
    pub fn format(self, value: Decimal) -> String {
        match self.value_kind() {
            ValueKind::Percent => format_percent(value),
            ValueKind::Days => format_days(value),
            ValueKind::Multiple => format_multiple(value),
            ValueKind::Times => format!("{}x", format_multiple(value)),
        }
    }
}

/// A computed and classified ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    /// Which ratio.
    pub kind: RatioKind,
    /// Raw value, `None` when not computable.
    pub value: Option<Decimal>,
    /// Assessment.
    pub status: Status,
}

impl Ratio {
    /// Formatted value or "N/A".
    #[must_use]
    pub fn display_value(&self) -> String {
        self.value
            .map_or_else(|| NOT_AVAILABLE.to_string(), |v| self.kind.format(v))
    }

    /// Converts to a display indicator.
    #[must_use]
    pub fn indicator(&self) -> Indicator {
        Indicator::new(self.kind.label(), self.display_value(), self.status)
    }

    /// Converts to a display indicator under another label.
    #[must_use]
    pub fn indicator_as(&self, label: &str) -> Indicator {
        Indicator::new(label, self.display_value(), self.status)
    }

    /// Returns true if the value is available and strictly above `threshold`.
    #[must_use]
    pub fn exceeds(&self, threshold: Decimal) -> bool {
        self.value.is_some_and(|v| v > threshold)
    }
}

/// Service evaluating ratios against their thresholds.
pub struct RatioClassifier;

impl RatioClassifier {
    /// Evaluates one ratio.
    #[must_use]
    pub fn evaluate(kind: RatioKind, agg: &FinancialAggregates) -> Ratio {
        match kind.compute(agg) {
            Some(value) => Ratio {
                kind,
                value: Some(value),
                status: kind.classify(value),
            },
            None => Ratio {
                kind,
                value: None,
                status: Status::Acceptable,
            },
        }
    }

    /// Evaluates every ratio in presentation order.
    #[must_use]
    pub fn evaluate_all(agg: &FinancialAggregates) -> Vec<Ratio> {
        RatioKind::ALL
            .iter()
            .map(|kind| Self::evaluate(*kind, agg))
            .collect()
    }
}

/// Amortization rate; a company without fixed assets has nothing amortized.
fn amortization_rate(agg: &FinancialAggregates) -> Decimal {
    percent(agg.depreciation, agg.gross_fixed_assets).unwrap_or(Decimal::ZERO)
}

fn percent(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

fn days(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(DAYS_PER_YEAR))
}

fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Higher is worse: `> critical` critique, `> warning` acceptable, else bon.
fn above(value: Decimal, critical: Decimal, warning: Decimal) -> Status {
    if value > critical {
        Status::Critique
    } else if value > warning {
        Status::Acceptable
    } else {
        Status::Bon
    }
}

/// Higher is better: excellent, bon, acceptable floors.
fn at_least(value: Decimal, excellent: Decimal, good: Decimal, fair: Decimal) -> Status {
    if value >= excellent {
        Status::Excellent
    } else if value >= good {
        Status::Bon
    } else if value >= fair {
        Status::Acceptable
    } else {
        Status::Critique
    }
}
