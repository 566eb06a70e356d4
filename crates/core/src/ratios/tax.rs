//! Corporate income tax estimate (IS versus IMF).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use liasse_shared::TaxConfig;
use liasse_shared::types::round_whole;

/// Which tax is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxBase {
    /// Corporate income tax on the result.
    #[serde(rename = "IS")]
    Is,
    /// Minimum flat tax on revenue.
    #[serde(rename = "IMF")]
    Imf,
}

impl std::fmt::Display for TaxBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Is => write!(f, "IS"),
            Self::Imf => write!(f, "IMF"),
        }
    }
}

/// Estimated corporate income tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEstimate {
    /// Tax on the fiscal result, never negative.
    pub gross_tax: Decimal,
    /// Minimum flat tax, within its floor and ceiling.
    pub minimum_tax: Decimal,
    /// Tax due: the larger of the two.
    pub tax_due: Decimal,
    /// Retained base.
    pub base: TaxBase,
}

/// Estimates the tax due from a fiscal result and the revenue.
#[must_use]
pub fn estimate_corporate_tax(
    fiscal_result: Decimal,
    revenue: Decimal,
    rates: &TaxConfig,
) -> TaxEstimate {
    let gross_tax = round_whole(fiscal_result.saturating_mul(rates.is_rate)).max(Decimal::ZERO);
    // Floor wins over an inverted ceiling.
    let minimum_tax = round_whole(revenue.saturating_mul(rates.imf_rate))
        .min(rates.imf_maximum)
        .max(rates.imf_minimum);

    let base = if gross_tax >= minimum_tax {
        TaxBase::Is
    } else {
        TaxBase::Imf
    };

    TaxEstimate {
        gross_tax,
        minimum_tax,
        tax_due: gross_tax.max(minimum_tax),
        base,
    }
}
