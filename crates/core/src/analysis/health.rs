//! Financial health score (0 to 100).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ratios::{FinancialAggregates, Status};
use liasse_shared::types::{DEFAULT_CURRENCY_LABEL, Money, format_multiple};

const BASE_SCORE: i32 = 50;

/// Overall health assessment of one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthScore {
    /// Score clamped to 0..=100.
    pub score: u8,
    /// Status band of the score.
    pub status: Status,
    /// Strengths found, in evaluation order.
    pub strengths: Vec<String>,
    /// Risks found, in evaluation order.
    pub risks: Vec<String>,
}

impl HealthScore {
    /// Scores liquidity, gearing, result, treasury, revenue and working capital.
    #[must_use]
    pub fn compute(agg: &FinancialAggregates) -> Self {
        Self::compute_with_currency(agg, DEFAULT_CURRENCY_LABEL)
    }

    /// Same as [`HealthScore::compute`], labelling amounts with `currency`.
    #[must_use]
    pub fn compute_with_currency(agg: &FinancialAggregates, currency: &str) -> Self {
        let mut score = BASE_SCORE;
        let mut strengths = Vec::new();
        let mut risks = Vec::new();

        match agg.current_assets.checked_div(agg.current_liabilities) {
            Some(ratio) if ratio >= Decimal::new(15, 1) => {
                score += 10;
                strengths.push(format!("Liquidite excellente ({})", format_multiple(ratio)));
            }
            Some(ratio) if ratio >= Decimal::ONE => {
                score += 5;
                strengths.push(format!("Liquidite correcte ({})", format_multiple(ratio)));
            }
            None if agg.current_assets > Decimal::ZERO => {
                score += 10;
                strengths.push("Liquidite excellente (aucun passif circulant)".to_string());
            }
            ratio => {
                score -= 10;
                risks.push(format!(
                    "Liquidite insuffisante ({})",
                    format_multiple(ratio.unwrap_or(Decimal::ZERO))
                ));
            }
        }

        match gearing(agg) {
            g if g < Decimal::new(5, 1) => {
                score += 10;
                strengths.push("Faible endettement".to_string());
            }
            g if g < Decimal::ONE => score += 5,
            g if g <= Decimal::TWO => {
                score -= 5;
                risks.push(format!("Endettement modere ({})", format_multiple(g)));
            }
            g => {
                score -= 15;
                risks.push(format!("Endettement eleve ({})", format_multiple(g)));
            }
        }

        if agg.net_result > Decimal::ZERO {
            score += 10;
            strengths.push(format!(
                "Resultat positif ({})",
                Money::new(agg.net_result, currency)
            ));
        } else {
            score -= 15;
            risks.push("Resultat deficitaire".to_string());
        }

        if agg.treasury > Decimal::ZERO {
            score += 5;
            strengths.push("Tresorerie positive".to_string());
        } else {
            score -= 10;
            risks.push("Tresorerie negative".to_string());
        }

        if agg.revenue > Decimal::ZERO {
            score += 5;
        } else {
            score -= 10;
            risks.push("Pas de chiffre d'affaires".to_string());
        }

        if agg.working_capital() > Decimal::ZERO {
            score += 5;
            strengths.push("Fonds de roulement positif".to_string());
        } else {
            score -= 5;
            risks.push("Fonds de roulement negatif".to_string());
        }

        let score = u8::try_from(score.clamp(0, 100)).unwrap_or(0);

        Self {
            score,
            status: Self::status_for(score),
            strengths,
            risks,
        }
    }

    /// Status band of a score.
    #[must_use]
    pub fn status_for(score: u8) -> Status {
        match score {
            75.. => Status::Excellent,
            50..=74 => Status::Bon,
            30..=49 => Status::Acceptable,
            _ => Status::Critique,
        }
    }

    /// Score as `NN/100`.
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{}/100", self.score)
    }
}

/// Debt over absolute equity; without equity the gearing counts as zero.
fn gearing(agg: &FinancialAggregates) -> Decimal {
    agg.financial_debt
        .checked_div(agg.equity.abs())
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn healthy() -> FinancialAggregates {
        FinancialAggregates {
            equity: dec!(10000000),
            net_fixed_assets: dec!(4000000),
            financial_debt: dec!(2000000),
            current_assets: dec!(3000000),
            current_liabilities: dec!(1500000),
            net_result: dec!(1200000),
            treasury: dec!(800000),
            revenue: dec!(20000000),
            ..FinancialAggregates::default()
        }
    }

    #[test]
    fn test_healthy_company_scores_maximum() {
        let health = HealthScore::compute(&healthy());
        assert_eq!(health.score, 95);
        assert_eq!(health.status, Status::Excellent);
        assert!(health.risks.is_empty());
        assert_eq!(health.strengths[0], "Liquidite excellente (2.00)");
        assert_eq!(health.display_value(), "95/100");
    }

    #[test]
    fn test_empty_aggregates_score() {
        let health = HealthScore::compute(&FinancialAggregates::default());
        assert_eq!(health.score, 10);
        assert_eq!(health.status, Status::Critique);
        assert_eq!(health.strengths, vec!["Faible endettement".to_string()]);
        assert_eq!(health.risks.len(), 5);
    }

    #[test]
    fn test_no_current_liabilities_counts_as_excellent_liquidity() {
        let agg = FinancialAggregates {
            current_liabilities: Decimal::ZERO,
            ..healthy()
        };
        let health = HealthScore::compute(&agg);
        assert_eq!(health.score, 95);
        assert!(health.strengths[0].contains("aucun passif circulant"));
    }

    #[test]
    fn test_debt_without_equity_counts_as_no_gearing() {
        let agg = FinancialAggregates {
            equity: Decimal::ZERO,
            financial_debt: dec!(1000000),
            ..healthy()
        };
        let health = HealthScore::compute(&agg);
        assert_eq!(health.score, 85);
        assert_eq!(health.status, Status::Excellent);
        assert!(health.strengths.contains(&"Faible endettement".to_string()));
        assert_eq!(health.risks, vec!["Fonds de roulement negatif".to_string()]);
    }

    #[test]
    fn test_positive_result_strength_uses_currency_label() {
        let health = HealthScore::compute_with_currency(&healthy(), "XOF");
        assert!(health.strengths.contains(&"Resultat positif (1 200 000 XOF)".to_string()));
    }

    #[test]
    fn test_score_is_clamped_at_zero() {
        let agg = FinancialAggregates {
            equity: dec!(-1000),
            net_fixed_assets: dec!(5000),
            financial_debt: dec!(10000),
            current_assets: dec!(100),
            current_liabilities: dec!(1000),
            net_result: dec!(-5000),
            treasury: dec!(-300),
            ..FinancialAggregates::default()
        };
        let health = HealthScore::compute(&agg);
        assert_eq!(health.score, 0);
        assert_eq!(health.status, Status::Critique);
    }

    #[rstest]
    #[case(100, Status::Excellent)]
    #[case(75, Status::Excellent)]
    #[case(74, Status::Bon)]
    #[case(50, Status::Bon)]
    #[case(49, Status::Acceptable)]
    #[case(30, Status::Acceptable)]
    #[case(29, Status::Critique)]
    #[case(0, Status::Critique)]
    fn test_status_bands(#[case] score: u8, #[case] expected: Status) {
        assert_eq!(HealthScore::status_for(score), expected);
    }
}
