//! Diagnostic cards shared by several pages.
//!
//! Every card except the synthesis returns `None` when the current balance
//! is empty.

use rust_decimal::Decimal;

use super::health::HealthScore;
use super::markup::Narrative;
use super::types::{AnalysisCard, AnalysisContext};
use crate::balance::{BalanceField, PrefixAggregator};
use crate::ratios::{
    FinancialAggregates, Indicator, RatioClassifier, RatioKind, Status, TaxBase, Trend,
    estimate_corporate_tax,
};
use liasse_shared::types::{format_amount, format_days, format_percent};

const MAX_ANOMALIES: usize = 8;
const STABILITY_BAND: Decimal = Decimal::ONE;

/// Bon when strictly positive, critique otherwise.
pub(super) fn positive(value: Decimal) -> Status {
    if value > Decimal::ZERO {
        Status::Bon
    } else {
        Status::Critique
    }
}

/// Bon when zero or positive, critique otherwise.
pub(super) fn non_negative(value: Decimal) -> Status {
    if value >= Decimal::ZERO {
        Status::Bon
    } else {
        Status::Critique
    }
}

/// Narrative shown when no balance was imported.
pub(super) fn no_balance() -> Narrative {
    Narrative::new()
        .bold("Aucune balance")
        .text(" disponible pour cet exercice : les indicateurs sont nuls.")
}

/// Builders of the cross-page diagnostic cards.
pub struct DiagnosticCards;

impl DiagnosticCards {
    /// Liquidity, gearing, profitability and receivable turnover.
    #[must_use]
    pub fn ratios(ctx: &AnalysisContext<'_>) -> Option<AnalysisCard> {
        if ctx.current.is_empty() {
            return None;
        }
        let agg = ctx.aggregates;
        let liquidity = RatioClassifier::evaluate(RatioKind::CurrentRatio, agg);
        let gearing = RatioClassifier::evaluate(RatioKind::Gearing, agg);
        let roe = RatioClassifier::evaluate(RatioKind::ReturnOnEquity, agg);
        let receivable = RatioClassifier::evaluate(RatioKind::ReceivableDays, agg);
        let working_capital = agg.working_capital();
        let net_treasury = agg.net_treasury_position();

        let mut narrative = Narrative::new()
            .text("Liquidite generale de ")
            .bold(liquidity.display_value());
        if let Some(value) = liquidity.value {
            narrative.push_text(if value >= Decimal::ONE {
                " (satisfaisante)"
            } else {
                " (insuffisante)"
            });
        }
        narrative.push_text(". Endettement de ");
        narrative.push_bold(gearing.display_value());
        if let Some(value) = gearing.value {
            narrative.push_text(if value < Decimal::ONE {
                " (maitrise)"
            } else {
                " (eleve)"
            });
        }
        narrative.push_text(". Rotation clients de ");
        narrative.push_bold(receivable.display_value());
        narrative.push_text(".");

        let mut recommendations = Vec::new();
        if liquidity.value.is_some_and(|v| v < Decimal::ONE) {
            recommendations
                .push("Ameliorer la liquidite en reduisant les dettes court terme".to_string());
        }
        if gearing.exceeds(Decimal::TWO) {
            recommendations
                .push("Reduire l'endettement : renegocier ou rembourser les emprunts".to_string());
        }
        if receivable.exceeds(Decimal::from(90)) {
            recommendations.push("Accelerer le recouvrement clients".to_string());
        }
        if net_treasury < Decimal::ZERO {
            recommendations.push("Tresorerie nette negative : surveiller le BFR".to_string());
        }
        if working_capital < Decimal::ZERO {
            recommendations.push(
                "Fonds de roulement negatif : renforcer les ressources stables".to_string(),
            );
        }

        Some(
            AnalysisCard::new(
                "Ratios Financiers",
                vec![
                    liquidity.indicator(),
                    gearing.indicator_as("Endettement"),
                    roe.indicator(),
                    Indicator::new("Tresorerie nette", ctx.amount(net_treasury), non_negative(net_treasury)),
                    Indicator::new(
                        "Fonds de roulement",
                        ctx.amount(working_capital),
                        non_negative(working_capital),
                    ),
                    receivable.indicator_as("Rotation clients"),
                ],
            )
            .with_narrative(narrative)
            .with_recommendations(recommendations),
        )
    }

    /// Reversed balances, overdue receivables, overdraft and tax anomalies.
    #[must_use]
    pub fn anomalies(ctx: &AnalysisContext<'_>) -> Option<AnalysisCard> {
        if ctx.current.is_empty() {
            return None;
        }
        let agg = ctx.aggregates;
        let mut indicators = Vec::new();
        let mut recommendations = Vec::new();

        for entry in ctx.current {
            let signed = entry.signed_balance();
            if entry.matches_any(&["2", "3"]) && signed < Decimal::ZERO {
                indicators.push(Indicator::new(
                    format!("Compte {} (solde inverse)", entry.account),
                    ctx.amount(signed),
                    Status::Critique,
                ));
            }
            if entry.matches_any(&["10", "11", "12", "13", "14", "15"])
                && signed > Decimal::ZERO
                && entry.debit > entry.credit
            {
                indicators.push(Indicator::new(
                    format!("Compte {} (solde debiteur)", entry.account),
                    ctx.amount(signed),
                    Status::Critique,
                ));
            }
            if entry.matches_any(&["40"]) && !entry.matches_any(&["409"]) && signed > Decimal::ZERO
            {
                indicators.push(Indicator::new(
                    format!("Fournisseur {} debiteur", entry.account),
                    ctx.amount(signed),
                    Status::Acceptable,
                ));
            }
        }
        if !indicators.is_empty() {
            recommendations.push(
                "Verifier les comptes a solde inverse : erreurs d'imputation possibles"
                    .to_string(),
            );
        }

        let receivable = RatioClassifier::evaluate(RatioKind::ReceivableDays, agg);
        if let Some(days) = receivable.value.filter(|d| *d > Decimal::from(180)) {
            indicators.push(Indicator::new(
                "Creances clients > 6 mois",
                format_days(days),
                Status::Critique,
            ));
            recommendations.push("Provisionner les creances douteuses (> 6 mois)".to_string());
        }

        if agg.treasury < Decimal::ZERO {
            indicators.push(Indicator::new(
                "Tresorerie negative",
                ctx.amount(agg.treasury),
                Status::Critique,
            ));
            recommendations
                .push("Decouvert bancaire : negocier une ligne de credit court terme".to_string());
        }

        let tax = estimate_corporate_tax(agg.net_result, agg.revenue, ctx.tax);
        if agg.net_result > Decimal::ZERO && tax.base == TaxBase::Imf {
            indicators.push(Indicator::new(
                "Resultat < seuil IMF",
                format!(
                    "IS: {} < IMF: {}",
                    format_amount(tax.gross_tax),
                    format_amount(tax.minimum_tax)
                ),
                Status::Acceptable,
            ));
            recommendations
                .push("L'IMF sera applicable : le resultat ne couvre pas le minimum".to_string());
        }

        let critical = indicators
            .iter()
            .filter(|i| i.status == Status::Critique)
            .count();

        if indicators.is_empty() {
            indicators.push(Indicator::new(
                "Aucune anomalie detectee",
                "OK",
                Status::Excellent,
            ));
            recommendations.push("Aucune anomalie majeure detectee dans la balance".to_string());
        }
        indicators.truncate(MAX_ANOMALIES);

        let narrative = Narrative::new()
            .bold(critical.to_string())
            .text(format!(
                " anomalie(s) critique(s) detectee(s) sur {} lignes de balance.",
                ctx.current.len()
            ));

        Some(
            AnalysisCard::new("Detection d'Anomalies", indicators)
                .with_narrative(narrative)
                .with_recommendations(recommendations),
        )
    }

    /// Current versus prior period for revenue, result, treasury and debt.
    #[must_use]
    pub fn trend(ctx: &AnalysisContext<'_>) -> Option<AnalysisCard> {
        if ctx.current.is_empty() || ctx.prior.is_empty() {
            return None;
        }
        let current = ctx.aggregates;
        let prior = FinancialAggregates::from_entries(ctx.prior);

        let revenue = Variation::between(current.revenue, prior.revenue);
        let result = Variation::between(current.net_result, prior.net_result);
        let treasury = Variation::between(current.treasury, prior.treasury);
        let debt = Variation::between(current.financial_debt, prior.financial_debt);

        let growth_status = |v: &Variation| match v.trend {
            Trend::Up => Status::Bon,
            Trend::Down => Status::Critique,
            Trend::Stable => Status::Acceptable,
        };

        let indicators = vec![
            revenue.indicator(ctx, "CA", current.revenue, growth_status(&revenue)),
            result.indicator(ctx, "Resultat", current.net_result, growth_status(&result)),
            treasury.indicator(
                ctx,
                "Tresorerie",
                current.treasury,
                if treasury.trend == Trend::Up {
                    Status::Bon
                } else {
                    Status::Acceptable
                },
            ),
            debt.indicator(
                ctx,
                "Endettement",
                current.financial_debt,
                match debt.trend {
                    Trend::Down => Status::Bon,
                    Trend::Up => Status::Critique,
                    Trend::Stable => Status::Acceptable,
                },
            ),
        ];

        let mut narrative = Narrative::new()
            .text("Chiffre d'affaires ")
            .bold(revenue.percent.clone())
            .text(", resultat ")
            .bold(result.percent.clone())
            .text(" par rapport a N-1.");
        if revenue.trend == Trend::Down && result.trend == Trend::Down {
            narrative.push_text(" Activite et rentabilite en recul.");
        }

        let mut recommendations = Vec::new();
        if revenue.trend == Trend::Down {
            recommendations.push("Analyser les causes de la baisse du chiffre d'affaires".to_string());
        }
        if debt.trend == Trend::Up {
            recommendations.push("Surveiller la progression de l'endettement".to_string());
        }

        Some(
            AnalysisCard::new("Tendances N vs N-1", indicators)
                .with_narrative(narrative)
                .with_recommendations(recommendations),
        )
    }

    /// Corporate income tax estimate, IS versus IMF.
    #[must_use]
    pub fn tax(ctx: &AnalysisContext<'_>) -> Option<AnalysisCard> {
        if ctx.current.is_empty() {
            return None;
        }
        let agg = ctx.aggregates;
        let lookup = PrefixAggregator::new(ctx.current);
        let income = lookup.sum(&["7"], BalanceField::Credit);
        let expenses = lookup.sum(&["6"], BalanceField::Debit);
        let fiscal_result = income - expenses;
        let estimate = estimate_corporate_tax(fiscal_result, agg.revenue, ctx.tax);

        let result_status = if fiscal_result <= Decimal::ZERO {
            Status::Critique
        } else if estimate.base == TaxBase::Is {
            Status::Bon
        } else {
            Status::Acceptable
        };
        let rate = ctx.tax.is_rate.saturating_mul(Decimal::ONE_HUNDRED).normalize();

        let indicators = vec![
            Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
            Indicator::new("Produits (cl. 7)", ctx.amount(income), Status::Bon),
            Indicator::new("Charges (cl. 6)", ctx.amount(expenses), Status::Bon),
            Indicator::new("Resultat fiscal", ctx.amount(fiscal_result), result_status),
            Indicator::new(format!("IS brut ({rate}%)"), ctx.amount(estimate.gross_tax), Status::Bon),
            Indicator::new(
                "IMF",
                ctx.amount(estimate.minimum_tax),
                if estimate.base == TaxBase::Imf {
                    Status::Acceptable
                } else {
                    Status::Bon
                },
            ),
            Indicator::new("IS du", ctx.amount(estimate.tax_due), Status::Bon),
        ];

        let mut narrative = Narrative::new()
            .text("Base retenue : ")
            .bold(estimate.base.to_string())
            .text(". Impot estime a ")
            .bold(ctx.amount(estimate.tax_due))
            .text(".");
        let mut recommendations = Vec::new();
        match estimate.base {
            TaxBase::Is => {
                narrative.push_text(" L'IS calcule excede le minimum forfaitaire.");
            }
            TaxBase::Imf => {
                narrative.push_text(" L'IS calcule est inferieur au minimum forfaitaire.");
                recommendations.push(
                    "Le minimum forfaitaire s'applique : verifier les charges deductibles"
                        .to_string(),
                );
            }
        }
        if fiscal_result < Decimal::ZERO {
            recommendations.push(
                "Resultat fiscal deficitaire : le deficit est reportable sur les exercices suivants"
                    .to_string(),
            );
        }

        Some(
            AnalysisCard::new("Estimation IS", indicators)
                .with_narrative(narrative)
                .with_recommendations(recommendations),
        )
    }

    /// VAT collected versus deductible.
    #[must_use]
    pub fn vat(ctx: &AnalysisContext<'_>) -> Option<AnalysisCard> {
        if ctx.current.is_empty() {
            return None;
        }
        let agg = ctx.aggregates;
        let balance = agg.vat_balance();
        let is_credit = balance < Decimal::ZERO;

        let indicators = vec![
            Indicator::new("TVA collectee (4431)", ctx.amount(agg.vat_collected), Status::Bon),
            Indicator::new("TVA deductible (4452)", ctx.amount(agg.vat_deductible), Status::Bon),
            Indicator::new(
                "Solde TVA",
                ctx.amount(balance.abs()),
                if is_credit {
                    Status::Acceptable
                } else {
                    Status::Bon
                },
            ),
            Indicator::new(
                "Position",
                if is_credit {
                    "Credit de TVA"
                } else {
                    "TVA a reverser"
                },
                if is_credit {
                    Status::Acceptable
                } else {
                    Status::Bon
                },
            ),
        ];

        let (narrative, recommendations) = if is_credit {
            (
                Narrative::new()
                    .text("Credit de TVA de ")
                    .bold(ctx.amount(balance.abs()))
                    .text(" : la TVA deductible excede la TVA collectee."),
                vec!["Demander le remboursement ou imputer le credit de TVA".to_string()],
            )
        } else {
            (
                Narrative::new()
                    .text("TVA a reverser de ")
                    .bold(ctx.amount(balance))
                    .text("."),
                vec!["Verifier la concordance avec les declarations mensuelles".to_string()],
            )
        };

        Some(
            AnalysisCard::new("Position TVA", indicators)
                .with_narrative(narrative)
                .with_recommendations(recommendations),
        )
    }

    /// Health score and key figures. Always present.
    #[must_use]
    pub fn synthesis(ctx: &AnalysisContext<'_>) -> AnalysisCard {
        let agg = ctx.aggregates;
        let health = HealthScore::compute_with_currency(agg, ctx.currency);
        let liquidity = RatioClassifier::evaluate(RatioKind::CurrentRatio, agg);

        let indicators = vec![
            Indicator::new("Score sante", health.display_value(), health.status),
            Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
            Indicator::new("Resultat net", ctx.amount(agg.net_result), positive(agg.net_result)),
            Indicator::new("Tresorerie", ctx.amount(agg.treasury), non_negative(agg.treasury)),
            Indicator::new("Capitaux propres", ctx.amount(agg.equity), positive(agg.equity)),
            liquidity.indicator_as("Liquidite"),
        ];

        if ctx.current.is_empty() {
            return AnalysisCard::new("Synthese Financiere", indicators)
                .with_narrative(no_balance())
                .with_recommendations(vec![
                    "Importer la balance de l'exercice pour etablir le diagnostic".to_string(),
                ]);
        }

        let mut narrative = Narrative::new()
            .text("Score de sante financiere : ")
            .bold(health.display_value())
            .text(format!(" ({}).", health.status));
        if !health.strengths.is_empty() {
            narrative.push_text(" Points forts : ");
            narrative.push_text(health.strengths.join(", "));
            narrative.push_text(".");
        }
        if !health.risks.is_empty() {
            narrative.push_text(" Risques : ");
            narrative.push_text(health.risks.join(", "));
            narrative.push_text(".");
        }

        let mut recommendations: Vec<String> = health
            .risks
            .iter()
            .take(3)
            .map(|risk| format!("Corriger : {risk}"))
            .collect();
        recommendations.push(if health.score >= 50 {
            "Maintenir la bonne gestion".to_string()
        } else {
            "Attention : situation financiere fragile".to_string()
        });

        AnalysisCard::new("Synthese Financiere", indicators)
            .with_narrative(narrative)
            .with_recommendations(recommendations)
    }
}

/// Relative change between two periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Variation {
    /// Signed percentage with one decimal, or "N/A".
    pub percent: String,
    /// Direction beyond the stability band.
    pub trend: Trend,
}

impl Variation {
    /// Change from `prior` to `current`; no prior value means no trend.
    pub fn between(current: Decimal, prior: Decimal) -> Self {
        let Some(pct) = (current - prior)
            .checked_div(prior.abs())
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        else {
            return Self {
                percent: crate::ratios::NOT_AVAILABLE.to_string(),
                trend: Trend::Stable,
            };
        };

        let trend = if pct > STABILITY_BAND {
            Trend::Up
        } else if pct < -STABILITY_BAND {
            Trend::Down
        } else {
            Trend::Stable
        };
        let sign = if pct.is_sign_negative() { "" } else { "+" };

        Self {
            percent: format!("{sign}{}", format_percent(pct)),
            trend,
        }
    }

    fn indicator(
        &self,
        ctx: &AnalysisContext<'_>,
        label: &str,
        current: Decimal,
        status: Status,
    ) -> Indicator {
        Indicator::new(label, format!("{} ({})", ctx.amount(current), self.percent), status)
            .with_trend(self.trend)
    }
}
