//! Builders for the primary statements and the overview pages.

use rust_decimal::Decimal;

use super::cards::{DiagnosticCards, no_balance, non_negative, positive};
use super::markup::Narrative;
use super::types::{AnalysisCard, AnalysisContext, AnalysisSection};
use crate::ratios::{Indicator, RatioClassifier, RatioKind, Status};

/// Balance sheet pages (`bilan`, `actif`, `passif`).
#[must_use]
pub fn balance_sheet(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let show_assets = ctx.page_id != "passif";
    let show_liabilities = ctx.page_id != "actif";

    let title = match ctx.page_id {
        "actif" => "Structure de l'Actif",
        "passif" => "Structure du Passif",
        _ => "Structure du Bilan",
    };

    let mut indicators = Vec::new();
    if show_assets {
        indicators.push(Indicator::new(
            "Immobilisations brutes",
            ctx.amount(agg.gross_fixed_assets),
            Status::Bon,
        ));
        indicators.push(Indicator::new(
            "Immobilisations nettes",
            ctx.amount(agg.net_fixed_assets),
            non_negative(agg.net_fixed_assets),
        ));
        indicators.push(RatioClassifier::evaluate(RatioKind::AmortizationRate, agg).indicator());
        indicators.push(RatioClassifier::evaluate(RatioKind::FixedAssetWeight, agg).indicator());
        indicators.push(Indicator::new(
            "Actif circulant",
            ctx.amount(agg.current_assets),
            Status::Bon,
        ));
        indicators.push(Indicator::new(
            "Stocks nets",
            ctx.amount(agg.inventory),
            non_negative(agg.inventory),
        ));
    }
    if show_liabilities {
        indicators.push(Indicator::new(
            "Capitaux propres",
            ctx.amount(agg.equity),
            positive(agg.equity),
        ));
        indicators.push(Indicator::new(
            "Dettes financieres",
            ctx.amount(agg.financial_debt),
            Status::Bon,
        ));
        indicators.push(RatioClassifier::evaluate(RatioKind::FinancialAutonomy, agg).indicator());
        indicators.push(Indicator::new(
            "Fournisseurs",
            ctx.amount(agg.suppliers),
            Status::Bon,
        ));
    }

    let mut structure = AnalysisCard::new(title, indicators);
    if ctx.current.is_empty() {
        structure = structure.with_narrative(no_balance());
    }

    let mut cards = vec![structure];
    cards.extend(DiagnosticCards::ratios(ctx));
    cards.extend(
        DiagnosticCards::anomalies(ctx)
            .filter(|card| card.indicators.iter().any(|i| i.status == Status::Critique)),
    );

    AnalysisSection::new("Analyse Bilan", cards)
}

/// Income statement page (`resultat`).
#[must_use]
pub fn income_statement(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let staff = RatioClassifier::evaluate(RatioKind::StaffCostRatio, agg);
    let margin = RatioClassifier::evaluate(RatioKind::NetMargin, agg);
    let financial = RatioClassifier::evaluate(RatioKind::FinancialExpenseRatio, agg);

    let indicators = vec![
        Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
        Indicator::new("Charges de personnel", ctx.amount(agg.staff_costs), staff.status),
        staff.indicator_as("Poids personnel / CA"),
        Indicator::new("Resultat net", ctx.amount(agg.net_result), positive(agg.net_result)),
        margin.indicator(),
        Indicator::new(
            "Charges financieres",
            ctx.amount(agg.financial_expense),
            if financial.exceeds(Decimal::from(5)) {
                Status::Critique
            } else {
                Status::Bon
            },
        ),
    ];

    let mut recommendations = Vec::new();
    let narrative = if ctx.current.is_empty() {
        no_balance()
    } else if agg.net_result > Decimal::ZERO {
        Narrative::new()
            .text("Resultat positif de ")
            .bold(ctx.amount(agg.net_result))
            .text(" sur un CA de ")
            .bold(ctx.amount(agg.revenue))
            .text(". Marge nette de ")
            .bold(margin.display_value())
            .text(".")
    } else {
        recommendations.push("Analyser la structure des charges".to_string());
        Narrative::new()
            .bold("Resultat deficitaire")
            .text(format!(" de {}.", ctx.amount(agg.net_result)))
    };
    if staff.exceeds(Decimal::from(50)) {
        recommendations.push("Charges de personnel elevees : analyser la productivite".to_string());
    }

    let mut cards = vec![
        AnalysisCard::new("Soldes Intermediaires de Gestion", indicators)
            .with_narrative(narrative)
            .with_recommendations(recommendations),
    ];
    cards.extend(DiagnosticCards::tax(ctx));

    AnalysisSection::new("Analyse du Resultat", cards)
}

/// Cash flow statement page (`tft`).
#[must_use]
pub fn cash_flow(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let working_capital = agg.working_capital();
    let need = agg.working_capital_need();
    let receivable = RatioClassifier::evaluate(RatioKind::ReceivableDays, agg);

    let indicators = vec![
        Indicator::new("Tresorerie", ctx.amount(agg.treasury), non_negative(agg.treasury)),
        Indicator::new(
            "Fonds de roulement",
            ctx.amount(working_capital),
            non_negative(working_capital),
        ),
        Indicator::new(
            "BFR",
            ctx.amount(need),
            if need > working_capital {
                Status::Acceptable
            } else {
                Status::Bon
            },
        ),
        Indicator::new("Clients", ctx.amount(agg.receivables), Status::Bon),
        Indicator::new("Fournisseurs", ctx.amount(agg.suppliers), Status::Bon),
        receivable.indicator(),
    ];

    let mut recommendations = Vec::new();
    let narrative = if ctx.current.is_empty() {
        no_balance()
    } else if agg.treasury >= Decimal::ZERO {
        let narrative = Narrative::new()
            .text("Tresorerie positive de ")
            .bold(ctx.amount(agg.treasury))
            .text(". ");
        if working_capital >= Decimal::ZERO {
            narrative.text("Fonds de roulement positif, structure financiere equilibree.")
        } else {
            recommendations.push("Renforcer les ressources stables".to_string());
            narrative.text("Attention : fonds de roulement negatif malgre une tresorerie positive.")
        }
    } else {
        recommendations.push("Negocier des facilites de caisse".to_string());
        recommendations.push("Accelerer le recouvrement des creances".to_string());
        Narrative::new()
            .bold("Tresorerie negative")
            .text(format!(
                " de {}. Risque de tension sur le cash.",
                ctx.amount(agg.treasury)
            ))
    };

    let mut cards = vec![
        AnalysisCard::new("Analyse Tresorerie", indicators)
            .with_narrative(narrative)
            .with_recommendations(recommendations),
    ];
    cards.extend(DiagnosticCards::vat(ctx));

    AnalysisSection::new("Flux & Tresorerie", cards)
}

/// Global diagnostic page (`fiche-r4`).
#[must_use]
pub fn global_diagnostic(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    AnalysisSection::new("Diagnostic Global", vec![DiagnosticCards::synthesis(ctx)])
}

/// Cover and identification pages: company card and synthesis.
#[must_use]
pub fn overview(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let company = ctx.company;
    let staff = Decimal::from(company.permanent_staff);
    let average_cost = company
        .payroll
        .checked_div(staff)
        .map_or_else(|| crate::ratios::NOT_AVAILABLE.to_string(), |cost| ctx.amount(cost));

    let indicators = vec![
        Indicator::new(
            "Capital social",
            ctx.amount(company.share_capital),
            if company.share_capital > Decimal::ZERO {
                Status::Bon
            } else {
                Status::Acceptable
            },
        ),
        Indicator::new(
            "Effectif permanent",
            company.permanent_staff.to_string(),
            Status::Bon,
        ),
        Indicator::new("Masse salariale", ctx.amount(company.payroll), Status::Bon),
        Indicator::new("Cout moyen / employe", average_cost, Status::Bon),
    ];

    let mut company_card = AnalysisCard::new("Fiche Entreprise", indicators);
    if !company.name.is_empty() {
        company_card = company_card.with_narrative(Narrative::new().bold(&company.name).text(
            if company.regime.is_empty() {
                ".".to_string()
            } else {
                format!(", regime {}.", company.regime)
            },
        ));
    }

    AnalysisSection::new(
        "Vue d'ensemble",
        vec![company_card, DiagnosticCards::synthesis(ctx)],
    )
}

/// Supplement, separator and comment pages: trend and anomaly controls.
#[must_use]
pub fn controls(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let cards = DiagnosticCards::trend(ctx)
        .into_iter()
        .chain(DiagnosticCards::anomalies(ctx))
        .collect();
    AnalysisSection::new("Controles", cards)
}
