//! Builders for the annex notes.

use rust_decimal::Decimal;

use super::cards::{DiagnosticCards, no_balance, non_negative, positive};
use super::markup::Narrative;
use super::types::{AnalysisCard, AnalysisContext, AnalysisSection};
use crate::ratios::{
    Indicator, RatioClassifier, RatioKind, Status, TaxBase, estimate_corporate_tax,
};

/// Fixed asset notes (3A to 3E).
#[must_use]
pub fn fixed_assets(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;

    if agg.gross_fixed_assets.is_zero() {
        let card = AnalysisCard::new(
            "Analyse des Immobilisations",
            vec![
                Indicator::new("Immobilisations brutes", ctx.amount(Decimal::ZERO), Status::Acceptable),
                Indicator::new("Amortissements cumules", ctx.amount(agg.depreciation), Status::Acceptable),
                Indicator::new(
                    "Valeur nette",
                    ctx.amount(agg.net_fixed_assets),
                    Status::Acceptable,
                ),
            ],
        )
        .with_narrative(
            Narrative::new()
                .bold("Aucune immobilisation")
                .text(" inscrite au bilan : pas d'analyse du parc."),
        );
        return AnalysisSection::new("Immobilisations", vec![card]);
    }

    let rate = RatioClassifier::evaluate(RatioKind::AmortizationRate, agg);
    let obsolescence = RatioClassifier::evaluate(RatioKind::ObsolescenceIndex, agg);

    let narrative = if rate.exceeds(Decimal::from(70)) {
        Narrative::new()
            .text("Parc immobilise ")
            .bold("vieillissant")
            .text(format!(
                " : {} amorti. Prevoir un plan de renouvellement.",
                rate.display_value()
            ))
    } else {
        Narrative::new()
            .text("Taux d'amortissement de ")
            .bold(rate.display_value())
            .text(". Parc en etat correct.")
    };

    let mut recommendations = Vec::new();
    if rate.exceeds(Decimal::from(80)) {
        recommendations.push("Planifier le renouvellement des immobilisations".to_string());
    }
    if rate.exceeds(Decimal::from(60)) {
        recommendations.push("Evaluer les besoins d'investissement a moyen terme".to_string());
    }

    let card = AnalysisCard::new(
        "Analyse des Immobilisations",
        vec![
            Indicator::new(
                "Immobilisations brutes",
                ctx.amount(agg.gross_fixed_assets),
                Status::Bon,
            ),
            Indicator::new("Amortissements cumules", ctx.amount(agg.depreciation), Status::Bon),
            Indicator::new(
                "Valeur nette",
                ctx.amount(agg.net_fixed_assets),
                positive(agg.net_fixed_assets),
            ),
            rate.indicator(),
            obsolescence.indicator(),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Immobilisations", vec![card])
}

/// Inventory note (5).
#[must_use]
pub fn inventory(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let rotation = RatioClassifier::evaluate(RatioKind::InventoryDays, agg);
    let weight = RatioClassifier::evaluate(RatioKind::InventoryToRevenue, agg);

    let mut recommendations = Vec::new();
    let narrative = match rotation.value {
        None => Narrative::new()
            .text("Rotation des stocks non calculable (")
            .bold("chiffre d'affaires nul")
            .text(")."),
        Some(days) if days > Decimal::from(90) => {
            recommendations.push("Optimiser la gestion des stocks".to_string());
            recommendations.push("Identifier les articles a faible rotation".to_string());
            Narrative::new()
                .text("Rotation lente des stocks (")
                .bold(rotation.display_value())
                .text("). Risque de surstockage ou d'obsolescence.")
        }
        Some(_) => Narrative::new()
            .text("Rotation des stocks correcte (")
            .bold(rotation.display_value())
            .text(")."),
    };

    let card = AnalysisCard::new(
        "Analyse des Stocks",
        vec![
            Indicator::new("Stocks nets", ctx.amount(agg.inventory), non_negative(agg.inventory)),
            rotation.indicator(),
            weight.indicator(),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Stocks", vec![card])
}

/// Receivables note (6).
#[must_use]
pub fn receivables(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let delay = RatioClassifier::evaluate(RatioKind::ReceivableDays, agg);
    let weight = RatioClassifier::evaluate(RatioKind::ReceivablesToRevenue, agg);

    let mut recommendations = Vec::new();
    let narrative = match delay.value {
        None => Narrative::new()
            .text("Delai d'encaissement non calculable (")
            .bold("chiffre d'affaires nul")
            .text(")."),
        Some(days) if days > Decimal::from(90) => Narrative::new()
            .text("Delai d'encaissement ")
            .bold("tres long")
            .text(format!(
                " ({}). Risque de creances irrecouvrables.",
                delay.display_value()
            )),
        Some(days) if days > Decimal::from(60) => Narrative::new()
            .text("Delai d'encaissement ")
            .bold("eleve")
            .text(format!(" ({}).", delay.display_value())),
        Some(_) => Narrative::new()
            .text("Delai d'encaissement ")
            .bold("satisfaisant")
            .text(format!(" ({}).", delay.display_value())),
    };
    if delay.exceeds(Decimal::from(90)) {
        recommendations.push("Relancer systematiquement les clients en retard".to_string());
        recommendations.push("Provisionner les creances douteuses".to_string());
    }
    if delay.exceeds(Decimal::from(60)) {
        recommendations.push("Envisager l'affacturage ou l'escompte".to_string());
    }

    let card = AnalysisCard::new(
        "Analyse Clients",
        vec![
            Indicator::new("Creances clients nettes", ctx.amount(agg.receivables), Status::Bon),
            delay.indicator_as("Delai encaissement"),
            weight.indicator(),
            Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Creances Clients", vec![card])
}

/// Treasury notes (8, 8A to 8C): financial balance.
#[must_use]
pub fn treasury(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let working_capital = agg.working_capital();
    let need = agg.working_capital_need();
    let net = agg.net_treasury_position();

    let narrative = if ctx.current.is_empty() {
        no_balance()
    } else {
        Narrative::new()
            .bold("FR")
            .text(format!(" = {}, ", ctx.amount(working_capital)))
            .bold("BFR")
            .text(format!(" = {}, ", ctx.amount(need)))
            .bold("Tresorerie")
            .text(format!(" = {}. ", ctx.amount(agg.treasury)))
            .text(if net >= Decimal::ZERO {
                "Equilibre satisfaisant."
            } else {
                "Le fonds de roulement ne couvre pas le BFR."
            })
    };

    let mut recommendations = Vec::new();
    if net < Decimal::ZERO {
        recommendations.push("Renforcer les ressources stables ou reduire le BFR".to_string());
    }

    let card = AnalysisCard::new(
        "Equilibre Financier",
        vec![
            Indicator::new("Tresorerie", ctx.amount(agg.treasury), non_negative(agg.treasury)),
            Indicator::new(
                "Fonds de roulement",
                ctx.amount(working_capital),
                non_negative(working_capital),
            ),
            Indicator::new("BFR", ctx.amount(need), Status::Bon),
            Indicator::new("FR - BFR", ctx.amount(net), non_negative(net)),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Tresorerie", vec![card])
}

/// Equity notes (9 to 13).
#[must_use]
pub fn equity(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let roe = RatioClassifier::evaluate(RatioKind::ReturnOnEquity, agg);

    let mut recommendations = Vec::new();
    let narrative = if ctx.current.is_empty() {
        no_balance()
    } else if agg.equity > Decimal::ZERO {
        Narrative::new()
            .text("Capitaux propres positifs (")
            .bold(ctx.amount(agg.equity))
            .text("). Rentabilite de ")
            .bold(roe.display_value())
            .text(".")
    } else {
        recommendations.push(
            "Reconstituer les capitaux propres : augmentation de capital ou incorporation de comptes courants"
                .to_string(),
        );
        Narrative::new()
            .bold("Capitaux propres negatifs ou nuls")
            .text(" : l'entreprise est en situation de desequilibre. Obligation legale de reconstituer les capitaux sous 2 ans.")
    };
    let half_capital = agg.share_capital.abs() / Decimal::TWO;
    if agg.equity > Decimal::ZERO && agg.equity < half_capital {
        recommendations.push("Capitaux propres inferieurs a la moitie du capital social".to_string());
    }

    let card = AnalysisCard::new(
        "Analyse des Capitaux Propres",
        vec![
            Indicator::new("Capitaux propres", ctx.amount(agg.equity), positive(agg.equity)),
            Indicator::new("Capital social", ctx.amount(agg.share_capital), Status::Bon),
            Indicator::new(
                "Reserves",
                ctx.amount(agg.reserves),
                if agg.reserves >= Decimal::ZERO {
                    Status::Bon
                } else {
                    Status::Acceptable
                },
            ),
            Indicator::new("Resultat net", ctx.amount(agg.net_result), positive(agg.net_result)),
            roe.indicator(),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Capitaux Propres", vec![card])
}

/// Debt notes (14 to 16).
#[must_use]
pub fn debt(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let gearing = RatioClassifier::evaluate(RatioKind::Gearing, agg);

    let narrative = match gearing.value {
        None => Narrative::new()
            .text("Ratio d'endettement non calculable (")
            .bold("capitaux propres nuls")
            .text(")."),
        Some(value) if value <= Decimal::ONE => Narrative::new()
            .text("Endettement ")
            .bold("maitrise")
            .text(format!(
                " (ratio de {}). Capacite d'emprunt preservee.",
                gearing.display_value()
            )),
        Some(_) => Narrative::new()
            .text("Endettement ")
            .bold("eleve")
            .text(format!(
                " (ratio de {}). Dependance aux financements externes.",
                gearing.display_value()
            )),
    };

    let mut recommendations = Vec::new();
    if gearing.exceeds(Decimal::TWO) {
        recommendations.push("Renegocier les conditions d'emprunt".to_string());
        recommendations.push("Envisager une augmentation de capital".to_string());
    } else if gearing.exceeds(Decimal::ONE) {
        recommendations.push("Limiter les nouveaux emprunts".to_string());
    }

    let card = AnalysisCard::new(
        "Analyse de l'Endettement",
        vec![
            Indicator::new("Dettes financieres", ctx.amount(agg.financial_debt), gearing.status),
            Indicator::new("Fournisseurs", ctx.amount(agg.suppliers), Status::Bon),
            Indicator::new("Passif circulant", ctx.amount(agg.current_liabilities), Status::Bon),
            gearing.indicator(),
            Indicator::new("Capitaux propres", ctx.amount(agg.equity), positive(agg.equity)),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Endettement", vec![card])
}

/// Revenue note (17).
#[must_use]
pub fn revenue(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let margin = RatioClassifier::evaluate(RatioKind::NetMargin, agg);
    let estimate = estimate_corporate_tax(agg.net_result, agg.revenue, ctx.tax);

    let narrative = if ctx.current.is_empty() {
        no_balance()
    } else {
        Narrative::new()
            .text("CA de ")
            .bold(ctx.amount(agg.revenue))
            .text(", marge nette de ")
            .bold(margin.display_value())
            .text(". IS estime : ")
            .bold(ctx.amount(estimate.tax_due))
            .text(format!(" (base {}).", estimate.base))
    };

    let card = AnalysisCard::new(
        "Analyse du Chiffre d'Affaires",
        vec![
            Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
            Indicator::new("Resultat net", ctx.amount(agg.net_result), positive(agg.net_result)),
            margin.indicator(),
            Indicator::new(
                "IS estime",
                ctx.amount(estimate.tax_due),
                if estimate.base == TaxBase::Imf {
                    Status::Acceptable
                } else {
                    Status::Bon
                },
            ),
        ],
    )
    .with_narrative(narrative);

    AnalysisSection::new("Revenus", vec![card])
}

/// Expense notes (18 to 22).
#[must_use]
pub fn charges(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let staff = RatioClassifier::evaluate(RatioKind::StaffCostRatio, agg);
    let financial = RatioClassifier::evaluate(RatioKind::FinancialExpenseRatio, agg);

    let narrative = Narrative::new()
        .text("Charges de personnel : ")
        .bold(staff.display_value())
        .text(" du CA. Charges financieres : ")
        .bold(financial.display_value())
        .text(" du CA.");

    let mut recommendations = Vec::new();
    if staff.exceeds(Decimal::from(50)) {
        recommendations.push("Maitriser la masse salariale".to_string());
    }
    if financial.exceeds(Decimal::from(5)) {
        recommendations.push("Reduire le cout de l'endettement".to_string());
    }

    let card = AnalysisCard::new(
        "Structure des Charges",
        vec![
            Indicator::new("Charges de personnel", ctx.amount(agg.staff_costs), staff.status),
            staff.indicator(),
            Indicator::new(
                "Charges financieres",
                ctx.amount(agg.financial_expense),
                financial.status,
            ),
            financial.indicator(),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Charges", vec![card])
}

/// Staff costs note (23).
#[must_use]
pub fn personnel(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let staff = RatioClassifier::evaluate(RatioKind::StaffCostRatio, agg);

    let narrative = Narrative::new()
        .text("Les charges de personnel representent ")
        .bold(staff.display_value())
        .text(" du chiffre d'affaires.");

    let mut recommendations = Vec::new();
    if staff.exceeds(Decimal::from(50)) {
        recommendations.push("Poids du personnel eleve : analyser la productivite".to_string());
    }

    let card = AnalysisCard::new(
        "Analyse des Charges de Personnel",
        vec![
            Indicator::new("Charges de personnel", ctx.amount(agg.staff_costs), staff.status),
            staff.indicator_as("Poids / CA"),
            Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
            Indicator::new("Resultat net", ctx.amount(agg.net_result), positive(agg.net_result)),
        ],
    )
    .with_narrative(narrative)
    .with_recommendations(recommendations);

    AnalysisSection::new("Personnel", vec![card])
}

/// Taxation notes (26, 34).
#[must_use]
pub fn taxation(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    AnalysisSection::new("Fiscalite", DiagnosticCards::tax(ctx).into_iter().collect())
}

/// Headcount notes (27A, 27B): productivity.
#[must_use]
pub fn headcount(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let productivity = RatioClassifier::evaluate(RatioKind::Productivity, agg);

    let narrative = Narrative::new()
        .text(format!(
            "Pour 1 {} de charges de personnel, l'entreprise genere ",
            ctx.currency
        ))
        .bold(productivity.display_value())
        .text(" de chiffre d'affaires.");

    let card = AnalysisCard::new(
        "Productivite",
        vec![
            Indicator::new("Charges de personnel", ctx.amount(agg.staff_costs), Status::Bon),
            Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
            productivity.indicator(),
        ],
    )
    .with_narrative(narrative);

    AnalysisSection::new("Effectifs & Productivite", vec![card])
}

/// Management balance notes (37, 38).
#[must_use]
pub fn intermediate_balances(ctx: &AnalysisContext<'_>) -> AnalysisSection {
    let agg = ctx.aggregates;
    let staff = RatioClassifier::evaluate(RatioKind::StaffCostRatio, agg);
    let margin = RatioClassifier::evaluate(RatioKind::NetMargin, agg);

    let narrative = if ctx.current.is_empty() {
        no_balance()
    } else if agg.net_result > Decimal::ZERO {
        Narrative::new()
            .text("Resultat net positif de ")
            .bold(ctx.amount(agg.net_result))
            .text(", marge nette de ")
            .bold(margin.display_value())
            .text(".")
    } else {
        Narrative::new()
            .bold("Resultat deficitaire")
            .text(format!(" de {}.", ctx.amount(agg.net_result)))
    };

    let card = AnalysisCard::new(
        "Soldes Intermediaires de Gestion",
        vec![
            Indicator::new("Chiffre d'affaires", ctx.amount(agg.revenue), positive(agg.revenue)),
            Indicator::new("Charges de personnel", ctx.amount(agg.staff_costs), staff.status),
            staff.indicator(),
            Indicator::new("Resultat net", ctx.amount(agg.net_result), positive(agg.net_result)),
            margin.indicator(),
        ],
    )
    .with_narrative(narrative);

    AnalysisSection::new("Compte de Resultat", vec![card])
}
