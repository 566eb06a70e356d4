//! Tests for page dispatch, diagnostic cards and narratives.

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::cards::{DiagnosticCards, Variation};
use super::dispatch::AnalysisService;
use super::markup::parse;
use super::types::{AnalysisContext, AnalysisSection, CompanyProfile};
use crate::balance::BalanceEntry;
use crate::pages::PageCatalogue;
use crate::ratios::{FinancialAggregates, Status, Trend};
use liasse_shared::TaxConfig;

fn sample_balance() -> Vec<BalanceEntry> {
    vec![
        BalanceEntry::new("101", "Capital social", Decimal::ZERO, dec!(5000000)),
        BalanceEntry::new("111", "Reserve legale", Decimal::ZERO, dec!(1000000)),
        BalanceEntry::new("2411", "Materiel industriel", dec!(4000000), Decimal::ZERO),
        BalanceEntry::new("2841", "Amortissements materiel", Decimal::ZERO, dec!(1000000)),
        BalanceEntry::new("31", "Marchandises", dec!(600000), Decimal::ZERO),
        BalanceEntry::new("411", "Clients", dec!(900000), Decimal::ZERO),
        BalanceEntry::new("401", "Fournisseurs", Decimal::ZERO, dec!(700000)),
        BalanceEntry::new("409", "Fournisseurs avances", dec!(50000), Decimal::ZERO),
        BalanceEntry::new("4431", "TVA facturee", Decimal::ZERO, dec!(300000)),
        BalanceEntry::new("4452", "TVA recuperable", dec!(200000), Decimal::ZERO),
        BalanceEntry::new("521", "Banque", dec!(1500000), Decimal::ZERO),
        BalanceEntry::new("162", "Emprunts", Decimal::ZERO, dec!(2000000)),
        BalanceEntry::new("701", "Ventes", Decimal::ZERO, dec!(3600000)),
        BalanceEntry::new("661", "Salaires", dec!(900000), Decimal::ZERO),
        BalanceEntry::new("671", "Interets", dec!(100000), Decimal::ZERO),
    ]
}

fn analyze(page_id: &str, current: &[BalanceEntry], prior: &[BalanceEntry]) -> AnalysisSection {
    AnalysisService::analyze(
        page_id,
        current,
        prior,
        &CompanyProfile::default(),
        &TaxConfig::default(),
        "FCFA",
    )
}

fn assert_balanced(section: &AnalysisSection) {
    for card in &section.cards {
        if let Some(narrative) = &card.narrative {
            let rendered = narrative.render();
            assert_eq!(parse(&rendered).as_ref(), Ok(narrative), "{rendered}");
        }
    }
}

#[test]
fn test_fixed_asset_note_without_balance_uses_empty_data_branch() {
    let section = analyze("note-3a", &[], &[]);

    assert_eq!(section.title, "Immobilisations");
    let card = section.card("Analyse des Immobilisations").unwrap();
    let narrative = card.narrative.as_ref().unwrap();
    assert_eq!(
        narrative.render(),
        "**Aucune immobilisation** inscrite au bilan : pas d'analyse du parc."
    );
    assert!(card.recommendations.is_empty());
}

#[rstest]
#[case("bilan", "balance_sheet")]
#[case("actif", "balance_sheet")]
#[case("passif", "balance_sheet")]
#[case("resultat", "income_statement")]
#[case("tft", "cash_flow")]
#[case("fiche-r4", "global_diagnostic")]
#[case("note-3a", "fixed_assets")]
#[case("note-3c-bis", "fixed_assets")]
#[case("note-3e", "fixed_assets")]
#[case("note-05", "inventory")]
#[case("note-06", "receivables")]
#[case("note-08", "treasury")]
#[case("note-8b", "treasury")]
#[case("note-11", "equity")]
#[case("note-14", "debt")]
#[case("note-15a", "debt")]
#[case("note-16b-bis", "debt")]
#[case("note-17", "revenue")]
#[case("note-21", "charges")]
#[case("note-23", "personnel")]
#[case("note-34", "taxation")]
#[case("note-27b", "headcount")]
#[case("note-38", "intermediate_balances")]
#[case("couverture", "overview")]
#[case("fiche-r1", "overview")]
#[case("note36-codes", "overview")]
#[case("suppl3", "controls")]
#[case("garde-dgi-ins", "controls")]
#[case("garde-bic", "controls")]
#[case("commentaire", "controls")]
fn test_dispatch_rule_selection(#[case] page_id: &str, #[case] expected: &str) {
    let rule = AnalysisService::rule_for(page_id, PageCatalogue::section_of(page_id)).unwrap();
    assert_eq!(rule.name, expected);
}

#[rstest]
#[case("note-01")]
#[case("note-04")]
#[case("note-24")]
#[case("note-39")]
#[case("page-inconnue")]
#[case("")]
fn test_pages_without_topic_get_empty_section(#[case] page_id: &str) {
    let section = analyze(page_id, &sample_balance(), &[]);
    assert!(section.is_empty());
    assert_eq!(section, AnalysisSection::empty());
}

#[test]
fn test_every_catalogue_page_builds_balanced_narratives() {
    let balance = sample_balance();
    for page in PageCatalogue::all() {
        for current in [&[][..], &balance[..]] {
            let section = analyze(page.id, current, &balance);
            assert_balanced(&section);
            let has_rule = AnalysisService::rule_for(page.id, Some(page.section)).is_some();
            assert_eq!(!section.title.is_empty(), has_rule, "{}", page.id);
        }
    }
}

#[test]
fn test_balance_sheet_on_sample() {
    let section = analyze("bilan", &sample_balance(), &[]);

    assert_eq!(section.title, "Analyse Bilan");
    assert_eq!(section.cards.len(), 2);

    let structure = section.card("Structure du Bilan").unwrap();
    assert_eq!(
        structure.indicator("Immobilisations nettes").unwrap().value,
        "3 000 000 FCFA"
    );
    assert_eq!(structure.indicator("Autonomie financiere").unwrap().value, "81.1%");
    assert!(structure.narrative.is_none());

    let ratios = section.card("Ratios Financiers").unwrap();
    assert_eq!(ratios.indicator("Liquidite generale").unwrap().value, "1.75");
    assert_eq!(ratios.indicator("Endettement").unwrap().status, Status::Excellent);
    assert_eq!(
        ratios.narrative.as_ref().unwrap().render(),
        "Liquidite generale de **1.75** (satisfaisante). Endettement de **0.23** (maitrise). \
         Rotation clients de **90 jours**."
    );
}

#[test]
fn test_asset_and_liability_pages_split_indicators() {
    let balance = sample_balance();
    let assets = analyze("actif", &balance, &[]);
    let liabilities = analyze("passif", &balance, &[]);

    let assets_card = assets.card("Structure de l'Actif").unwrap();
    assert!(assets_card.indicator("Stocks nets").is_some());
    assert!(assets_card.indicator("Capitaux propres").is_none());

    let liabilities_card = liabilities.card("Structure du Passif").unwrap();
    assert!(liabilities_card.indicator("Capitaux propres").is_some());
    assert!(liabilities_card.indicator("Stocks nets").is_none());
}

#[test]
fn test_empty_balance_sheet_has_structure_only() {
    let section = analyze("bilan", &[], &[]);
    assert_eq!(section.cards.len(), 1);
    let structure = &section.cards[0];
    assert_eq!(
        structure.indicator("Taux d'amortissement").unwrap().status,
        Status::Bon
    );
    assert!(structure.narrative.as_ref().unwrap().plain_text().starts_with("Aucune balance"));
}

#[test]
fn test_income_statement_and_tax_card() {
    let section = analyze("resultat", &sample_balance(), &[]);

    assert_eq!(section.title, "Analyse du Resultat");
    let sig = section.card("Soldes Intermediaires de Gestion").unwrap();
    assert_eq!(
        sig.narrative.as_ref().unwrap().render(),
        "Resultat positif de **2 600 000 FCFA** sur un CA de **3 600 000 FCFA**. \
         Marge nette de **72.2%**."
    );

    let tax = section.card("Estimation IS").unwrap();
    assert_eq!(tax.indicator("Resultat fiscal").unwrap().value, "2 600 000 FCFA");
    assert_eq!(tax.indicator("IS brut (25%)").unwrap().value, "650 000 FCFA");
    assert_eq!(tax.indicator("IMF").unwrap().value, "3 000 000 FCFA");
    assert_eq!(tax.indicator("IS du").unwrap().value, "3 000 000 FCFA");
    assert!(tax.narrative.as_ref().unwrap().render().starts_with("Base retenue : **IMF**"));
}

#[test]
fn test_deficit_narrative() {
    let balance = vec![
        BalanceEntry::new("701", "Ventes", Decimal::ZERO, dec!(100000)),
        BalanceEntry::new("661", "Salaires", dec!(250000), Decimal::ZERO),
    ];
    let section = analyze("resultat", &balance, &[]);
    let sig = section.card("Soldes Intermediaires de Gestion").unwrap();
    assert_eq!(
        sig.narrative.as_ref().unwrap().render(),
        "**Resultat deficitaire** de -150 000 FCFA."
    );
    assert!(sig.recommendations.iter().any(|r| r.contains("productivite")));
}

#[test]
fn test_cash_flow_with_vat_card() {
    let section = analyze("tft", &sample_balance(), &[]);

    assert_eq!(section.title, "Flux & Tresorerie");
    let vat = section.card("Position TVA").unwrap();
    assert_eq!(vat.indicator("Solde TVA").unwrap().value, "100 000 FCFA");
    assert_eq!(vat.indicator("Position").unwrap().value, "TVA a reverser");
}

#[test]
fn test_anomaly_detection() {
    let balance = vec![
        BalanceEntry::new("2411", "Materiel", Decimal::ZERO, dec!(100)),
        BalanceEntry::new("521", "Banque", Decimal::ZERO, dec!(500)),
        BalanceEntry::new("701", "Ventes", Decimal::ZERO, dec!(1000)),
    ];
    let agg = FinancialAggregates::from_entries(&balance);
    let company = CompanyProfile::default();
    let tax = TaxConfig::default();
    let ctx = AnalysisContext::new("bilan", &balance, &[], &agg, &company, &tax);

    let card = DiagnosticCards::anomalies(&ctx).unwrap();
    let labels: Vec<&str> = card.indicators.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Compte 2411 (solde inverse)",
            "Tresorerie negative",
            "Resultat < seuil IMF"
        ]
    );
    assert_eq!(
        card.narrative.as_ref().unwrap().render(),
        "**2** anomalie(s) critique(s) detectee(s) sur 3 lignes de balance."
    );

    let section = AnalysisService::analyze_page(&ctx);
    assert!(section.card("Detection d'Anomalies").is_some());
}

#[test]
fn test_anomalies_are_capped() {
    let balance: Vec<BalanceEntry> = (0..12)
        .map(|i| BalanceEntry::new(format!("24{i:02}"), "Materiel", Decimal::ZERO, dec!(10)))
        .collect();
    let agg = FinancialAggregates::from_entries(&balance);
    let company = CompanyProfile::default();
    let tax = TaxConfig::default();
    let ctx = AnalysisContext::new("bilan", &balance, &[], &agg, &company, &tax);

    let card = DiagnosticCards::anomalies(&ctx).unwrap();
    assert_eq!(card.indicators.len(), 8);
    assert!(card.narrative.unwrap().render().starts_with("**12**"));
}

#[test]
fn test_clean_balance_has_no_anomaly() {
    let balance = vec![
        BalanceEntry::new("101", "Capital", Decimal::ZERO, dec!(1000000)),
        BalanceEntry::new("521", "Banque", dec!(1000000), Decimal::ZERO),
    ];
    let agg = FinancialAggregates::from_entries(&balance);
    let company = CompanyProfile::default();
    let tax = TaxConfig::default();
    let ctx = AnalysisContext::new("suppl1", &balance, &[], &agg, &company, &tax);

    let card = DiagnosticCards::anomalies(&ctx).unwrap();
    assert_eq!(card.indicators.len(), 1);
    assert_eq!(card.indicators[0].label, "Aucune anomalie detectee");
    assert_eq!(card.indicators[0].status, Status::Excellent);
}

#[test]
fn test_trend_card_compares_periods() {
    let current = vec![BalanceEntry::new("701", "Ventes", Decimal::ZERO, dec!(1100000))];
    let prior = vec![BalanceEntry::new("701", "Ventes", Decimal::ZERO, dec!(1000000))];

    let section = analyze("suppl2", &current, &prior);
    assert_eq!(section.title, "Controles");

    let trend = section.card("Tendances N vs N-1").unwrap();
    let revenue = trend.indicator("CA").unwrap();
    assert_eq!(revenue.value, "1 100 000 FCFA (+10.0%)");
    assert_eq!(revenue.trend, Some(Trend::Up));
    assert_eq!(revenue.status, Status::Bon);

    let treasury = trend.indicator("Tresorerie").unwrap();
    assert_eq!(treasury.value, "0 FCFA (N/A)");
    assert_eq!(treasury.trend, Some(Trend::Stable));
}

#[test]
fn test_controls_without_prior_period() {
    let section = analyze("suppl2", &sample_balance(), &[]);
    assert!(section.card("Tendances N vs N-1").is_none());
    assert!(section.card("Detection d'Anomalies").is_some());

    let empty = analyze("suppl2", &[], &[]);
    assert_eq!(empty.title, "Controles");
    assert!(empty.cards.is_empty());
}

#[rstest]
#[case(dec!(110), dec!(100), "+10.0%", Trend::Up)]
#[case(dec!(90), dec!(100), "-10.0%", Trend::Down)]
#[case(dec!(100.5), dec!(100), "+0.5%", Trend::Stable)]
#[case(dec!(-50), dec!(-100), "+50.0%", Trend::Up)]
#[case(dec!(100), Decimal::ZERO, "N/A", Trend::Stable)]
fn test_variation(
    #[case] current: Decimal,
    #[case] prior: Decimal,
    #[case] percent: &str,
    #[case] trend: Trend,
) {
    let variation = Variation::between(current, prior);
    assert_eq!(variation.percent, percent);
    assert_eq!(variation.trend, trend);
}

#[test]
fn test_synthesis_is_always_present() {
    let section = analyze("fiche-r4", &[], &[]);
    assert_eq!(section.title, "Diagnostic Global");

    let card = section.card("Synthese Financiere").unwrap();
    let score = card.indicator("Score sante").unwrap();
    assert_eq!(score.value, "10/100");
    assert_eq!(score.status, Status::Critique);
    assert_eq!(card.indicator("Liquidite").unwrap().value, "N/A");
}

#[test]
fn test_synthesis_on_sample() {
    let balance = sample_balance();
    let agg = FinancialAggregates::from_entries(&balance);
    let company = CompanyProfile::default();
    let tax = TaxConfig::default();
    let ctx = AnalysisContext::new("fiche-r4", &balance, &[], &agg, &company, &tax);

    let card = AnalysisService::general_diagnostic(&ctx);
    assert_eq!(card.indicator("Score sante").unwrap().value, "95/100");
    assert!(card
        .narrative
        .as_ref()
        .unwrap()
        .render()
        .starts_with("Score de sante financiere : **95/100** (excellent)."));
    assert_eq!(card.recommendations, vec!["Maintenir la bonne gestion".to_string()]);
}

#[test]
fn test_overview_company_card() {
    let company = CompanyProfile {
        name: "SOCIETE EXEMPLE SA".to_string(),
        regime: "Reel normal".to_string(),
        share_capital: dec!(10000000),
        permanent_staff: 4,
        payroll: dec!(12000000),
    };
    let section = AnalysisService::analyze(
        "fiche-r1",
        &sample_balance(),
        &[],
        &company,
        &TaxConfig::default(),
        "FCFA",
    );

    assert_eq!(section.title, "Vue d'ensemble");
    let card = section.card("Fiche Entreprise").unwrap();
    assert_eq!(card.indicator("Cout moyen / employe").unwrap().value, "3 000 000 FCFA");
    assert_eq!(
        card.narrative.as_ref().unwrap().render(),
        "**SOCIETE EXEMPLE SA**, regime Reel normal."
    );
    assert!(section.card("Synthese Financiere").is_some());

    let without_staff = analyze("couverture", &[], &[]);
    let card = without_staff.card("Fiche Entreprise").unwrap();
    assert_eq!(card.indicator("Cout moyen / employe").unwrap().value, "N/A");
}

#[test]
fn test_note_builders_on_sample() {
    let balance = sample_balance();

    let fixed = analyze("note-3c", &balance, &[]);
    let card = &fixed.cards[0];
    assert_eq!(card.indicator("Taux d'amortissement").unwrap().value, "25.0%");
    assert_eq!(card.indicator("Indice de vetuste").unwrap().value, "75.0%");
    assert!(card.narrative.as_ref().unwrap().plain_text().ends_with("Parc en etat correct."));

    let receivables = analyze("note-06", &balance, &[]);
    let card = &receivables.cards[0];
    assert_eq!(card.indicator("Delai encaissement").unwrap().value, "90 jours");
    assert_eq!(
        card.recommendations,
        vec!["Envisager l'affacturage ou l'escompte".to_string()]
    );

    let debt = analyze("note-16a", &balance, &[]);
    assert_eq!(debt.title, "Endettement");
    assert!(debt.cards[0].narrative.as_ref().unwrap().render().contains("**maitrise**"));

    let headcount = analyze("note-27a", &balance, &[]);
    assert_eq!(
        headcount.cards[0].narrative.as_ref().unwrap().render(),
        "Pour 1 FCFA de charges de personnel, l'entreprise genere **4.00x** de chiffre d'affaires."
    );

    let taxation = analyze("note-26", &[], &[]);
    assert_eq!(taxation.title, "Fiscalite");
    assert!(taxation.cards.is_empty());
}

#[test]
fn test_ratio_narratives_without_revenue() {
    let balance = vec![BalanceEntry::new("31", "Marchandises", dec!(1000), Decimal::ZERO)];

    let inventory = analyze("note-05", &balance, &[]);
    let card = &inventory.cards[0];
    assert_eq!(card.indicator("Rotation stocks").unwrap().value, "N/A");
    assert_eq!(
        card.narrative.as_ref().unwrap().render(),
        "Rotation des stocks non calculable (**chiffre d'affaires nul**)."
    );

    let equity = analyze("note-09", &balance, &[]);
    assert!(equity.cards[0].narrative.as_ref().unwrap().render().starts_with("**Capitaux propres negatifs"));
}

#[test]
fn test_amounts_use_the_configured_currency_label() {
    let section = AnalysisService::analyze(
        "resultat",
        &sample_balance(),
        &[],
        &CompanyProfile::default(),
        &TaxConfig::default(),
        "XOF",
    );

    let card = section.card("Soldes Intermediaires de Gestion").unwrap();
    assert_eq!(card.indicator("Chiffre d'affaires").unwrap().value, "3 600 000 XOF");
    assert!(card.narrative.as_ref().unwrap().render().contains("**2 600 000 XOF**"));
    let tax = section.card("Estimation IS").unwrap();
    assert_eq!(tax.indicator("IMF").unwrap().value, "3 000 000 XOF");

    let headcount = analyze("note-27a", &sample_balance(), &[]);
    assert!(headcount.cards[0]
        .narrative
        .as_ref()
        .unwrap()
        .render()
        .starts_with("Pour 1 FCFA de charges"));
}

#[test]
fn test_extreme_balances_never_panic() {
    let tiny = Decimal::new(1, 28);
    let extreme: Vec<BalanceEntry> = sample_balance()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let (debit, credit) = if entry.debit_balance.is_zero() {
                (Decimal::ZERO, Decimal::MAX)
            } else {
                (Decimal::MAX, Decimal::ZERO)
            };
            let mut entry = BalanceEntry::new(entry.account, entry.label, debit, credit);
            if i % 3 == 0 {
                entry.credit_balance = tiny;
            }
            entry
        })
        .collect();

    let aggregates = FinancialAggregates::from_entries(&extreme);
    assert!(aggregates.revenue <= crate::balance::AMOUNT_LIMIT);

    for page in PageCatalogue::all() {
        assert_balanced(&analyze(page.id, &extreme, &sample_balance()));
        assert_balanced(&analyze(page.id, &sample_balance(), &extreme));
    }
}
