//! Labelled SIG table (note 37).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::engine::SigEngine;
use super::types::{SigComparison, SigRow, SigRowKind, SigStatement};
use crate::balance::BalanceEntry;

/// Sign applied to a component for display.
#[derive(Clone, Copy)]
enum Sign {
    Add,
    Subtract,
}

enum Line {
    Header(&'static str),
    Detail(&'static str, fn(&SigStatement) -> Decimal, Sign),
    Total(&'static str, fn(&SigStatement) -> Decimal),
}

const LINES: &[Line] = &[
    Line::Header("ACTIVITE COMMERCIALE"),
    Line::Detail("Ventes de marchandises (+)", |s| s.goods_sales, Sign::Add),
    Line::Detail("Achats de marchandises (-)", |s| s.goods_purchases, Sign::Subtract),
    Line::Total("MARGE BRUTE SUR MARCHANDISES", |s| s.trading_margin),
    Line::Header("ACTIVITE DE PRODUCTION"),
    Line::Detail("Production vendue (+)", |s| s.sold_production, Sign::Add),
    Line::Detail("Production stockee (+/-)", |s| s.stocked_production, Sign::Add),
    Line::Detail("Production immobilisee (+)", |s| s.capitalized_production, Sign::Add),
    Line::Header("CONSOMMATIONS DE L'EXERCICE"),
    Line::Detail("Achats de matieres premieres (-)", |s| s.raw_material_purchases, Sign::Subtract),
    Line::Detail("Autres achats (-)", |s| s.other_purchases, Sign::Subtract),
    Line::Detail("Transports (-)", |s| s.transport, Sign::Subtract),
    Line::Detail("Services exterieurs (-)", |s| s.external_services, Sign::Subtract),
    Line::Total("VALEUR AJOUTEE", |s| s.value_added),
    Line::Detail("Subventions d'exploitation (+)", |s| s.operating_subsidies, Sign::Add),
    Line::Detail("Impots et taxes (-)", |s| s.taxes_and_duties, Sign::Subtract),
    Line::Detail("Charges de personnel (-)", |s| s.staff_costs, Sign::Subtract),
    Line::Total("EXCEDENT BRUT D'EXPLOITATION (EBE)", |s| s.gross_operating_surplus),
    Line::Detail("Autres produits (+)", |s| s.other_income, Sign::Add),
    Line::Detail("Autres charges (-)", |s| s.other_expenses, Sign::Subtract),
    Line::Detail("Dotations amortissements et provisions (-)", |s| s.depreciation_charges, Sign::Subtract),
    Line::Detail("Reprises amortissements et provisions (+)", |s| s.reversals, Sign::Add),
    Line::Total("RESULTAT D'EXPLOITATION", |s| s.operating_result),
    Line::Header("OPERATIONS FINANCIERES"),
    Line::Detail("Produits financiers (+)", |s| s.financial_income, Sign::Add),
    Line::Detail("Charges financieres (-)", |s| s.financial_expenses, Sign::Subtract),
    Line::Total("RESULTAT FINANCIER", |s| s.financial_result),
    Line::Total("RESULTAT DES ACTIVITES ORDINAIRES", |s| s.ordinary_result),
    Line::Header("OPERATIONS HAO"),
    Line::Detail("Produits HAO (+)", |s| s.hao_income, Sign::Add),
    Line::Detail("Charges HAO (-)", |s| s.hao_expenses, Sign::Subtract),
    Line::Total("RESULTAT HAO", |s| s.hao_result),
    Line::Detail("Impot sur le resultat (-)", |s| s.income_tax, Sign::Subtract),
    Line::Total("RESULTAT NET", |s| s.net_result),
];

/// Note 37 table: SIG rows for the current and prior periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigTable {
    /// Rows in presentation order.
    pub rows: Vec<SigRow>,
}

impl SigTable {
    /// Builds the table from both periods' balances.
    #[must_use]
    pub fn build(current: &[BalanceEntry], prior: &[BalanceEntry]) -> Self {
        Self::from_comparison(&SigEngine::compare(current, prior))
    }

    /// Builds the table from already computed statements.
    #[must_use]
    pub fn from_comparison(comparison: &SigComparison) -> Self {
        let prior = comparison.has_prior.then_some(&comparison.prior);

        let rows = LINES
            .iter()
            .map(|line| match line {
                Line::Header(label) => SigRow {
                    label: (*label).to_string(),
                    kind: SigRowKind::SectionHeader,
                    current: None,
                    prior: None,
                },
                Line::Detail(label, get, sign) => SigRow {
                    label: (*label).to_string(),
                    kind: SigRowKind::Detail,
                    current: non_zero(signed(get(&comparison.current), *sign)),
                    prior: prior.and_then(|p| non_zero(signed(get(p), *sign))),
                },
                Line::Total(label, get) => SigRow {
                    label: (*label).to_string(),
                    kind: SigRowKind::Total,
                    current: non_zero(get(&comparison.current)),
                    prior: prior.and_then(|p| non_zero(get(p))),
                },
            })
            .collect();

        Self { rows }
    }

    /// Finds a row by label.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&SigRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

fn signed(value: Decimal, sign: Sign) -> Decimal {
    match sign {
        Sign::Add => value,
        Sign::Subtract => -value,
    }
}

fn non_zero(value: Decimal) -> Option<Decimal> {
    (!value.is_zero()).then_some(value)
}
