//! Table rendering for terminal output.

use std::fmt::Write;

use rust_decimal::Decimal;

use liasse_core::analysis::{AnalysisSection, HealthScore};
use liasse_core::balance::BalanceSummary;
use liasse_core::ratios::Ratio;
use liasse_core::regime::{RecapLine, RegimeDef};
use liasse_core::sig::{SigRowKind, SigTable};
use liasse_shared::types::{Money, format_amount};

const LABEL_WIDTH: usize = 48;
const AMOUNT_WIDTH: usize = 18;

/// Renders engine results as plain-text tables.
pub struct Renderer {
    currency: String,
}

impl Renderer {
    /// Creates a renderer appending `currency` to totals.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    fn amount(&self, value: Decimal) -> String {
        Money::new(value, &self.currency).to_string()
    }

    /// Trial balance totals.
    pub fn summary(&self, summary: &BalanceSummary) -> String {
        let mut out = String::new();
        let rows = [
            ("Total debit", summary.total_debit),
            ("Total credit", summary.total_credit),
            ("Total solde debiteur", summary.total_debit_balance),
            ("Total solde crediteur", summary.total_credit_balance),
        ];
        for (label, value) in rows {
            let _ = writeln!(out, "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}", self.amount(value));
        }
        let _ = writeln!(out, "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}", "Lignes", summary.entry_count);
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
            "Balance equilibree",
            if summary.is_balanced { "oui" } else { "non" }
        );
        out
    }

    /// SIG table with both periods.
    pub fn sig(&self, table: &SigTable) -> String {
        let cell = |value: Option<Decimal>| value.map(format_amount).unwrap_or_default();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
            format!("SOLDES INTERMEDIAIRES DE GESTION ({})", self.currency),
            "N",
            "N-1"
        );
        for row in &table.rows {
            let label = match row.kind {
                SigRowKind::SectionHeader => row.label.to_uppercase(),
                SigRowKind::Detail => format!("  {}", row.label),
                SigRowKind::Total => row.label.clone(),
            };
            let _ = writeln!(
                out,
                "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
                cell(row.current),
                cell(row.prior)
            );
        }
        out
    }

    /// Ratios followed by the health score.
    pub fn ratios(&self, ratios: &[Ratio], health: &HealthScore) -> String {
        let mut out = String::new();
        for ratio in ratios {
            let _ = writeln!(
                out,
                "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}  {}",
                ratio.kind.label(),
                ratio.display_value(),
                ratio.status
            );
        }
        let _ = writeln!(
            out,
            "\n{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}  {}",
            "Score sante",
            health.display_value(),
            health.status
        );
        for strength in &health.strengths {
            let _ = writeln!(out, "  + {strength}");
        }
        for risk in &health.risks {
            let _ = writeln!(out, "  - {risk}");
        }
        out
    }

    /// Page analysis section.
    pub fn section(&self, section: &AnalysisSection) -> String {
        if section.is_empty() {
            return "Aucune analyse pour cette page.\n".to_string();
        }
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", section.title);
        for card in &section.cards {
            let _ = writeln!(out, "\n[{}]", card.title);
            for indicator in &card.indicators {
                let trend = indicator
                    .trend
                    .map(|t| format!(" {}", t.arrow()))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "  {:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}  {}{trend}",
                    indicator.label, indicator.value, indicator.status
                );
            }
            if let Some(narrative) = &card.narrative {
                let _ = writeln!(out, "  {}", narrative.plain_text());
            }
            for recommendation in &card.recommendations {
                let _ = writeln!(out, "  > {recommendation}");
            }
        }
        out
    }

    /// Note annex recap of a regime.
    pub fn recap(&self, regime: &RegimeDef, lines: &[RecapLine]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({}) - {}", regime.label, regime.code, regime.description);
        for line in lines {
            let _ = writeln!(
                out,
                "  {:<8}{:<LABEL_WIDTH$}{}",
                line.number,
                line.title,
                line.applicability.label()
            );
        }
        out
    }
}
