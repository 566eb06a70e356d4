//! Page to builder dispatch.
//!
//! Rules are evaluated in order and the first match wins. A page matching no
//! rule gets the empty section.

use tracing::debug;

use super::cards::DiagnosticCards;
use super::notes;
use super::statements;
use super::types::{AnalysisCard, AnalysisContext, AnalysisSection, CompanyProfile};
use crate::balance::BalanceEntry;
use crate::pages::PageSection;
use crate::ratios::FinancialAggregates;
use liasse_shared::TaxConfig;

/// Builds the section of one page.
pub type Builder = fn(&AnalysisContext<'_>) -> AnalysisSection;

/// How a rule recognizes a page.
#[derive(Debug, Clone, Copy)]
pub enum PageMatcher {
    /// One of the listed identifiers.
    Exact(&'static [&'static str]),
    /// Identifier accepted by a predicate.
    Pattern(fn(&str) -> bool),
    /// Identifier starting with one of the listed prefixes.
    Prefix(&'static [&'static str]),
    /// Page whose catalogue section is one of the listed sections.
    Section(&'static [PageSection]),
}

impl PageMatcher {
    /// Returns true if the page is recognized.
    #[must_use]
    pub fn matches(&self, page_id: &str, section: Option<PageSection>) -> bool {
        match self {
            Self::Exact(ids) => ids.contains(&page_id),
            Self::Pattern(predicate) => predicate(page_id),
            Self::Prefix(prefixes) => prefixes.iter().any(|p| page_id.starts_with(p)),
            Self::Section(sections) => section.is_some_and(|s| sections.contains(&s)),
        }
    }
}

/// A matcher and the builder it selects.
#[derive(Debug, Clone, Copy)]
pub struct DispatchRule {
    /// Rule name, used in logs.
    pub name: &'static str,
    /// Page recognition.
    pub matcher: PageMatcher,
    /// Section builder.
    pub builder: Builder,
}

/// Note 3A to 3E, including 3C bis.
fn is_fixed_asset_note(page_id: &str) -> bool {
    page_id
        .strip_prefix("note-3")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| ('a'..='e').contains(&c))
}

/// Dispatch rules in priority order.
pub static RULES: &[DispatchRule] = &[
    DispatchRule {
        name: "balance_sheet",
        matcher: PageMatcher::Exact(&["bilan", "actif", "passif"]),
        builder: statements::balance_sheet,
    },
    DispatchRule {
        name: "income_statement",
        matcher: PageMatcher::Exact(&["resultat"]),
        builder: statements::income_statement,
    },
    DispatchRule {
        name: "cash_flow",
        matcher: PageMatcher::Exact(&["tft"]),
        builder: statements::cash_flow,
    },
    DispatchRule {
        name: "global_diagnostic",
        matcher: PageMatcher::Exact(&["fiche-r4"]),
        builder: statements::global_diagnostic,
    },
    DispatchRule {
        name: "fixed_assets",
        matcher: PageMatcher::Pattern(is_fixed_asset_note),
        builder: notes::fixed_assets,
    },
    DispatchRule {
        name: "inventory",
        matcher: PageMatcher::Exact(&["note-05"]),
        builder: notes::inventory,
    },
    DispatchRule {
        name: "receivables",
        matcher: PageMatcher::Exact(&["note-06"]),
        builder: notes::receivables,
    },
    DispatchRule {
        name: "treasury",
        matcher: PageMatcher::Exact(&["note-08", "note-8a", "note-8b", "note-8c"]),
        builder: notes::treasury,
    },
    DispatchRule {
        name: "equity",
        matcher: PageMatcher::Exact(&["note-09", "note-10", "note-11", "note-12", "note-13"]),
        builder: notes::equity,
    },
    DispatchRule {
        name: "debt",
        matcher: PageMatcher::Prefix(&["note-14", "note-15", "note-16"]),
        builder: notes::debt,
    },
    DispatchRule {
        name: "revenue",
        matcher: PageMatcher::Exact(&["note-17"]),
        builder: notes::revenue,
    },
    DispatchRule {
        name: "charges",
        matcher: PageMatcher::Exact(&["note-18", "note-19", "note-20", "note-21", "note-22"]),
        builder: notes::charges,
    },
    DispatchRule {
        name: "personnel",
        matcher: PageMatcher::Exact(&["note-23"]),
        builder: notes::personnel,
    },
    DispatchRule {
        name: "taxation",
        matcher: PageMatcher::Exact(&["note-26", "note-34"]),
        builder: notes::taxation,
    },
    DispatchRule {
        name: "headcount",
        matcher: PageMatcher::Exact(&["note-27a", "note-27b"]),
        builder: notes::headcount,
    },
    DispatchRule {
        name: "intermediate_balances",
        matcher: PageMatcher::Exact(&["note-37", "note-38"]),
        builder: notes::intermediate_balances,
    },
    DispatchRule {
        name: "overview",
        matcher: PageMatcher::Section(&[PageSection::Couverture, PageSection::Fiches]),
        builder: statements::overview,
    },
    DispatchRule {
        name: "controls",
        matcher: PageMatcher::Section(&[
            PageSection::Supplements,
            PageSection::Gardes,
            PageSection::Commentaire,
        ]),
        builder: statements::controls,
    },
];

/// Service selecting and running page analyses.
pub struct AnalysisService;

impl AnalysisService {
    /// First rule matching the page, if any.
    #[must_use]
    pub fn rule_for(page_id: &str, section: Option<PageSection>) -> Option<&'static DispatchRule> {
        RULES.iter().find(|rule| rule.matcher.matches(page_id, section))
    }

    /// Builds the section of the page described by the context.
    #[must_use]
    pub fn analyze_page(ctx: &AnalysisContext<'_>) -> AnalysisSection {
        match Self::rule_for(ctx.page_id, ctx.section) {
            Some(rule) => {
                debug!(page = ctx.page_id, rule = rule.name, "Dispatching page analysis");
                (rule.builder)(ctx)
            }
            None => {
                debug!(page = ctx.page_id, "No analysis for page");
                AnalysisSection::empty()
            }
        }
    }

    /// Computes the aggregates and builds the section of one page, with
    /// amounts labelled `currency`.
    #[must_use]
    pub fn analyze(
        page_id: &str,
        current: &[BalanceEntry],
        prior: &[BalanceEntry],
        company: &CompanyProfile,
        tax: &TaxConfig,
        currency: &str,
    ) -> AnalysisSection {
        let aggregates = FinancialAggregates::from_entries(current);
        let ctx = AnalysisContext::new(page_id, current, prior, &aggregates, company, tax)
            .with_currency(currency);
        Self::analyze_page(&ctx)
    }

    /// Health score card, independent of any page.
    #[must_use]
    pub fn general_diagnostic(ctx: &AnalysisContext<'_>) -> AnalysisCard {
        DiagnosticCards::synthesis(ctx)
    }
}
