//! Analysis card and section types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::markup::Narrative;
use crate::balance::BalanceEntry;
use crate::pages::{PageCatalogue, PageSection};
use crate::ratios::{FinancialAggregates, Indicator};
use liasse_shared::TaxConfig;
use liasse_shared::types::{DEFAULT_CURRENCY_LABEL, Money};

/// A titled group of indicators with an optional narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisCard {
    /// Card title.
    pub title: String,
    /// Indicators in display order.
    pub indicators: Vec<Indicator>,
    /// Commentary with `**` emphasis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<Narrative>,
    /// Suggested actions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl AnalysisCard {
    /// Creates a card with indicators only.
    #[must_use]
    pub fn new(title: impl Into<String>, indicators: Vec<Indicator>) -> Self {
        Self {
            title: title.into(),
            indicators,
            narrative: None,
            recommendations: Vec::new(),
        }
    }

    /// Sets the narrative.
    #[must_use]
    pub fn with_narrative(mut self, narrative: Narrative) -> Self {
        self.narrative = Some(narrative);
        self
    }

    /// Sets the recommendations.
    #[must_use]
    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Finds an indicator by label.
    #[must_use]
    pub fn indicator(&self, label: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.label == label)
    }
}

/// The diagnostic shown next to one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSection {
    /// Section title, empty when the page has no analysis.
    pub title: String,
    /// Cards in display order.
    pub cards: Vec<AnalysisCard>,
}

impl AnalysisSection {
    /// Creates a section.
    #[must_use]
    pub fn new(title: impl Into<String>, cards: Vec<AnalysisCard>) -> Self {
        Self {
            title: title.into(),
            cards,
        }
    }

    /// The section shown for pages without analysis.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if there is neither title nor card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.cards.is_empty()
    }

    /// Finds a card by title.
    #[must_use]
    pub fn card(&self, title: &str) -> Option<&AnalysisCard> {
        self.cards.iter().find(|c| c.title == title)
    }
}

/// Company identification data used by the overview cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company name.
    #[serde(alias = "denomination", default)]
    pub name: String,
    /// Free-text tax regime label.
    #[serde(default)]
    pub regime: String,
    /// Share capital.
    #[serde(alias = "capital_social", default)]
    pub share_capital: Decimal,
    /// Permanent headcount.
    #[serde(alias = "effectif_permanent", default)]
    pub permanent_staff: u32,
    /// Annual payroll.
    #[serde(alias = "masse_salariale", default)]
    pub payroll: Decimal,
}

/// Everything a page builder reads.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    /// Page identifier.
    pub page_id: &'a str,
    /// Catalogue section of the page, if known.
    pub section: Option<PageSection>,
    /// Current period balance.
    pub current: &'a [BalanceEntry],
    /// Prior period balance, possibly empty.
    pub prior: &'a [BalanceEntry],
    /// Aggregates of the current period.
    pub aggregates: &'a FinancialAggregates,
    /// Company profile.
    pub company: &'a CompanyProfile,
    /// Tax rates.
    pub tax: &'a TaxConfig,
    /// Label appended to amounts.
    pub currency: &'a str,
}

impl<'a> AnalysisContext<'a> {
    /// Creates a context, resolving the page section from the catalogue.
    #[must_use]
    pub fn new(
        page_id: &'a str,
        current: &'a [BalanceEntry],
        prior: &'a [BalanceEntry],
        aggregates: &'a FinancialAggregates,
        company: &'a CompanyProfile,
        tax: &'a TaxConfig,
    ) -> Self {
        Self {
            page_id,
            section: PageCatalogue::section_of(page_id),
            current,
            prior,
            aggregates,
            company,
            tax,
            currency: DEFAULT_CURRENCY_LABEL,
        }
    }

    /// Replaces the currency label.
    #[must_use]
    pub fn with_currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    /// Formats an amount with the currency label.
    #[must_use]
    pub fn amount(&self, value: Decimal) -> String {
        Money::new(value, self.currency).to_string()
    }
}
