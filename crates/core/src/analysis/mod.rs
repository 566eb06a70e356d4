//! Page-contextual diagnostics.
//!
//! This module provides:
//! - Emphasis markup for narratives
//! - Analysis cards and sections
//! - Reusable diagnostic cards (ratios, anomalies, trend, tax, VAT, synthesis)
//! - The 0 to 100 health score
//! - Ordered page dispatch to statement and note builders

pub mod cards;
pub mod dispatch;
pub mod health;
pub mod markup;
pub mod notes;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;

pub use cards::DiagnosticCards;
pub use dispatch::{AnalysisService, Builder, DispatchRule, PageMatcher, RULES};
pub use health::HealthScore;
pub use markup::{MarkupError, Narrative, Segment, parse};
pub use types::{AnalysisCard, AnalysisContext, AnalysisSection, CompanyProfile};
