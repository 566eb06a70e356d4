//! Financial ratios.
//!
//! This module provides pure business logic for:
//! - Balance sheet and income statement aggregates
//! - Ratio computation with per-ratio thresholds
//! - Indicator and status types shared with the diagnostic cards
//! - Corporate income tax estimate

pub mod aggregates;
pub mod classifier;
pub mod tax;
pub mod types;


pub use aggregates::FinancialAggregates;
pub use classifier::{NOT_AVAILABLE, Ratio, RatioClassifier, RatioKind};
pub use tax::{TaxBase, TaxEstimate, estimate_corporate_tax};
pub use types::{Indicator, Status, Trend, ValueKind};
