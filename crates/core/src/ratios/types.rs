//! Indicator and status types.

use serde::{Deserialize, Serialize};

/// Ordinal assessment of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Alarming.
    Critique,
    /// Tolerable.
    Acceptable,
    /// Healthy.
    Bon,
    /// Better than healthy.
    Excellent,
}

impl Status {
    /// Returns the status as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Bon => "bon",
            Self::Acceptable => "acceptable",
            Self::Critique => "critique",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Increase beyond the stability band.
    Up,
    /// Decrease beyond the stability band.
    Down,
    /// Within the stability band.
    Stable,
}

impl Trend {
    /// Arrow used when rendering the trend.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '\u{2191}',
            Self::Down => '\u{2193}',
            Self::Stable => '\u{2192}',
        }
    }
}

/// How a ratio value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Percentage with one decimal (`12.5%`).
    Percent,
    /// Whole number of days (`45 jours`).
    Days,
    /// Multiple with two decimals (`1.50`).
    Multiple,
    /// Multiple with two decimals and a trailing `x` (`3.20x`).
    Times,
}

/// A labelled, formatted and classified figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    /// Display label.
    pub label: String,
    /// Formatted value, or "N/A".
    pub value: String,
    /// Assessment.
    pub status: Status,
    /// Optional trend versus the prior period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl Indicator {
    /// Creates an indicator without trend.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>, status: Status) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            status,
            trend: None,
        }
    }

    /// Attaches a trend.
    #[must_use]
    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}
