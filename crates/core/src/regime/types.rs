//! Regime codes and definitions.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Regime errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegimeError {
    /// The code is not one of the five regimes.
    #[error("Unknown regime code: {0}")]
    UnknownCode(String),
}

/// Tax filing regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegimeCode {
    /// Full SYSCOHADA system.
    #[default]
    ReelNormal,
    /// Simplified SYSCOHADA system.
    ReelSimplifie,
    /// Flat-rate regime.
    Forfaitaire,
    /// Micro-enterprise regime.
    MicroEntreprise,
    /// Minimal cash-basis system.
    Smt,
}

impl RegimeCode {
    /// Every regime, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::ReelNormal,
        Self::ReelSimplifie,
        Self::Forfaitaire,
        Self::MicroEntreprise,
        Self::Smt,
    ];

    /// Returns the code as stored and exchanged (`REEL_NORMAL`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReelNormal => "REEL_NORMAL",
            Self::ReelSimplifie => "REEL_SIMPLIFIE",
            Self::Forfaitaire => "FORFAITAIRE",
            Self::MicroEntreprise => "MICRO_ENTREPRISE",
            Self::Smt => "SMT",
        }
    }

    /// Parses a code, falling back to [`RegimeCode::ReelNormal`].
    #[must_use]
    pub fn parse_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|err: RegimeError| {
            warn!(error = %err, fallback = Self::ReelNormal.as_str(), "Unknown regime code");
            Self::ReelNormal
        })
    }

    /// Guesses the regime from a free-text label such as "Systeme allege".
    #[must_use]
    pub fn detect(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| label.contains(n));

        if has(&["simplif", "allege", "all\u{e9}g"]) {
            Self::ReelSimplifie
        } else if has(&["forfait"]) {
            Self::Forfaitaire
        } else if has(&["micro"]) {
            Self::MicroEntreprise
        } else if has(&["smt", "minimal"]) {
            Self::Smt
        } else {
            Self::ReelNormal
        }
    }
}

impl std::fmt::Display for RegimeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegimeCode {
    type Err = RegimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| RegimeError::UnknownCode(s.to_string()))
    }
}

/// Whether a document must be produced under a regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    /// Mandatory.
    Applicable,
    /// Not required.
    NotApplicable,
}

impl Applicability {
    /// Recap sheet label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applicable => "Applicable",
            Self::NotApplicable => "Non applicable",
        }
    }

    /// Returns true if the document is mandatory.
    #[must_use]
    pub const fn is_applicable(self) -> bool {
        matches!(self, Self::Applicable)
    }
}

/// A regime and its mandatory documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeDef {
    /// Regime code.
    pub code: RegimeCode,
    /// Short label.
    pub label: &'static str,
    /// Description.
    pub description: &'static str,
    /// Mandatory document ids, in bundle order.
    pub documents: &'static [&'static str],
    #[serde(skip)]
    index: HashSet<&'static str>,
}

impl RegimeDef {
    pub(super) fn new(
        code: RegimeCode,
        label: &'static str,
        description: &'static str,
        documents: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            label,
            description,
            documents,
            index: documents.iter().copied().collect(),
        }
    }

    /// Returns true if the document is mandatory under this regime.
    #[must_use]
    pub fn is_mandatory(&self, document_id: &str) -> bool {
        self.index.contains(document_id)
    }

    /// Applicability of a document under this regime.
    #[must_use]
    pub fn applicability(&self, document_id: &str) -> Applicability {
        if self.is_mandatory(document_id) {
            Applicability::Applicable
        } else {
            Applicability::NotApplicable
        }
    }

    /// Number of mandatory documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if no document is mandatory.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
