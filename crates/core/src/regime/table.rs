//! Static table of the mandatory documents of each regime.
//!
//! Each set is authored on its own; no regime is derived from another.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::{Applicability, RegimeCode, RegimeDef};

#[rustfmt::skip]
const REEL_NORMAL: &[&str] = &[
    "couverture", "garde", "recevabilite",
    "note36-codes", "fiche-r1", "fiche-r2", "fiche-r3",
    "bilan", "actif", "passif", "resultat", "tft", "fiche-r4",
    "note-01", "note-02",
    "note-3a", "note-3b", "note-3c", "note-3c-bis", "note-3d", "note-3e",
    "note-04", "note-05", "note-06", "note-07",
    "note-08", "note-8a", "note-8b", "note-8c",
    "note-09", "note-10", "note-11", "note-12", "note-13", "note-14",
    "note-15a", "note-15b",
    "note-16a", "note-16b", "note-16b-bis", "note-16c",
    "note-17", "note-18", "note-19", "note-20", "note-21", "note-22",
    "note-23", "note-24", "note-25", "note-26",
    "note-27a", "note-27b",
    "note-28", "note-29", "note-30", "note-31", "note-32", "note-33", "note-34", "note-35",
    "note-37", "note-38", "note-39",
];

#[rustfmt::skip]
const REEL_SIMPLIFIE: &[&str] = &[
    "couverture", "garde", "recevabilite",
    "fiche-r1", "fiche-r2", "fiche-r3",
    "bilan", "actif", "passif", "resultat", "fiche-r4",
    "note-01", "note-02",
    "note-3a", "note-3b", "note-3c", "note-3c-bis", "note-3d", "note-3e",
    "note-04", "note-05", "note-06", "note-07",
    "note-08", "note-8a", "note-8b", "note-8c",
    "note-09", "note-10", "note-11", "note-12", "note-13", "note-14",
    "note-15a", "note-15b",
    "note-16a",
    "note-17", "note-18", "note-19", "note-20", "note-22",
    "note-27a", "note-27b",
    "note-31",
];

#[rustfmt::skip]
const FORFAITAIRE: &[&str] = &[
    "couverture", "garde", "recevabilite",
    "fiche-r1", "fiche-r2",
    "bilan", "resultat",
    "garde-bic",
];

#[rustfmt::skip]
const MICRO_ENTREPRISE: &[&str] = &[
    "couverture", "garde", "recevabilite",
    "fiche-r1", "fiche-r2",
    "bilan", "resultat",
];

#[rustfmt::skip]
const SMT: &[&str] = &[
    "couverture", "garde", "recevabilite",
    "fiche-r1", "fiche-r2",
    "bilan", "resultat",
];

static REGIMES: Lazy<HashMap<RegimeCode, RegimeDef>> = Lazy::new(|| {
    [
        RegimeDef::new(
            RegimeCode::ReelNormal,
            "R\u{e9}el Normal",
            "Syst\u{e8}me Normal SYSCOHADA",
            REEL_NORMAL,
        ),
        RegimeDef::new(
            RegimeCode::ReelSimplifie,
            "R\u{e9}el Simplifi\u{e9}",
            "Syst\u{e8}me All\u{e9}g\u{e9} SYSCOHADA",
            REEL_SIMPLIFIE,
        ),
        RegimeDef::new(
            RegimeCode::Forfaitaire,
            "Forfaitaire",
            "R\u{e9}gime du forfait",
            FORFAITAIRE,
        ),
        RegimeDef::new(
            RegimeCode::MicroEntreprise,
            "Micro-entreprise",
            "R\u{e9}gime micro-entreprise",
            MICRO_ENTREPRISE,
        ),
        RegimeDef::new(
            RegimeCode::Smt,
            "SMT",
            "Syst\u{e8}me Minimal de Tr\u{e9}sorerie",
            SMT,
        ),
    ]
    .into_iter()
    .map(|def| (def.code, def))
    .collect()
});

/// Lookup service over the regime table.
pub struct RegimeTable;

impl RegimeTable {
    /// Definition of a regime.
    #[must_use]
    pub fn get(code: RegimeCode) -> &'static RegimeDef {
        &REGIMES[&code]
    }

    /// Definition of a regime given as a string; unknown codes resolve to
    /// the normal regime.
    #[must_use]
    pub fn resolve(code: &str) -> &'static RegimeDef {
        Self::get(RegimeCode::parse_or_default(code))
    }

    /// Returns true if the document is mandatory under the regime.
    #[must_use]
    pub fn is_mandatory(code: RegimeCode, document_id: &str) -> bool {
        Self::get(code).is_mandatory(document_id)
    }

    /// Applicability of a document under the regime.
    #[must_use]
    pub fn applicability(code: RegimeCode, document_id: &str) -> Applicability {
        Self::get(code).applicability(document_id)
    }

    /// Every regime definition, in presentation order.
    pub fn all() -> impl Iterator<Item = &'static RegimeDef> {
        RegimeCode::ALL.into_iter().map(Self::get)
    }
}
