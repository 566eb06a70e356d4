//! Recap of the note annexes (fiche R4).

use serde::Serialize;

use super::table::RegimeTable;
use super::types::{Applicability, RegimeCode};

/// Note numbers and titles, in bundle order.
const NOTES: &[(&str, &str)] = &[
    ("1", "Dettes garanties par des suretes reelles"),
    ("2", "Benefice par action"),
    ("3A", "Immobilisations - Mouvements"),
    ("3B", "Immobilisations - Plus ou moins values"),
    ("3C", "Amortissements"),
    ("3C BIS", "Depreciations et provisions pour risques"),
    ("3D", "Immobilisations financieres"),
    ("3E", "Informations complementaires immobilisations"),
    ("4", "Actif circulant HAO"),
    ("5", "Stocks et en-cours"),
    ("6", "Clients"),
    ("7", "Autres creances"),
    ("8", "Tresorerie - Actif et Passif"),
    ("8A", "Ecarts de conversion Actif"),
    ("8B", "Ecarts de conversion Passif"),
    ("8C", "Charges constatees d'avance"),
    ("9", "Evolution des capitaux propres"),
    ("10", "Capital social"),
    ("11", "Primes et reserves"),
    ("12", "Subventions"),
    ("13", "Provisions reglementees et fonds assimiles"),
    ("14", "Dettes financieres et ressources assimilees"),
    ("15A", "Passif circulant HAO"),
    ("15B", "Fournisseurs d'exploitation"),
    ("16A", "Dettes fiscales et sociales"),
    ("16B", "Autres dettes et provisions pour risques"),
    ("16B BIS", "Echeancier des dettes a la cloture"),
    ("16C", "Engagements hors bilan"),
    ("17", "Chiffre d'affaires et autres produits"),
    ("18", "Autres achats"),
    ("19", "Transports"),
    ("20", "Services exterieurs"),
    ("21", "Impots et taxes"),
    ("22", "Autres charges"),
    ("23", "Charges de personnel"),
    ("24", "Dotations HAO"),
    ("25", "Produits HAO"),
    ("26", "Impots sur le resultat"),
    ("27A", "Personnel"),
    ("27B", "Effectifs, masse salariale et personnel ext."),
    ("28", "Engagements de retraite"),
    ("29", "Operations effectuees en commun"),
    ("30", "Operations effectuees pour compte de tiers"),
    ("31", "Operations en devises"),
    ("32", "Evenements posterieurs a la cloture"),
    ("33", "Liste des points annexes"),
    ("34", "Tableau de determination du resultat fiscal"),
    ("35", "Informations complementaires"),
    ("37", "Tableau de passage aux soldes SIG"),
    ("38", "Detail compte de resultat"),
    ("39", "Autres informations"),
];

/// One note annex with its status under a regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecapLine {
    /// Note number as printed ("3C BIS").
    pub number: &'static str,
    /// Note title.
    pub title: &'static str,
    /// Page identifier ("note-3c-bis").
    pub page_id: String,
    /// Status under the regime.
    pub applicability: Applicability,
}

/// Page identifier of a note number: single digits are zero padded, letters
/// lowercased and spaces turned into dashes.
#[must_use]
pub fn note_page_id(number: &str) -> String {
    let number = number.trim();
    if number.len() == 1 && number.chars().all(|c| c.is_ascii_digit()) {
        return format!("note-0{number}");
    }
    let slug: String = number
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("note-{slug}")
}

/// Builder of the note annex recap.
pub struct NotesRecap;

impl NotesRecap {
    /// Every note annex with its status under the regime.
    #[must_use]
    pub fn build(code: RegimeCode) -> Vec<RecapLine> {
        let regime = RegimeTable::get(code);
        NOTES
            .iter()
            .map(|&(number, title)| {
                let page_id = note_page_id(number);
                RecapLine {
                    number,
                    title,
                    applicability: regime.applicability(&page_id),
                    page_id,
                }
            })
            .collect()
    }

    /// Number of applicable notes under the regime.
    #[must_use]
    pub fn applicable_count(code: RegimeCode) -> usize {
        Self::build(code)
            .iter()
            .filter(|line| line.applicability.is_applicable())
            .count()
    }
}
