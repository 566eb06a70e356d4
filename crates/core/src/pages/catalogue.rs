//! Statutory page catalogue.

use serde::{Deserialize, Serialize};

/// Group a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSection {
    /// Cover and title pages.
    Couverture,
    /// Identification sheets (fiches R).
    Fiches,
    /// Financial statements.
    Etats,
    /// Notes to the financial statements.
    Notes,
    /// Tax supplements.
    Supplements,
    /// Tax-specific title pages.
    Gardes,
    /// Free comment page.
    Commentaire,
}

impl PageSection {
    /// Display label of the section.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Couverture => "Couverture & Garde",
            Self::Fiches => "Fiches R",
            Self::Etats => "Etats financiers",
            Self::Notes => "Notes annexes",
            Self::Supplements => "Supplements",
            Self::Gardes => "Gardes",
            Self::Commentaire => "Commentaire",
        }
    }
}

/// One statutory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDef {
    /// Stable identifier (e.g. "note-3c-bis").
    pub id: &'static str,
    /// Position in the bundle, starting at 1.
    pub number: u8,
    /// Worksheet name in the spreadsheet export.
    pub sheet: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Section.
    pub section: PageSection,
}

const fn page(
    id: &'static str,
    number: u8,
    sheet: &'static str,
    title: &'static str,
    section: PageSection,
) -> PageDef {
    PageDef {
        id,
        number,
        sheet,
        title,
        section,
    }
}

static PAGES: [PageDef; 84] = [
    page("couverture", 1, "COUVERTURE", "LIASSE SYSTEME NORMAL", PageSection::Couverture),
    page("garde", 2, "GARDE", "ETATS FINANCIERS NORMALISES", PageSection::Couverture),
    page("recevabilite", 3, "RECEVABILITE", "CONDITIONS DE RECEVABILITE", PageSection::Couverture),
    page("note36-codes", 4, "NOTE36 (TABLE DES CODES)", "NOTE 36 : TABLE DES CODES", PageSection::Fiches),
    page("note36-ciap", 5, "NOTE36 Suite (Nomenclature)", "NOTE 36 SUITE : NOMENCLATURE CIAP", PageSection::Fiches),
    page("fiche-r1", 6, "FICHE R1", "FICHE R1 - IDENTIFICATION ET RENSEIGNEMENTS DIVERS", PageSection::Fiches),
    page("fiche-r2", 7, "FICHE R2", "FICHE R2 - ACTIVITE", PageSection::Fiches),
    page("fiche-r3", 8, "FICHE R3", "FICHE R3 - PARTICIPATIONS", PageSection::Fiches),
    page("bilan", 9, "BILAN", "BILAN", PageSection::Etats),
    page("actif", 10, "ACTIF", "ACTIF", PageSection::Etats),
    page("passif", 11, "PASSIF", "PASSIF", PageSection::Etats),
    page("resultat", 12, "RESULTAT", "COMPTE DE RESULTAT", PageSection::Etats),
    page("tft", 13, "TFT", "TABLEAU DES FLUX DE TRESORERIE", PageSection::Etats),
    page("fiche-r4", 14, "FICHE R4", "FICHE R4 - RECAPITULATIF NOTES ANNEXES", PageSection::Etats),
    page("note-01", 15, "NOTE 1", "NOTE 1 : DETTES GARANTIES PAR DES SURETES REELLES", PageSection::Notes),
    page("note-02", 16, "NOTE 2", "NOTE 2 : BENEFICE PAR ACTION", PageSection::Notes),
    page("note-3a", 17, "NOTE 3A", "NOTE 3A : IMMOBILISATIONS - MOUVEMENTS", PageSection::Notes),
    page("note-3b", 18, "NOTE 3B", "NOTE 3B : IMMOBILISATIONS - PLUS OU MOINS VALUES", PageSection::Notes),
    page("note-3c", 19, "NOTE 3C", "NOTE 3C : AMORTISSEMENTS", PageSection::Notes),
    page("note-3c-bis", 20, "NOTE 3C BIS", "NOTE 3C BIS : DEPRECIATIONS ET PROVISIONS POUR RISQUES", PageSection::Notes),
    page("note-3d", 21, "NOTE 3D", "NOTE 3D : IMMOBILISATIONS FINANCIERES", PageSection::Notes),
    page("note-3e", 22, "NOTE 3E", "NOTE 3E : INFORMATIONS COMPLEMENTAIRES IMMOBILISATIONS", PageSection::Notes),
    page("note-04", 23, "NOTE 4", "NOTE 4 : ACTIF CIRCULANT HAO", PageSection::Notes),
    page("note-05", 24, "NOTE 5", "NOTE 5 : STOCKS ET ENCOURS", PageSection::Notes),
    page("note-06", 25, "NOTE 6", "NOTE 6 : CLIENTS", PageSection::Notes),
    page("note-07", 26, "NOTE 7", "NOTE 7 : AUTRES CREANCES", PageSection::Notes),
    page("note-08", 27, "NOTE 8", "NOTE 8 : TRESORERIE - ACTIF ET PASSIF", PageSection::Notes),
    page("note-8a", 28, "NOTE 8A", "NOTE 8A : ECARTS DE CONVERSION ACTIF", PageSection::Notes),
    page("note-8b", 29, "NOTE 8B", "NOTE 8B : ECARTS DE CONVERSION PASSIF", PageSection::Notes),
    page("note-8c", 30, "NOTE 8C", "NOTE 8C : CHARGES CONSTATEES D'AVANCE", PageSection::Notes),
    page("note-09", 31, "NOTE 9", "NOTE 9 : EVOLUTION DES CAPITAUX PROPRES", PageSection::Notes),
    page("note-10", 32, "NOTE 10", "NOTE 10 : CAPITAL SOCIAL", PageSection::Notes),
    page("note-11", 33, "NOTE 11", "NOTE 11 : PRIMES ET RESERVES", PageSection::Notes),
    page("note-12", 34, "NOTE 12", "NOTE 12 : SUBVENTIONS", PageSection::Notes),
    page("note-13", 35, "NOTE 13", "NOTE 13 : PROVISIONS REGLEMENTEES ET FONDS ASSIMILES", PageSection::Notes),
    page("note-14", 36, "NOTE 14", "NOTE 14 : DETTES FINANCIERES ET RESSOURCES ASSIMILEES", PageSection::Notes),
    page("note-15a", 37, "NOTE 15A", "NOTE 15A : PASSIF CIRCULANT HAO", PageSection::Notes),
    page("note-15b", 38, "NOTE 15B", "NOTE 15B : FOURNISSEURS D'EXPLOITATION", PageSection::Notes),
    page("note-16a", 39, "NOTE 16A", "NOTE 16A : DETTES FISCALES ET SOCIALES", PageSection::Notes),
    page("note-16b", 40, "NOTE 16B", "NOTE 16B : AUTRES DETTES ET PROVISIONS POUR RISQUES", PageSection::Notes),
    page("note-16b-bis", 41, "NOTE 16B BIS", "NOTE 16B BIS : ECHEANCIER DES DETTES A LA CLOTURE", PageSection::Notes),
    page("note-16c", 42, "NOTE 16C", "NOTE 16C : ENGAGEMENTS HORS BILAN", PageSection::Notes),
    page("note-17", 43, "NOTE 17", "NOTE 17 : CHIFFRE D'AFFAIRES ET AUTRES PRODUITS", PageSection::Notes),
    page("note-18", 44, "NOTE 18", "NOTE 18 : AUTRES ACHATS", PageSection::Notes),
    page("note-19", 45, "NOTE 19", "NOTE 19 : TRANSPORTS", PageSection::Notes),
    page("note-20", 46, "NOTE 20", "NOTE 20 : SERVICES EXTERIEURS", PageSection::Notes),
    page("note-21", 47, "NOTE 21", "NOTE 21 : IMPOTS ET TAXES", PageSection::Notes),
    page("note-22", 48, "NOTE 22", "NOTE 22 : AUTRES CHARGES", PageSection::Notes),
    page("note-23", 49, "NOTE 23", "NOTE 23 : CHARGES DE PERSONNEL", PageSection::Notes),
    page("note-24", 50, "NOTE 24", "NOTE 24 : DOTATIONS HAO", PageSection::Notes),
    page("note-25", 51, "NOTE 25", "NOTE 25 : PRODUITS HAO", PageSection::Notes),
    page("note-26", 52, "NOTE 26", "NOTE 26 : IMPOTS SUR LE RESULTAT", PageSection::Notes),
    page("note-27a", 53, "NOTE 27A", "NOTE 27A : PERSONNEL", PageSection::Notes),
    page("note-27b", 54, "NOTE 27B", "NOTE 27B : EFFECTIFS, MASSE SALARIALE ET PERSONNEL EXT.", PageSection::Notes),
    page("note-28", 55, "NOTE 28", "NOTE 28 : ENGAGEMENTS DE RETRAITE", PageSection::Notes),
    page("note-29", 56, "NOTE 29", "NOTE 29 : OPERATIONS EFFECTUEES EN COMMUN", PageSection::Notes),
    page("note-30", 57, "NOTE 30", "NOTE 30 : OPERATIONS EFFECTUEES POUR COMPTE DE TIERS", PageSection::Notes),
    page("note-31", 58, "NOTE 31", "NOTE 31 : OPERATIONS EN DEVISES", PageSection::Notes),
    page("note-32", 59, "NOTE 32", "NOTE 32 : EVENEMENTS POSTERIEURS A LA CLOTURE", PageSection::Notes),
    page("note-33", 60, "NOTE 33", "NOTE 33 : LISTE DES POINTS ANNEXES", PageSection::Notes),
    page("note-34", 61, "NOTE 34", "NOTE 34 : TABLEAU DE DETERMINATION DU RESULTAT FISCAL", PageSection::Notes),
    page("note-35", 62, "NOTE 35", "NOTE 35 : INFORMATIONS COMPLEMENTAIRES", PageSection::Notes),
    page("note-37", 63, "NOTE 37", "NOTE 37 : TABLEAU DE PASSAGE AUX SOLDES SIG", PageSection::Notes),
    page("note-38", 64, "NOTE 38", "NOTE 38 : DETAIL COMPTE DE RESULTAT", PageSection::Notes),
    page("note-39", 65, "NOTE 39", "NOTE 39 : AUTRES INFORMATIONS", PageSection::Notes),
    page("garde-dgi-ins", 66, "GARDE (DGI-INS)", "GARDE (DGI-INS)", PageSection::Supplements),
    page("notes-dgi-ins", 67, "NOTES DGI - INS", "NOTES DGI - INS", PageSection::Supplements),
    page("comp-charges", 68, "COMP-CHARGES", "COMPLEMENTS CHARGES", PageSection::Supplements),
    page("comp-tva", 69, "COMP-TVA", "COMPLEMENTS TVA", PageSection::Supplements),
    page("comp-tva-2", 70, "COMP-TVA (2)", "COMPLEMENTS TVA (2)", PageSection::Supplements),
    page("suppl1", 71, "SUPPL1", "SUPPLEMENT 1", PageSection::Supplements),
    page("suppl2", 72, "SUPPL2", "SUPPLEMENT 2", PageSection::Supplements),
    page("suppl3", 73, "SUPPL3", "SUPPLEMENT 3", PageSection::Supplements),
    page("suppl4", 74, "SUPPL4", "SUPPLEMENT 4", PageSection::Supplements),
    page("suppl5", 75, "SUPPL5", "SUPPLEMENT 5", PageSection::Supplements),
    page("suppl6", 76, "SUPPL6", "SUPPLEMENT 6", PageSection::Supplements),
    page("suppl7", 77, "SUPPL7", "SUPPLEMENT 7", PageSection::Supplements),
    page("garde-bic", 78, "GARDE (BIC)", "GARDE (BIC)", PageSection::Gardes),
    page("garde-bnc", 79, "GARDE (BNC)", "GARDE (BNC)", PageSection::Gardes),
    page("garde-ba", 80, "GARDE (BA)", "GARDE (BA)", PageSection::Gardes),
    page("garde-301", 81, "GARDE (301)", "GARDE (301)", PageSection::Gardes),
    page("garde-302", 82, "GARDE (302)", "GARDE (302)", PageSection::Gardes),
    page("garde-3", 83, "GARDE(3)", "GARDE (3)", PageSection::Gardes),
    page("commentaire", 84, "COMMENTAIRE", "COMMENTAIRE", PageSection::Commentaire),
];

/// Lookup over the statutory pages.
pub struct PageCatalogue;

impl PageCatalogue {
    /// Every page in bundle order.
    #[must_use]
    pub fn all() -> &'static [PageDef] {
        &PAGES
    }

    /// Finds a page by id.
    #[must_use]
    pub fn get(id: &str) -> Option<&'static PageDef> {
        PAGES.iter().find(|p| p.id == id)
    }

    /// Section of a page, `None` for unknown ids.
    #[must_use]
    pub fn section_of(id: &str) -> Option<PageSection> {
        Self::get(id).map(|p| p.section)
    }

    /// Pages of one section, in bundle order.
    pub fn by_section(section: PageSection) -> impl Iterator<Item = &'static PageDef> {
        PAGES.iter().filter(move |p| p.section == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_is_numbered_in_order() {
        for (i, page) in PageCatalogue::all().iter().enumerate() {
            assert_eq!(usize::from(page.number), i + 1, "{}", page.id);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = PageCatalogue::all().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PageCatalogue::all().len());
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(PageCatalogue::section_of("bilan"), Some(PageSection::Etats));
        assert_eq!(PageCatalogue::section_of("note-3c-bis"), Some(PageSection::Notes));
        assert_eq!(PageCatalogue::section_of("garde-bic"), Some(PageSection::Gardes));
        assert_eq!(PageCatalogue::section_of("commentaire"), Some(PageSection::Commentaire));
        assert_eq!(PageCatalogue::section_of("unknown-page"), None);
    }

    #[test]
    fn test_section_sizes() {
        assert_eq!(PageCatalogue::by_section(PageSection::Couverture).count(), 3);
        assert_eq!(PageCatalogue::by_section(PageSection::Fiches).count(), 5);
        assert_eq!(PageCatalogue::by_section(PageSection::Etats).count(), 6);
        assert_eq!(PageCatalogue::by_section(PageSection::Notes).count(), 51);
        assert_eq!(PageCatalogue::by_section(PageSection::Supplements).count(), 12);
        assert_eq!(PageCatalogue::by_section(PageSection::Gardes).count(), 6);
        assert_eq!(PageCatalogue::by_section(PageSection::Commentaire).count(), 1);
    }
}
