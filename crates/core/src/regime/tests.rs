//! Tests for regime resolution and the notes recap.

use std::collections::BTreeSet;

use rstest::rstest;

use super::recap::{NotesRecap, note_page_id};
use super::table::RegimeTable;
use super::types::{Applicability, RegimeCode, RegimeError};
use crate::pages::{PageCatalogue, PageSection};

fn set(ids: &[&'static str]) -> BTreeSet<&'static str> {
    ids.iter().copied().collect()
}

fn documents(code: RegimeCode) -> BTreeSet<&'static str> {
    RegimeTable::get(code).documents.iter().copied().collect()
}

#[test]
fn test_forfaitaire_fixture() {
    assert_eq!(
        documents(RegimeCode::Forfaitaire),
        set(&[
            "couverture",
            "garde",
            "recevabilite",
            "fiche-r1",
            "fiche-r2",
            "bilan",
            "resultat",
            "garde-bic",
        ])
    );

    for page in PageCatalogue::by_section(PageSection::Notes) {
        assert_eq!(
            RegimeTable::applicability(RegimeCode::Forfaitaire, page.id),
            Applicability::NotApplicable,
            "{}",
            page.id
        );
    }
    assert_eq!(NotesRecap::applicable_count(RegimeCode::Forfaitaire), 0);
}

#[rstest]
#[case(RegimeCode::MicroEntreprise)]
#[case(RegimeCode::Smt)]
fn test_minimal_regime_fixtures(#[case] code: RegimeCode) {
    assert_eq!(
        documents(code),
        set(&[
            "couverture",
            "garde",
            "recevabilite",
            "fiche-r1",
            "fiche-r2",
            "bilan",
            "resultat",
        ])
    );
}

#[test]
fn test_reel_simplifie_fixture() {
    let docs = documents(RegimeCode::ReelSimplifie);
    assert_eq!(docs.len(), 44);
    for id in [
        "fiche-r3", "actif", "passif", "fiche-r4", "note-3c-bis", "note-16a", "note-22",
        "note-31",
    ] {
        assert!(docs.contains(id), "{id}");
    }
    for id in ["tft", "note36-codes", "note-16b", "note-21", "note-23", "note-37"] {
        assert!(!docs.contains(id), "{id}");
    }
    assert_eq!(NotesRecap::applicable_count(RegimeCode::ReelSimplifie), 33);
}

#[test]
fn test_reel_normal_fixture() {
    let docs = documents(RegimeCode::ReelNormal);
    assert_eq!(docs.len(), 64);
    for id in ["note36-codes", "tft", "fiche-r4", "note-16b-bis", "note-39"] {
        assert!(docs.contains(id), "{id}");
    }
    assert!(!docs.contains("garde-bic"));
    assert!(!docs.contains("note36-ciap"));
    assert_eq!(NotesRecap::applicable_count(RegimeCode::ReelNormal), 51);
}

#[test]
fn test_every_mandatory_document_is_a_catalogue_page() {
    for regime in RegimeTable::all() {
        assert_eq!(regime.documents.len(), documents(regime.code).len());
        for id in regime.documents {
            assert!(PageCatalogue::get(id).is_some(), "{} {id}", regime.code);
        }
    }
}

#[rstest]
#[case("REEL_NORMAL", RegimeCode::ReelNormal)]
#[case("reel_simplifie", RegimeCode::ReelSimplifie)]
#[case(" FORFAITAIRE ", RegimeCode::Forfaitaire)]
#[case("MICRO_ENTREPRISE", RegimeCode::MicroEntreprise)]
#[case("SMT", RegimeCode::Smt)]
fn test_parse_codes(#[case] input: &str, #[case] expected: RegimeCode) {
    assert_eq!(input.parse::<RegimeCode>(), Ok(expected));
    assert_eq!(RegimeTable::resolve(input).code, expected);
}

#[test]
fn test_unknown_code_falls_back_to_reel_normal() {
    assert_eq!(
        "BIC".parse::<RegimeCode>(),
        Err(RegimeError::UnknownCode("BIC".to_string()))
    );
    assert_eq!(RegimeCode::parse_or_default("BIC"), RegimeCode::ReelNormal);
    assert_eq!(RegimeTable::resolve("").code, RegimeCode::ReelNormal);
    assert_eq!(RegimeTable::resolve("inconnu").documents.len(), 64);
}

#[rstest]
#[case("Systeme allege", RegimeCode::ReelSimplifie)]
#[case("Syst\u{e8}me All\u{e9}g\u{e9} SYSCOHADA", RegimeCode::ReelSimplifie)]
#[case("Reel simplifie", RegimeCode::ReelSimplifie)]
#[case("Regime du forfait", RegimeCode::Forfaitaire)]
#[case("Micro-entreprise", RegimeCode::MicroEntreprise)]
#[case("SMT", RegimeCode::Smt)]
#[case("Systeme minimal de tresorerie", RegimeCode::Smt)]
#[case("Reel normal", RegimeCode::ReelNormal)]
#[case("", RegimeCode::ReelNormal)]
fn test_detect(#[case] label: &str, #[case] expected: RegimeCode) {
    assert_eq!(RegimeCode::detect(label), expected);
}

#[rstest]
#[case("1", "note-01")]
#[case("9", "note-09")]
#[case("3A", "note-3a")]
#[case("3C BIS", "note-3c-bis")]
#[case("8", "note-08")]
#[case("10", "note-10")]
#[case("16B BIS", "note-16b-bis")]
#[case("27A", "note-27a")]
fn test_note_page_id(#[case] number: &str, #[case] expected: &str) {
    assert_eq!(note_page_id(number), expected);
}

#[test]
fn test_recap_covers_every_note_page() {
    let recap = NotesRecap::build(RegimeCode::ReelNormal);
    let recap_ids: BTreeSet<&str> = recap.iter().map(|line| line.page_id.as_str()).collect();
    let note_ids: BTreeSet<&str> = PageCatalogue::by_section(PageSection::Notes)
        .map(|page| page.id)
        .collect();

    assert_eq!(recap.len(), 51);
    assert_eq!(recap_ids, note_ids);
    assert!(recap.iter().all(|line| line.applicability.is_applicable()));
    assert_eq!(recap[5].number, "3C BIS");
    assert_eq!(recap[5].page_id, "note-3c-bis");
}

#[test]
fn test_regime_labels() {
    let def = RegimeTable::get(RegimeCode::Smt);
    assert_eq!(def.label, "SMT");
    assert_eq!(def.description, "Syst\u{e8}me Minimal de Tr\u{e9}sorerie");
    assert_eq!(RegimeCode::MicroEntreprise.to_string(), "MICRO_ENTREPRISE");
    assert_eq!(Applicability::NotApplicable.label(), "Non applicable");
    assert_eq!(
        serde_json::to_string(&RegimeCode::ReelSimplifie).unwrap(),
        r#""REEL_SIMPLIFIE""#
    );
}
