//! # Cross-Crate Integration Seams
//!
//! End-to-end flows that exercise the wiring between crates: one
//! person's civil data flowing through both the RFC and CURP engines,
//! the shared normalization layer, and generation feeding back into
//! strict parsing.

use chrono::NaiveDate;

use cmx_core::BirthState;
use cmx_curp::{CurpRequest, Sex};
use cmx_rfc::{MoralRequest, PersonaRequest};

fn birth_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// =========================================================================
// One person, two identifiers
// =========================================================================

#[test]
fn same_person_yields_consistent_rfc_and_curp() {
    let rfc = cmx_rfc::generate_persona(&PersonaRequest {
        given_names: "José".to_string(),
        paternal_surname: "Pérez".to_string(),
        maternal_surname: Some("García".to_string()),
        birth_date: birth_date(1990, 5, 12),
    });
    let curp = cmx_curp::generate(&CurpRequest::new(
        "José",
        "Pérez",
        Some("García".to_string()),
        birth_date(1990, 5, 12),
        Sex::Hombre,
        "Jalisco",
    ));

    // Both identifiers derive the same initials block and embed the same
    // date digits; everything after diverges by format.
    assert_eq!(&rfc.as_str()[..4], "PEGJ");
    assert_eq!(&curp.as_str()[..4], "PEGJ");
    assert_eq!(rfc.date_digits(), "900512");
    assert_eq!(&curp.as_str()[4..10], "900512");
    assert_eq!(curp.as_str(), "PEGJ900512HJCRRS04");
}

#[test]
fn rfc_keeps_enye_where_curp_degrades_it() {
    let person = ("Pedro", "Ñuño", Some("López".to_string()));
    let rfc = cmx_rfc::generate_persona(&PersonaRequest {
        given_names: person.0.to_string(),
        paternal_surname: person.1.to_string(),
        maternal_surname: person.2.clone(),
        birth_date: birth_date(1985, 3, 9),
    });
    let curp = cmx_curp::generate(&CurpRequest::new(
        person.0,
        person.1,
        person.2,
        birth_date(1985, 3, 9),
        Sex::Hombre,
        "Zacatecas",
    ));

    let rfc_block: String = rfc.as_str().chars().take(4).collect();
    let curp_block: String = curp.as_str().chars().take(4).collect();
    assert_eq!(rfc_block, "ÑULP");
    assert_eq!(curp_block, "XULP");
}

#[test]
fn cacophonic_block_is_masked_in_both_engines() {
    // Costa Jiménez, Eduardo derives COJE, which is on both the SAT and
    // RENAPO lists; the second character is replaced in both engines.
    let rfc = cmx_rfc::generate_persona(&PersonaRequest {
        given_names: "Eduardo".to_string(),
        paternal_surname: "Costa".to_string(),
        maternal_surname: Some("Jiménez".to_string()),
        birth_date: birth_date(1972, 11, 2),
    });
    let curp = cmx_curp::generate(&CurpRequest::new(
        "Eduardo",
        "Costa",
        Some("Jiménez".to_string()),
        birth_date(1972, 11, 2),
        Sex::Hombre,
        "SR",
    ));

    assert_eq!(&rfc.as_str()[..4], "CXJE");
    assert_eq!(&curp.as_str()[..4], "CXJE");
}

#[test]
fn renapo_list_is_broader_than_sat_list() {
    // Bazán Cruz, Andrés derives BACA — inconvenient per RENAPO but not
    // per the SAT annex, so only the CURP masks it.
    let rfc = cmx_rfc::generate_persona(&PersonaRequest {
        given_names: "Andrés".to_string(),
        paternal_surname: "Bazán".to_string(),
        maternal_surname: Some("Cruz".to_string()),
        birth_date: birth_date(1972, 11, 2),
    });
    let curp = cmx_curp::generate(&CurpRequest::new(
        "Andrés",
        "Bazán",
        Some("Cruz".to_string()),
        birth_date(1972, 11, 2),
        Sex::Hombre,
        "SR",
    ));

    assert_eq!(&rfc.as_str()[..4], "BACA");
    assert_eq!(&curp.as_str()[..4], "BXCA");
}

// =========================================================================
// Generation feeds strict parsing
// =========================================================================

#[test]
fn generated_persona_rfc_parses_strictly() {
    let rfc = cmx_rfc::generate_persona(&PersonaRequest {
        given_names: "Emma".to_string(),
        paternal_surname: "Gómez".to_string(),
        maternal_surname: Some("Díaz".to_string()),
        birth_date: birth_date(1956, 12, 31),
    });
    assert_eq!(rfc.as_str(), "GODE561231XX8");

    let reparsed = cmx_rfc::Rfc::parse(rfc.as_str()).expect("round-trips");
    assert_eq!(reparsed.homoclave(), cmx_rfc::PROVISIONAL_HOMOCLAVE);
    assert_eq!(reparsed.date(), Some(birth_date(1956, 12, 31)));
}

#[test]
fn generated_moral_rfc_parses_strictly() {
    let rfc = cmx_rfc::generate_moral(&MoralRequest {
        legal_name: "Kodak Mexicana S.A. de C.V.".to_string(),
        incorporation_date: birth_date(2001, 7, 15),
    });
    assert_eq!(rfc.kind(), cmx_rfc::RfcKind::Moral);
    assert!(cmx_rfc::is_valid(rfc.as_str()));
}

#[test]
fn generated_curp_resolves_state_from_free_text() {
    let by_name = cmx_curp::generate(&CurpRequest::new(
        "María",
        "López",
        Some("Hernández".to_string()),
        birth_date(2001, 1, 1),
        Sex::Mujer,
        "Ciudad de México",
    ));
    let by_code = cmx_curp::generate(&CurpRequest::new(
        "María",
        "López",
        Some("Hernández".to_string()),
        birth_date(2001, 1, 1),
        Sex::Mujer,
        "DF",
    ));
    assert_eq!(by_name.as_str(), by_code.as_str());
    assert_eq!(by_name.birth_state(), Some(BirthState::CiudadDeMexico));
}

#[test]
fn foreign_birth_falls_back_to_ne() {
    let curp = cmx_curp::generate(&CurpRequest::new(
        "John",
        "Smith",
        None,
        birth_date(1995, 6, 30),
        Sex::Hombre,
        "Texas",
    ));
    assert_eq!(curp.state_digraph(), "NE");
    assert_eq!(curp.birth_state(), Some(BirthState::Foreign));
}

#[test]
fn generated_clabe_and_nss_validate() {
    let clabe = cmx_clabe::generate("2", "10", "7777777777").expect("digits");
    assert_eq!(clabe.as_str(), "002010077777777771");
    assert!(cmx_clabe::is_valid(clabe.as_str()));

    let nss = cmx_nss::generate("12345", "67", "890").expect("digits");
    assert_eq!(nss.as_str(), "12345678903");
    assert!(cmx_nss::is_valid(nss.as_str()));
}

// =========================================================================
// Century pivot flows through both date-bearing engines
// =========================================================================

#[test]
fn pivot_moves_the_same_two_digit_year_in_rfc_and_curp() {
    let rfc = cmx_rfc::Rfc::parse("GODE561231GR8").expect("valid RFC");
    assert_eq!(rfc.date(), Some(birth_date(1956, 12, 31)));
    assert_eq!(rfc.date_with_pivot(60), Some(birth_date(2056, 12, 31)));

    let curp = cmx_curp::Curp::parse("PEGJ900512HJCRRS04").expect("valid CURP");
    assert_eq!(curp.birth_date(), Some(birth_date(1990, 5, 12)));
    assert_eq!(
        curp.birth_date_with_pivot(95),
        Some(birth_date(2090, 5, 12))
    );
}

// =========================================================================
// Shared report shape
// =========================================================================

#[test]
fn every_engine_reports_the_same_failed_format_shape() {
    for report in [
        cmx_rfc::validate("NOPE"),
        cmx_curp::validate("NOPE"),
        cmx_clabe::validate("NOPE"),
        cmx_nss::validate("NOPE"),
    ] {
        assert!(!report.valid);
        assert!(!report.format);
        assert_eq!(report.date, None);
        assert_eq!(report.homoclave, None);
        assert_eq!(report.checksum, None);
    }
}

#[test]
fn rfc_report_flags_every_failing_stage_at_once() {
    // A non-digit in a date slot is a structural failure, not a date
    // failure.
    let report = cmx_rfc::validate("GODE5613Ñ1GR3");
    assert!(!report.format);

    // Structure passes; date and checksum both fail and both are
    // reported.
    let report = cmx_rfc::validate("GODE561350AB3");
    assert!(report.format);
    assert_eq!(report.date, Some(false));
    assert_eq!(report.homoclave, Some(true));
    assert_eq!(report.checksum, Some(false));
    assert!(!report.valid);
}
