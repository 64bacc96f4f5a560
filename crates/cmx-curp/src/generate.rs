//! # CURP Generation
//!
//! Derives a CURP from name, birth data, sex, and state. The initials
//! block follows the same derivation as RFC generation but under the
//! RENAPO inconvenient-word list, and every derived letter outside `A–Z`
//! (Ñ included) degrades to `X` so the result always re-validates
//! structurally. The state is resolved through the catalog resolver with
//! the foreign fallback logged.
//!
//! The differentiator defaults to `'0'`; RENAPO assigns real values to
//! disambiguate collisions, which is not reproducible offline.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use cmx_core::{
    first_internal_consonant, first_internal_vowel, first_letter, normalize_name, resolve_state,
};

use crate::checksum::check_digit;
use crate::curp::{Curp, Sex};

/// Four-letter blocks the RENAPO instructions consider inconvenient.
/// A match replaces the second character with `X`. Broader than the SAT
/// list used for RFCs.
const INCONVENIENT_WORDS: &[&str] = &[
    "BACA", "BAKA", "BUEI", "BUEY", "CACA", "CACO", "CAGA", "CAGO", "CAKA", "CAKO", "COGE",
    "COGI", "COJA", "COJE", "COJI", "COJO", "COLA", "CULO", "FALO", "FETO", "GETA", "GUEI",
    "GUEY", "JETA", "JOTO", "KACA", "KACO", "KAGA", "KAGO", "KAKA", "KAKO", "KOGE", "KOGI",
    "KOJA", "KOJE", "KOJI", "KOJO", "KOLA", "KULO", "LILO", "LOCA", "LOCO", "LOKA", "LOKO",
    "MAME", "MAMO", "MEAR", "MEAS", "MEON", "MIAR", "MION", "MOCO", "MOKO", "MULA", "MULO",
    "NACA", "NACO", "PEDA", "PEDO", "PENE", "PIPI", "PITO", "POPO", "PUTA", "PUTO", "QULO",
    "RATA", "ROBA", "ROBE", "ROBO", "RUIN", "SENO", "TETA", "VACA", "VAGA", "VAGO", "VAKA",
    "VUEI", "VUEY", "WUEI", "WUEY",
];

/// Generation input for a CURP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurpRequest {
    /// Given name(s), as written.
    pub given_names: String,
    /// Paternal surname.
    pub paternal_surname: String,
    /// Maternal surname, absent for single-surname names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maternal_surname: Option<String>,
    /// Birth date; only `YYMMDD` is embedded.
    pub birth_date: NaiveDate,
    /// Sex for position 10.
    pub sex: Sex,
    /// Birth state: free text, full name, or two-letter code. Resolved
    /// through the catalog with `NE` as the logged fallback.
    pub state: String,
    /// Position-16 differentiator. RENAPO assigns real values; `'0'` is
    /// the conventional placeholder.
    #[serde(default = "default_differentiator")]
    pub differentiator: char,
}

fn default_differentiator() -> char {
    '0'
}

impl CurpRequest {
    /// Request with the placeholder differentiator.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        given_names: impl Into<String>,
        paternal_surname: impl Into<String>,
        maternal_surname: Option<String>,
        birth_date: NaiveDate,
        sex: Sex,
        state: impl Into<String>,
    ) -> Self {
        Self {
            given_names: given_names.into(),
            paternal_surname: paternal_surname.into(),
            maternal_surname,
            birth_date,
            sex,
            state: state.into(),
            differentiator: default_differentiator(),
        }
    }
}

/// Generate a CURP. Infallible: every degraded input becomes `X` (or
/// `'0'` for a non-alphanumeric differentiator).
pub fn generate(request: &CurpRequest) -> Curp {
    let paternal = normalize_name(&request.paternal_surname);
    let paternal_token = first_token(&paternal);
    let maternal = request
        .maternal_surname
        .as_deref()
        .map(normalize_name)
        .unwrap_or_default();
    let maternal_token = first_token(&maternal);
    let given = normalize_name(&request.given_names);
    let given_token = first_token(&given);

    let mut block = [
        sanitize(first_letter(paternal_token)),
        sanitize(first_internal_vowel(paternal_token)),
        sanitize(first_letter(maternal_token)),
        sanitize(first_letter(given_token)),
    ];
    let word: String = block.iter().collect();
    if INCONVENIENT_WORDS.contains(&word.as_str()) {
        block[1] = 'X';
    }

    let consonants = [
        sanitize(first_internal_consonant(paternal_token)),
        sanitize(first_internal_consonant(maternal_token)),
        sanitize(first_internal_consonant(given_token)),
    ];

    let state = resolve_state(&request.state);

    let differentiator = {
        let c = request.differentiator.to_ascii_uppercase();
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            c
        } else {
            '0'
        }
    };

    let mut base: String = block.iter().collect();
    base.push_str(&format!(
        "{:02}{:02}{:02}",
        request.birth_date.year().rem_euclid(100),
        request.birth_date.month(),
        request.birth_date.day()
    ));
    base.push(request.sex.code());
    base.push_str(state.code());
    base.extend(consonants);
    base.push(differentiator);

    let check = check_digit(&base).expect("derived base is in the check alphabet");
    let candidate = format!("{base}{check}");
    Curp::parse(&candidate).expect("generated CURP re-validates")
}

/// Degrade a derived character to the CURP letter alphabet.
///
/// The CURP grammar has no Ñ slot — the consonant block in particular is
/// `A–Z` consonants only — so Ñ maps to X like any other out-of-alphabet
/// character. Vowel slots never receive Ñ, so one rule covers all
/// derived positions.
fn sanitize(c: Option<char>) -> char {
    match c {
        Some(c) if c.is_ascii_uppercase() => c,
        _ => 'X',
    }
}

fn first_token(normalized: &str) -> &str {
    normalized.split_whitespace().next().unwrap_or("")
}
