//! # RFC Generation
//!
//! Derives a best-effort RFC from a legal name and date. The letter block
//! follows the SAT derivation rules over [`cmx_core::normalize_name`]
//! output; the homoclave is always the literal [`PROVISIONAL_HOMOCLAVE`]
//! because real homoclave assignment is an opaque process inside SAT with
//! no public algorithm. Callers must treat generated RFCs as provisional
//! until confirmed against the registry.
//!
//! Generation is infallible: missing name parts degrade to `X`, and any
//! derived character outside the structural alphabet is substituted with
//! `X`, so generated values always re-validate.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use cmx_core::{first_internal_vowel, first_letter, normalize_name};

use crate::checksum::check_character;
use crate::rfc::Rfc;

/// The literal homoclave emitted by generation.
///
/// This is a placeholder, not an approximation: SAT assigns homoclaves
/// through an unpublished procedure, and inventing a compliant-looking
/// value would be worse than an explicit marker.
pub const PROVISIONAL_HOMOCLAVE: &str = "XX";

/// Four-letter blocks the SAT annex considers inconvenient. When the
/// derived persona block matches, its second character becomes `X`.
const INCONVENIENT_WORDS: &[&str] = &[
    "BUEI", "BUEY", "CACA", "CACO", "CAGA", "CAGO", "CAKA", "CAKO", "COGE", "COJA", "COJE",
    "COJI", "COJO", "CULO", "FETO", "GUEY", "JOTO", "KACA", "KACO", "KAGA", "KAGO", "KAKA",
    "KOGE", "KOJO", "KULO", "MAME", "MAMO", "MEAR", "MEAS", "MEON", "MION", "MOCO", "MULA",
    "PEDA", "PEDO", "PENE", "PUTA", "PUTO", "QULO", "RATA", "RUIN",
];

/// Generation input for a persona física RFC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaRequest {
    /// Given name(s), as written.
    pub given_names: String,
    /// Paternal surname.
    pub paternal_surname: String,
    /// Maternal surname, absent for single-surname names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maternal_surname: Option<String>,
    /// Birth date; only `YYMMDD` is embedded in the RFC.
    pub birth_date: NaiveDate,
}

/// Generation input for a persona moral RFC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoralRequest {
    /// Registered legal name, suffixes included; normalization drops them.
    pub legal_name: String,
    /// Incorporation date; only `YYMMDD` is embedded in the RFC.
    pub incorporation_date: NaiveDate,
}

/// Generate a provisional persona física RFC.
///
/// Letter block: paternal initial, first internal vowel of the paternal
/// surname (or `X`), maternal initial (or `X`), given-name initial. An
/// inconvenient-word match replaces the second character with `X`.
pub fn generate_persona(request: &PersonaRequest) -> Rfc {
    let paternal = normalize_name(&request.paternal_surname);
    let paternal_token = first_token(&paternal);
    let maternal = request
        .maternal_surname
        .as_deref()
        .map(normalize_name)
        .unwrap_or_default();
    let given = normalize_name(&request.given_names);

    let mut block: Vec<char> = vec![
        first_letter(paternal_token).unwrap_or('X'),
        first_internal_vowel(paternal_token).unwrap_or('X'),
        first_letter(first_token(&maternal)).unwrap_or('X'),
        first_letter(first_token(&given)).unwrap_or('X'),
    ];
    for c in block.iter_mut() {
        if !c.is_ascii_uppercase() && *c != 'Ñ' {
            *c = 'X';
        }
    }

    let word: String = block.iter().collect();
    if INCONVENIENT_WORDS.contains(&word.as_str()) {
        block[1] = 'X';
    }

    assemble(&block, request.birth_date)
}

/// Generate a provisional persona moral RFC.
///
/// Letter block by word count of the normalized legal name: one word
/// contributes its first three letters; two words contribute the first
/// word's initial and first internal vowel plus the second word's
/// initial; three or more contribute the first three initials. The block
/// is right-padded with `X` to three characters.
pub fn generate_moral(request: &MoralRequest) -> Rfc {
    let name = normalize_name(&request.legal_name);
    let words: Vec<&str> = name.split_whitespace().collect();

    let mut block: Vec<char> = match words.len() {
        0 => Vec::new(),
        1 => words[0].chars().take(3).collect(),
        2 => vec![
            first_letter(words[0]).unwrap_or('X'),
            first_internal_vowel(words[0]).unwrap_or('X'),
            first_letter(words[1]).unwrap_or('X'),
        ],
        _ => words
            .iter()
            .take(3)
            .map(|w| first_letter(w).unwrap_or('X'))
            .collect(),
    };

    while block.len() < 3 {
        block.push('X');
    }
    for c in block.iter_mut() {
        if !c.is_ascii_uppercase() && *c != 'Ñ' && *c != '&' {
            *c = 'X';
        }
    }

    assemble(&block, request.incorporation_date)
}

/// Append date, provisional homoclave, and check character.
fn assemble(block: &[char], date: NaiveDate) -> Rfc {
    let mut body: String = block.iter().collect();
    body.push_str(&format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    ));
    body.push_str(PROVISIONAL_HOMOCLAVE);

    let check = check_character(&body).expect("derived body is in the check alphabet");
    let candidate = format!("{body}{check}");
    Rfc::parse(&candidate).expect("generated RFC re-validates")
}

fn first_token(normalized: &str) -> &str {
    normalized.split_whitespace().next().unwrap_or("")
}
