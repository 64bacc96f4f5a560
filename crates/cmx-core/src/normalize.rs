//! # Legal-Name Normalization
//!
//! Text normalization for deriving RFC and CURP initials from legal names:
//! - Uppercase conversion
//! - Accent stripping via NFD decomposition and combining-mark removal
//!   (Ñ is preserved — it is a letter of its own in these alphabets)
//! - Periods deleted (dotted abbreviations collapse to their bare
//!   tokens); other punctuation replaced with spaces
//! - Whole-word removal of articles, prepositions, and corporate-suffix
//!   tokens
//! - Whitespace collapsing
//!
//! All functions here are pure and infallible: the worst outcome is an
//! empty string, which generation call sites pad with `X`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Words removed wholesale before initials are derived.
///
/// Covers the articles and prepositions dropped from personal surnames
/// ("DE LA TORRE" → "TORRE") and the corporate tokens dropped from legal
/// entity names ("GRUPO ACME SA DE CV" → "GRUPO ACME"). Abridged relative
/// to the government annexes; the contract is the role of the list, not
/// its exact extent.
const EXCLUDED_WORDS: &[&str] = &[
    // Articles and prepositions in compound surnames.
    "DE", "DEL", "LA", "LAS", "LOS", "LE", "LES", "EL", "Y", "E", "EN", "MI", "POR", "CON", "SUS",
    "MC", "MAC", "VON", "VAN", "DA", "DAS", "DER", "DI", "DIE", "DD", "U", "A", "PARA",
    // Corporate-suffix tokens in legal entity names.
    "SA", "CV", "SC", "RL", "AC", "SAB", "SAPI", "COMPANIA", "COMPAÑIA", "CIA", "SOCIEDAD",
    "SOC", "COOPERATIVA", "COOP",
];

/// Uppercase a string and strip diacritics, preserving Ñ.
///
/// NFD decomposition separates base letters from combining marks; every
/// mark is dropped except the tilde over N, which is re-composed into Ñ.
/// This is the shared folding step used by both [`normalize_name`] and the
/// birth-state resolver.
pub fn strip_accents_upper(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.to_uppercase().nfd() {
        if is_combining_mark(c) {
            if c == '\u{0303}' && out.ends_with('N') {
                out.pop();
                out.push('Ñ');
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Normalize a legal name for initials derivation.
///
/// Pipeline: uppercase → accent strip (Ñ preserved) → periods deleted so
/// dotted abbreviations collapse to their bare tokens (`S.A.` → `SA`) →
/// every other character outside `[A-Z0-9Ñ&]` becomes a space →
/// whole-word exclusion-list removal → whitespace collapse.
///
/// Always returns a string; an empty result means the input consisted
/// entirely of punctuation and excluded words.
pub fn normalize_name(raw: &str) -> String {
    let folded = strip_accents_upper(raw);
    let spaced: String = folded
        .chars()
        .filter_map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() || c == 'Ñ' || c == '&' {
                Some(c)
            } else if c == '.' {
                // A period splitting an abbreviation must not split the
                // token: "C.V." has to reach the exclusion list as "CV".
                None
            } else {
                Some(' ')
            }
        })
        .collect();

    spaced
        .split_whitespace()
        .filter(|token| !EXCLUDED_WORDS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character of a token, if any.
pub fn first_letter(token: &str) -> Option<char> {
    token.chars().next()
}

/// First vowel strictly after the first character of a token.
///
/// Vowels are `AEIOU`; accented forms are expected to have been folded
/// away before this is called.
pub fn first_internal_vowel(token: &str) -> Option<char> {
    token.chars().skip(1).find(|c| is_vowel(*c))
}

/// First consonant strictly after the first character of a token.
///
/// Ñ counts as a consonant here; CURP call sites substitute X for it
/// because the CURP alphabet excludes Ñ from derived positions.
pub fn first_internal_consonant(token: &str) -> Option<char> {
    token
        .chars()
        .skip(1)
        .find(|c| (c.is_ascii_uppercase() || *c == 'Ñ') && !is_vowel(*c))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- strip_accents_upper --

    #[test]
    fn accents_removed() {
        assert_eq!(strip_accents_upper("José Pérez"), "JOSE PEREZ");
        assert_eq!(strip_accents_upper("Müller"), "MULLER");
    }

    #[test]
    fn enye_preserved() {
        assert_eq!(strip_accents_upper("Muñoz"), "MUÑOZ");
        assert_eq!(strip_accents_upper("ñandú"), "ÑANDU");
    }

    // -- normalize_name --

    #[test]
    fn uppercases_and_collapses() {
        assert_eq!(normalize_name("  juan   carlos "), "JUAN CARLOS");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize_name("O'Higgins, García."), "O HIGGINS GARCIA");
    }

    #[test]
    fn removes_surname_particles() {
        assert_eq!(normalize_name("de la Torre"), "TORRE");
        assert_eq!(normalize_name("Ponce de León"), "PONCE LEON");
    }

    #[test]
    fn removes_corporate_tokens() {
        assert_eq!(normalize_name("Grupo Acme, S.A. de C.V."), "GRUPO ACME");
        assert_eq!(
            normalize_name("Compañía Industrial del Norte SA"),
            "INDUSTRIAL NORTE"
        );
    }

    #[test]
    fn dotted_suffixes_collapse_before_exclusion() {
        // S.A. and C.V. must reach the exclusion list as SA and CV, not
        // survive as the fragments S A / C V.
        assert_eq!(normalize_name("Kodak, S.A. de C.V."), "KODAK");
        assert_eq!(normalize_name("S.A.P.I. de C.V."), "");
    }

    #[test]
    fn ampersand_survives() {
        assert_eq!(normalize_name("Ruiz & Asociados"), "RUIZ & ASOCIADOS");
    }

    #[test]
    fn empty_input_empty_output() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("de la"), "");
        assert_eq!(normalize_name("..."), "");
    }

    // -- pickers --

    #[test]
    fn first_letter_of_token() {
        assert_eq!(first_letter("GARCIA"), Some('G'));
        assert_eq!(first_letter(""), None);
    }

    #[test]
    fn internal_vowel_skips_first_char() {
        // The leading A of ARMENDARIZ must not count as internal.
        assert_eq!(first_internal_vowel("ARMENDARIZ"), Some('E'));
        assert_eq!(first_internal_vowel("GARCIA"), Some('A'));
        assert_eq!(first_internal_vowel("NG"), None);
    }

    #[test]
    fn internal_consonant_skips_first_char() {
        assert_eq!(first_internal_consonant("GARCIA"), Some('R'));
        assert_eq!(first_internal_consonant("PEÑA"), Some('Ñ'));
        assert_eq!(first_internal_consonant("AE"), None);
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Normalization is idempotent: a normalized name re-normalizes
            /// to itself.
            #[test]
            fn normalize_idempotent(raw in "\\PC{0,60}") {
                let once = normalize_name(&raw);
                let twice = normalize_name(&once);
                prop_assert_eq!(once, twice);
            }

            /// The output alphabet is exactly [A-Z0-9Ñ& ] with no leading,
            /// trailing, or doubled spaces.
            #[test]
            fn normalize_output_alphabet(raw in "\\PC{0,60}") {
                let out = normalize_name(&raw);
                let in_alphabet = out.chars().all(|c| {
                    c.is_ascii_uppercase() || c.is_ascii_digit() || c == 'Ñ' || c == '&' || c == ' '
                });
                prop_assert!(in_alphabet, "out of alphabet: {:?}", out);
                prop_assert!(!out.starts_with(' '));
                prop_assert!(!out.ends_with(' '));
                prop_assert!(!out.contains("  "));
            }
        }
    }
}
