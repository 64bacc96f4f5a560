//! # RFC Check Character
//!
//! The SAT check character is a weighted mod-11 sum over a 39-symbol
//! alphabet. The weighted base is always 12 characters: a 13-character
//! persona RFC contributes its first 12, a 12-character moral RFC
//! contributes a leading space plus its first 11. Position `i` of the
//! padded base carries weight `13 - i`.

use cmx_core::ValidationError;

/// The 39-symbol SAT value alphabet, index = value.
///
/// `&` sits between N and O, the pad space at 37, Ñ last. The space slot
/// is what makes the moral left-pad well-defined.
const CHECK_ALPHABET: &str = "0123456789ABCDEFGHIJKLMN&OPQRSTUVWXYZ Ñ";

/// Width of the weighted base after padding.
const BASE_WIDTH: usize = 12;

/// Value of one character under the SAT alphabet.
fn char_value(c: char) -> Option<u32> {
    CHECK_ALPHABET.chars().position(|a| a == c).map(|i| i as u32)
}

/// Compute the check character for an RFC body.
///
/// `base` is the identifier without its check character: 12 characters
/// for a persona física RFC, 11 for a persona moral (left-padded with a
/// space internally). Remainder 0 maps to `'0'`, `11 - r == 10` maps to
/// `'A'`, anything else to the digit `11 - r`.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedLength`] for any other width and
/// [`ValidationError::MalformedCharset`] for characters outside the
/// alphabet.
pub fn check_character(base: &str) -> Result<char, ValidationError> {
    let len = base.chars().count();
    if len != BASE_WIDTH && len != BASE_WIDTH - 1 {
        return Err(ValidationError::MalformedLength {
            expected: "11 or 12 characters before the check character",
            actual: len,
        });
    }

    let mut sum: u32 = 0;
    let pad = BASE_WIDTH - len;
    for (i, c) in base.chars().enumerate() {
        let value = char_value(c).ok_or(ValidationError::MalformedCharset {
            position: i,
            found: c,
            expected: "SAT check alphabet (A-Z, 0-9, Ñ, &)",
        })?;
        let weight = (BASE_WIDTH - (i + pad) + 1) as u32;
        sum += value * weight;
    }
    // The implicit leading space has value 37 and weight 13.
    if pad == 1 {
        sum += 37 * 13;
    }

    let remainder = sum % 11;
    Ok(match 11 - remainder {
        11 => '0',
        10 => 'A',
        d => char::from_digit(d, 10).expect("single digit"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_persona_vector() {
        // GODE561231GR8: the check character of the first 12 characters
        // must be the 13th.
        assert_eq!(check_character("GODE561231GR").expect("valid base"), '8');
    }

    #[test]
    fn provisional_homoclave_base() {
        assert_eq!(check_character("GODE561231XX").expect("valid base"), '8');
    }

    #[test]
    fn moral_base_is_space_padded() {
        // An 11-character moral base must compute under the implicit
        // leading space, not as a short persona base.
        let eleven = "GUA010203XX";
        let explicit = format!(" {eleven}");
        // The explicit form is 12 chars and computes directly; both
        // paths must agree.
        let padded: u32 = explicit
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let v = super::char_value(c).expect("in alphabet");
                v * (13 - i as u32)
            })
            .sum();
        let expected = match 11 - padded % 11 {
            11 => '0',
            10 => 'A',
            d => char::from_digit(d, 10).expect("digit"),
        };
        assert_eq!(check_character(eleven).expect("valid base"), expected);
    }

    #[test]
    fn enye_and_ampersand_have_values() {
        assert!(check_character("ÑAÑO010101XX").is_ok());
        assert!(check_character("A&B010101XX").is_ok());
    }

    #[test]
    fn rejects_bad_width() {
        assert!(matches!(
            check_character("GODE56"),
            Err(ValidationError::MalformedLength { .. })
        ));
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(matches!(
            check_character("GODE561231G!"),
            Err(ValidationError::MalformedCharset { position: 11, .. })
        ));
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The check character is a pure function of the base.
            #[test]
            fn deterministic(base in "[A-Z]{4}[0-9]{6}[A-Z0-9]{2}") {
                let a = check_character(&base).expect("valid base");
                let b = check_character(&base).expect("valid base");
                prop_assert_eq!(a, b);
            }

            /// Output is always a digit or 'A'.
            #[test]
            fn output_alphabet(base in "[A-ZÑ&]{3}[0-9]{6}[A-Z0-9]{2}") {
                let c = check_character(&base).expect("valid base");
                prop_assert!(c.is_ascii_digit() || c == 'A');
            }
        }
    }
}
