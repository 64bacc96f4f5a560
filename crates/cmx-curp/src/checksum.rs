//! # CURP Check Digit
//!
//! A weighted mod-10 sum over the 37-symbol RENAPO alphabet (digits,
//! letters, Ñ between N and O). Position `i` of the first 17 characters
//! carries weight `18 - i`; the check digit is `(10 - sum mod 10) mod 10`.

use cmx_core::ValidationError;

/// The 37-symbol RENAPO value alphabet, index = value.
const CHECK_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

/// Value of one character under the RENAPO alphabet.
fn char_value(c: char) -> Option<u32> {
    CHECK_ALPHABET.chars().position(|a| a == c).map(|i| i as u32)
}

/// Compute the check digit for the first 17 characters of a CURP.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedLength`] unless `base` is exactly
/// 17 characters, and [`ValidationError::MalformedCharset`] for
/// characters outside the alphabet.
pub fn check_digit(base: &str) -> Result<char, ValidationError> {
    let len = base.chars().count();
    if len != 17 {
        return Err(ValidationError::MalformedLength {
            expected: "exactly 17 characters before the check digit",
            actual: len,
        });
    }

    let mut sum: u32 = 0;
    for (i, c) in base.chars().enumerate() {
        let value = char_value(c).ok_or(ValidationError::MalformedCharset {
            position: i,
            found: c,
            expected: "RENAPO check alphabet (0-9, A-Z, Ñ)",
        })?;
        sum += value * (18 - i as u32);
    }

    let digit = (10 - sum % 10) % 10;
    Ok(char::from_digit(digit, 10).expect("single digit"))
}
