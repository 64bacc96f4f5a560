//! # NSS Newtype, Check Digit, and Generation
//!
//! The check digit is Luhn-style: reverse the first 10 digits, double
//! every digit at an even index of the reversed order, reduce any
//! two-digit product by summing its decimal digits, sum everything, and
//! take `(10 - sum mod 10) mod 10`. Doubling alternates from the right,
//! which is what the reversal expresses.

use serde::Serialize;

use cmx_core::{impl_validating_deserialize, ValidationError, ValidationReport};

/// Component widths: subdelegation, registration year, serial.
const SUBDELEGATION_WIDTH: usize = 5;
const YEAR_WIDTH: usize = 2;
const SERIAL_WIDTH: usize = 3;

/// A validated NSS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Nss(String);

impl_validating_deserialize!(Nss);

impl Nss {
    /// Parse and validate a candidate: exactly 11 digits, then checksum.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`ValidationError`].
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        let canonical = candidate.trim().to_string();
        check_structure(&canonical)?;
        check_checksum(&canonical)?;
        Ok(Self(canonical))
    }

    /// The NSS digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 5-digit IMSS subdelegation code.
    pub fn subdelegation(&self) -> &str {
        &self.0[..SUBDELEGATION_WIDTH]
    }

    /// The 2-digit registration year.
    pub fn registration_year(&self) -> &str {
        &self.0[SUBDELEGATION_WIDTH..SUBDELEGATION_WIDTH + YEAR_WIDTH]
    }

    /// The 3-digit serial. See the crate docs for the folio-width
    /// ambiguity around this slot.
    pub fn serial(&self) -> &str {
        let start = SUBDELEGATION_WIDTH + YEAR_WIDTH;
        &self.0[start..start + SERIAL_WIDTH]
    }

    /// The check digit.
    pub fn check_char(&self) -> char {
        self.0.as_bytes()[10] as char
    }
}

impl std::fmt::Display for Nss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_structure(s: &str) -> Result<(), ValidationError> {
    if s.chars().count() != 11 {
        return Err(ValidationError::MalformedLength {
            expected: "exactly 11 digits",
            actual: s.chars().count(),
        });
    }
    for (i, c) in s.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(ValidationError::MalformedCharset {
                position: i,
                found: c,
                expected: "ASCII digit",
            });
        }
    }
    Ok(())
}

fn check_checksum(s: &str) -> Result<(), ValidationError> {
    let expected = check_digit(&s[..10])?;
    let found = s.as_bytes()[10] as char;
    if expected != found {
        return Err(ValidationError::ChecksumMismatch { expected, found });
    }
    Ok(())
}

/// Compute the check digit for the first 10 digits of an NSS.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedLength`] unless `digits` is
/// exactly 10 characters, and [`ValidationError::MalformedCharset`] on
/// any non-digit.
pub fn check_digit(digits: &str) -> Result<char, ValidationError> {
    if digits.chars().count() != 10 {
        return Err(ValidationError::MalformedLength {
            expected: "exactly 10 digits before the check digit",
            actual: digits.chars().count(),
        });
    }

    let mut sum: u32 = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let d = c.to_digit(10).ok_or(ValidationError::MalformedCharset {
            position: 9 - i,
            found: c,
            expected: "ASCII digit",
        })?;
        let term = if i % 2 == 0 {
            let doubled = d * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            d
        };
        sum += term;
    }

    let digit = (10 - sum % 10) % 10;
    Ok(char::from_digit(digit, 10).expect("single digit"))
}

/// Generate an NSS from its three components.
///
/// Components must be digits-only; each is left-padded with zeros to its
/// width (5/2/3), and overlong input keeps its rightmost digits.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidComponent`] when a component is
/// empty or contains a non-digit.
pub fn generate(
    subdelegation: &str,
    year: &str,
    serial: &str,
) -> Result<Nss, ValidationError> {
    let subdelegation = pad_component(subdelegation, SUBDELEGATION_WIDTH, "subdelegation")?;
    let year = pad_component(year, YEAR_WIDTH, "registration year")?;
    let serial = pad_component(serial, SERIAL_WIDTH, "serial")?;

    let base = format!("{subdelegation}{year}{serial}");
    let check = check_digit(&base)?;
    Ok(Nss(format!("{base}{check}")))
}

/// Zero-pad a digits-only component to `width`, keeping the rightmost
/// digits when longer.
fn pad_component(
    raw: &str,
    width: usize,
    component: &'static str,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidComponent {
            component,
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ValidationError::InvalidComponent {
            component,
            reason: format!("contains non-digit '{bad}'"),
        });
    }
    if trimmed.len() >= width {
        Ok(trimmed[trimmed.len() - width..].to_string())
    } else {
        Ok(format!("{trimmed:0>width$}"))
    }
}

/// Non-throwing validation: format stage, then checksum.
pub fn validate(candidate: &str) -> ValidationReport {
    let canonical = candidate.trim();
    if check_structure(canonical).is_err() {
        return ValidationReport::failed_format();
    }
    ValidationReport::from_stages(None, None, Some(check_checksum(canonical).is_ok()))
}

/// Boolean projection of [`validate`]. Never panics.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).valid
}
