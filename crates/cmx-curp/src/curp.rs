//! # CURP Newtype, Staged Validation, and Field Extraction
//!
//! Positions (0-indexed): 0–3 initials, 4–9 date digits, 10 sex, 11–12
//! state digraph, 13–15 internal consonants, 16 differentiator, 17 check
//! digit. Everything is ASCII uppercase or a digit — derived Ñ is
//! substituted with X at generation time, so the structural alphabet
//! never includes it.

use serde::{Deserialize, Serialize};

use cmx_core::{
    impl_validating_deserialize, infer_full_year, validate_date_digits, BirthState,
    ValidationError, ValidationOptions, ValidationReport, DEFAULT_CENTURY_PIVOT,
};

use crate::checksum::check_digit;

/// Sex as encoded in CURP position 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Hombre (`H`).
    Hombre,
    /// Mujer (`M`).
    Mujer,
}

impl Sex {
    /// The single-character CURP encoding.
    pub fn code(&self) -> char {
        match self {
            Self::Hombre => 'H',
            Self::Mujer => 'M',
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Sex {
    type Err = ValidationError;

    /// Accepts `H`, `M`, or the full words, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "H" | "HOMBRE" => Ok(Self::Hombre),
            "M" | "MUJER" => Ok(Self::Mujer),
            _ => Err(ValidationError::InvalidComponent {
                component: "sex",
                reason: format!("\"{s}\" is not H, M, HOMBRE, or MUJER"),
            }),
        }
    }
}

impl Serialize for Sex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(match self {
            Self::Hombre => "H",
            Self::Mujer => "M",
        })
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A validated CURP.
///
/// Stored trimmed and uppercased. [`Curp::parse`] enforces structure and
/// check digit; [`Curp::parse_lenient`] enforces structure only, for
/// legacy identifiers that predate the checksum rollout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Curp(String);

impl_validating_deserialize!(Curp);

impl Curp {
    /// Parse with structure, date range, and check digit enforced.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`ValidationError`].
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        Self::parse_with(candidate, ValidationOptions::default())
    }

    /// Parse with structure and date range only.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`ValidationError`].
    pub fn parse_lenient(candidate: &str) -> Result<Self, ValidationError> {
        Self::parse_with(
            candidate,
            ValidationOptions {
                verify_checksum: false,
            },
        )
    }

    /// Parse with caller-selected strictness.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`ValidationError`].
    pub fn parse_with(
        candidate: &str,
        options: ValidationOptions,
    ) -> Result<Self, ValidationError> {
        let canonical = canonicalize(candidate);
        check_structure(&canonical)?;
        check_date(&canonical)?;
        if options.verify_checksum {
            check_checksum(&canonical)?;
        }
        Ok(Self(canonical))
    }

    /// The CURP in canonical form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Birth date under the default century pivot.
    ///
    /// Two-digit years below 25 read as 2000s. The cutoff is a heuristic
    /// with no authoritative source and misreads centenarians; use
    /// [`Curp::birth_date_with_pivot`] when the caller knows better.
    /// `None` when the digits do not form a real calendar date.
    pub fn birth_date(&self) -> Option<chrono::NaiveDate> {
        self.birth_date_with_pivot(DEFAULT_CENTURY_PIVOT)
    }

    /// Birth date under a caller-chosen century pivot.
    pub fn birth_date_with_pivot(&self, pivot: u8) -> Option<chrono::NaiveDate> {
        let yy: u32 = self.0[4..6].parse().ok()?;
        let month: u32 = self.0[6..8].parse().ok()?;
        let day: u32 = self.0[8..10].parse().ok()?;
        chrono::NaiveDate::from_ymd_opt(infer_full_year(yy, pivot), month, day)
    }

    /// Sex from position 10.
    pub fn sex(&self) -> Sex {
        match self.0.as_bytes()[10] {
            b'H' => Sex::Hombre,
            _ => Sex::Mujer,
        }
    }

    /// The raw two-letter state digraph.
    pub fn state_digraph(&self) -> &str {
        &self.0[11..13]
    }

    /// The state digraph resolved against the RENAPO catalog.
    ///
    /// `None` means the digraph is structurally fine but not a catalog
    /// code; callers enforcing catalog membership reject on `None`.
    pub fn birth_state(&self) -> Option<BirthState> {
        self.state_digraph().parse().ok()
    }

    /// The differentiator character at position 16.
    pub fn differentiator(&self) -> char {
        self.0.as_bytes()[16] as char
    }

    /// The check digit at position 17.
    pub fn check_char(&self) -> char {
        self.0.as_bytes()[17] as char
    }
}

impl std::fmt::Display for Curp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn canonicalize(candidate: &str) -> String {
    candidate.trim().to_uppercase()
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_uppercase() && !matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Structural stage: 18 characters, per-position charset.
fn check_structure(s: &str) -> Result<(), ValidationError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 18 {
        return Err(ValidationError::MalformedLength {
            expected: "exactly 18 characters",
            actual: chars.len(),
        });
    }

    for (i, c) in chars.iter().enumerate() {
        let (ok, expected) = match i {
            0..=3 => (c.is_ascii_uppercase(), "uppercase letter"),
            4..=9 => (c.is_ascii_digit(), "ASCII digit"),
            10 => (matches!(c, 'H' | 'M'), "'H' or 'M'"),
            11..=12 => (c.is_ascii_uppercase(), "uppercase letter"),
            13..=15 => (is_consonant(*c), "consonant"),
            16 => (
                c.is_ascii_uppercase() || c.is_ascii_digit(),
                "uppercase letter or digit",
            ),
            _ => (c.is_ascii_digit(), "ASCII digit"),
        };
        if !ok {
            return Err(ValidationError::MalformedCharset {
                position: i,
                found: *c,
                expected,
            });
        }
    }
    Ok(())
}

fn check_date(s: &str) -> Result<(), ValidationError> {
    validate_date_digits(&s[4..10])
}

fn check_checksum(s: &str) -> Result<(), ValidationError> {
    let expected = check_digit(&s[..17])?;
    let found = s.as_bytes()[17] as char;
    if expected != found {
        return Err(ValidationError::ChecksumMismatch { expected, found });
    }
    Ok(())
}

/// Does the check digit match? Structure must hold first; a structurally
/// invalid candidate answers `false`.
pub fn check_digit_matches(candidate: &str) -> bool {
    let canonical = canonicalize(candidate);
    check_structure(&canonical).is_ok() && check_checksum(&canonical).is_ok()
}

/// Non-throwing validation with default (strict) options.
pub fn validate(candidate: &str) -> ValidationReport {
    validate_with(candidate, ValidationOptions::default())
}

/// Non-throwing validation; every stage reached is reported.
pub fn validate_with(candidate: &str, options: ValidationOptions) -> ValidationReport {
    let canonical = canonicalize(candidate);
    if check_structure(&canonical).is_err() {
        return ValidationReport::failed_format();
    }

    let date = Some(check_date(&canonical).is_ok());
    let checksum = options
        .verify_checksum
        .then(|| check_checksum(&canonical).is_ok());

    ValidationReport::from_stages(date, None, checksum)
}

/// Boolean projection of [`validate`]. Never panics.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).valid
}
