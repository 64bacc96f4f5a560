//! # RFC Newtype and Staged Validation
//!
//! [`Rfc`] wraps a candidate that has passed the full pipeline. The
//! individual stages are also exposed through [`validate`], which runs
//! them all and reports each outcome instead of stopping at the first
//! failure.
//!
//! Stage order: length → charset → date range → homoclave alphabet →
//! check character. The structural stage admits `Ñ` and `&` in the
//! homoclave slots so that the dedicated homoclave stage can reject them
//! with a precise error; the leading block legitimately allows both
//! (persona surnames with Ñ, moral names like `S&C`).

use serde::{Deserialize, Serialize};

use cmx_core::{
    impl_validating_deserialize, infer_full_year, validate_date_digits, ValidationError,
    ValidationOptions, ValidationReport, DEFAULT_CENTURY_PIVOT,
};

use crate::checksum::check_character;

/// The two reserved generic RFCs: domestic public (`XAXX...`) and
/// foreign parties (`XEXX...`). Both bypass check-character verification.
pub const GENERIC_RFCS: [&str; 2] = ["XAXX010101000", "XEXX010101000"];

/// Taxpayer kind encoded in an RFC's leading block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfcKind {
    /// Persona física: 13 characters, 4-letter block.
    Fisica,
    /// Persona moral: 12 characters, 3-character block.
    Moral,
    /// One of the two reserved generic values.
    Generico,
    /// Not structurally an RFC.
    Invalido,
}

impl std::fmt::Display for RfcKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Fisica => "fisica",
            Self::Moral => "moral",
            Self::Generico => "generico",
            Self::Invalido => "invalido",
        };
        write!(f, "{s}")
    }
}

/// A validated RFC.
///
/// Stored in canonical form: trimmed and uppercased. Construction goes
/// through [`Rfc::parse`]; deserialization routes through the same
/// pipeline, so an `Rfc` obtained from JSON is as trustworthy as one
/// parsed directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rfc(String);

impl_validating_deserialize!(Rfc);

impl Rfc {
    /// Parse and validate a candidate with default (strict) options.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`ValidationError`].
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        Self::parse_with(candidate, ValidationOptions::default())
    }

    /// Parse and validate a candidate, optionally skipping the
    /// check-character stage.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`ValidationError`].
    pub fn parse_with(
        candidate: &str,
        options: ValidationOptions,
    ) -> Result<Self, ValidationError> {
        let canonical = canonicalize(candidate);
        let kind = check_structure(&canonical)?;
        check_date(&canonical, kind)?;
        check_homoclave(&canonical, kind)?;
        if options.verify_checksum {
            check_checksum(&canonical, kind)?;
        }
        Ok(Self(canonical))
    }

    /// The RFC in canonical form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Taxpayer kind. Never [`RfcKind::Invalido`] on a parsed value.
    pub fn kind(&self) -> RfcKind {
        detect_kind(&self.0)
    }

    /// Whether this is one of the two reserved generic RFCs.
    pub fn is_generic(&self) -> bool {
        GENERIC_RFCS.contains(&self.0.as_str())
    }

    /// The six `YYMMDD` date digits.
    pub fn date_digits(&self) -> &str {
        let start = self.letter_block_len();
        &self.0[start..start + 6]
    }

    /// The two homoclave characters.
    pub fn homoclave(&self) -> &str {
        let start = self.letter_block_len() + 6;
        &self.0[start..start + 2]
    }

    /// The trailing check character.
    pub fn check_char(&self) -> char {
        self.0.chars().last().expect("validated at construction")
    }

    /// The embedded date under the default century pivot.
    ///
    /// Birth date for personas físicas, incorporation date for morales.
    /// `None` when the digits do not form a real calendar date — the
    /// grammar accepts day 31 in every month.
    pub fn date(&self) -> Option<chrono::NaiveDate> {
        self.date_with_pivot(DEFAULT_CENTURY_PIVOT)
    }

    /// The embedded date under a caller-chosen century pivot.
    pub fn date_with_pivot(&self, pivot: u8) -> Option<chrono::NaiveDate> {
        let digits = self.date_digits();
        let yy: u32 = digits[..2].parse().ok()?;
        let month: u32 = digits[2..4].parse().ok()?;
        let day: u32 = digits[4..6].parse().ok()?;
        chrono::NaiveDate::from_ymd_opt(infer_full_year(yy, pivot), month, day)
    }

    /// Byte offset where the date digits start.
    ///
    /// The leading block may contain Ñ, so the offset is found by
    /// scanning rather than assuming one byte per character. Everything
    /// from the first digit on is ASCII and safe to byte-slice.
    fn letter_block_len(&self) -> usize {
        self.0
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .expect("validated at construction")
    }
}

impl std::fmt::Display for Rfc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trim and uppercase a candidate.
fn canonicalize(candidate: &str) -> String {
    candidate.trim().to_uppercase()
}

/// Letter-block character classes.
fn is_fisica_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}

fn is_moral_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ' || c == '&'
}

/// Structural stage: length and per-position charset.
fn check_structure(s: &str) -> Result<RfcKind, ValidationError> {
    if GENERIC_RFCS.contains(&s) {
        return Ok(RfcKind::Generico);
    }

    let chars: Vec<char> = s.chars().collect();
    let (kind, block_len) = match chars.len() {
        13 => (RfcKind::Fisica, 4),
        12 => (RfcKind::Moral, 3),
        n => {
            return Err(ValidationError::MalformedLength {
                expected: "12 (moral) or 13 (fisica)",
                actual: n,
            })
        }
    };

    for (i, c) in chars.iter().enumerate() {
        let ok = if i < block_len {
            match kind {
                RfcKind::Fisica => is_fisica_letter(*c),
                _ => is_moral_letter(*c),
            }
        } else if i < block_len + 6 {
            c.is_ascii_digit()
        } else if i < block_len + 8 {
            // Homoclave slots: full RFC alphabet here; the homoclave
            // stage narrows this to A-Z0-9.
            is_moral_letter(*c) || c.is_ascii_digit()
        } else {
            c.is_ascii_digit() || *c == 'A'
        };
        if !ok {
            let expected = if i < block_len {
                match kind {
                    RfcKind::Fisica => "uppercase letter or Ñ",
                    _ => "uppercase letter, Ñ, or &",
                }
            } else if i < block_len + 6 {
                "ASCII digit"
            } else if i < block_len + 8 {
                "uppercase letter, digit, Ñ, or &"
            } else {
                "digit or 'A'"
            };
            return Err(ValidationError::MalformedCharset {
                position: i,
                found: *c,
                expected,
            });
        }
    }

    Ok(kind)
}

/// Date-range stage.
fn check_date(s: &str, kind: RfcKind) -> Result<(), ValidationError> {
    let start = block_len_for(kind);
    let digits: String = s.chars().skip(start).take(6).collect();
    validate_date_digits(&digits)
}

/// Homoclave-alphabet stage: both characters must be ASCII uppercase
/// alphanumerics. The generic RFCs carry homoclave `00`, so digits are
/// legal; this stage exists to reject the Ñ and & the leading block
/// allows.
fn check_homoclave(s: &str, kind: RfcKind) -> Result<(), ValidationError> {
    let start = block_len_for(kind) + 6;
    for (offset, c) in s.chars().skip(start).take(2).enumerate() {
        if !c.is_ascii_uppercase() && !c.is_ascii_digit() {
            return Err(ValidationError::InvalidHomoclaveCharset {
                position: start + offset,
                found: c,
            });
        }
    }
    Ok(())
}

/// Check-character stage. Generic RFCs are exempt.
fn check_checksum(s: &str, kind: RfcKind) -> Result<(), ValidationError> {
    if kind == RfcKind::Generico {
        return Ok(());
    }
    let chars: Vec<char> = s.chars().collect();
    let body: String = chars[..chars.len() - 1].iter().collect();
    let found = chars[chars.len() - 1];
    let expected = check_character(&body)?;
    if expected != found {
        return Err(ValidationError::ChecksumMismatch { expected, found });
    }
    Ok(())
}

fn block_len_for(kind: RfcKind) -> usize {
    match kind {
        RfcKind::Moral => 3,
        _ => 4,
    }
}

/// Classify a candidate by its structural grammar alone.
///
/// The two generic values classify as [`RfcKind::Generico`] before any
/// grammar check. Date, homoclave, and checksum stages do not affect the
/// classification — a fisica-shaped RFC with a bad check character is
/// still fisica-shaped.
pub fn detect_kind(candidate: &str) -> RfcKind {
    let canonical = canonicalize(candidate);
    match check_structure(&canonical) {
        Ok(kind) => kind,
        Err(_) => RfcKind::Invalido,
    }
}

/// Non-throwing validation with default (strict) options.
pub fn validate(candidate: &str) -> ValidationReport {
    validate_with(candidate, ValidationOptions::default())
}

/// Non-throwing validation; every stage reached is reported.
///
/// A candidate that fails structure reports `format: false` and nothing
/// else. Once structure passes, the date, homoclave, and checksum stages
/// are each evaluated independently so a form can flag all problems at
/// once.
pub fn validate_with(candidate: &str, options: ValidationOptions) -> ValidationReport {
    let canonical = canonicalize(candidate);
    let kind = match check_structure(&canonical) {
        Ok(kind) => kind,
        Err(_) => return ValidationReport::failed_format(),
    };

    let date = Some(check_date(&canonical, kind).is_ok());
    let homoclave = Some(check_homoclave(&canonical, kind).is_ok());
    let checksum = options
        .verify_checksum
        .then(|| check_checksum(&canonical, kind).is_ok());

    ValidationReport::from_stages(date, homoclave, checksum)
}

/// Boolean projection of [`validate`]. Never panics.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).valid
}
