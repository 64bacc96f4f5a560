//! # CLABE Newtype, Check Digit, and Generation
//!
//! The check digit is a weighted mod-10 sum: digit `i` of the first 17
//! is multiplied by the cycling weight `3, 7, 1`, each product is
//! reduced mod 10, the reduced products are summed, and the check digit
//! is `(10 - sum mod 10) mod 10`.

use serde::{Deserialize, Serialize};

use cmx_core::{
    impl_validating_deserialize, ValidationError, ValidationReport,
};

/// Cycling position weights for the check digit.
const WEIGHTS: [u32; 3] = [3, 7, 1];

/// Component widths: bank, branch, account.
const BANK_WIDTH: usize = 3;
const BRANCH_WIDTH: usize = 3;
const ACCOUNT_WIDTH: usize = 11;

/// A validated CLABE.
///
/// Stored as its 18 digits. Construction goes through [`Clabe::parse`]
/// or [`generate`]; deserialization routes through the same pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Clabe(String);

impl_validating_deserialize!(Clabe);

/// The three addressing components of a CLABE, check digit included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClabeComponents {
    /// 3-digit Banxico bank code.
    pub bank_code: String,
    /// 3-digit plaza/branch code.
    pub branch_code: String,
    /// 11-digit account number.
    pub account_number: String,
    /// The verified check digit.
    pub check_digit: char,
}

impl Clabe {
    /// Parse and validate a candidate: exactly 18 digits, then checksum.
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

    /// The CLABE digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 3-digit bank code.
    pub fn bank_code(&self) -> &str {
        &self.0[..BANK_WIDTH]
    }

    /// The 3-digit plaza/branch code.
    pub fn branch_code(&self) -> &str {
        &self.0[BANK_WIDTH..BANK_WIDTH + BRANCH_WIDTH]
    }

    /// The 11-digit account number.
    pub fn account_number(&self) -> &str {
        &self.0[BANK_WIDTH + BRANCH_WIDTH..BANK_WIDTH + BRANCH_WIDTH + ACCOUNT_WIDTH]
    }

    /// The check digit.
    pub fn check_char(&self) -> char {
        self.0.as_bytes()[17] as char
    }

    /// All components at once, for JSON output.
    pub fn components(&self) -> ClabeComponents {
        ClabeComponents {
            bank_code: self.bank_code().to_string(),
            branch_code: self.branch_code().to_string(),
            account_number: self.account_number().to_string(),
            check_digit: self.check_char(),
        }
    }
}

impl std::fmt::Display for Clabe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_structure(s: &str) -> Result<(), ValidationError> {
    if s.chars().count() != 18 {
        return Err(ValidationError::MalformedLength {
            expected: "exactly 18 digits",
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
    let expected = check_digit(&s[..17])?;
    let found = s.as_bytes()[17] as char;
    if expected != found {
        return Err(ValidationError::ChecksumMismatch { expected, found });
    }
    Ok(())
}

/// Compute the check digit for the first 17 digits of a CLABE.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedLength`] unless `digits` is
/// exactly 17 characters, and [`ValidationError::MalformedCharset`] on
/// any non-digit.
pub fn check_digit(digits: &str) -> Result<char, ValidationError> {
    if digits.chars().count() != 17 {
        return Err(ValidationError::MalformedLength {
            expected: "exactly 17 digits before the check digit",
            actual: digits.chars().count(),
        });
    }

    let mut sum: u32 = 0;
    for (i, c) in digits.chars().enumerate() {
        let d = c.to_digit(10).ok_or(ValidationError::MalformedCharset {
            position: i,
            found: c,
            expected: "ASCII digit",
        })?;
        sum += (d * WEIGHTS[i % 3]) % 10;
    }

    let digit = (10 - sum % 10) % 10;
    Ok(char::from_digit(digit, 10).expect("single digit"))
}

/// Generate a CLABE from its three components.
///
/// Components must be digits-only; each is left-padded with zeros to its
/// width, and overlong input keeps its rightmost digits (numeric value
/// mod 10^width). The bank code is not checked against any catalog.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidComponent`] when a component is
/// empty or contains a non-digit.
pub fn generate(bank: &str, branch: &str, account: &str) -> Result<Clabe, ValidationError> {
    let bank = pad_component(bank, BANK_WIDTH, "bank code")?;
    let branch = pad_component(branch, BRANCH_WIDTH, "branch code")?;
    let account = pad_component(account, ACCOUNT_WIDTH, "account number")?;

    let base = format!("{bank}{branch}{account}");
    let check = check_digit(&base)?;
    Ok(Clabe(format!("{base}{check}")))
}

/// Zero-pad a digits-only component to `width`, keeping the rightmost
/// digits when longer.
pub(crate) fn pad_component(
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
