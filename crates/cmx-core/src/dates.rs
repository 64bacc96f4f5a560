//! # Date-Digit Validation and Century Inference
//!
//! RFC and CURP both embed a six-digit `YYMMDD` date with only a two-digit
//! year. This module holds the shared range check (month 1–12, day 1–31 —
//! deliberately no per-month day counts or leap years, matching the
//! registry grammars) and the century-inference heuristic used when a
//! full date is extracted from an identifier.

use crate::error::ValidationError;

/// Default pivot for two-digit-year century inference.
///
/// A two-digit year below the pivot reads as 2000s, at or above as 1900s.
/// There is no authoritative cutoff — this is a heuristic and is ambiguous
/// for centenarians, which is why callers can pass their own pivot.
pub const DEFAULT_CENTURY_PIVOT: u8 = 25;

/// Validate a six-digit `YYMMDD` block.
///
/// The caller guarantees `digits` is exactly six ASCII digits (the
/// structural charset stage runs first). Month must be 1–12 and day 1–31;
/// any two-digit year is accepted.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDateComponent`] naming the failing
/// component.
pub fn validate_date_digits(digits: &str) -> Result<(), ValidationError> {
    debug_assert!(digits.len() == 6 && digits.chars().all(|c| c.is_ascii_digit()));

    let month: u32 = digits[2..4].parse().unwrap_or(0);
    let day: u32 = digits[4..6].parse().unwrap_or(0);

    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidDateComponent {
            field: "month",
            value: month,
        });
    }
    if !(1..=31).contains(&day) {
        return Err(ValidationError::InvalidDateComponent {
            field: "day",
            value: day,
        });
    }
    Ok(())
}

/// Infer a full year from a two-digit year and a century pivot.
pub fn infer_full_year(two_digit_year: u32, pivot: u8) -> i32 {
    if two_digit_year < u32::from(pivot) {
        2000 + two_digit_year as i32
    } else {
        1900 + two_digit_year as i32
    }
}
