//! # Error Hierarchy
//!
//! Structured error types for the cmx stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant corresponds to one validation stage and carries diagnostic
//! context: the position that failed, the offending character, and the
//! expected form, so that callers building forms or APIs can surface
//! actionable messages without re-parsing the input.

use thiserror::Error;

/// Validation errors shared by all four identifier engines.
///
/// The variants are ordered by validation stage: length and charset are
/// structural, date and homoclave are field-level, checksum is last.
/// `parse`-style constructors return the first failing stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate has the wrong length for this identifier.
    #[error("malformed length: expected {expected}, got {actual} characters")]
    MalformedLength {
        /// Human-readable description of the accepted lengths
        /// (e.g. "12 or 13", "exactly 18 digits").
        expected: &'static str,
        /// The length of the candidate that was rejected.
        actual: usize,
    },

    /// A character is outside the alphabet allowed at its position.
    #[error("malformed charset: '{found}' at position {position} (expected {expected})")]
    MalformedCharset {
        /// Zero-based position of the offending character.
        position: usize,
        /// The character that was rejected.
        found: char,
        /// Description of the alphabet allowed at this position.
        expected: &'static str,
    },

    /// A date field is outside its valid range.
    ///
    /// Only coarse ranges are enforced (month 1–12, day 1–31); per-month
    /// day counts and leap years are not checked, matching the registry
    /// grammars these identifiers are defined by.
    #[error("invalid date component: {field} = {value}")]
    InvalidDateComponent {
        /// Which component failed ("month" or "day").
        field: &'static str,
        /// The out-of-range value.
        value: u32,
    },

    /// An RFC homoclave character is outside `A–Z0–9`.
    #[error("invalid homoclave character '{found}' at position {position}")]
    InvalidHomoclaveCharset {
        /// Zero-based position of the offending character.
        position: usize,
        /// The character that was rejected.
        found: char,
    },

    /// The recomputed check character does not match the candidate's.
    #[error("checksum mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch {
        /// The check character recomputed from the identifier body.
        expected: char,
        /// The check character present in the candidate.
        found: char,
    },

    /// A generation component (bank code, account number, ...) is not
    /// usable even after padding.
    #[error("invalid {component}: {reason}")]
    InvalidComponent {
        /// Which component was rejected.
        component: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}
