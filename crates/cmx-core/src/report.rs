//! # Staged Validation Reports
//!
//! [`ValidationReport`] is the non-throwing answer to "is this valid?".
//! Each stage the engine evaluated is reported individually; stages that
//! do not apply to an identifier (RFC has a homoclave stage, CLABE does
//! not) or that were never reached (the candidate failed structure, so
//! no checksum was computed) are `None` and omitted from JSON output.

use serde::{Deserialize, Serialize};

/// Per-stage outcome of validating one candidate string.
///
/// `valid` is the conjunction of every evaluated stage. A report with
/// `format: false` has all later stages `None` — nothing downstream of
/// structure is meaningful for a string of the wrong shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Overall verdict: every evaluated stage passed.
    pub valid: bool,

    /// Structural stage: length and per-position charset.
    pub format: bool,

    /// Date-range stage (RFC and CURP only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<bool>,

    /// Homoclave-alphabet stage (RFC only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homoclave: Option<bool>,

    /// Check-character stage. `None` when checksum verification was
    /// disabled by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<bool>,
}

impl ValidationReport {
    /// Report for a candidate that failed the structural stage.
    /// No later stage is evaluated.
    pub fn failed_format() -> Self {
        Self {
            valid: false,
            format: false,
            date: None,
            homoclave: None,
            checksum: None,
        }
    }

    /// Build a report from individually evaluated stages, deriving the
    /// overall verdict.
    pub fn from_stages(date: Option<bool>, homoclave: Option<bool>, checksum: Option<bool>) -> Self {
        let valid = date.unwrap_or(true) && homoclave.unwrap_or(true) && checksum.unwrap_or(true);
        Self {
            valid,
            format: true,
            date,
            homoclave,
            checksum,
        }
    }
}

/// Caller-selectable strictness for validation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Verify the check character. Disable for legacy or placeholder
    /// identifiers that predate full checksum rollout.
    pub verify_checksum: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            verify_checksum: true,
        }
    }
}
