#![deny(missing_docs)]

//! # cmx-core — Foundational Types for the cmx Stack
//!
//! This crate defines the types that every identifier engine in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `thiserror`, `tracing`, and `unicode-normalization` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One [`ValidationError`] hierarchy.** Every engine reports failures
//!    through the same stage-typed variants, each carrying enough diagnostic
//!    context (position, offending character, expected form) to act on
//!    without re-running the validation.
//!
//! 2. **Pure normalization.** [`normalize_name`] is an infallible function
//!    over strings — no caches, no global state. The exclusion-word and
//!    alphabet tables are `const` and safe to share across threads.
//!
//! 3. **Single [`BirthState`] enum.** One definition of the 32 RENAPO state
//!    codes plus the foreign sentinel, with the free-text resolver layered
//!    on top. No independent state lists that can diverge.
//!
//! 4. **Reports, not exceptions, for boolean questions.** Engines answer
//!    "is this valid?" with a [`ValidationReport`] describing each stage.
//!    The throwing form (`parse`) exists for callers that want a typed
//!    error identifying the first failing stage.

pub mod dates;
pub mod error;
pub mod normalize;
pub mod report;
pub mod states;

// Re-export primary types at crate root for ergonomic imports.
pub use dates::{infer_full_year, validate_date_digits, DEFAULT_CENTURY_PIVOT};
pub use error::ValidationError;
pub use normalize::{
    first_internal_consonant, first_internal_vowel, first_letter, normalize_name,
    strip_accents_upper,
};
pub use report::{ValidationOptions, ValidationReport};
pub use states::{resolve_state, try_resolve_state, BirthState};

/// Implement `Deserialize` for string newtypes that must validate their
/// contents. Deserializes as a plain `String`, then routes through the
/// type's `parse()` constructor so that invalid identifiers are rejected
/// at deserialization time — not silently accepted.
#[macro_export]
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}
