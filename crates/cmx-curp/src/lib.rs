#![deny(missing_docs)]

//! # cmx-curp — CURP Engine
//!
//! Validation and generation for the CURP (Clave Única de Registro de
//! Población), the 18-character population registry key issued by RENAPO.
//!
//! ## Format
//!
//! 4 initials letters, 6 date digits (YYMMDD), a sex character (`H`/`M`),
//! a 2-letter birth-state code, 3 internal consonants, 1 differentiator
//! (digit or letter), and 1 check digit.
//!
//! ## Two validation strictnesses
//!
//! Structural validation and check-digit verification are separate
//! operations by design: legacy and placeholder CURPs circulate whose
//! differentiators predate the full checksum rollout. [`Curp::parse`]
//! enforces both; [`Curp::parse_lenient`] accepts structure alone;
//! [`check_digit_matches`] answers the checksum question by itself.
//!
//! ## State codes
//!
//! The structural stage accepts any two uppercase letters in the state
//! slot. Catalog membership is a semantic question owned by the caller —
//! exactly as CLABE bank codes belong to the bank catalog — and
//! [`Curp::birth_state`] hands back an `Option` so the stricter policy is
//! one line away.

pub mod checksum;
pub mod curp;
pub mod generate;

pub use checksum::check_digit;
pub use curp::{
    check_digit_matches, is_valid, validate, validate_with, Curp, Sex,
};
pub use generate::{generate, CurpRequest};
