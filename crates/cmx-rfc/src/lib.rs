#![deny(missing_docs)]

//! # cmx-rfc — RFC Engine
//!
//! Validation and generation for the RFC (Registro Federal de
//! Contribuyentes), the Mexican taxpayer registry key issued by SAT.
//!
//! ## Format
//!
//! | Kind | Width | Layout |
//! |------|-------|--------|
//! | Persona física | 13 | 4 letters, 6 date digits (YYMMDD), 2 homoclave, 1 check |
//! | Persona moral | 12 | 3 letters/`&`, 6 date digits, 2 homoclave, 1 check |
//!
//! Two reserved generic values (`XAXX010101000` for the domestic public,
//! `XEXX010101000` for foreign parties) are structurally valid and exempt
//! from check-character verification.
//!
//! ## Validation
//!
//! [`Rfc::parse`] runs the staged pipeline — length, charset, date range,
//! homoclave alphabet, check character — and returns the first failing
//! stage as a typed error. [`validate`] is the non-throwing form and
//! reports every reached stage individually.
//!
//! ## Generation
//!
//! [`generate_persona`] and [`generate_moral`] derive the letter block
//! from normalized names and always emit the provisional homoclave
//! [`PROVISIONAL_HOMOCLAVE`] — real homoclave assignment happens inside
//! SAT and is not publicly reproducible, so generated RFCs are
//! best-effort values to be confirmed against the registry.

pub mod checksum;
pub mod generate;
pub mod rfc;

pub use checksum::check_character;
pub use generate::{
    generate_moral, generate_persona, MoralRequest, PersonaRequest, PROVISIONAL_HOMOCLAVE,
};
pub use rfc::{detect_kind, is_valid, validate, validate_with, Rfc, RfcKind, GENERIC_RFCS};
