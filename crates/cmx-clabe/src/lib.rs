#![deny(missing_docs)]

//! # cmx-clabe — CLABE Engine
//!
//! Validation and generation for the CLABE (Clave Bancaria
//! Estandarizada), the 18-digit interbank account number used for SPEI
//! transfers: 3-digit bank code, 3-digit plaza/branch code, 11-digit
//! account number, and a weighted check digit.
//!
//! Whether a bank code actually exists is a question for the Banxico
//! bank catalog, which is a collaborator of the surrounding application,
//! not of this crate — validation here is structural and arithmetic
//! only. Component accessors are defined on [`Clabe`], so they are
//! reachable only once the full checksum has validated.

pub mod clabe;

pub use clabe::{check_digit, generate, is_valid, validate, Clabe, ClabeComponents};
