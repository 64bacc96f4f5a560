#![deny(missing_docs)]

//! # cmx-nss — NSS Engine
//!
//! Validation and generation for the NSS (Número de Seguridad Social),
//! the 11-digit IMSS social security number: 5-digit subdelegation,
//! 2-digit registration year, 3-digit serial, and a Luhn-style check
//! digit.
//!
//! The serial slot is the ambiguous part of the format: IMSS documents
//! disagree on whether the folio is three or four digits wide, with the
//! fourth overlapping the registration year. This crate exposes the
//! 5/2/3 split and leaves reinterpretation to callers with better
//! information about the issuing era.

pub mod nss;

pub use nss::{check_digit, generate, is_valid, validate, Nss};
