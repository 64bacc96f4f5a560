//! # cmx-cli — CLI Tool for the cmx Stack
//!
//! Provides the `cmx` command-line interface over the four identifier
//! engines.
//!
//! ## Subcommands
//!
//! - `cmx validate <rfc|curp|clabe|nss>` — staged validation of a single
//!   candidate or a batch file, text or JSON output.
//! - `cmx generate <rfc|rfc-moral|curp|clabe|nss>` — best-effort
//!   identifier generation from structured fields.
//!
//! Every handler is a `run_*` function returning `Result<u8>` so the
//! binary can map outcomes to exit codes (0 success, 1 validation
//! failure, 2 operational error) and tests can drive the handlers
//! without spawning a process.

pub mod generate;
pub mod validate;

pub use generate::{run_generate, GenerateArgs};
pub use validate::{run_validate, ValidateArgs};
