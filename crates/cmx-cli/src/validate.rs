//! # Validate Subcommand
//!
//! Staged validation of RFC, CURP, CLABE, and NSS candidates. A single
//! candidate prints a per-stage PASS/FAIL report (or the report as JSON,
//! with extracted fields where the identifier has them); a batch file
//! validates one candidate per line and prints an `N/M passed` summary
//! with per-line failures.
//!
//! Exit code: 0 when everything validates, 1 on any validation failure,
//! 2 on operational errors (unreadable batch file).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use cmx_core::{ValidationOptions, ValidationReport};

/// Arguments for the `cmx validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Which identifier to validate.
    #[command(subcommand)]
    pub target: ValidateTarget,
}

/// Per-identifier validation targets.
#[derive(Subcommand, Debug)]
pub enum ValidateTarget {
    /// Validate an RFC (12 or 13 characters).
    Rfc {
        /// Candidate RFC.
        candidate: Option<String>,

        /// Validate every line of a file instead of a single candidate.
        #[arg(long, value_name = "FILE", conflicts_with = "candidate")]
        batch: Option<PathBuf>,

        /// Skip check-character verification.
        #[arg(long)]
        no_checksum: bool,

        /// Emit the staged report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate a CURP (18 characters).
    Curp {
        /// Candidate CURP.
        candidate: Option<String>,

        /// Validate every line of a file instead of a single candidate.
        #[arg(long, value_name = "FILE", conflicts_with = "candidate")]
        batch: Option<PathBuf>,

        /// Skip check-digit verification (legacy/placeholder CURPs).
        #[arg(long)]
        no_checksum: bool,

        /// Two-digit years below this read as 2000s when extracting the
        /// birth date.
        #[arg(long, value_name = "N")]
        century_pivot: Option<u8>,

        /// Emit the staged report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate a CLABE (18 digits).
    Clabe {
        /// Candidate CLABE.
        candidate: Option<String>,

        /// Validate every line of a file instead of a single candidate.
        #[arg(long, value_name = "FILE", conflicts_with = "candidate")]
        batch: Option<PathBuf>,

        /// Emit the staged report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate an NSS (11 digits).
    Nss {
        /// Candidate NSS.
        candidate: Option<String>,

        /// Validate every line of a file instead of a single candidate.
        #[arg(long, value_name = "FILE", conflicts_with = "candidate")]
        batch: Option<PathBuf>,

        /// Emit the staged report as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    match &args.target {
        ValidateTarget::Rfc {
            candidate,
            batch,
            no_checksum,
            json,
        } => {
            let options = ValidationOptions {
                verify_checksum: !no_checksum,
            };
            let check = |candidate: &str| cmx_rfc::validate_with(candidate, options);
            match (candidate, batch) {
                (Some(candidate), _) => {
                    single(candidate, check(candidate), *json, |_| rfc_details(candidate))
                }
                (None, Some(path)) => batch_file("RFC", path, |c| check(c).valid),
                (None, None) => usage("rfc"),
            }
        }
        ValidateTarget::Curp {
            candidate,
            batch,
            no_checksum,
            century_pivot,
            json,
        } => {
            let options = ValidationOptions {
                verify_checksum: !no_checksum,
            };
            let pivot = century_pivot.unwrap_or(cmx_core::DEFAULT_CENTURY_PIVOT);
            let check = |candidate: &str| cmx_curp::validate_with(candidate, options);
            match (candidate, batch) {
                (Some(candidate), _) => single(candidate, check(candidate), *json, |_| {
                    curp_details(candidate, options, pivot)
                }),
                (None, Some(path)) => batch_file("CURP", path, |c| check(c).valid),
                (None, None) => usage("curp"),
            }
        }
        ValidateTarget::Clabe {
            candidate,
            batch,
            json,
        } => match (candidate, batch) {
            (Some(candidate), _) => single(candidate, cmx_clabe::validate(candidate), *json, |_| {
                clabe_details(candidate)
            }),
            (None, Some(path)) => batch_file("CLABE", path, cmx_clabe::is_valid),
            (None, None) => usage("clabe"),
        },
        ValidateTarget::Nss {
            candidate,
            batch,
            json,
        } => match (candidate, batch) {
            (Some(candidate), _) => {
                single(candidate, cmx_nss::validate(candidate), *json, |_| None)
            }
            (None, Some(path)) => batch_file("NSS", path, cmx_nss::is_valid),
            (None, None) => usage("nss"),
        },
    }
}

/// Validate one candidate and print its staged report.
fn single(
    candidate: &str,
    report: ValidationReport,
    json: bool,
    details: impl Fn(&ValidationReport) -> Option<serde_json::Value>,
) -> Result<u8> {
    if json {
        let mut value = serde_json::to_value(&report).context("failed to serialize report")?;
        if let Some(extra) = details(&report) {
            value
                .as_object_mut()
                .expect("report serializes as an object")
                .insert("fields".to_string(), extra);
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("failed to serialize report")?
        );
    } else {
        println!("{candidate}: {}", verdict(report.valid));
        println!("  format:    {}", verdict(report.format));
        if let Some(date) = report.date {
            println!("  date:      {}", verdict(date));
        }
        if let Some(homoclave) = report.homoclave {
            println!("  homoclave: {}", verdict(homoclave));
        }
        if let Some(checksum) = report.checksum {
            println!("  checksum:  {}", verdict(checksum));
        }
    }
    Ok(if report.valid { 0 } else { 1 })
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Validate one candidate per line of `path`; blank lines are skipped.
fn batch_file(label: &str, path: &Path, is_valid: impl Fn(&str) -> bool) -> Result<u8> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;

    let mut total = 0usize;
    let mut passed = 0usize;
    for (line_no, line) in contents.lines().enumerate() {
        let candidate = line.trim();
        if candidate.is_empty() {
            continue;
        }
        total += 1;
        if is_valid(candidate) {
            passed += 1;
        } else {
            println!("  FAIL: line {} — {candidate}", line_no + 1);
        }
    }

    println!("{label}: {passed}/{total} passed");
    Ok(if passed == total { 0 } else { 1 })
}

fn usage(target: &str) -> Result<u8> {
    println!("Usage: cmx validate {target} <CANDIDATE> | --batch FILE");
    Ok(1)
}

/// Extracted RFC fields for JSON output.
fn rfc_details(candidate: &str) -> Option<serde_json::Value> {
    let rfc = cmx_rfc::Rfc::parse_with(
        candidate,
        ValidationOptions {
            verify_checksum: false,
        },
    )
    .ok()?;
    Some(serde_json::json!({
        "kind": rfc.kind(),
        "date_digits": rfc.date_digits(),
        "homoclave": rfc.homoclave(),
        "generic": rfc.is_generic(),
    }))
}

/// Extracted CURP fields for JSON output.
fn curp_details(
    candidate: &str,
    options: ValidationOptions,
    pivot: u8,
) -> Option<serde_json::Value> {
    let curp = cmx_curp::Curp::parse_with(candidate, options).ok()?;
    Some(serde_json::json!({
        "sex": curp.sex(),
        "state": curp.birth_state().map(|s| s.code()),
        "state_digraph": curp.state_digraph(),
        "birth_date": curp.birth_date_with_pivot(pivot).map(|d| d.to_string()),
        "differentiator": curp.differentiator().to_string(),
    }))
}

/// Extracted CLABE components for JSON output; only a fully validated
/// CLABE has components.
fn clabe_details(candidate: &str) -> Option<serde_json::Value> {
    let clabe = cmx_clabe::Clabe::parse(candidate).ok()?;
    serde_json::to_value(clabe.components()).ok()
}
