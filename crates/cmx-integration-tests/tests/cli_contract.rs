//! # CLI Contract
//!
//! Drives the `run_*` handlers directly, the same code path `main`
//! dispatches to, and pins the exit-code contract: 0 all valid, 1 any
//! validation failure, Err (exit 2) for operational problems.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;

use cmx_cli::generate::{GenerateArgs, GenerateTarget};
use cmx_cli::validate::{ValidateArgs, ValidateTarget};
use cmx_cli::{run_generate, run_validate};
use cmx_curp::Sex;

fn validate_rfc(candidate: Option<&str>, batch: Option<PathBuf>) -> ValidateArgs {
    ValidateArgs {
        target: ValidateTarget::Rfc {
            candidate: candidate.map(str::to_string),
            batch,
            no_checksum: false,
            json: false,
        },
    }
}

// =========================================================================
// Exit codes
// =========================================================================

#[test]
fn valid_candidate_exits_zero() {
    assert_eq!(
        run_validate(&validate_rfc(Some("GODE561231GR8"), None)).expect("runs"),
        0
    );
}

#[test]
fn invalid_candidate_exits_one() {
    assert_eq!(
        run_validate(&validate_rfc(Some("GODE561231GR3"), None)).expect("runs"),
        1
    );
}

#[test]
fn unreadable_batch_file_is_an_error() {
    let result = run_validate(&validate_rfc(None, Some(PathBuf::from("/no/such/file"))));
    assert!(result.is_err());
}

// =========================================================================
// Batch mode
// =========================================================================

#[test]
fn batch_counts_only_non_blank_lines() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "PEGJ900512HJCRRS04").expect("write");
    writeln!(file).expect("write");
    writeln!(file, "   ").expect("write");
    writeln!(file, "PEGJ900512HJCRRS09").expect("write");

    let args = ValidateArgs {
        target: ValidateTarget::Curp {
            candidate: None,
            batch: Some(file.path().to_path_buf()),
            no_checksum: false,
            century_pivot: None,
            json: false,
        },
    };
    assert_eq!(run_validate(&args).expect("runs"), 1);
}

#[test]
fn batch_all_valid_exits_zero() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "12345678903").expect("write");
    writeln!(file, " 12345678903 ").expect("write");

    let args = ValidateArgs {
        target: ValidateTarget::Nss {
            candidate: None,
            batch: Some(file.path().to_path_buf()),
            json: false,
        },
    };
    assert_eq!(run_validate(&args).expect("runs"), 0);
}

// =========================================================================
// Checksum opt-out
// =========================================================================

#[test]
fn no_checksum_accepts_structurally_sound_rfc() {
    let args = ValidateArgs {
        target: ValidateTarget::Rfc {
            candidate: Some("GODE561231GR3".to_string()),
            batch: None,
            no_checksum: true,
            json: false,
        },
    };
    assert_eq!(run_validate(&args).expect("runs"), 0);
}

// =========================================================================
// Generation handlers
// =========================================================================

#[test]
fn generate_rfc_and_curp_succeed() {
    let rfc = GenerateArgs {
        target: GenerateTarget::Rfc {
            given: "Emma".to_string(),
            paternal: "Gómez".to_string(),
            maternal: Some("Díaz".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1956, 12, 31).expect("valid date"),
            json: true,
        },
    };
    assert_eq!(run_generate(&rfc).expect("runs"), 0);

    let curp = GenerateArgs {
        target: GenerateTarget::Curp {
            given: "José".to_string(),
            paternal: "Pérez".to_string(),
            maternal: Some("García".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 12).expect("valid date"),
            sex: Sex::Hombre,
            state: "Jalisco".to_string(),
            differentiator: '0',
            json: false,
        },
    };
    assert_eq!(run_generate(&curp).expect("runs"), 0);
}

#[test]
fn generate_rejects_non_digit_components() {
    let clabe = GenerateArgs {
        target: GenerateTarget::Clabe {
            bank: "002".to_string(),
            branch: "01x".to_string(),
            account: "7777777777".to_string(),
            json: false,
        },
    };
    assert!(run_generate(&clabe).is_err());

    let nss = GenerateArgs {
        target: GenerateTarget::Nss {
            subdelegation: "".to_string(),
            year: "67".to_string(),
            serial: "890".to_string(),
            json: false,
        },
    };
    assert!(run_generate(&nss).is_err());
}
