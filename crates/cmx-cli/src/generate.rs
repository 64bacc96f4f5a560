//! # Generate Subcommand
//!
//! Derivation of RFC, CURP, CLABE, and NSS values from their source
//! fields. Generated RFCs and CURPs carry placeholder assignment slots
//! (homoclave `XX`, differentiator `0`) since the real values are
//! registry-assigned; a notice is logged at info level.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use cmx_curp::{CurpRequest, Sex};
use cmx_rfc::{MoralRequest, PersonaRequest};

/// Arguments for the `cmx generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Which identifier to generate.
    #[command(subcommand)]
    pub target: GenerateTarget,
}

/// Per-identifier generation targets.
#[derive(Subcommand, Debug)]
pub enum GenerateTarget {
    /// Generate a persona fisica RFC from names and birth date.
    Rfc {
        /// Given name(s).
        #[arg(long)]
        given: String,

        /// Paternal surname.
        #[arg(long)]
        paternal: String,

        /// Maternal surname, when the person has one.
        #[arg(long)]
        maternal: Option<String>,

        /// Birth date (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        birth_date: NaiveDate,

        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate a persona moral RFC from a legal name and incorporation
    /// date.
    RfcMoral {
        /// Registered legal name of the entity.
        #[arg(long)]
        legal_name: String,

        /// Incorporation date (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        incorporation_date: NaiveDate,

        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate a CURP from names, birth date, sex, and birth state.
    Curp {
        /// Given name(s).
        #[arg(long)]
        given: String,

        /// Paternal surname.
        #[arg(long)]
        paternal: String,

        /// Maternal surname, when the person has one.
        #[arg(long)]
        maternal: Option<String>,

        /// Birth date (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        birth_date: NaiveDate,

        /// Sex: H/HOMBRE or M/MUJER.
        #[arg(long)]
        sex: Sex,

        /// Birth state: RENAPO code, state name, or free text.
        #[arg(long)]
        state: String,

        /// Registry-assigned differentiator character (defaults to '0').
        #[arg(long, default_value = "0")]
        differentiator: char,

        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate a CLABE from bank, branch, and account numbers.
    Clabe {
        /// Bank code (up to 3 digits, left-padded).
        #[arg(long)]
        bank: String,

        /// Branch code (up to 3 digits, left-padded).
        #[arg(long)]
        branch: String,

        /// Account number (up to 11 digits, left-padded).
        #[arg(long)]
        account: String,

        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate an NSS from subdelegation, registration year, and serial.
    Nss {
        /// Subdelegation code (up to 5 digits, left-padded).
        #[arg(long)]
        subdelegation: String,

        /// Registration year, two digits (left-padded).
        #[arg(long)]
        year: String,

        /// Serial number (up to 3 digits, left-padded).
        #[arg(long)]
        serial: String,

        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Execute the generate subcommand.
///
/// Returns exit code 0 on success; malformed inputs surface as errors
/// (exit code 2).
pub fn run_generate(args: &GenerateArgs) -> Result<u8> {
    match &args.target {
        GenerateTarget::Rfc {
            given,
            paternal,
            maternal,
            birth_date,
            json,
        } => {
            let request = PersonaRequest {
                given_names: given.clone(),
                paternal_surname: paternal.clone(),
                maternal_surname: maternal.clone(),
                birth_date: *birth_date,
            };
            let rfc = cmx_rfc::generate_persona(&request);
            tracing::info!(
                "homoclave is the provisional placeholder {}; the definitive \
                 value is assigned by SAT",
                cmx_rfc::PROVISIONAL_HOMOCLAVE
            );
            emit("rfc", rfc.as_str(), *json)
        }
        GenerateTarget::RfcMoral {
            legal_name,
            incorporation_date,
            json,
        } => {
            let request = MoralRequest {
                legal_name: legal_name.clone(),
                incorporation_date: *incorporation_date,
            };
            let rfc = cmx_rfc::generate_moral(&request);
            tracing::info!(
                "homoclave is the provisional placeholder {}; the definitive \
                 value is assigned by SAT",
                cmx_rfc::PROVISIONAL_HOMOCLAVE
            );
            emit("rfc", rfc.as_str(), *json)
        }
        GenerateTarget::Curp {
            given,
            paternal,
            maternal,
            birth_date,
            sex,
            state,
            differentiator,
            json,
        } => {
            let mut request = CurpRequest::new(
                given.clone(),
                paternal.clone(),
                maternal.clone(),
                *birth_date,
                *sex,
                state.clone(),
            );
            request.differentiator = *differentiator;
            let curp = cmx_curp::generate(&request);
            tracing::info!(
                "differentiator slot holds {:?}; the definitive value is \
                 assigned by RENAPO",
                curp.differentiator()
            );
            emit("curp", curp.as_str(), *json)
        }
        GenerateTarget::Clabe {
            bank,
            branch,
            account,
            json,
        } => {
            let clabe = cmx_clabe::generate(bank, branch, account)?;
            emit("clabe", clabe.as_str(), *json)
        }
        GenerateTarget::Nss {
            subdelegation,
            year,
            serial,
            json,
        } => {
            let nss = cmx_nss::generate(subdelegation, year, serial)?;
            emit("nss", nss.as_str(), *json)
        }
    }
}

fn emit(key: &str, value: &str, json: bool) -> Result<u8> {
    if json {
        println!("{}", serde_json::json!({ key: value }));
    } else {
        println!("{value}");
    }
    Ok(0)
}
