//! # CPF CLI — strip, validate, format, mask and generate CPFs.
//!
//! ## Usage
//!
//! ```bash
//! edu cpf validate 529.982.247-25 111.111.111-11 --explain
//! edu cpf format 52998224725
//! edu cpf mask 52998224725
//! edu cpf strip " 529.982.247-25 "
//! edu cpf generate 529982247
//! ```
//!
//! Each input produces one output line, in argument order.

use anyhow::Result;
use clap::{Args, Subcommand};

use edu_core::cpf;
use edu_core::Cpf;

/// CPF subcommand arguments.
#[derive(Args, Debug)]
pub struct CpfArgs {
    #[command(subcommand)]
    pub command: CpfCommand,
}

/// Available CPF subcommands.
#[derive(Subcommand, Debug)]
pub enum CpfCommand {
    /// Remove everything but digits.
    Strip {
        /// Values to strip.
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Check verifier digits. Exits 2 if any input is invalid.
    Validate {
        /// Values to validate (raw or formatted).
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print the reason an input was rejected.
        #[arg(long)]
        explain: bool,
    },

    /// Group 11 digits as XXX.XXX.XXX-XX; other inputs are echoed unchanged.
    Format {
        /// Values to format.
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Redact the middle digits as XXX.***.***-XX; other inputs are echoed unchanged.
    Mask {
        /// Values to mask.
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Append verifier digits to a 9-digit base. Exits 2 if any base is rejected.
    Generate {
        /// 9-digit bases.
        #[arg(required = true)]
        bases: Vec<String>,
    },
}

/// Execute the cpf subcommand.
pub fn run_cpf(args: &CpfArgs) -> Result<u8> {
    let (lines, code) = cpf_report(&args.command);
    for line in &lines {
        println!("{line}");
    }
    Ok(code)
}

/// Output lines and exit code for a cpf subcommand.
pub fn cpf_report(command: &CpfCommand) -> (Vec<String>, u8) {
    match command {
        CpfCommand::Strip { inputs } => (inputs.iter().map(|i| cpf::strip(i)).collect(), 0),
        CpfCommand::Format { inputs } => (inputs.iter().map(|i| cpf::format(i)).collect(), 0),
        CpfCommand::Mask { inputs } => (inputs.iter().map(|i| cpf::mask(i)).collect(), 0),
        CpfCommand::Validate { inputs, explain } => validate_report(inputs, *explain),
        CpfCommand::Generate { bases } => generate_report(bases),
    }
}

fn validate_report(inputs: &[String], explain: bool) -> (Vec<String>, u8) {
    let mut code = 0;
    let lines = inputs
        .iter()
        .map(|input| match Cpf::new(input) {
            Ok(valid) => {
                tracing::debug!(cpf = ?valid, "accepted");
                format!("{input}\tvalid")
            }
            Err(e) => {
                code = 2;
                tracing::debug!(reason = %e, "rejected");
                if explain {
                    format!("{input}\tinvalid\t{e}")
                } else {
                    format!("{input}\tinvalid")
                }
            }
        })
        .collect();
    (lines, code)
}

fn generate_report(bases: &[String]) -> (Vec<String>, u8) {
    let mut code = 0;
    let lines = bases
        .iter()
        .map(|base| match Cpf::from_base(base) {
            Ok(generated) => generated.formatted(),
            Err(e) => {
                code = 2;
                tracing::warn!(base = %base, "cannot generate CPF: {e}");
                format!("{base}\terror\t{e}")
            }
        })
        .collect();
    (lines, code)
}
