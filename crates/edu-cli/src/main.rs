//! # edu CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use edu_cli::cpf::{run_cpf, CpfArgs};
use edu_cli::user::{run_user, UserArgs};

/// School-administration toolkit.
///
/// Checks CPFs and staff-user payloads the same way the web application does.
#[derive(Parser, Debug)]
#[command(name = "edu", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strip, validate, format, mask or generate CPFs.
    Cpf(CpfArgs),

    /// Staff-user payload checks.
    User(UserArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    // Logs go to stderr so stdout stays pipeable.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    tracing::debug!("edu CLI starting");

    let result = match cli.command {
        Commands::Cpf(args) => run_cpf(&args),
        Commands::User(args) => run_user(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_cli::cpf::CpfCommand;
    use edu_cli::user::UserCommand;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_cpf_validate() {
        let cli =
            Cli::try_parse_from(["edu", "cpf", "validate", "529.982.247-25", "--explain"]).unwrap();
        match cli.command {
            Commands::Cpf(CpfArgs {
                command: CpfCommand::Validate { inputs, explain },
            }) => {
                assert_eq!(inputs, vec!["529.982.247-25".to_string()]);
                assert!(explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_cpf_mask_many() {
        let cli = Cli::try_parse_from(["edu", "cpf", "mask", "123", "12345678900"]).unwrap();
        match cli.command {
            Commands::Cpf(CpfArgs {
                command: CpfCommand::Mask { inputs },
            }) => assert_eq!(inputs.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_cpf_requires_input() {
        assert!(Cli::try_parse_from(["edu", "cpf", "format"]).is_err());
        assert!(Cli::try_parse_from(["edu", "cpf", "generate"]).is_err());
    }

    #[test]
    fn cli_parse_user_check() {
        let cli = Cli::try_parse_from(["edu", "user", "check", "--update", "patch.json"]).unwrap();
        match cli.command {
            Commands::User(UserArgs {
                command: UserCommand::Check { file, update },
            }) => {
                assert_eq!(file, PathBuf::from("patch.json"));
                assert!(update);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["edu", "cpf", "strip", "1"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["edu", "-vv", "cpf", "strip", "1"]).unwrap();
        assert_eq!(cli2.verbose, 2);

        let cli3 = Cli::try_parse_from(["edu", "cpf", "strip", "1", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_log_json() {
        let cli = Cli::try_parse_from(["edu", "--log-json", "cpf", "strip", "1"]).unwrap();
        assert!(cli.log_json);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["edu"]).is_err());
        assert!(Cli::try_parse_from(["edu", "nonexistent"]).is_err());
    }
}
