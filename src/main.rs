//! Pre-flight configuration validator.
//!
//! ```text
//! preflight-validator <config_file>
//! ```
//!
//! Prints the validation report to stdout and exits 0 when the
//! configuration is valid, 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use lb_preflight::observability::init_logging;
use lb_preflight::ConfigValidator;

const BIN_NAME: &str = "preflight-validator";

#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version)]
#[command(about = "Validate load balancer configuration files before they are applied", long_about = None)]
struct Cli {
    /// Configuration file (.json, .yaml or .yml)
    config_file: PathBuf,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Do not print the report; rely on the exit status
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return argument_error(e),
    };

    init_logging(cli.verbose);
    tracing::debug!(config_file = %cli.config_file.display(), "Starting validation");

    let mut validator = ConfigValidator::new(cli.config_file);
    let is_valid = validator.validate();

    if !cli.quiet {
        print!("{}", validator.report());
    }

    if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn argument_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::MissingRequiredArgument => {
            println!("Usage: {} <config_file>", BIN_NAME);
            println!("Example: {} configs/load_balancer.yaml", BIN_NAME);
            ExitCode::FAILURE
        }
        _ => {
            let _ = e.print();
            ExitCode::FAILURE
        }
    }
}
