//! readme-gen: interactive README.md generator.
//!
//! This is the main entry point for the `readme-gen` CLI. It parses
//! arguments, installs logging, runs the selected mode, and maps errors to
//! exit codes.

use readme_gen::cli::Cli;
use readme_gen::{app, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match app::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
