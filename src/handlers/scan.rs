//! Scan mode handlers.

use crate::error::error_chain;
use crate::{Cli, run_scan};
use std::process::ExitCode;
use tracing::{debug, info};

/// Run normal scan mode.
///
/// Output goes to stdout only when the whole scan succeeded; on error,
/// nothing is printed there and the error chain goes to stderr.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    info!(path = %cli.path.display(), "Starting lx");
    match run_scan(cli) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "Scan returned an error");
            eprintln!("Error: {}", error_chain(&e));
            ExitCode::from(e.exit_code())
        }
    }
}
