//! Minimarket CLI

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use minimarket::observability;

use crate::cli::Cli;

mod cli;

fn main() -> ExitCode {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = observability::init(&cli.config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("{err}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");

            #[expect(clippy::print_stderr, reason = "user-facing error report")]
            {
                eprintln!("{err}");
            }

            ExitCode::FAILURE
        }
    }
}
