mod cli;
mod logging;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;

fn main() -> ExitCode {
    logging::init();

    match cli::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
