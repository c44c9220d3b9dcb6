//! tilebox - Interactive polyomino catalog and board placement game

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tilebox::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
