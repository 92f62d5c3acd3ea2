//! FILENAME: app/src/main.rs
// PURPOSE: Entry point. Evaluates the built-in expression and prints the result.

use std::process::ExitCode;

fn main() -> ExitCode {
    match calc_app::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
