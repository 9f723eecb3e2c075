//! custom-view - Blade view scaffolding

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = custom_view::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
