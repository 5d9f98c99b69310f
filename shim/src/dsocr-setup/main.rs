use std::process::ExitCode;

use colored::Colorize;

pub mod checks;

fn main() -> ExitCode {
    println!("{}", "[dsocr-shim] Post-install check...".cyan());

    checks::check_python();
    checks::check_tool();

    // advisory only, a failed check must not fail the installation
    ExitCode::SUCCESS
}
