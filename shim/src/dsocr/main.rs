#[macro_use]
extern crate log;

use std::process::{ExitCode, Termination};

use colored::Colorize;
use dsocr_common::defaults;
use dsocr_common::error::ShimError;
use env_logger::Env;

pub mod forward;

fn setup_logger() {
    let env = Env::default().filter_or("DSOCR_SHIM_LOG", "trace").write_style_or("DSOCR_SHIM_LOG_STYLE", "always");
    env_logger::init_from_env(env);
}

fn main() -> ExitCode {
    setup_logger();

    match forward::run() {
        Ok(code) => ExitCode::from(code),
        Err(ShimError::ToolMissing(tool)) => {
            eprintln!("{}", format!("Error: \"{}\" command not found.", tool).red());
            eprintln!("Please ensure you have installed the python package via pipx:");
            eprintln!("{}", format!("  {}", defaults::INSTALL_HINT).cyan());
            ExitCode::from(1)
        }
        Err(err) => {
            error!("{err}");
            err.report()
        }
    }
}
