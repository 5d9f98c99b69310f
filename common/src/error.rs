use std::process::{ExitCode, Output, Termination};

use thiserror::Error;

use crate::command::{CommandError, ProcessError};

#[derive(Debug, Error)]
pub enum ShimError {
    /// The shim tried to run the wrapped tool and failed
    #[error("Failed to run {}", .0)]
    CommandError(#[from] CommandError),
    /// There was an error in an IO operation
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// The wrapped tool could not be resolved on the search path
    #[error("\"{}\" command not found", .0)]
    ToolMissing(String),
}

impl Termination for ShimError {
    /// A failed sub command will forward its error code
    ///
    /// All other errors are represented as Failure
    fn report(self) -> std::process::ExitCode {
        match self {
            ShimError::CommandError(CommandError {
                base: ProcessError::ExecutionError(Output { status, .. }),
                ..
            }) => match status.code() {
                Some(code) => (code as u8).into(),
                None => ExitCode::FAILURE,
            },
            _ => ExitCode::FAILURE,
        }
    }
}
