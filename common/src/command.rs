use std::{
    ffi::OsStr,
    fmt::{Display, Write},
    process::{Command, ExitStatus, Output},
};

use thiserror::Error;

pub trait CommandExtTrait {
    /// Execute this command with captured output and return:
    ///
    /// 1. An IO Error if the command could not be run
    /// 2. An Execution Error if the Command was not successful
    /// 3. The [Output] of the Command if the command was executed successfully
    ///
    /// Attaches the program and all args to the resulting error.
    ///
    /// If a termination with a non 0 exit status is considered successful
    /// this method should not be used.
    fn perform(&mut self) -> Result<Output, CommandError>;

    /// Execute this command with inherited stdio and hand back the child's
    /// [ExitStatus]. A non-zero status is a result to relay, not an error;
    /// only a failure to start the child is reported as one.
    fn forward(&mut self) -> Result<ExitStatus, CommandError>;
}

impl CommandExtTrait for Command {
    fn perform(&mut self) -> Result<Output, CommandError> {
        let base: ProcessError = match self.output() {
            Ok(output) => {
                if output.status.success() {
                    return Ok(output);
                }
                output.into()
            }
            Err(err) => err.into(),
        };
        Err(describe(self, base))
    }

    fn forward(&mut self) -> Result<ExitStatus, CommandError> {
        match self.status() {
            Ok(status) => Ok(status),
            Err(err) => Err(describe(self, err.into())),
        }
    }
}

fn describe(command: &Command, base: ProcessError) -> CommandError {
    CommandError {
        base,
        program: command.get_program().to_string_lossy().into_owned(),
        args: command
            .get_args()
            .flat_map(OsStr::to_str)
            .map(ToOwned::to_owned)
            .collect(),
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    // The Command terminated correctly but with unwanted results (e.g. wrong return code)
    #[error("The process failed with status {}", .0.status)]
    ExecutionError(std::process::Output),
}

impl From<std::process::Output> for ProcessError {
    fn from(value: std::process::Output) -> Self {
        Self::ExecutionError(value)
    }
}

#[derive(Debug, Error)]
pub struct CommandError {
    pub base: ProcessError,
    pub program: String,
    pub args: Vec<String>,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        f.write_char(' ')?;
        for arg in self.args.iter() {
            f.write_str(arg)?;
            f.write_char(' ')?;
        }
        std::fmt::Display::fmt(&self.base, f)
    }
}
