//! External command execution.
//!
//! git and gcloud are driven as child processes through the [`Runner`] trait,
//! so the orchestration in `sync` and `crypto` can be tested with a recording
//! fake and the process boundary can be swapped without touching them.

use std::fmt;
use std::process::{Command, Stdio};
use tracing::trace;

use crate::error::Result;

/// Result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs.
pub trait Runner {
    /// Whether `program` can be found.
    fn available(&self, program: &str) -> bool;

    /// Run `program` with `args` to completion.
    ///
    /// A non-zero exit is reported through [`CommandOutput::success`], not as
    /// an error. Errors mean the process could not be started.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Runs real processes in a working directory.
#[derive(Debug, Clone)]
pub struct System {
    cwd: std::path::PathBuf,
}

impl System {
    pub fn new(cwd: impl Into<std::path::PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl Runner for System {
    fn available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        trace!(command = %CommandLine::new(program, args), "spawning");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()?;

        let result = CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };
        trace!(success = result.success, "finished");
        Ok(result)
    }
}

/// Space-joined command line for logs and error messages.
pub struct CommandLine<'a> {
    program: &'a str,
    args: &'a [String],
}

impl<'a> CommandLine<'a> {
    pub fn new(program: &'a str, args: &'a [String]) -> Self {
        Self { program, args }
    }
}

impl fmt::Display for CommandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program)?;
        for arg in self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
