//! Version-control operations.

use tracing::debug;

use crate::core::command::{CommandLine, Runner};
use crate::error::{GitError, Result};

/// git driven through a [`Runner`].
pub struct Git<'a, R: Runner + ?Sized> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: Runner + ?Sized> Git<'a, R> {
    /// `program` is the git executable name or path.
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Fail with `GitError::NotFound` unless git is installed.
    pub fn ensure_available(&self) -> Result<()> {
        if !self.runner.available(self.program) {
            return Err(GitError::NotFound.into());
        }
        Ok(())
    }

    /// Files currently in the index (`git ls-files -z`).
    ///
    /// Paths come back NUL-separated and unquoted, so names with non-ASCII
    /// bytes compare equal to the configured entries.
    pub fn tracked_files(&self) -> Result<Vec<String>> {
        let args = vec!["ls-files".to_string(), "-z".to_string()];
        let output = self.runner.run(self.program, &args)?;

        if !output.success {
            return Err(GitError::CommandFailed {
                command: CommandLine::new(self.program, &args).to_string(),
                stderr: output.stderr,
            }
            .into());
        }

        let files: Vec<String> = output
            .stdout
            .split('\0')
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();
        debug!(tracked = files.len(), "listed tracked files");
        Ok(files)
    }

    /// Remove `file` from the index, keeping it on disk (`git rm --cached --`).
    ///
    /// Returns whether git exited successfully.
    pub fn untrack(&self, file: &str) -> Result<bool> {
        let args = vec![
            "rm".to_string(),
            "--cached".to_string(),
            "--".to_string(),
            file.to_string(),
        ];
        let output = self.runner.run(self.program, &args)?;
        debug!(file, success = output.success, "untracked");
        Ok(output.success)
    }
}
