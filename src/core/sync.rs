//! Keep configured files out of git.
//!
//! Untracks every configured file git currently tracks, then rewrites the
//! managed `.gitignore` block to list the configured files.

use std::path::Path;
use tracing::{debug, info};

use crate::core::command::Runner;
use crate::core::config::ConfigStore;
use crate::core::git::Git;
use crate::core::gitignore;
use crate::error::{GitError, Result};

/// What a sync did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Files removed from the index, in configured order.
    pub untracked: Vec<String>,
    /// Files whose `git rm --cached` exited with failure.
    pub failed: Vec<String>,
    /// Files written to the managed block.
    pub ignored: Vec<String>,
    /// Whether `.gitignore` contents changed.
    pub gitignore_changed: bool,
}

/// Runs `git-config` against one repository root.
pub struct SyncCoordinator<'a, R: Runner + ?Sized> {
    root: &'a Path,
    git: Git<'a, R>,
}

impl<'a, R: Runner + ?Sized> SyncCoordinator<'a, R> {
    pub fn new(root: &'a Path, runner: &'a R, git_program: &'a str) -> Self {
        Self {
            root,
            git: Git::new(runner, git_program),
        }
    }

    /// Untrack configured files and rewrite `.gitignore`.
    ///
    /// git must be installed before the configuration is even read, so a
    /// missing git wins over a missing config.
    ///
    /// # Errors
    ///
    /// `GitError::NotFound` without git, `ConfigError::NotFound` without a
    /// config. Untrack failures are collected; `.gitignore` is still rewritten
    /// and then `GitError::UntrackFailed` is returned.
    pub fn sync(&self) -> Result<SyncReport> {
        self.git.ensure_available()?;
        let config = ConfigStore::new(self.root).load()?;

        let tracked = self.git.tracked_files()?;
        let mut report = SyncReport::default();

        for file in &config.files {
            if !tracked.iter().any(|t| t == file) {
                debug!(file = %file, "not tracked, skipping");
                continue;
            }
            if self.git.untrack(file)? {
                report.untracked.push(file.clone());
            } else {
                report.failed.push(file.clone());
            }
        }

        report.gitignore_changed = gitignore::update(self.root, &config.files)?;
        report.ignored = config.files;

        info!(
            untracked = report.untracked.len(),
            failed = report.failed.len(),
            gitignore_changed = report.gitignore_changed,
            "sync finished"
        );

        if !report.failed.is_empty() {
            return Err(GitError::UntrackFailed {
                files: report.failed,
            }
            .into());
        }

        Ok(report)
    }
}
