//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a gcp-encrypt command running in the project directory.
    ///
    /// Environment overrides from the caller's shell are cleared and color
    /// output is disabled.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gcp-encrypt").expect("failed to find gcp-encrypt binary");
        cmd.env_remove("GCP_ENCRYPT_DIR");
        cmd.env_remove("GCP_ENCRYPT_GIT");
        cmd.env_remove("GCP_ENCRYPT_GCLOUD");
        cmd.env_remove("GCP_ENCRYPT_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run gcp-encrypt")
    }

    /// Run with `--gcloud <gcloud>` followed by `args`.
    pub fn run_with_gcloud(&self, gcloud: &Path, args: &[&str]) -> Output {
        self.cmd()
            .arg("--gcloud")
            .arg(gcloud)
            .args(args)
            .output()
            .expect("failed to run gcp-encrypt")
    }

    /// Shortcut for `gcp-encrypt init`.
    pub fn init(&self) -> Output {
        self.run(&["init"])
    }

    /// Shortcut for `gcp-encrypt git-config`.
    pub fn git_config(&self) -> Output {
        self.run(&["git-config"])
    }

    /// Run git in the project directory, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Initialize a git repository and commit `files`.
    pub fn git_repo_with(&self, files: &[&str]) {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.email", "test@example.com"]);
        self.git(&["config", "user.name", "Test"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        for file in files {
            self.git(&["add", "--", file]);
        }
        self.git(&["commit", "-q", "-m", "initial"]);
    }
}
