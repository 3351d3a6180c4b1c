//! Test support utilities for gcp-encrypt integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir and a separate dir for fake tools.
/// Child processes use `.current_dir()`, so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding fake executables and their call logs
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");

        Self { dir, bin }
    }

    /// Create a test environment with `.gcp-encrypt.yml` listing `files`.
    pub fn configured(files: &[&str]) -> Self {
        let t = Self::new();
        t.write(".gcp-encrypt.yml", &config_yaml(files));
        t
    }

    /// Path inside the project directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.path().join(file)
    }

    /// Write a project file, creating parent directories.
    pub fn write(&self, file: &str, contents: &str) {
        let path = self.path(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(path, contents).expect("failed to write file");
    }

    /// Read a project file.
    pub fn read(&self, file: &str) -> String {
        std::fs::read_to_string(self.path(file)).expect("failed to read file")
    }

    pub fn exists(&self, file: &str) -> bool {
        self.path(file).exists()
    }

    /// Install a fake `gcloud` that logs its arguments and copies
    /// `ENC:`-prefixed content between plaintext and ciphertext.
    #[cfg(unix)]
    pub fn fake_gcloud(&self) -> PathBuf {
        self.install_script("gcloud", FAKE_GCLOUD)
    }

    /// Install a fake `gcloud` that logs its arguments and always fails.
    #[cfg(unix)]
    pub fn failing_gcloud(&self) -> PathBuf {
        self.install_script("gcloud", FAILING_GCLOUD)
    }

    /// Lines logged by the fake `gcloud`, one per call.
    pub fn gcloud_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.bin.path().join("gcloud.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[cfg(unix)]
    fn install_script(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, script).expect("failed to write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod script");
        path
    }
}
