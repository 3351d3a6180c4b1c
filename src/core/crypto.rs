//! Encrypt and decrypt configured files.
//!
//! `<file>` is the plaintext and `<file>.encrypted` the ciphertext. Files are
//! processed one at a time in configured order. A file whose source side is
//! missing is skipped.

use std::path::Path;
use tracing::{debug, info};

use crate::core::command::Runner;
use crate::core::config::ConfigStore;
use crate::core::constants::ENCRYPTED_SUFFIX;
use crate::core::kms::{Kms, Operation};
use crate::error::{KmsError, Result};

/// Ciphertext path for a plaintext path.
pub fn encrypted_path(file: &str) -> String {
    format!("{}{}", file, ENCRYPTED_SUFFIX)
}

/// Pick the files an operation works on.
///
/// Without a selection every configured file is used. A selection keeps its
/// own order and drops anything that is not configured.
pub fn resolve_files(configured: &[String], selected: Option<&[String]>) -> Vec<String> {
    match selected {
        None => configured.to_vec(),
        Some(selected) => selected
            .iter()
            .filter(|file| configured.contains(file))
            .cloned()
            .collect(),
    }
}

/// Outcome of an encrypt or decrypt run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CryptoReport {
    /// Files gcloud handled successfully.
    pub processed: Vec<String>,
    /// Files skipped because their source did not exist.
    pub skipped: Vec<String>,
    /// Files gcloud exited with failure for.
    pub failed: Vec<String>,
}

/// Runs KMS operations against one repository root.
pub struct CryptoRunner<'a, R: Runner + ?Sized> {
    root: &'a Path,
    runner: &'a R,
    gcloud: &'a str,
}

impl<'a, R: Runner + ?Sized> CryptoRunner<'a, R> {
    pub fn new(root: &'a Path, runner: &'a R, gcloud: &'a str) -> Self {
        Self {
            root,
            runner,
            gcloud,
        }
    }

    /// Encrypt each existing `<file>` to `<file>.encrypted`.
    pub fn encrypt(&self, selected: Option<&[String]>) -> Result<CryptoReport> {
        self.execute(Operation::Encrypt, selected)
    }

    /// Decrypt each existing `<file>.encrypted` to `<file>`.
    pub fn decrypt(&self, selected: Option<&[String]>) -> Result<CryptoReport> {
        self.execute(Operation::Decrypt, selected)
    }

    fn execute(&self, operation: Operation, selected: Option<&[String]>) -> Result<CryptoReport> {
        let config = ConfigStore::new(self.root).load()?;
        let files = resolve_files(&config.files, selected);
        debug!(%operation, files = files.len(), "resolved files");

        let mut report = CryptoReport::default();
        let mut pending = Vec::new();
        for file in files {
            let source = match operation {
                Operation::Encrypt => file.clone(),
                Operation::Decrypt => encrypted_path(&file),
            };
            if self.root.join(&source).exists() {
                pending.push(file);
            } else {
                debug!(%operation, source = %source, "source missing, skipping");
                report.skipped.push(file);
            }
        }

        if pending.is_empty() {
            return Ok(report);
        }

        let kms = Kms::new(self.runner, self.gcloud, config.settings.key_ref()?);
        kms.ensure_available()?;

        for file in pending {
            let ciphertext = encrypted_path(&file);
            if kms.run(operation, &file, &ciphertext)? {
                report.processed.push(file);
            } else {
                report.failed.push(file);
            }
        }

        info!(
            %operation,
            processed = report.processed.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "kms run finished"
        );

        if !report.failed.is_empty() {
            return Err(KmsError::Failed {
                operation: operation.as_str(),
                files: report.failed,
            }
            .into());
        }

        Ok(report)
    }
}
