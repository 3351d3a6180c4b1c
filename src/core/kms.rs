//! Google Cloud KMS operations.
//!
//! Encryption happens in `gcloud kms encrypt|decrypt`; no key material ever
//! passes through this process. Each call reads one file and writes another.
//!
//! ## Requirements
//!
//! - `gcloud` CLI must be installed and authenticated
//! - User must have cloudkms.cryptoKeyVersions.useToEncrypt and useToDecrypt permissions

use std::fmt;
use tracing::{trace, warn};

use crate::core::command::{CommandLine, Runner};
use crate::core::config::KeyRef;
use crate::error::{KmsError, Result};

/// Direction of a KMS call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments for `gcloud kms <operation>`.
pub fn args(operation: Operation, key: &KeyRef, plaintext: &str, ciphertext: &str) -> Vec<String> {
    [
        "kms",
        operation.as_str(),
        "--project",
        key.project.as_str(),
        "--location",
        key.location.as_str(),
        "--keyring",
        key.keyring.as_str(),
        "--key",
        key.key.as_str(),
        "--plaintext-file",
        plaintext,
        "--ciphertext-file",
        ciphertext,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// gcloud KMS driven through a [`Runner`].
pub struct Kms<'a, R: Runner + ?Sized> {
    runner: &'a R,
    program: &'a str,
    key: KeyRef,
}

impl<'a, R: Runner + ?Sized> Kms<'a, R> {
    /// `program` is the gcloud executable name or path.
    pub fn new(runner: &'a R, program: &'a str, key: KeyRef) -> Self {
        Self {
            runner,
            program,
            key,
        }
    }

    /// Fail with `KmsError::GcloudNotFound` unless gcloud is installed.
    pub fn ensure_available(&self) -> Result<()> {
        if !self.runner.available(self.program) {
            return Err(KmsError::GcloudNotFound.into());
        }
        Ok(())
    }

    /// Run one encrypt or decrypt call. Returns whether gcloud exited successfully.
    pub fn run(&self, operation: Operation, plaintext: &str, ciphertext: &str) -> Result<bool> {
        let args = args(operation, &self.key, plaintext, ciphertext);
        trace!(command = %CommandLine::new(self.program, &args), "running kms");

        let output = self.runner.run(self.program, &args)?;
        if !output.success {
            warn!(
                %operation,
                plaintext,
                stderr = %output.stderr,
                "gcloud kms exited with failure"
            );
        }
        Ok(output.success)
    }
}
