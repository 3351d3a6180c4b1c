//! Error types.
//!
//! Each concern gets its own enum; [`Error`] wraps them so core functions can
//! return a single `Result` and `?` across layers.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Kms(#[from] KmsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(".gcp-encrypt.yml already exists")]
    AlreadyInitialized,

    #[error(".gcp-encrypt.yml was not found")]
    NotFound,

    #[error("failed to read .gcp-encrypt.yml: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse .gcp-encrypt.yml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("missing setting: settings.{field}")]
    MissingSetting { field: &'static str },
}

/// Version-control errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("could not find `git` executable")]
    NotFound,

    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("failed to untrack: {}", .files.join(", "))]
    UntrackFailed { files: Vec<String> },
}

/// Key-management errors.
#[derive(Error, Debug)]
pub enum KmsError {
    #[error("could not find `gcloud` executable")]
    GcloudNotFound,

    #[error("{operation} failed for: {}", .files.join(", "))]
    Failed {
        operation: &'static str,
        files: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
