//! Core library components.
//!
//! Configuration, the managed `.gitignore` block, and the orchestration of
//! git and gcloud. Everything here takes the repository root explicitly.

pub mod command;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod git;
pub mod gitignore;
pub mod kms;
pub mod sync;
