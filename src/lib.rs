//! gcp-encrypt - keep repository secrets encrypted with Google Cloud KMS.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write .gcp-encrypt.yml
//! │   ├── sync          # git-config: untrack + .gitignore
//! │   ├── crypt         # encrypt / decrypt
//! │   ├── status        # Per-file overview
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .gcp-encrypt.yml management
//!     ├── gitignore     # Managed .gitignore block merge
//!     ├── command       # External command runner
//!     ├── git           # git ls-files / rm --cached
//!     ├── kms           # gcloud kms encrypt / decrypt
//!     ├── sync          # Untrack + ignore orchestration
//!     └── crypto        # Per-file encrypt / decrypt orchestration
//! ```
//!
//! Cryptography is delegated to `gcloud kms`; no key material is handled
//! here.

pub mod cli;
pub mod core;
pub mod error;
