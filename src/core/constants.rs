//! Constants used throughout gcp-encrypt.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.gcp-encrypt.yml).
pub const CONFIG_FILE: &str = ".gcp-encrypt.yml";

/// Ignore file kept in sync with the configured files.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// First line of the managed `.gitignore` block.
pub const GITIGNORE_BEGIN: &str = "### GCP ENCRYPT BEGIN";

/// Last line of the managed `.gitignore` block.
pub const GITIGNORE_END: &str = "### GCP ENCRYPT END";

/// Suffix appended to a plaintext path to name its ciphertext.
pub const ENCRYPTED_SUFFIX: &str = ".encrypted";

/// Document written by `gcp-encrypt init`.
pub const CONFIG_TEMPLATE: &str = "\
# gcp-encrypt configuration
#
# Files listed here are encrypted to `<file>.encrypted` with Google Cloud KMS,
# removed from the git index and added to .gitignore by `gcp-encrypt git-config`.
settings:
  project: my-project
  location: global
  keyring: my-keyring
  key: my-key
files: []
#  - config/secrets.yml
#  - .env
";
