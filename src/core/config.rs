//! Configuration file management.
//!
//! Handles creating and reading `.gcp-encrypt.yml`. The file is loaded fresh
//! by every command; nothing is cached between invocations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.gcp-encrypt.yml`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// KMS key coordinates
    #[serde(default)]
    pub settings: Settings,
    /// Files to keep encrypted, relative to the repository root, in order
    #[serde(default)]
    pub files: Vec<String>,
}

/// The `settings` section.
///
/// Every field is optional at parse time; [`Settings::key_ref`] checks
/// presence when a KMS command actually needs them.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub keyring: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// Fully specified KMS key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRef {
    pub project: String,
    pub location: String,
    pub keyring: String,
    pub key: String,
}

impl Settings {
    /// Resolve the KMS key, failing on the first missing or empty field.
    pub fn key_ref(&self) -> Result<KeyRef> {
        fn require(value: &Option<String>, field: &'static str) -> Result<String> {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(ConfigError::MissingSetting { field }.into()),
            }
        }

        Ok(KeyRef {
            project: require(&self.project, "project")?,
            location: require(&self.location, "location")?,
            keyring: require(&self.keyring, "keyring")?,
            key: require(&self.key, "key")?,
        })
    }
}

impl Config {
    /// Parse a configuration document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(yaml).map_err(ConfigError::Parse)?;
        Ok(config)
    }
}

/// Reads and creates the configuration file under a repository root.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to `.gcp-encrypt.yml`.
    pub fn path(&self) -> PathBuf {
        self.root.join(constants::CONFIG_FILE)
    }

    /// Write the template configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if the file exists.
    pub fn initialize(&self) -> Result<PathBuf> {
        let path = self.path();
        if path.exists() {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        debug!(path = %path.display(), "writing config template");
        std::fs::write(&path, constants::CONFIG_TEMPLATE)?;
        Ok(path)
    }

    /// Load `.gcp-encrypt.yml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// or `ConfigError::Parse` if the YAML is malformed.
    pub fn load(&self) -> Result<Config> {
        let path = self.path();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config = Config::from_yaml(&contents)?;

        debug!(files = config.files.len(), "config loaded");
        Ok(config)
    }

    /// Configured file list.
    pub fn files(&self) -> Result<Vec<String>> {
        Ok(self.load()?.files)
    }
}
