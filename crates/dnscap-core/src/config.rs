//! Configuration types for registry startup
//!
//! Registration itself needs no configuration. These types cover what the
//! startup routine decides: where declared providers come from and what
//! happens when one of them is broken.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::metadata::ProviderDeclaration;

/// What to do when a provider's metadata cannot be registered
///
/// Parsed case-insensitively, both from the environment and from config
/// files. Serialized in lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RegistrationPolicy {
    /// Stop at the first bad provider and return its error
    ///
    /// A partially registered provider could hide missing-feature checks, so
    /// this is the default and startup treats the error as fatal.
    #[default]
    Abort,

    /// Log a warning, leave the bad provider unregistered and continue
    Skip,
}

impl FromStr for RegistrationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(Error::config(format!(
                "Unknown registration policy '{}'. Valid policies: abort, skip",
                s
            ))),
        }
    }
}

impl TryFrom<String> for RegistrationPolicy {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Startup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Policy for providers whose metadata is invalid
    #[serde(default)]
    pub on_invalid_metadata: RegistrationPolicy,

    /// Optional declaration file with additional providers
    #[serde(default)]
    pub declarations: Option<PathBuf>,
}

impl RegistryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the invalid-metadata policy
    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.on_invalid_metadata = policy;
        self
    }

    /// Set the declaration file path
    pub fn with_declarations(mut self, path: impl Into<PathBuf>) -> Self {
        self.declarations = Some(path.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.declarations
            && path.as_os_str().is_empty()
        {
            return Err(Error::config("Declaration file path cannot be empty"));
        }
        Ok(())
    }
}

/// Contents of a declaration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclarationFile {
    /// Declared providers, registered in file order
    #[serde(default)]
    pub providers: Vec<ProviderDeclaration>,
}

impl DeclarationFile {
    /// Parse a declaration file from JSON text
    ///
    /// Only the file structure is checked here. Individual metadata items
    /// are validated when they are registered.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a declaration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading provider declarations from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
