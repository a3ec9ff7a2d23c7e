//! Error types for the capability registry
//!
//! Queries never fail: an unknown provider or an undeclared capability is a
//! plain negative answer. Errors only arise when provider metadata arrives as
//! data (declaration files) and cannot be turned into registry entries.

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the registry
#[derive(Error, Debug)]
pub enum Error {
    /// A metadata item is neither a capability nor a note set
    ///
    /// This is a defect in provider registration code. Startup treats it as
    /// fatal unless the registration policy says to skip the provider.
    #[error("Unrecognized provider metadata for {provider}: {kind}")]
    UnrecognizedMetadata {
        /// Provider being registered
        provider: String,
        /// Description of the offending item's kind
        kind: String,
    },

    /// Capability name does not match any known capability
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Malformed input (e.g. a note with the wrong field types)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a declaration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an unrecognized metadata error
    pub fn unrecognized_metadata(provider: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnrecognizedMetadata {
            provider: provider.into(),
            kind: kind.into(),
        }
    }

    /// Create an unknown capability error
    pub fn unknown_capability(name: impl Into<String>) -> Self {
        Self::UnknownCapability(name.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from a provider's own metadata
    ///
    /// These are the errors a [`RegistrationPolicy::Skip`] policy may step
    /// over. I/O and configuration errors are never skippable.
    ///
    /// [`RegistrationPolicy::Skip`]: crate::config::RegistrationPolicy::Skip
    pub fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedMetadata { .. } | Self::UnknownCapability(_) | Self::InvalidInput(_)
        )
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
