//! Provider metadata items
//!
//! Providers describe themselves with a list of [`ProviderMetadata`] items:
//! a bare [`Capability`] declares support, a [`DocumentationNotes`] map adds
//! notes. In code the enum makes any other kind of item unrepresentable.
//!
//! Metadata can also arrive as data through a [`ProviderDeclaration`]. Each
//! JSON item is an object with exactly one key:
//!
//! ```json
//! { "provider": "BIND",
//!   "metadata": [
//!     { "capability": "CanUsePTR" },
//!     { "notes": { "DocDualHost": { "has_feature": true, "comment": "apex NS editable" } } }
//!   ] }
//! ```
//!
//! Anything else is rejected with [`Error::UnrecognizedMetadata`] naming the
//! offending kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::Capability;
use crate::error::{Error, Result};
use crate::note::{DocumentationNote, DocumentationNotes};

/// One item of a provider's registration
///
/// Serializes to the same single-key objects accepted by
/// [`ProviderDeclaration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMetadata {
    /// Declares that the provider supports this capability
    Capability(Capability),
    /// Notes to merge into the provider's documentation
    Notes(DocumentationNotes),
}

impl From<Capability> for ProviderMetadata {
    fn from(capability: Capability) -> Self {
        Self::Capability(capability)
    }
}

impl From<DocumentationNotes> for ProviderMetadata {
    fn from(notes: DocumentationNotes) -> Self {
        Self::Notes(notes)
    }
}

impl ProviderMetadata {
    /// Build a notes item from `(capability, note)` pairs
    pub fn notes(entries: impl IntoIterator<Item = (Capability, DocumentationNote)>) -> Self {
        Self::Notes(entries.into_iter().collect())
    }

    /// Parse a single JSON item for `provider`
    pub fn from_value(provider: &str, value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::unrecognized_metadata(provider, json_kind(value)));
        };

        let mut entries = map.iter();
        let (key, inner) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                return Err(Error::unrecognized_metadata(
                    provider,
                    format!("object with keys {:?}", keys),
                ));
            }
        };

        match key.as_str() {
            "capability" => {
                let name = inner.as_str().ok_or_else(|| {
                    Error::invalid_input(format!(
                        "{}: capability must be a string, got {}",
                        provider,
                        json_kind(inner)
                    ))
                })?;
                Ok(Self::Capability(name.parse()?))
            }
            "notes" => {
                let raw = inner.as_object().ok_or_else(|| {
                    Error::invalid_input(format!(
                        "{}: notes must be an object, got {}",
                        provider,
                        json_kind(inner)
                    ))
                })?;

                let mut notes = DocumentationNotes::new();
                for (name, note) in raw {
                    let capability: Capability = name.parse()?;
                    let note = DocumentationNote::deserialize(note).map_err(|e| {
                        Error::invalid_input(format!("{}: note for {}: {}", provider, name, e))
                    })?;
                    notes.insert(capability, note);
                }
                Ok(Self::Notes(notes))
            }
            other => Err(Error::unrecognized_metadata(
                provider,
                format!("object with key {:?}", other),
            )),
        }
    }
}

/// A provider's registration expressed as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDeclaration {
    /// Provider id (case-sensitive)
    pub provider: String,

    /// Raw metadata items, validated by [`ProviderDeclaration::to_metadata`]
    #[serde(default)]
    pub metadata: Vec<Value>,
}

impl ProviderDeclaration {
    /// Create a declaration from typed items
    pub fn new(
        provider: impl Into<String>,
        items: impl IntoIterator<Item = ProviderMetadata>,
    ) -> Result<Self> {
        let metadata = items
            .into_iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            provider: provider.into(),
            metadata,
        })
    }

    /// Convert every raw item, failing on the first bad one
    pub fn to_metadata(&self) -> Result<Vec<ProviderMetadata>> {
        self.metadata
            .iter()
            .map(|value| ProviderMetadata::from_value(&self.provider, value))
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
