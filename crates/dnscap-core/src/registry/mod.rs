//! Provider capability registry
//!
//! The registry records, per provider, which optional features it supports
//! and the documentation notes explaining that support. Validators and
//! documentation generators query it instead of hard-coding provider
//! knowledge.
//!
//! ## Usage
//!
//! ```rust
//! use dnscap_core::{Capability, DocumentationNote, ProviderMetadata, ProviderRegistry};
//!
//! let registry = ProviderRegistry::new();
//! registry.register_metadata(
//!     "BIND",
//!     [
//!         ProviderMetadata::from(Capability::CanUsePtr),
//!         ProviderMetadata::notes([(
//!             Capability::DocDualHost,
//!             DocumentationNote::supported(&["apex NS records are editable"]),
//!         )]),
//!     ],
//! );
//!
//! assert!(registry.has_capability("BIND", Capability::CanUsePtr));
//! assert!(!registry.has_capability("BIND", Capability::CanUseAlias));
//! ```
//!
//! ## Registration
//!
//! Provider crates expose a `register()` function that the startup routine
//! calls once:
//!
//! ```rust,ignore
//! // In dnscap-provider-cloudflare
//! pub fn register(registry: &ProviderRegistry) {
//!     registry.register_metadata(PROVIDER_ID, metadata());
//! }
//! ```

mod capabilities;
mod documentation;

pub use capabilities::CapabilityRegistry;
pub use documentation::DocumentationRegistry;

use std::collections::BTreeSet;

use crate::capability::Capability;
use crate::config::RegistrationPolicy;
use crate::error::{Error, Result};
use crate::metadata::{ProviderDeclaration, ProviderMetadata};
use crate::note::{DocumentationNote, DocumentationNotes};

/// Registry of provider capabilities and documentation notes
///
/// Owns one [`CapabilityRegistry`] and one [`DocumentationRegistry`]. Build
/// it once during startup and share it by reference (or `Arc`) with every
/// consumer.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    capabilities: CapabilityRegistry,
    documentation: DocumentationRegistry,
}

/// Outcome of registering a batch of declarations
#[derive(Debug, Default)]
pub struct RegistrationReport {
    /// Providers registered, in order
    pub registered: Vec<String>,

    /// Providers left out under [`RegistrationPolicy::Skip`]
    pub skipped: Vec<SkippedProvider>,
}

/// A provider that was not registered, and why
#[derive(Debug)]
pub struct SkippedProvider {
    /// Provider id
    pub provider: String,
    /// Error that caused the skip
    pub error: Error,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider's capabilities and notes
    ///
    /// Items are visited once each, in order. Capabilities are declared in
    /// the capability registry; note sets are merged into the documentation
    /// registry with last-write-wins semantics, so a later note for the same
    /// capability replaces an earlier one.
    ///
    /// Each registry receives the whole registration as one batch: readers
    /// see either none or all of the provider's capabilities (and likewise
    /// for its notes).
    pub fn register_metadata(
        &self,
        provider: &str,
        items: impl IntoIterator<Item = ProviderMetadata>,
    ) {
        let mut capabilities = Vec::new();
        let mut notes = DocumentationNotes::new();

        for item in items {
            match item {
                ProviderMetadata::Capability(capability) => capabilities.push(capability),
                ProviderMetadata::Notes(batch) => notes.extend(batch),
            }
        }

        let capability_count = capabilities.len();
        let note_count = notes.len();
        self.capabilities.declare_all(provider, capabilities);
        self.documentation.declare_notes(provider, notes);

        tracing::info!(
            provider,
            capabilities = capability_count,
            notes = note_count,
            "Registered provider metadata"
        );
    }

    /// Register a provider declared as data
    ///
    /// Every item is validated before anything is applied. If one item is
    /// unrecognized, the error names it and nothing for this provider is
    /// registered; later items are not looked at.
    pub fn register_declaration(&self, declaration: &ProviderDeclaration) -> Result<()> {
        let items = declaration.to_metadata()?;
        self.register_metadata(&declaration.provider, items);
        Ok(())
    }

    /// Register several declarations under `policy`
    ///
    /// With [`RegistrationPolicy::Abort`] the first failing provider ends the
    /// call: providers before it stay registered, providers after it are not
    /// attempted. With [`RegistrationPolicy::Skip`] the failing provider is
    /// logged, recorded in the report and the rest are registered.
    pub fn register_declarations<'a>(
        &self,
        declarations: impl IntoIterator<Item = &'a ProviderDeclaration>,
        policy: RegistrationPolicy,
    ) -> Result<RegistrationReport> {
        let mut report = RegistrationReport::default();

        for declaration in declarations {
            match self.register_declaration(declaration) {
                Ok(()) => report.registered.push(declaration.provider.clone()),
                Err(error) if policy == RegistrationPolicy::Skip && error.is_metadata_error() => {
                    tracing::warn!(
                        provider = %declaration.provider,
                        "Skipping provider with invalid metadata: {}",
                        error
                    );
                    report.skipped.push(SkippedProvider {
                        provider: declaration.provider.clone(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }
        }

        Ok(report)
    }

    /// Check whether `provider` has declared `capability`
    ///
    /// Returns `false` for unknown providers as well as undeclared
    /// capabilities; callers cannot rely on the feature in either case.
    pub fn has_capability(&self, provider: &str, capability: Capability) -> bool {
        self.capabilities.has_capability(provider, capability)
    }

    /// Copy of the provider's documentation notes (empty if none)
    pub fn notes_for(&self, provider: &str) -> DocumentationNotes {
        self.documentation.notes_for(provider)
    }

    /// Copy of the provider's note for one capability
    pub fn note(&self, provider: &str, capability: Capability) -> Option<DocumentationNote> {
        self.documentation.note(provider, capability)
    }

    /// Snapshot of every capability the provider declared
    pub fn capabilities_for(&self, provider: &str) -> BTreeSet<Capability> {
        self.capabilities.capabilities_for(provider)
    }

    /// Sorted list of providers that declared `capability`
    pub fn providers_with(&self, capability: Capability) -> Vec<String> {
        self.capabilities.providers_with(capability)
    }

    /// Sorted list of every provider known to either registry
    pub fn list_providers(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .capabilities
            .list_providers()
            .into_iter()
            .chain(self.documentation.list_providers())
            .collect();
        names.into_iter().collect()
    }

    /// Check if a provider has registered anything
    pub fn has_provider(&self, provider: &str) -> bool {
        self.list_providers().iter().any(|name| name == provider)
    }

    /// The underlying capability registry
    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    /// The underlying documentation registry
    pub fn documentation(&self) -> &DocumentationRegistry {
        &self.documentation
    }
}
