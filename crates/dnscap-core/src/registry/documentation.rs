//! Documentation registry
//!
//! Maps provider ids to their documentation notes. Declaring notes merges
//! them into what the provider already has; a note for a capability that is
//! already present replaces the old note entirely.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::capability::Capability;
use crate::note::{DocumentationNote, DocumentationNotes};

/// Documentation notes per provider
///
/// ## Thread Safety
///
/// Same locking model as [`CapabilityRegistry`](super::CapabilityRegistry):
/// concurrent reads, exclusive writes, one lock per merge.
#[derive(Debug, Default)]
pub struct DocumentationRegistry {
    notes: RwLock<HashMap<String, DocumentationNotes>>,
}

impl DocumentationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, DocumentationNotes>> {
        self.notes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, DocumentationNotes>> {
        self.notes.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merge `notes` into the provider's existing notes (last write wins)
    pub fn declare_notes(&self, provider: &str, notes: DocumentationNotes) {
        if notes.is_empty() {
            return;
        }

        let mut all = self.write();
        let existing = all.entry(provider.to_string()).or_default();
        for (capability, note) in notes {
            if existing.insert(capability, note).is_some() {
                tracing::debug!(provider, %capability, "Replaced documentation note");
            } else {
                tracing::debug!(provider, %capability, "Added documentation note");
            }
        }
    }

    /// Copy of every note registered for `provider`
    ///
    /// Empty when the provider never declared notes.
    pub fn notes_for(&self, provider: &str) -> DocumentationNotes {
        self.read().get(provider).cloned().unwrap_or_default()
    }

    /// Copy of the note for a single capability, if any
    pub fn note(&self, provider: &str, capability: Capability) -> Option<DocumentationNote> {
        self.read()
            .get(provider)
            .and_then(|notes| notes.get(&capability))
            .cloned()
    }

    /// Sorted list of providers that declared notes
    pub fn list_providers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }
}
