//! Capability registry
//!
//! Maps provider ids to the set of capabilities they have declared. Sets only
//! grow; there is no way to revoke a capability.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::capability::Capability;

/// Declared capabilities per provider
///
/// ## Thread Safety
///
/// Uses interior mutability with RwLock, allowing concurrent reads and
/// exclusive writes. A batch passed to [`declare_all`](Self::declare_all) is
/// applied under a single write lock.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    providers: RwLock<HashMap<String, HashSet<Capability>>>,
}

impl CapabilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, HashSet<Capability>>> {
        self.providers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, HashSet<Capability>>> {
        self.providers.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark `capability` as supported by `provider`
    ///
    /// Declaring the same pair again has no further effect.
    pub fn declare(&self, provider: &str, capability: Capability) {
        self.declare_all(provider, [capability]);
    }

    /// Declare several capabilities for one provider at once
    pub fn declare_all(&self, provider: &str, capabilities: impl IntoIterator<Item = Capability>) {
        let mut capabilities = capabilities.into_iter().peekable();
        if capabilities.peek().is_none() {
            return;
        }

        let mut providers = self.write();
        let declared = providers.entry(provider.to_string()).or_default();
        for capability in capabilities {
            if declared.insert(capability) {
                tracing::debug!(provider, %capability, "Declared capability");
            }
        }
    }

    /// Check whether `provider` has declared `capability`
    ///
    /// Unknown providers and undeclared capabilities both yield `false`.
    pub fn has_capability(&self, provider: &str, capability: Capability) -> bool {
        self.read()
            .get(provider)
            .is_some_and(|declared| declared.contains(&capability))
    }

    /// Snapshot of every capability `provider` has declared
    pub fn capabilities_for(&self, provider: &str) -> BTreeSet<Capability> {
        self.read()
            .get(provider)
            .map(|declared| declared.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Sorted list of providers that declared `capability`
    pub fn providers_with(&self, capability: Capability) -> Vec<String> {
        let mut names: Vec<String> = self
            .read()
            .iter()
            .filter(|(_, declared)| declared.contains(&capability))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Sorted list of providers with at least one declaration call
    pub fn list_providers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_capability_is_false() {
        let registry = CapabilityRegistry::new();
        registry.declare("BIND", Capability::CanUsePtr);

        assert!(!registry.has_capability("BIND", Capability::CanUseAlias));
        assert!(!registry.has_capability("ROUTE53", Capability::CanUsePtr));
    }

    #[test]
    fn declare_is_idempotent() {
        let registry = CapabilityRegistry::new();
        for _ in 0..3 {
            registry.declare("BIND", Capability::CanUseSrv);
        }

        assert!(registry.has_capability("BIND", Capability::CanUseSrv));
        assert_eq!(registry.capabilities_for("BIND").len(), 1);
    }

    #[test]
    fn empty_batch_does_not_create_provider() {
        let registry = CapabilityRegistry::new();
        registry.declare_all("GHOST", std::iter::empty());

        assert!(registry.list_providers().is_empty());
    }

    #[test]
    fn provider_ids_are_case_sensitive() {
        let registry = CapabilityRegistry::new();
        registry.declare("BIND", Capability::CanUseCaa);

        assert!(!registry.has_capability("bind", Capability::CanUseCaa));
    }

    #[test]
    fn providers_with_is_sorted() {
        let registry = CapabilityRegistry::new();
        registry.declare("ROUTE53", Capability::CanUseAlias);
        registry.declare("BIND", Capability::CanUsePtr);
        registry.declare("AZURE_DNS", Capability::CanUseAlias);

        assert_eq!(
            registry.providers_with(Capability::CanUseAlias),
            vec!["AZURE_DNS".to_string(), "ROUTE53".to_string()]
        );
        assert_eq!(registry.list_providers().len(), 3);
    }
}
