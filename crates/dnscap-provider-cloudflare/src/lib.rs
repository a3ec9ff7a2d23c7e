// # Cloudflare Provider Metadata
//
// Capability declarations and documentation notes for the Cloudflare DNS
// provider (`CLOUDFLAREAPI`).
//
// This crate only describes the provider. The API client lives with the
// rest of the provider implementation; validators and documentation
// generators read what is declared here through the registry.
//
// ## Usage
//
// ```rust,ignore
// let registry = dnscap_core::ProviderRegistry::new();
// dnscap_provider_cloudflare::register(&registry);
// ```
//
// ## API Reference
//
// - Cloudflare API v4: https://developers.cloudflare.com/api/
// - CNAME flattening: https://developers.cloudflare.com/dns/cname-flattening/

use dnscap_core::{Capability, DocumentationNote, ProviderMetadata, ProviderRegistry};

/// Provider id under which Cloudflare registers
pub const PROVIDER_ID: &str = "CLOUDFLAREAPI";

const CNAME_FLATTENING_DOCS: &str = "https://developers.cloudflare.com/dns/cname-flattening/";

const DUAL_HOST_COMMENT: &str =
    "Cloudflare will not work well in situations where it is not the only DNS server";

/// Everything Cloudflare declares, in registration order
pub fn metadata() -> Vec<ProviderMetadata> {
    vec![
        ProviderMetadata::from(Capability::CanUseAlias),
        ProviderMetadata::from(Capability::CanUseCaa),
        ProviderMetadata::from(Capability::CanUseSrv),
        ProviderMetadata::from(Capability::DocCreateDomains),
        ProviderMetadata::from(Capability::DocOfficiallySupported),
        ProviderMetadata::notes([
            (
                Capability::CanUseAlias,
                DocumentationNote::supported(&[
                    "CF automatically flattens CNAME records into A records dynamically",
                    CNAME_FLATTENING_DOCS,
                ]),
            ),
            (Capability::CanUseCaa, DocumentationNote::supported(&[])),
            (Capability::CanUsePtr, DocumentationNote::unsupported(&[])),
            (Capability::CanUseSrv, DocumentationNote::supported(&[])),
            (Capability::DocCreateDomains, DocumentationNote::supported(&[])),
            (Capability::DocDualHost, DocumentationNote::unsupported(&[DUAL_HOST_COMMENT])),
            (Capability::DocOfficiallySupported, DocumentationNote::supported(&[])),
        ]),
    ]
}

/// Register Cloudflare's metadata with `registry`
///
/// Call once during startup.
pub fn register(registry: &ProviderRegistry) {
    tracing::debug!("Registering {} metadata", PROVIDER_ID);
    registry.register_metadata(PROVIDER_ID, metadata());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_declared_capabilities() {
        let registry = ProviderRegistry::new();
        register(&registry);

        assert!(registry.has_capability(PROVIDER_ID, Capability::CanUseAlias));
        assert!(registry.has_capability(PROVIDER_ID, Capability::CanUseSrv));
        assert!(!registry.has_capability(PROVIDER_ID, Capability::CanUsePtr));
        assert!(!registry.has_capability(PROVIDER_ID, Capability::DocDualHost));
    }

    #[test]
    fn notes_agree_with_capabilities() {
        let registry = ProviderRegistry::new();
        register(&registry);

        for (capability, note) in registry.notes_for(PROVIDER_ID) {
            assert_eq!(
                note.has_feature(),
                registry.has_capability(PROVIDER_ID, capability),
                "note and declaration disagree for {}",
                capability
            );
        }
    }

    #[test]
    fn alias_note_links_to_flattening_docs() {
        let registry = ProviderRegistry::new();
        register(&registry);

        let note = registry.note(PROVIDER_ID, Capability::CanUseAlias).unwrap();
        assert_eq!(note.link(), CNAME_FLATTENING_DOCS);
    }
}
