//! Shared fixtures for registry contract tests

#![allow(dead_code)]

use dnscap_core::{
    Capability, DocumentationNote, ProviderDeclaration, ProviderMetadata, ProviderRegistry,
};
use serde_json::{Value, json};

/// Registry with two providers registered the way provider crates do it
pub fn sample_registry() -> ProviderRegistry {
    let registry = ProviderRegistry::new();

    registry.register_metadata(
        "BIND",
        [
            ProviderMetadata::from(Capability::CanUsePtr),
            ProviderMetadata::from(Capability::CanUseSrv),
            ProviderMetadata::from(Capability::CanUseCaa),
            ProviderMetadata::notes([
                (
                    Capability::DocDualHost,
                    DocumentationNote::supported(&["apex NS records are editable"]),
                ),
                (Capability::DocCreateDomains, DocumentationNote::supported(&[])),
            ]),
        ],
    );

    registry.register_metadata(
        "ROUTE53",
        [
            ProviderMetadata::from(Capability::CanUseAlias),
            ProviderMetadata::from(Capability::CanUsePtr),
            ProviderMetadata::notes([(
                Capability::CanUseAlias,
                DocumentationNote::supported(&[
                    "uses native R53_ALIAS records",
                    "https://docs.aws.amazon.com/Route53/",
                ]),
            )]),
        ],
    );

    registry
}

/// Declaration built from raw JSON items
pub fn declaration(provider: &str, items: Vec<Value>) -> ProviderDeclaration {
    ProviderDeclaration {
        provider: provider.to_string(),
        metadata: items,
    }
}

/// A well-formed capability item
pub fn capability_item(name: &str) -> Value {
    json!({ "capability": name })
}

/// A well-formed single-note item
pub fn note_item(name: &str, has_feature: bool, comment: &str) -> Value {
    json!({ "notes": { (name): { "has_feature": has_feature, "comment": comment } } })
}

/// An item that is neither a capability nor a note set
pub fn unrecognized_item() -> Value {
    json!(17)
}
