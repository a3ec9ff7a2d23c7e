//! Contract Test: Documentation Notes
//!
//! Constraints verified:
//! - Notes merge per capability with last-write-wins
//! - Notes for other capabilities survive a later merge
//! - Callers get copies and cannot corrupt the registry
//! - Registration applies capabilities and notes together
//!
//! If this test fails, generated provider tables may be wrong.

mod common;

use common::*;
use dnscap_core::{Capability, DocumentationNote, ProviderMetadata, ProviderRegistry};

#[test]
fn later_note_overwrites_earlier_one() {
    let registry = ProviderRegistry::new();
    let note1 = DocumentationNote::unsupported(&["not yet"]);
    let note2 = DocumentationNote::supported(&["since v2", "https://example.com/v2"]);

    registry.register_metadata(
        "GCLOUD",
        [
            ProviderMetadata::notes([(Capability::CanUsePtr, note1)]),
            ProviderMetadata::notes([(Capability::DocDualHost, DocumentationNote::supported(&[]))]),
        ],
    );
    registry.register_metadata(
        "GCLOUD",
        [ProviderMetadata::notes([(Capability::CanUsePtr, note2.clone())])],
    );

    let notes = registry.notes_for("GCLOUD");
    assert_eq!(notes[&Capability::CanUsePtr], note2);
    assert_eq!(
        notes[&Capability::DocDualHost],
        DocumentationNote::supported(&[])
    );
}

#[test]
fn overwrite_replaces_whole_note() {
    let registry = ProviderRegistry::new();

    registry.register_metadata(
        "GCLOUD",
        [ProviderMetadata::notes([(
            Capability::CanUseCaa,
            DocumentationNote::supported(&["comment", "https://example.com"]),
        )])],
    );
    registry.register_metadata(
        "GCLOUD",
        [ProviderMetadata::notes([(
            Capability::CanUseCaa,
            DocumentationNote::unsupported(&["broken"]),
        )])],
    );

    let note = registry.note("GCLOUD", Capability::CanUseCaa).unwrap();
    assert!(!note.has_feature());
    assert_eq!(note.comment(), "broken");
    assert_eq!(note.link(), "");
}

#[test]
fn capability_and_note_register_together() {
    let registry = ProviderRegistry::new();

    registry.register_metadata(
        "P",
        [
            ProviderMetadata::from(Capability::CanUseAlias),
            ProviderMetadata::notes([(
                Capability::CanUseAlias,
                DocumentationNote::supported(&["ok"]),
            )]),
        ],
    );

    assert!(registry.has_capability("P", Capability::CanUseAlias));
    assert_eq!(registry.notes_for("P")[&Capability::CanUseAlias].comment(), "ok");
}

#[test]
fn mutating_returned_notes_does_not_leak() {
    let registry = sample_registry();

    let mut notes = registry.notes_for("ROUTE53");
    notes.insert(Capability::CanUseSrv, DocumentationNote::supported(&["forged"]));
    notes.remove(&Capability::CanUseAlias);

    let fresh = registry.notes_for("ROUTE53");
    assert!(fresh.contains_key(&Capability::CanUseAlias));
    assert!(!fresh.contains_key(&Capability::CanUseSrv));
}

#[test]
fn notes_are_ordered_by_capability_id() {
    let registry = sample_registry();

    let order: Vec<Capability> = registry.notes_for("BIND").into_keys().collect();
    assert_eq!(
        order,
        vec![Capability::DocDualHost, Capability::DocCreateDomains]
    );
}
