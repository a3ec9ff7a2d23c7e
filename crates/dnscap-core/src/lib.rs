// # dnscap-core
//
// Capability and documentation registry for DNS providers.
//
// ## Architecture Overview
//
// - **Capability**: Closed, extensible set of optional provider features
// - **DocumentationNote**: Support status plus optional comment and link
// - **CapabilityRegistry**: Provider id → declared capabilities
// - **DocumentationRegistry**: Provider id → per-capability notes
// - **ProviderRegistry**: Registration facade owning both registries
//
// ## Design Principles
//
// 1. **No global state**: The application builds one registry at startup and
//    passes it to consumers
// 2. **Absence is an answer**: Unknown providers and undeclared capabilities
//    query as `false`, never as errors
// 3. **Register once, read many**: Providers register during startup; queries
//    follow from any thread
// 4. **Bad metadata is loud**: Unrecognized declarations fail registration
//    with an error naming the offending item

pub mod capability;
pub mod config;
pub mod error;
pub mod metadata;
pub mod note;
pub mod registry;

// Re-export core types for convenience
pub use capability::Capability;
pub use config::{DeclarationFile, RegistrationPolicy, RegistryConfig};
pub use error::{Error, Result};
pub use metadata::{ProviderDeclaration, ProviderMetadata};
pub use note::{DocumentationNote, DocumentationNotes};
pub use registry::{
    CapabilityRegistry, DocumentationRegistry, ProviderRegistry, RegistrationReport,
    SkippedProvider,
};
