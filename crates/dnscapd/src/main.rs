// # dnscapd - registry startup
//
// Thin startup routine that populates the provider capability registry:
// 1. Reading configuration from environment variables
// 2. Initializing tracing
// 3. Registering built-in providers and providers from a declaration file
// 4. Logging what each provider declared
//
// Registry logic belongs in dnscap-core; this binary only wires it up.
//
// ## Configuration
//
// - `DNSCAP_LOG_LEVEL`: trace, debug, info, warn or error (default: info)
// - `DNSCAP_DECLARATIONS`: Path to a JSON declaration file (optional)
// - `DNSCAP_ON_INVALID_METADATA`: abort or skip (default: abort)
//
// ## Example
//
// ```bash
// export DNSCAP_DECLARATIONS=/etc/dnscap/providers.json
// export DNSCAP_ON_INVALID_METADATA=skip
//
// dnscapd
// ```

use anyhow::{Context, Result};
use dnscap_core::{
    Capability, DeclarationFile, ProviderRegistry, RegistrationPolicy, RegistryConfig,
};
use std::collections::BTreeSet;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum DnscapExitCode {
    /// Every provider registered
    Success = 0,
    /// Bad configuration or invalid provider metadata
    ConfigError = 1,
}

impl From<DnscapExitCode> for ExitCode {
    fn from(code: DnscapExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    registry: RegistryConfig,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let mut registry = RegistryConfig::new();

        if let Ok(policy) = env::var("DNSCAP_ON_INVALID_METADATA") {
            let policy: RegistrationPolicy = policy.parse()?;
            registry = registry.with_policy(policy);
        }

        if let Ok(path) = env::var("DNSCAP_DECLARATIONS") {
            registry = registry.with_declarations(path);
        }

        Ok(Self {
            registry,
            log_level: env::var("DNSCAP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.registry.validate()?;

        if let Some(path) = &self.registry.declarations
            && !path.exists()
        {
            anyhow::bail!(
                "DNSCAP_DECLARATIONS file does not exist: {}",
                path.display()
            );
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "DNSCAP_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return DnscapExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return DnscapExitCode::ConfigError.into();
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DnscapExitCode::ConfigError.into();
    }

    info!("Starting dnscapd");

    let registry = ProviderRegistry::new();
    match populate(&registry, &config.registry) {
        Ok(()) => {
            log_summary(&registry);
            DnscapExitCode::Success.into()
        }
        Err(e) => {
            // Continuing with a half-registered provider set would hide
            // missing-feature checks.
            error!("Provider registration failed: {:#}", e);
            DnscapExitCode::ConfigError.into()
        }
    }
}

/// Register built-in providers, then declared ones
fn populate(registry: &ProviderRegistry, config: &RegistryConfig) -> Result<()> {
    #[cfg(feature = "cloudflare")]
    {
        info!("Registering Cloudflare provider");
        dnscap_provider_cloudflare::register(registry);
    }

    let Some(path) = &config.declarations else {
        return Ok(());
    };

    let file = DeclarationFile::load(path)
        .with_context(|| format!("failed to load declarations from {}", path.display()))?;
    info!(
        "Loaded {} provider declaration(s) from {}",
        file.providers.len(),
        path.display()
    );

    let report = registry.register_declarations(&file.providers, config.on_invalid_metadata)?;
    for skipped in &report.skipped {
        warn!("Provider {} was not registered: {}", skipped.provider, skipped.error);
    }

    Ok(())
}

fn log_summary(registry: &ProviderRegistry) {
    let providers = registry.list_providers();
    info!("Registry ready: {} provider(s)", providers.len());

    for provider in &providers {
        let (documented, records) = split_capabilities(registry.capabilities_for(provider));
        info!(
            provider = %provider,
            notes = registry.notes_for(provider).len(),
            "Record capabilities: {}; documented: {}",
            join_or_none(&records),
            join_or_none(&documented)
        );
    }
}

/// Split capabilities into documentation-only ones and the rest
fn split_capabilities(
    capabilities: BTreeSet<Capability>,
) -> (Vec<&'static str>, Vec<&'static str>) {
    let (documented, records): (Vec<Capability>, Vec<Capability>) = capabilities
        .into_iter()
        .partition(|capability| capability.is_documentation_only());
    (
        documented.into_iter().map(Capability::as_str).collect(),
        records.into_iter().map(Capability::as_str).collect(),
    )
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_separates_documentation_capabilities() {
        let capabilities = BTreeSet::from([
            Capability::DocDualHost,
            Capability::CanUseSrv,
            Capability::CanUseAlias,
        ]);

        let (documented, records) = split_capabilities(capabilities);

        assert_eq!(documented, vec!["DocDualHost"]);
        assert_eq!(records, vec!["CanUseAlias", "CanUseSRV"]);
    }

    #[test]
    fn empty_list_reads_as_none() {
        assert_eq!(join_or_none(&[]), "(none)");
        assert_eq!(join_or_none(&["CanUsePTR", "CanUseCAA"]), "CanUsePTR, CanUseCAA");
    }
}
