//! Capability enumeration
//!
//! A capability is an optional feature a DNS provider may or may not
//! support. Each one has a stable numeric id and a stable name; both are
//! part of the public contract.
//!
//! ## Extending
//!
//! New capabilities are appended with the next unused id. Existing ids and
//! names must never change, since validators and documentation generators
//! refer to them.
//!
//! If you add a capability here you probably also want the record validator
//! to check it before emitting the corresponding record type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Optional feature a provider may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
#[non_exhaustive]
pub enum Capability {
    /// Provider supports ALIAS records (or flattened CNAMEs). Translating
    /// them to the provider's native record type is up to the provider.
    #[serde(rename = "CanUseAlias")]
    CanUseAlias = 0,

    /// Provider can handle PTR records
    #[serde(rename = "CanUsePTR")]
    CanUsePtr = 1,

    /// Provider can handle SRV records
    #[serde(rename = "CanUseSRV")]
    CanUseSrv = 2,

    /// Provider can handle CAA records
    #[serde(rename = "CanUseCAA")]
    CanUseCaa = 3,

    /// NO_PURGE is broken for this provider
    ///
    /// Making it work would need emulation of an incremental update
    /// mechanism, so the feature is marked as not working instead.
    #[serde(rename = "CantUseNOPURGE")]
    CantUseNoPurge = 4,

    /// Actively used and maintained by the project maintainers
    #[serde(rename = "DocOfficiallySupported")]
    DocOfficiallySupported = 5,

    /// Provider allows full management of apex NS records, so it can safely
    /// dual-host with another provider
    #[serde(rename = "DocDualHost")]
    DocDualHost = 6,

    /// Provider can add domains through the create-domains command
    #[serde(rename = "DocCreateDomains")]
    DocCreateDomains = 7,
}

impl Capability {
    /// Every capability, in id order
    pub const ALL: [Capability; 8] = [
        Capability::CanUseAlias,
        Capability::CanUsePtr,
        Capability::CanUseSrv,
        Capability::CanUseCaa,
        Capability::CantUseNoPurge,
        Capability::DocOfficiallySupported,
        Capability::DocDualHost,
        Capability::DocCreateDomains,
    ];

    /// Stable numeric id
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Stable name, as used in declaration files and documentation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CanUseAlias => "CanUseAlias",
            Self::CanUsePtr => "CanUsePTR",
            Self::CanUseSrv => "CanUseSRV",
            Self::CanUseCaa => "CanUseCAA",
            Self::CantUseNoPurge => "CantUseNOPURGE",
            Self::DocOfficiallySupported => "DocOfficiallySupported",
            Self::DocDualHost => "DocDualHost",
            Self::DocCreateDomains => "DocCreateDomains",
        }
    }

    /// Returns true for capabilities that only feed documentation tables
    /// and never change record handling.
    pub fn is_documentation_only(self) -> bool {
        matches!(
            self,
            Self::DocOfficiallySupported | Self::DocDualHost | Self::DocCreateDomains
        )
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cap| cap.as_str() == s)
            .ok_or_else(|| Error::unknown_capability(s))
    }
}
