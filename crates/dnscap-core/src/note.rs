//! Documentation notes
//!
//! A note explains whether a provider supports a capability, with an
//! optional free-text comment and reference link. Empty strings mean the
//! comment or link is absent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::capability::Capability;

/// Full set of notes for a single provider, keyed by capability
pub type DocumentationNotes = BTreeMap<Capability, DocumentationNote>;

/// Human-readable detail about one capability of one provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationNote {
    has_feature: bool,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    link: String,
}

impl DocumentationNote {
    /// Note for a supported capability
    ///
    /// `comments[0]` is the comment and `comments[1]` the link. Anything
    /// after that is ignored.
    ///
    /// ```
    /// use dnscap_core::DocumentationNote;
    ///
    /// let note = DocumentationNote::supported(&["flattened CNAME", "https://example.com/alias"]);
    /// assert!(note.has_feature());
    /// assert_eq!(note.comment(), "flattened CNAME");
    /// ```
    pub fn supported(comments: &[&str]) -> Self {
        Self::with_strings(true, comments)
    }

    /// Note for an unsupported capability
    ///
    /// Takes the same `[comment, link]` arguments as [`supported`](Self::supported).
    pub fn unsupported(comments: &[&str]) -> Self {
        Self::with_strings(false, comments)
    }

    fn with_strings(has_feature: bool, comments: &[&str]) -> Self {
        let mut parts = comments.iter();
        Self {
            has_feature,
            comment: parts.next().map(|s| s.to_string()).unwrap_or_default(),
            link: parts.next().map(|s| s.to_string()).unwrap_or_default(),
        }
    }

    /// Copy of this note with a different comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Copy of this note with a different link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Whether the provider supports the capability
    pub fn has_feature(&self) -> bool {
        self.has_feature
    }

    /// Free-text comment, empty if none
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Reference link, empty if none
    pub fn link(&self) -> &str {
        &self.link
    }
}
