//! The set of repositories whose invitations may be accepted automatically.
//!
//! A whitelist document is YAML whose root is a sequence of `"owner/name"`
//! strings:
//!
//! ```yaml
//! - org1/repo1
//! - org1/repo2
//! ```
//!
//! Membership is exact string equality. There is no case folding, no
//! trimming, and no glob support.

use std::collections::HashSet;

use tracing::warn;

use crate::{RepositoryFullName, WhitelistError};

/// Ordered, immutable collection of whitelisted repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    entries: Vec<RepositoryFullName>,
    index: HashSet<RepositoryFullName>,
}

impl Whitelist {
    /// Builds a whitelist from already-validated names, keeping their order.
    pub fn new(entries: impl IntoIterator<Item = RepositoryFullName>) -> Self {
        let entries: Vec<_> = entries.into_iter().collect();
        let index = entries.iter().cloned().collect();
        Self { entries, index }
    }

    /// Parses a YAML whitelist document.
    ///
    /// Entries that are not in `owner/name` form are kept (they can simply
    /// never match) but produce a warning.
    pub fn from_yaml_str(document: &str) -> Result<Self, WhitelistError> {
        let raw: Vec<String> = serde_yaml_ng::from_str(document)
            .map_err(|source| WhitelistError::Malformed { source })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            if !looks_like_full_name(&value) {
                warn!(entry = %value, index, "Whitelist entry is not in owner/name form");
            }
            let name = RepositoryFullName::new(value).ok_or(WhitelistError::EmptyEntry { index })?;
            entries.push(name);
        }

        Ok(Self::new(entries))
    }

    /// Returns `true` if `repository` is whitelisted.
    pub fn contains(&self, repository: &RepositoryFullName) -> bool {
        self.index.contains(repository)
    }

    /// Returns the entries in document order (duplicates included).
    pub fn entries(&self) -> &[RepositoryFullName] {
        &self.entries
    }

    /// Number of entries in the document.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document listed no repositories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn looks_like_full_name(value: &str) -> bool {
    match value.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}
