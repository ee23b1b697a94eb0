//! Error types for the invitation domain.
//!
//! [`WhitelistError`] covers whitelist documents that cannot be turned into a
//! [`crate::Whitelist`]. Errors from talking to GitHub are owned by the
//! adapter implementing [`crate::InvitationApi`] and surface through its
//! associated `Error` type.

use thiserror::Error;

/// The whitelist document could not be parsed.
///
/// Always fatal: a run never starts without a valid whitelist.
#[derive(Debug, Error)]
pub enum WhitelistError {
    /// The document is not valid YAML, or its root is not a sequence of strings.
    #[error("whitelist must be a YAML sequence of \"owner/name\" strings")]
    Malformed {
        /// Underlying parser error (includes line/column where available).
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// An entry is the empty string.
    #[error("whitelist entry #{index} is empty")]
    EmptyEntry {
        /// Zero-based position of the offending entry.
        index: usize,
    },
}
