//! Error types for the GitHub adapter.

use thiserror::Error;

/// Errors produced while talking to the GitHub REST API.
///
/// None of these are retried: every variant aborts the current run.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The configured API base URL is unusable.
    #[error("invalid GitHub API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    #[error("{method} {url} failed")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// GitHub answered with a non-success status.
    #[error("{method} {url} returned HTTP {status}: {message}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        /// GitHub's `message` field when present, otherwise the raw body.
        message: String,
    },

    /// The response body could not be interpreted.
    #[error("invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

impl GithubError {
    /// HTTP status code, for [`GithubError::Status`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_response(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
