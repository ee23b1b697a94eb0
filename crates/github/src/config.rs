//! Configuration for the GitHub client.

use reqwest::Url;

use crate::error::GithubError;

/// Public GitHub REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// REST API version pinned through the `X-GitHub-Api-Version` header.
pub const API_VERSION: &str = "2022-11-28";

/// An API token.
///
/// `Debug` and `Display` never print the value. Use [`Credential::expose`]
/// to read it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, returning `None` if it is empty.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Returns the raw token.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Settings for [`crate::GithubClient`].
#[derive(Clone)]
pub struct GithubConfig {
    credential: Credential,
    base_url: Url,
    user_agent: String,
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("credential", &self.credential)
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GithubConfig {
    /// Creates a configuration targeting api.github.com.
    pub fn new(credential: Credential) -> Result<Self, GithubError> {
        Ok(Self {
            credential,
            base_url: validate_base_url(DEFAULT_BASE_URL)?,
            user_agent: default_user_agent(),
        })
    }

    /// Points the client at a different API root (GitHub Enterprise, tests).
    ///
    /// The URL must be absolute and use `http` or `https`.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, GithubError> {
        self.base_url = validate_base_url(raw)?;
        Ok(self)
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn default_user_agent() -> String {
    format!("accept-invitations/{}", env!("CARGO_PKG_VERSION"))
}

fn validate_base_url(raw: &str) -> Result<Url, GithubError> {
    let invalid = |reason: String| GithubError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }

    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}
