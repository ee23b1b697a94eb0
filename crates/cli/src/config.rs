//! Run configuration: command-line arguments plus process environment.
//!
//! | Source | Meaning |
//! |--------|---------|
//! | `-l/--list <PATH>` | YAML whitelist file (required) |
//! | `GH_TOKEN` | API token (required) |
//! | `GITHUB_API_URL` | API base URL (defaults to api.github.com) |
//! | `ACCEPT_INVITATIONS_LOG_FORMAT` | `text` (default) or `json` |
//! | `RUST_LOG` | log filter (defaults to `info`) |
//! | `OTEL_EXPORTER_OTLP_ENDPOINT` | enables span export when set |

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use github::{Credential, GithubConfig};
use invitations::Whitelist;
use tracing::debug;

pub const TOKEN_ENV: &str = "GH_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";
pub const LOG_FORMAT_ENV: &str = "ACCEPT_INVITATIONS_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Accept whitelisted invitations
#[derive(Debug, Parser)]
#[command(name = "accept-invitations", version, about)]
pub struct Cli {
    /// Yaml file with the whitelisted repos
    #[arg(short = 'l', long = "list", value_name = "PATH")]
    pub list: PathBuf,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the environment.
#[derive(Debug, Clone)]
pub struct EnvSettings {
    pub api_base_url: Option<String>,
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

/// Reads the API token. An unset or empty variable yields `None`.
pub fn credential_from(lookup: impl Fn(&str) -> Option<String>) -> Option<Credential> {
    lookup(TOKEN_ENV).and_then(Credential::new)
}

impl EnvSettings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_format = match non_empty(LOG_FORMAT_ENV).as_deref().map(str::trim) {
            None => LogFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => bail!("{LOG_FORMAT_ENV} must be 'text' or 'json', got '{other}'"),
        };

        Ok(Self {
            api_base_url: non_empty(API_URL_ENV),
            log_format,
            otlp_endpoint: non_empty(OTLP_ENDPOINT_ENV),
        })
    }

    /// Client configuration for `credential`, honouring the base URL override.
    pub fn github_config(&self, credential: Credential) -> Result<GithubConfig> {
        let config = GithubConfig::new(credential)?;
        match &self.api_base_url {
            Some(url) => config
                .with_base_url(url)
                .with_context(|| format!("invalid {API_URL_ENV}")),
            None => Ok(config),
        }
    }
}

/// Reads and parses the whitelist file.
pub fn load_whitelist(path: &Path) -> Result<Whitelist> {
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read whitelist file {}", path.display()))?;
    let whitelist = Whitelist::from_yaml_str(&document)
        .with_context(|| format!("failed to parse whitelist file {}", path.display()))?;
    debug!(path = %path.display(), entries = whitelist.len(), "Loaded whitelist");
    Ok(whitelist)
}
