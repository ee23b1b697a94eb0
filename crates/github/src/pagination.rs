//! `Link` header pagination.
//!
//! GitHub paginates list endpoints with RFC 8288 `Link` headers:
//!
//! ```text
//! Link: <https://api.github.com/user/repository_invitations?page=2>; rel="next",
//!       <https://api.github.com/user/repository_invitations?page=5>; rel="last"
//! ```
//!
//! [`PageCursor`] walks those links one page at a time. A cursor is single-use:
//! create a new one to restart from the first page.

use reqwest::header::{HeaderMap, LINK};
use reqwest::Url;
use tracing::{debug, trace};

use crate::client::GithubClient;
use crate::error::GithubError;

/// The `next` and `last` relations of one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<Url>,
    pub last: Option<Url>,
}

impl PageLinks {
    /// Extracts `next`/`last` from every `Link` header in `headers`.
    ///
    /// Relative targets are resolved against `base`, the URL of the response
    /// the headers came from. Entries that fail to parse are skipped.
    pub fn from_headers(headers: &HeaderMap, base: &Url) -> Self {
        let mut links = Self::default();
        for value in headers.get_all(LINK) {
            match value.to_str() {
                Ok(raw) => links.merge(Self::parse(raw, base)),
                Err(_) => trace!("Skipping non-ASCII Link header"),
            }
        }
        links
    }

    /// Parses one `Link` header value, resolving targets against `base`.
    pub fn parse(header: &str, base: &Url) -> Self {
        let mut links = Self::default();

        for entry in header.split(',') {
            let mut parts = entry.split(';');
            let Some(target) = parts.next() else { continue };
            let target = target.trim();
            let Some(target) = target.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
                continue;
            };
            let Ok(url) = base.join(target) else { continue };

            for param in parts {
                let Some((key, value)) = param.split_once('=') else { continue };
                if !key.trim().eq_ignore_ascii_case("rel") {
                    continue;
                }
                // rel may hold several space-separated relation types.
                for rel in value.trim().trim_matches('"').split_ascii_whitespace() {
                    match rel {
                        "next" if links.next.is_none() => links.next = Some(url.clone()),
                        "last" if links.last.is_none() => links.last = Some(url.clone()),
                        _ => {}
                    }
                }
            }
        }

        links
    }

    fn merge(&mut self, other: Self) {
        if self.next.is_none() {
            self.next = other.next;
        }
        if self.last.is_none() {
            self.last = other.last;
        }
    }
}

/// One fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the page was fetched from.
    pub url: Url,
    /// Decoded JSON body, untouched.
    pub body: serde_json::Value,
    /// Pagination relations sent with the page.
    pub links: PageLinks,
}

/// Lazily fetches the pages of a paginated GET endpoint.
///
/// The walk ends when a page carries no `next` link, when the page just
/// fetched is the one an earlier page named as `last`, or when `next` points
/// back at the page just fetched.
pub struct PageCursor<'a> {
    client: &'a GithubClient,
    pending: Option<Url>,
    last: Option<Url>,
    fetched: usize,
}

impl<'a> PageCursor<'a> {
    pub(crate) fn new(client: &'a GithubClient, first: Url) -> Self {
        Self {
            client,
            pending: Some(first),
            last: None,
            fetched: 0,
        }
    }

    /// Fetches the next page, or returns `None` once the walk is over.
    pub async fn next_page(&mut self) -> Result<Option<Page>, GithubError> {
        let Some(url) = self.pending.take() else {
            return Ok(None);
        };

        let response = self.client.get(url.clone()).await?;
        let links = PageLinks::from_headers(response.headers(), &url);
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GithubError::invalid_response(url.as_str(), e.to_string()))?;
        self.fetched += 1;

        let reached_last = self.last.as_ref() == Some(&url);
        self.pending = match &links.next {
            Some(next) if !reached_last && *next != url => Some(next.clone()),
            _ => None,
        };
        if links.last.is_some() {
            self.last = links.last.clone();
        }

        debug!(
            page = self.fetched,
            url = %url,
            has_next = self.pending.is_some(),
            "Fetched page"
        );

        Ok(Some(Page { url, body, links }))
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }
}
