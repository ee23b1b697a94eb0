//! Authenticated REST client for repository invitations.

use async_trait::async_trait;
use invitations::{Invitation, InvitationApi, InvitationId, PendingInvitations};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Response, Url};
use tracing::{debug, instrument};

use crate::config::{GithubConfig, API_VERSION};
use crate::error::GithubError;
use crate::pagination::PageCursor;

const INVITATIONS_PATH: &str = "/user/repository_invitations";

/// GitHub client authenticated as a single account.
///
/// Every request carries the configured token as a bearer `Authorization`
/// header. Requests are sent one at a time; nothing is retried.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );

        let http = Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()
            .map_err(GithubError::ClientBuild)?;

        Ok(Self { http, config })
    }

    /// Builds an API URL from the base URL and `segments`.
    ///
    /// Each segment is trimmed of surrounding slashes and joined with a single
    /// `/`, so `["/user/repository_invitations/", "7"]` becomes
    /// `{base}/user/repository_invitations/7`.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GithubError> {
        let mut raw = self.config.base_url().as_str().trim_end_matches('/').to_string();
        for segment in segments {
            raw.push('/');
            raw.push_str(segment.trim_matches('/'));
        }
        Url::parse(&raw).map_err(|e| GithubError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }

    /// Starts a page walk at `first`.
    pub fn pages(&self, first: Url) -> PageCursor<'_> {
        PageCursor::new(self, first)
    }

    pub(crate) async fn get(&self, url: Url) -> Result<Response, GithubError> {
        let request = self.http.get(url.clone());
        self.send("GET", url, request).await
    }

    pub(crate) async fn patch(&self, url: Url) -> Result<Response, GithubError> {
        let request = self.http.patch(url.clone());
        self.send("PATCH", url, request).await
    }

    async fn send(
        &self,
        method: &'static str,
        url: Url,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, GithubError> {
        let response = request
            .bearer_auth(self.config.credential().expose())
            .send()
            .await
            .map_err(|source| GithubError::Transport {
                method,
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(method, url = %url, status = status.as_u16(), "GitHub response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GithubError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Pulls GitHub's `message` field out of an error body, falling back to the
/// body itself.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl InvitationApi for GithubClient {
    type Error = GithubError;

    #[instrument(skip(self))]
    async fn list_pending_invitations(&self) -> Result<PendingInvitations, GithubError> {
        let mut cursor = self.pages(self.endpoint(&[INVITATIONS_PATH])?);
        let mut invitations = Vec::new();

        while let Some(page) = cursor.next_page().await? {
            if !page.body.is_array() {
                if cursor.pages_fetched() == 1 {
                    return Ok(PendingInvitations::Unexpected(page.body));
                }
                return Err(GithubError::invalid_response(
                    page.url.as_str(),
                    "continuation page is not a list",
                ));
            }

            let batch: Vec<Invitation> = serde_json::from_value(page.body)
                .map_err(|e| GithubError::invalid_response(page.url.as_str(), e.to_string()))?;
            invitations.extend(batch);
        }

        debug!(
            pages = cursor.pages_fetched(),
            count = invitations.len(),
            "Listed pending invitations"
        );
        Ok(PendingInvitations::Invitations(invitations))
    }

    #[instrument(skip(self), fields(invitation_id = %id))]
    async fn accept_invitation(&self, id: InvitationId) -> Result<(), GithubError> {
        let url = self.endpoint(&[INVITATIONS_PATH, &id.to_string()])?;
        self.patch(url).await?;
        Ok(())
    }
}
